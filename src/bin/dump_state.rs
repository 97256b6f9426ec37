use std::env;
use std::path::PathBuf;
use std::process;

use mos6502::runner::parse_address;
use mos6502::save_state::SaveState;

// Save state inspector
// Usage:
//   cargo run --bin dump_state -- out.state --start 0x0200 --len 0x100
// Range can also come from DUMP_START / DUMP_LEN.

struct Args {
    state: PathBuf,
    start: u16,
    len: u32,
    nonzero_only: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut args = env::args().skip(1);
    let mut state: Option<PathBuf> = None;
    let mut start: Option<u16> = None;
    let mut len: Option<u32> = None;
    let mut nonzero_only = false;

    while let Some(a) = args.next() {
        match a.as_str() {
            "--start" => {
                if let Some(v) = args.next() {
                    start = parse_address(&v);
                }
            }
            "--len" | "--length" => {
                if let Some(v) = args.next() {
                    len = parse_address(&v).map(|n| n as u32);
                }
            }
            "--nonzero" | "--nz" => {
                nonzero_only = true;
            }
            _ => {
                if state.is_none() {
                    state = Some(PathBuf::from(&a));
                }
            }
        }
    }

    let state = state.ok_or("usage: dump_state <file> [--start ADDR] [--len N] [--nonzero]")?;
    let start = start
        .or_else(|| env::var("DUMP_START").ok().and_then(|s| parse_address(&s)))
        .unwrap_or(0x0000);
    let len = len
        .or_else(|| {
            env::var("DUMP_LEN")
                .ok()
                .and_then(|s| parse_address(&s))
                .map(|n| n as u32)
        })
        .unwrap_or(0x0200);

    Ok(Args {
        state,
        start,
        len,
        nonzero_only,
    })
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args()?;
    let state = SaveState::load_from_file(&args.state)?;

    println!("{}", serde_json::to_string_pretty(&state.registers)?);

    let ram = &state.ram;
    let start = args.start as usize;
    let end = (start + args.len as usize).min(ram.len());
    println!(
        "Memory dump: start=${:04X} len=${:04X}{}",
        start,
        end.saturating_sub(start),
        if args.nonzero_only { " [nonzero only]" } else { "" }
    );

    let mut addr = start;
    while addr < end {
        let line_end = (addr + 16).min(end);
        let has_nz = ram[addr..line_end].iter().any(|&b| b != 0);
        if !args.nonzero_only || has_nz {
            print!("{:04X}:", addr);
            for byte in &ram[addr..line_end] {
                print!(" {:02X}", byte);
            }
            println!();
        }
        addr = line_end;
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("dump_state: {}", e);
        process::exit(1);
    }
}
