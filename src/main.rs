use std::env;
use std::path::Path;
use std::process;

use mos6502::cpu::Cpu;
use mos6502::runner::{self, RunConfig, RunOutcome};
use mos6502::save_state::SaveState;
use mos6502::{debug_flags, shutdown};

fn load_image(cpu: &mut Cpu, path: &Path, load_address: u16) -> Result<(), String> {
    let image = std::fs::read(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    if image.len() > 0x10000 {
        return Err(format!(
            "{}: image is {} bytes, larger than the 64 KiB address space",
            path.display(),
            image.len()
        ));
    }
    cpu.memory.load(load_address, &image);
    log::info!(
        "Loaded {} bytes from {} at ${:04X}",
        image.len(),
        path.display(),
        load_address
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let config = match RunConfig::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    shutdown::install();

    let mut cpu = Cpu::new();
    if let Err(e) = load_image(&mut cpu, &config.image, config.load_address) {
        eprintln!("Failed to load image: {}", e);
        process::exit(1);
    }
    cpu.registers.pc = config.start;

    if let Some(path) = &config.resume {
        let restored = SaveState::load_from_file(path).and_then(|state| cpu.restore(&state));
        if let Err(e) = restored {
            eprintln!("Failed to resume from {}: {}", path.display(), e);
            process::exit(1);
        }
    }

    let report = runner::run(&mut cpu, config.max_steps);
    let regs = &cpu.registers;
    let summary = format!(
        "PC:{:04X} A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} P:{:08b} after {} steps",
        regs.pc,
        regs.a,
        regs.x,
        regs.y,
        regs.sp,
        regs.sr(),
        report.steps
    );

    let code = match report.outcome {
        RunOutcome::Trapped { pc } => {
            log::info!("Trapped at ${:04X}", pc);
            0
        }
        RunOutcome::StepLimit => {
            log::info!("Step limit reached");
            0
        }
        RunOutcome::Interrupted => {
            log::warn!("Interrupted");
            0
        }
        RunOutcome::Halted(e) => {
            log::error!("CPU halted: {}", e);
            1
        }
    };
    if !debug_flags::quiet() {
        println!("{}", summary);
    }

    if let Some(path) = &config.save {
        if let Err(e) = cpu.snapshot().save_to_file(path) {
            eprintln!("Failed to write save state: {}", e);
            process::exit(1);
        }
    }

    if code != 0 {
        process::exit(code);
    }
}
