//! Host-side run loop and command-line configuration for the `mos6502` binary.

use std::path::PathBuf;

use crate::cpu::{Cpu, CpuError};
use crate::{debug_flags, shutdown};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub image: PathBuf,
    pub load_address: u16,
    pub start: u16,
    pub max_steps: Option<u64>,
    pub save: Option<PathBuf>,
    pub resume: Option<PathBuf>,
}

/// Accepts `$C000`, `0xC000` or plain decimal.
pub fn parse_address(s: &str) -> Option<u16> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('$').or_else(|| s.strip_prefix("0x")) {
        u16::from_str_radix(hex, 16).ok()
    } else {
        s.parse::<u16>().ok()
    }
}

fn next_value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, String> {
    args.next()
        .ok_or_else(|| format!("{} requires a value", flag))
}

impl RunConfig {
    pub fn usage() -> &'static str {
        "usage: mos6502 <image> [--load ADDR] [--start ADDR] [--max-steps N] [--save FILE] [--resume FILE]"
    }

    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<RunConfig, String> {
        let mut args = args.into_iter();
        let mut image: Option<PathBuf> = None;
        let mut load_address: u16 = 0x0000;
        let mut start: Option<u16> = None;
        let mut max_steps: Option<u64> = None;
        let mut save = None;
        let mut resume = None;

        while let Some(a) = args.next() {
            match a.as_str() {
                "--load" => {
                    let v = next_value(&mut args, &a)?;
                    load_address =
                        parse_address(&v).ok_or_else(|| format!("invalid load address '{}'", v))?;
                }
                "--start" => {
                    let v = next_value(&mut args, &a)?;
                    start = Some(parse_address(&v).ok_or_else(|| format!("invalid start address '{}'", v))?);
                }
                "--max-steps" => {
                    let v = next_value(&mut args, &a)?;
                    max_steps = Some(v.parse().map_err(|_| format!("invalid step count '{}'", v))?);
                }
                "--save" => save = Some(PathBuf::from(next_value(&mut args, &a)?)),
                "--resume" => resume = Some(PathBuf::from(next_value(&mut args, &a)?)),
                _ if a.starts_with("--") => return Err(format!("unknown option '{}'", a)),
                _ => {
                    if image.is_some() {
                        return Err(format!("unexpected argument '{}'", a));
                    }
                    image = Some(PathBuf::from(&a));
                }
            }
        }

        let image = image.ok_or_else(|| Self::usage().to_string())?;
        Ok(RunConfig {
            image,
            load_address,
            start: start.unwrap_or(load_address),
            max_steps: max_steps.or_else(debug_flags::max_steps),
            save,
            resume,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// An instruction left PC where it was (`JMP *`, branch to self).
    Trapped { pc: u16 },
    Halted(CpuError),
    StepLimit,
    Interrupted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunReport {
    pub outcome: RunOutcome,
    pub steps: u64,
}

/// Steps `cpu` until it traps, halts, hits `max_steps` or a shutdown is requested.
pub fn run(cpu: &mut Cpu, max_steps: Option<u64>) -> RunReport {
    let mut steps = 0u64;
    loop {
        if max_steps.is_some_and(|limit| steps >= limit) {
            return RunReport {
                outcome: RunOutcome::StepLimit,
                steps,
            };
        }
        if shutdown::should_quit() {
            return RunReport {
                outcome: RunOutcome::Interrupted,
                steps,
            };
        }

        let pc = cpu.registers.pc;
        if let Err(err) = cpu.step() {
            return RunReport {
                outcome: RunOutcome::Halted(err),
                steps,
            };
        }
        steps += 1;

        if cpu.registers.pc == pc {
            return RunReport {
                outcome: RunOutcome::Trapped { pc },
                steps,
            };
        }
    }
}
