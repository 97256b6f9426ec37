//! Instruction-execution core of an NMOS 6502: registers, status flags,
//! addressing modes, the opcode table and a flat 64 KiB memory.
//!
//! ```
//! use mos6502::cpu::Cpu;
//!
//! let mut cpu = Cpu::new();
//! cpu.memory.load(0x0400, &[0xA9, 0x42]); // LDA #$42
//! cpu.registers.pc = 0x0400;
//! cpu.step().unwrap();
//! assert_eq!(cpu.registers.a, 0x42);
//! ```

pub mod cpu;
pub mod debug_flags;
pub mod memory;
pub mod runner;
pub mod save_state;
pub mod shutdown;

pub use cpu::{Cpu, CpuError, StatusFlags};
pub use memory::Memory;
pub use save_state::{SaveState, SaveStateError};
