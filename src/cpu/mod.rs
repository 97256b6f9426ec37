pub mod addressing;
pub mod instructions;
pub mod registers;


use thiserror::Error;

use crate::debug_flags;
use crate::memory::Memory;
use crate::save_state::{SaveState, SaveStateError};

pub use addressing::{AddressingMode, Operand};
pub use instructions::{lookup, Instruction, INSTRUCTION_SET};
pub use registers::{Register, Registers, StatusFlags, STACK_BASE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    /// The fetched byte has no entry in the instruction table.
    #[error("unmapped opcode 0x{opcode:02X} at ${address:04X}")]
    UnmappedOpcode { opcode: u8, address: u16 },
}

pub struct Cpu {
    pub registers: Registers,
    pub memory: Memory,
    steps: u64,
}

impl Cpu {
    /// Zeroed registers and zero-filled memory.
    pub fn new() -> Self {
        Cpu {
            registers: Registers::new(),
            memory: Memory::new(),
            steps: 0,
        }
    }

    /// Executes exactly one instruction.
    ///
    /// On an unmapped opcode PC has already moved past the opcode byte and
    /// nothing else has changed.
    pub fn step(&mut self) -> Result<(), CpuError> {
        let address = self.registers.pc;
        let opcode = self.memory.read(address);
        self.registers.advance_pc(1);

        let Some(instruction) = instructions::lookup(opcode) else {
            log::error!(
                "Halting on unmapped opcode: 0x{:02X} at PC: 0x{:04X}",
                opcode,
                address
            );
            return Err(CpuError::UnmappedOpcode { opcode, address });
        };

        if debug_flags::cpu_trace() {
            log::debug!(
                "{:04X}  {:02X}  {:<3}  A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} P:{:08b}",
                address,
                opcode,
                instruction.mnemonic,
                self.registers.a,
                self.registers.x,
                self.registers.y,
                self.registers.sp,
                self.registers.sr()
            );
        }

        let operand = addressing::resolve(instruction.mode, &mut self.registers, &self.memory);
        (instruction.operation)(&mut self.registers, &mut self.memory, operand);

        self.steps += 1;
        Ok(())
    }

    /// Instructions completed since construction or the last restore.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Table entry for the instruction PC currently points at.
    pub fn current_instruction(&self) -> Option<&'static Instruction> {
        instructions::lookup(self.memory.read(self.registers.pc))
    }

    pub fn snapshot(&self) -> SaveState {
        SaveState::new(self.registers, self.memory.as_slice().to_vec())
    }

    pub fn restore(&mut self, state: &SaveState) -> Result<(), SaveStateError> {
        state.check_version()?;
        if !self.memory.set_ram(&state.ram) {
            return Err(SaveStateError::MemorySize(state.ram.len()));
        }
        self.registers = state.registers;
        self.steps = 0;
        Ok(())
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
