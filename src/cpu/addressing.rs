//! Operand resolution for the 6502 addressing modes.
//!
//! `resolve` is called with PC on the first operand byte (the opcode has
//! already been consumed). It reads the operand bytes, leaves PC on the next
//! instruction and returns what the instruction operates on. No mode can
//! fail: every byte pattern maps to an address and all index arithmetic wraps.

use crate::cpu::registers::Registers;
use crate::memory::Memory;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndexedIndirect,
    IndirectIndexed,
    Relative,
}

impl AddressingMode {
    /// Number of operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            AddressingMode::Implied | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::IndexedIndirect
            | AddressingMode::IndirectIndexed
            | AddressingMode::Relative => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Effective operand of one instruction execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Implied,
    Accumulator,
    Immediate(u8),
    Address(u16),
}

impl Operand {
    pub fn address(self) -> Option<u16> {
        match self {
            Operand::Address(addr) => Some(addr),
            _ => None,
        }
    }

    /// The byte the instruction operates on. Implied operands read as AC.
    pub fn read(self, regs: &Registers, mem: &Memory) -> u8 {
        match self {
            Operand::Immediate(value) => value,
            Operand::Address(addr) => mem.read(addr),
            Operand::Accumulator | Operand::Implied => regs.a,
        }
    }

    /// Stores a read-modify-write result back to where it came from.
    pub fn write(self, regs: &mut Registers, mem: &mut Memory, value: u8) {
        match self {
            Operand::Address(addr) => mem.write(addr, value),
            Operand::Accumulator => regs.a = value,
            // Immediate bytes are part of the instruction stream; nothing to store.
            Operand::Immediate(_) | Operand::Implied => {}
        }
    }
}

/// Fetch next byte from the instruction stream, incrementing PC.
pub fn fetch_byte(regs: &mut Registers, mem: &Memory) -> u8 {
    let byte = mem.read(regs.pc);
    regs.advance_pc(1);
    byte
}

/// Fetch next little-endian word, incrementing PC twice.
pub fn fetch_word(regs: &mut Registers, mem: &Memory) -> u16 {
    let low = fetch_byte(regs, mem) as u16;
    let high = fetch_byte(regs, mem) as u16;
    (high << 8) | low
}

/// Pointer read from the zero page; the high byte wraps to $00 instead of $0100.
fn read_word_zero_page(mem: &Memory, ptr: u8) -> u16 {
    let low = mem.read(ptr as u16) as u16;
    let high = mem.read(ptr.wrapping_add(1) as u16) as u16;
    (high << 8) | low
}

/// JMP ($xxFF) takes its high byte from $xx00: the carry never reaches the high byte.
fn read_word_page_wrapped(mem: &Memory, ptr: u16) -> u16 {
    let low = mem.read(ptr) as u16;
    let high_addr = (ptr & 0xFF00) | (ptr.wrapping_add(1) & 0x00FF);
    let high = mem.read(high_addr) as u16;
    (high << 8) | low
}

pub fn resolve(mode: AddressingMode, regs: &mut Registers, mem: &Memory) -> Operand {
    match mode {
        AddressingMode::Implied => Operand::Implied,
        AddressingMode::Accumulator => Operand::Accumulator,
        AddressingMode::Immediate => Operand::Immediate(fetch_byte(regs, mem)),
        AddressingMode::ZeroPage => Operand::Address(fetch_byte(regs, mem) as u16),
        AddressingMode::ZeroPageX => {
            Operand::Address(fetch_byte(regs, mem).wrapping_add(regs.x) as u16)
        }
        AddressingMode::ZeroPageY => {
            Operand::Address(fetch_byte(regs, mem).wrapping_add(regs.y) as u16)
        }
        AddressingMode::Absolute => Operand::Address(fetch_word(regs, mem)),
        AddressingMode::AbsoluteX => {
            Operand::Address(fetch_word(regs, mem).wrapping_add(regs.x as u16))
        }
        AddressingMode::AbsoluteY => {
            Operand::Address(fetch_word(regs, mem).wrapping_add(regs.y as u16))
        }
        AddressingMode::Indirect => {
            let ptr = fetch_word(regs, mem);
            Operand::Address(read_word_page_wrapped(mem, ptr))
        }
        AddressingMode::IndexedIndirect => {
            let ptr = fetch_byte(regs, mem).wrapping_add(regs.x);
            Operand::Address(read_word_zero_page(mem, ptr))
        }
        AddressingMode::IndirectIndexed => {
            let ptr = fetch_byte(regs, mem);
            let base = read_word_zero_page(mem, ptr);
            Operand::Address(base.wrapping_add(regs.y as u16))
        }
        AddressingMode::Relative => {
            // Displacement is relative to the address after the offset byte.
            let offset = fetch_byte(regs, mem) as i8;
            Operand::Address(regs.pc.wrapping_add(offset as u16))
        }
    }
}
