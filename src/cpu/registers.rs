use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// Base address of the hardware stack page. SP is an offset into it.
pub const STACK_BASE: u16 = 0x0100;

bitflags! {
    /// Processor status register (P), bit 7 down to bit 0: N V - B D I Z C.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct StatusFlags: u8 {
        const CARRY = 0b00000001;
        const ZERO = 0b00000010;
        const INTERRUPT_DISABLE = 0b00000100;
        const DECIMAL = 0b00001000;
        const BREAK = 0b00010000;
        const UNUSED = 0b00100000;
        const OVERFLOW = 0b01000000;
        const NEGATIVE = 0b10000000;
    }
}

impl StatusFlags {
    pub fn get(&self, flag: StatusFlags) -> bool {
        self.contains(flag)
    }

    /// Raw status byte, every bit included.
    pub fn as_byte(&self) -> u8 {
        self.bits()
    }

    /// Replaces the whole status byte. Any value is accepted.
    pub fn load(&mut self, byte: u8) {
        *self = StatusFlags::from_bits_retain(byte);
    }

    pub fn set_zero_negative(&mut self, value: u8) {
        self.set(StatusFlags::ZERO, value == 0);
        self.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
    }
}

/// General purpose registers addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    A,
    X,
    Y,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registers {
    pub pc: u16,    // Program counter
    pub sp: u8,     // Stack pointer, offset into $0100-$01FF
    pub a: u8,      // Accumulator
    pub x: u8,      // X register
    pub y: u8,      // Y register
    pub status: StatusFlags,
}

impl Registers {
    pub fn new() -> Self {
        Registers {
            pc: 0,
            sp: 0,
            a: 0,
            x: 0,
            y: 0,
            status: StatusFlags::empty(),
        }
    }

    pub fn get(&self, reg: Register) -> u8 {
        match reg {
            Register::A => self.a,
            Register::X => self.x,
            Register::Y => self.y,
        }
    }

    pub fn set(&mut self, reg: Register, value: u8) {
        match reg {
            Register::A => self.a = value,
            Register::X => self.x = value,
            Register::Y => self.y = value,
        }
    }

    /// Loads a register and updates Z/N from the new value.
    pub fn load(&mut self, reg: Register, value: u8) {
        self.set(reg, value);
        self.status.set_zero_negative(value);
    }

    pub fn sr(&self) -> u8 {
        self.status.as_byte()
    }

    pub fn set_sr(&mut self, value: u8) {
        self.status.load(value);
    }

    pub fn flag(&self, flag: StatusFlags) -> bool {
        self.status.get(flag)
    }

    pub fn set_flag(&mut self, flag: StatusFlags, on: bool) {
        self.status.set(flag, on);
    }

    pub fn advance_pc(&mut self, delta: u16) {
        self.pc = self.pc.wrapping_add(delta);
    }

    /// Absolute address SP currently points at.
    pub fn stack_address(&self) -> u16 {
        STACK_BASE | self.sp as u16
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new()
    }
}
