use std::ops::{Index, IndexMut};

pub const MEMORY_SIZE: usize = 0x10000;

/// Flat 64 KiB address space. Every u16 address is backed by a byte.
#[derive(Clone)]
pub struct Memory {
    pub(crate) ram: Box<[u8]>,
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            ram: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.ram[addr as usize]
    }

    pub fn write(&mut self, addr: u16, data: u8) {
        self.ram[addr as usize] = data;
    }

    /// Little-endian word at `addr`, high byte taken from `addr + 1` with 16-bit wrap.
    pub fn read_word(&self, addr: u16) -> u16 {
        let low = self.read(addr) as u16;
        let high = self.read(addr.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    /// Copies a program image starting at `start`, wrapping past $FFFF.
    pub fn load(&mut self, start: u16, program: &[u8]) {
        for (i, &byte) in program.iter().enumerate() {
            self.write(start.wrapping_add(i as u16), byte);
        }
    }

    // Save state methods
    pub fn as_slice(&self) -> &[u8] {
        &self.ram
    }

    pub fn set_ram(&mut self, ram: &[u8]) -> bool {
        if ram.len() != MEMORY_SIZE {
            return false;
        }
        self.ram.copy_from_slice(ram);
        true
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.ram.iter().filter(|&&b| b != 0).count();
        f.debug_struct("Memory")
            .field("size", &self.ram.len())
            .field("nonzero", &used)
            .finish()
    }
}

impl Index<u16> for Memory {
    type Output = u8;

    fn index(&self, addr: u16) -> &u8 {
        &self.ram[addr as usize]
    }
}

impl IndexMut<u16> for Memory {
    fn index_mut(&mut self, addr: u16) -> &mut u8 {
        &mut self.ram[addr as usize]
    }
}
