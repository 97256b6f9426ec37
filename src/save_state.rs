use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cpu::Registers;

pub const SAVE_STATE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum SaveStateError {
    #[error("save state I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("save state encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
    #[error("save state version {found} is not supported (expected {expected})")]
    Version { found: u32, expected: u32 },
    #[error("save state memory image is {0} bytes, expected 65536")]
    MemorySize(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveState {
    pub version: u32,
    pub registers: Registers,
    // Full 64 KiB memory image
    pub ram: Vec<u8>,
}

impl SaveState {
    pub fn new(registers: Registers, ram: Vec<u8>) -> Self {
        SaveState {
            version: SAVE_STATE_VERSION,
            registers,
            ram,
        }
    }

    pub fn check_version(&self) -> Result<(), SaveStateError> {
        if self.version != SAVE_STATE_VERSION {
            return Err(SaveStateError::Version {
                found: self.version,
                expected: SAVE_STATE_VERSION,
            });
        }
        Ok(())
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SaveStateError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(data: &[u8]) -> Result<SaveState, SaveStateError> {
        let state: SaveState = bincode::deserialize(data)?;
        state.check_version()?;
        Ok(state)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveStateError> {
        let data = self.to_bytes()?;
        std::fs::write(path.as_ref(), data)?;
        log::info!("Save state written to: {}", path.as_ref().display());
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<SaveState, SaveStateError> {
        let data = std::fs::read(path.as_ref())?;
        let state = Self::from_bytes(&data)?;
        log::info!("Save state loaded from: {}", path.as_ref().display());
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::{Cpu, StatusFlags};

    fn sample_cpu() -> Cpu {
        let mut cpu = Cpu::new();
        cpu.registers.pc = 0x8000;
        cpu.registers.sp = 0xFD;
        cpu.registers.a = 0x42;
        cpu.registers.status.insert(StatusFlags::CARRY | StatusFlags::NEGATIVE);
        cpu.memory.load(0x8000, &[0xA9, 0x01, 0xEA]);
        cpu
    }

    #[test]
    fn test_snapshot_restore_through_bytes() {
        let cpu = sample_cpu();
        let bytes = cpu.snapshot().to_bytes().unwrap();

        let mut restored = Cpu::new();
        let state = SaveState::from_bytes(&bytes).unwrap();
        restored.restore(&state).unwrap();

        assert_eq!(restored.registers, cpu.registers);
        assert_eq!(restored.memory.read(0x8000), 0xA9);
        assert_eq!(restored.memory.read(0x8002), 0xEA);
    }

    #[test]
    fn test_restore_rejects_wrong_version() {
        let mut state = sample_cpu().snapshot();
        state.version = 99;
        let mut cpu = Cpu::new();
        match cpu.restore(&state) {
            Err(SaveStateError::Version { found, expected }) => {
                assert_eq!(found, 99);
                assert_eq!(expected, SAVE_STATE_VERSION);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_restore_rejects_short_memory() {
        let state = SaveState::new(Registers::new(), vec![0; 0x800]);
        let mut cpu = Cpu::new();
        assert!(matches!(
            cpu.restore(&state),
            Err(SaveStateError::MemorySize(0x800))
        ));
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("mos6502-state-{}.bin", std::process::id()));
        let cpu = sample_cpu();
        cpu.snapshot().save_to_file(&path).unwrap();

        let state = SaveState::load_from_file(&path).unwrap();
        assert_eq!(state.registers.a, 0x42);
        assert_eq!(state.ram.len(), 0x10000);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = SaveState::load_from_file("/nonexistent/mos6502/state.bin");
        assert!(matches!(result, Err(SaveStateError::Io(_))));
    }
}
