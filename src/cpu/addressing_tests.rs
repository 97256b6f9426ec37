use super::*;

#[cfg(test)]
mod addressing_mode_tests {
    use super::*;
    use crate::cpu::addressing::{resolve, AddressingMode, Operand};
    use crate::memory::Memory;

    fn resolve_at(mode: AddressingMode, operand_bytes: &[u8], regs: &mut Registers, mem: &mut Memory) -> Operand {
        regs.pc = 0x0801;
        mem.load(0x0801, operand_bytes);
        resolve(mode, regs, mem)
    }

    #[test]
    fn test_operand_lengths_advance_pc() {
        let cases = [
            (AddressingMode::Implied, 0),
            (AddressingMode::Accumulator, 0),
            (AddressingMode::Immediate, 1),
            (AddressingMode::ZeroPage, 1),
            (AddressingMode::ZeroPageX, 1),
            (AddressingMode::ZeroPageY, 1),
            (AddressingMode::Relative, 1),
            (AddressingMode::IndexedIndirect, 1),
            (AddressingMode::IndirectIndexed, 1),
            (AddressingMode::Absolute, 2),
            (AddressingMode::AbsoluteX, 2),
            (AddressingMode::AbsoluteY, 2),
            (AddressingMode::Indirect, 2),
        ];
        for (mode, len) in cases {
            let mut regs = Registers::new();
            let mut mem = Memory::new();
            resolve_at(mode, &[0x12, 0x34], &mut regs, &mut mem);
            assert_eq!(mode.operand_len(), len);
            assert_eq!(regs.pc, 0x0801 + len, "{:?}", mode);
        }
    }

    #[test]
    fn test_immediate_is_literal() {
        let mut regs = Registers::new();
        let mut mem = Memory::new();
        let operand = resolve_at(AddressingMode::Immediate, &[0xAB], &mut regs, &mut mem);
        assert_eq!(operand, Operand::Immediate(0xAB));
        assert_eq!(operand.read(&regs, &mem), 0xAB);
    }

    #[test]
    fn test_zero_page_addressing() {
        let mut cpu = Cpu::new();
        cpu.memory.write(0x42, 0xAB);
        // LDA $42
        cpu.memory.load(0x8000, &[0xA5, 0x42]);
        cpu.registers.pc = 0x8000;

        cpu.step().unwrap();

        assert_eq!(cpu.registers.a, 0xAB);
    }

    #[test]
    fn test_zero_page_x_addressing() {
        let mut cpu = Cpu::new();
        cpu.registers.x = 0x10;
        cpu.memory.write(0x52, 0xCD); // 0x42 + 0x10
        // LDA $42,X
        cpu.memory.load(0x8000, &[0xB5, 0x42]);
        cpu.registers.pc = 0x8000;

        cpu.step().unwrap();

        assert_eq!(cpu.registers.a, 0xCD);
    }

    #[test]
    fn test_zero_page_x_wraparound() {
        let mut regs = Registers::new();
        let mut mem = Memory::new();
        regs.x = 0xFF;
        // (0x42 + 0xFF) & 0xFF = 0x41, never $0141
        let operand = resolve_at(AddressingMode::ZeroPageX, &[0x42], &mut regs, &mut mem);
        assert_eq!(operand, Operand::Address(0x0041));
    }

    #[test]
    fn test_zero_page_y_wraparound() {
        let mut regs = Registers::new();
        let mut mem = Memory::new();
        regs.y = 0x20;
        let operand = resolve_at(AddressingMode::ZeroPageY, &[0xF0], &mut regs, &mut mem);
        assert_eq!(operand, Operand::Address(0x0010));
    }

    #[test]
    fn test_absolute_is_little_endian() {
        let mut regs = Registers::new();
        let mut mem = Memory::new();
        let operand = resolve_at(AddressingMode::Absolute, &[0x34, 0x12], &mut regs, &mut mem);
        assert_eq!(operand, Operand::Address(0x1234));
    }

    #[test]
    fn test_absolute_x_addressing() {
        let mut cpu = Cpu::new();
        cpu.registers.x = 0x10;
        cpu.memory.write(0x1244, 0x78); // 0x1234 + 0x10
        // LDA $1234,X
        cpu.memory.load(0x8000, &[0xBD, 0x34, 0x12]);
        cpu.registers.pc = 0x8000;

        cpu.step().unwrap();

        assert_eq!(cpu.registers.a, 0x78);
        assert_eq!(cpu.registers.pc, 0x8003);
    }

    #[test]
    fn test_absolute_x_page_cross_and_wrap() {
        let mut regs = Registers::new();
        let mut mem = Memory::new();
        regs.x = 0xFF;
        let operand = resolve_at(AddressingMode::AbsoluteX, &[0x34, 0x12], &mut regs, &mut mem);
        assert_eq!(operand, Operand::Address(0x1333));

        regs.x = 0x02;
        let operand = resolve_at(AddressingMode::AbsoluteX, &[0xFF, 0xFF], &mut regs, &mut mem);
        assert_eq!(operand, Operand::Address(0x0001));
    }

    #[test]
    fn test_absolute_y_addressing() {
        let mut regs = Registers::new();
        let mut mem = Memory::new();
        regs.y = 0x20;
        let operand = resolve_at(AddressingMode::AbsoluteY, &[0x34, 0x12], &mut regs, &mut mem);
        assert_eq!(operand, Operand::Address(0x1254));
    }

    #[test]
    fn test_indexed_indirect_wraps_in_zero_page() {
        let mut regs = Registers::new();
        let mut mem = Memory::new();
        regs.x = 0x04;
        mem.write(0x00FF, 0x00);
        mem.write(0x0000, 0x20);
        // ($FB,X) -> pointer at $FF, high byte from $00
        let operand = resolve_at(AddressingMode::IndexedIndirect, &[0xFB], &mut regs, &mut mem);
        assert_eq!(operand, Operand::Address(0x2000));
    }

    #[test]
    fn test_indirect_indexed() {
        let mut regs = Registers::new();
        let mut mem = Memory::new();
        regs.y = 0x10;
        mem.write(0x0086, 0x28);
        mem.write(0x0087, 0x40);
        let operand = resolve_at(AddressingMode::IndirectIndexed, &[0x86], &mut regs, &mut mem);
        assert_eq!(operand, Operand::Address(0x4038));
    }

    #[test]
    fn test_indirect_page_wrap_quirk() {
        let mut regs = Registers::new();
        let mut mem = Memory::new();
        mem.write(0x02FF, 0x34);
        mem.write(0x0200, 0x12);
        mem.write(0x0300, 0x99);
        let operand = resolve_at(AddressingMode::Indirect, &[0xFF, 0x02], &mut regs, &mut mem);
        assert_eq!(operand, Operand::Address(0x1234));
    }

    #[test]
    fn test_relative_twos_complement() {
        let mut regs = Registers::new();
        let mut mem = Memory::new();

        let operand = resolve_at(AddressingMode::Relative, &[0x04], &mut regs, &mut mem);
        assert_eq!(operand, Operand::Address(0x0802 + 4));

        let operand = resolve_at(AddressingMode::Relative, &[0xF8], &mut regs, &mut mem);
        assert_eq!(operand, Operand::Address(0x0802 - 8));

        let operand = resolve_at(AddressingMode::Relative, &[0x7F], &mut regs, &mut mem);
        assert_eq!(operand, Operand::Address(0x0802 + 127));

        let operand = resolve_at(AddressingMode::Relative, &[0x80], &mut regs, &mut mem);
        assert_eq!(operand, Operand::Address(0x0802 - 128));
    }

    #[test]
    fn test_relative_wraps_address_space() {
        let mut regs = Registers::new();
        let mem = {
            let mut mem = Memory::new();
            mem.write(0xFFFE, 0x05);
            mem.write(0x0001, 0xF0);
            mem
        };

        regs.pc = 0xFFFE;
        assert_eq!(resolve(AddressingMode::Relative, &mut regs, &mem), Operand::Address(0x0004));

        regs.pc = 0x0001;
        assert_eq!(resolve(AddressingMode::Relative, &mut regs, &mem), Operand::Address(0xFFF2));
    }

    #[test]
    fn test_accumulator_operand_reads_and_writes_a() {
        let mut regs = Registers::new();
        let mut mem = Memory::new();
        regs.a = 0x5A;
        let operand = resolve_at(AddressingMode::Accumulator, &[], &mut regs, &mut mem);
        assert_eq!(operand.read(&regs, &mem), 0x5A);
        operand.write(&mut regs, &mut mem, 0xA5);
        assert_eq!(regs.a, 0xA5);
    }
}
