//! Opcode table and instruction semantics.
//!
//! The table is a fixed 256-entry array indexed by opcode byte. A `None`
//! entry is an unmapped opcode. Each handler receives the operand already
//! resolved, with PC past the whole instruction, and may overwrite PC.

use std::fmt;

use crate::cpu::addressing::{AddressingMode, Operand};
use crate::cpu::registers::{Register, Registers, StatusFlags};
use crate::memory::Memory;

use crate::cpu::addressing::AddressingMode::*;

pub type Operation = fn(&mut Registers, &mut Memory, Operand);

#[derive(Clone, Copy)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub mode: AddressingMode,
    pub operation: Operation,
}

impl Instruction {
    /// Total encoded size including the opcode byte.
    pub fn size_bytes(&self) -> u16 {
        1 + self.mode.operand_len()
    }
}

impl fmt::Debug for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instruction")
            .field("mnemonic", &self.mnemonic)
            .field("mode", &self.mode)
            .finish()
    }
}

const fn entry(mnemonic: &'static str, mode: AddressingMode, operation: Operation) -> Option<Instruction> {
    Some(Instruction {
        mnemonic,
        mode,
        operation,
    })
}

pub static INSTRUCTION_SET: [Option<Instruction>; 256] = build_table();

pub fn lookup(opcode: u8) -> Option<&'static Instruction> {
    INSTRUCTION_SET[opcode as usize].as_ref()
}

const fn build_table() -> [Option<Instruction>; 256] {
    let mut t: [Option<Instruction>; 256] = [None; 256];

    t[0x09] = entry("ORA", Immediate, ora);
    t[0x05] = entry("ORA", ZeroPage, ora);
    t[0x15] = entry("ORA", ZeroPageX, ora);
    t[0x0D] = entry("ORA", Absolute, ora);
    t[0x1D] = entry("ORA", AbsoluteX, ora);
    t[0x19] = entry("ORA", AbsoluteY, ora);
    t[0x01] = entry("ORA", IndexedIndirect, ora);
    t[0x11] = entry("ORA", IndirectIndexed, ora);

    t[0x29] = entry("AND", Immediate, and);
    t[0x25] = entry("AND", ZeroPage, and);
    t[0x35] = entry("AND", ZeroPageX, and);
    t[0x2D] = entry("AND", Absolute, and);
    t[0x3D] = entry("AND", AbsoluteX, and);
    t[0x39] = entry("AND", AbsoluteY, and);
    t[0x21] = entry("AND", IndexedIndirect, and);
    t[0x31] = entry("AND", IndirectIndexed, and);

    t[0x49] = entry("EOR", Immediate, eor);
    t[0x45] = entry("EOR", ZeroPage, eor);
    t[0x55] = entry("EOR", ZeroPageX, eor);
    t[0x4D] = entry("EOR", Absolute, eor);
    t[0x5D] = entry("EOR", AbsoluteX, eor);
    t[0x59] = entry("EOR", AbsoluteY, eor);
    t[0x41] = entry("EOR", IndexedIndirect, eor);
    t[0x51] = entry("EOR", IndirectIndexed, eor);

    t[0x69] = entry("ADC", Immediate, adc);
    t[0x65] = entry("ADC", ZeroPage, adc);
    t[0x75] = entry("ADC", ZeroPageX, adc);
    t[0x6D] = entry("ADC", Absolute, adc);
    t[0x7D] = entry("ADC", AbsoluteX, adc);
    t[0x79] = entry("ADC", AbsoluteY, adc);
    t[0x61] = entry("ADC", IndexedIndirect, adc);
    t[0x71] = entry("ADC", IndirectIndexed, adc);

    t[0xE9] = entry("SBC", Immediate, sbc);
    t[0xE5] = entry("SBC", ZeroPage, sbc);
    t[0xF5] = entry("SBC", ZeroPageX, sbc);
    t[0xED] = entry("SBC", Absolute, sbc);
    t[0xFD] = entry("SBC", AbsoluteX, sbc);
    t[0xF9] = entry("SBC", AbsoluteY, sbc);
    t[0xE1] = entry("SBC", IndexedIndirect, sbc);
    t[0xF1] = entry("SBC", IndirectIndexed, sbc);

    t[0xC9] = entry("CMP", Immediate, cmp);
    t[0xC5] = entry("CMP", ZeroPage, cmp);
    t[0xD5] = entry("CMP", ZeroPageX, cmp);
    t[0xCD] = entry("CMP", Absolute, cmp);
    t[0xDD] = entry("CMP", AbsoluteX, cmp);
    t[0xD9] = entry("CMP", AbsoluteY, cmp);
    t[0xC1] = entry("CMP", IndexedIndirect, cmp);
    t[0xD1] = entry("CMP", IndirectIndexed, cmp);

    t[0xE0] = entry("CPX", Immediate, cpx);
    t[0xE4] = entry("CPX", ZeroPage, cpx);
    t[0xEC] = entry("CPX", Absolute, cpx);
    t[0xC0] = entry("CPY", Immediate, cpy);
    t[0xC4] = entry("CPY", ZeroPage, cpy);
    t[0xCC] = entry("CPY", Absolute, cpy);

    t[0x24] = entry("BIT", ZeroPage, bit);
    t[0x2C] = entry("BIT", Absolute, bit);

    t[0xA9] = entry("LDA", Immediate, lda);
    t[0xA5] = entry("LDA", ZeroPage, lda);
    t[0xB5] = entry("LDA", ZeroPageX, lda);
    t[0xAD] = entry("LDA", Absolute, lda);
    t[0xBD] = entry("LDA", AbsoluteX, lda);
    t[0xB9] = entry("LDA", AbsoluteY, lda);
    t[0xA1] = entry("LDA", IndexedIndirect, lda);
    t[0xB1] = entry("LDA", IndirectIndexed, lda);

    t[0xA2] = entry("LDX", Immediate, ldx);
    t[0xA6] = entry("LDX", ZeroPage, ldx);
    t[0xB6] = entry("LDX", ZeroPageY, ldx);
    t[0xAE] = entry("LDX", Absolute, ldx);
    t[0xBE] = entry("LDX", AbsoluteY, ldx);

    t[0xA0] = entry("LDY", Immediate, ldy);
    t[0xA4] = entry("LDY", ZeroPage, ldy);
    t[0xB4] = entry("LDY", ZeroPageX, ldy);
    t[0xAC] = entry("LDY", Absolute, ldy);
    t[0xBC] = entry("LDY", AbsoluteX, ldy);

    t[0x85] = entry("STA", ZeroPage, sta);
    t[0x95] = entry("STA", ZeroPageX, sta);
    t[0x8D] = entry("STA", Absolute, sta);
    t[0x9D] = entry("STA", AbsoluteX, sta);
    t[0x99] = entry("STA", AbsoluteY, sta);
    t[0x81] = entry("STA", IndexedIndirect, sta);
    t[0x91] = entry("STA", IndirectIndexed, sta);

    t[0x86] = entry("STX", ZeroPage, stx);
    t[0x96] = entry("STX", ZeroPageY, stx);
    t[0x8E] = entry("STX", Absolute, stx);
    t[0x84] = entry("STY", ZeroPage, sty);
    t[0x94] = entry("STY", ZeroPageX, sty);
    t[0x8C] = entry("STY", Absolute, sty);

    t[0xE6] = entry("INC", ZeroPage, inc);
    t[0xF6] = entry("INC", ZeroPageX, inc);
    t[0xEE] = entry("INC", Absolute, inc);
    t[0xFE] = entry("INC", AbsoluteX, inc);
    t[0xC6] = entry("DEC", ZeroPage, dec);
    t[0xD6] = entry("DEC", ZeroPageX, dec);
    t[0xCE] = entry("DEC", Absolute, dec);
    t[0xDE] = entry("DEC", AbsoluteX, dec);

    t[0xE8] = entry("INX", Implied, inx);
    t[0xC8] = entry("INY", Implied, iny);
    t[0xCA] = entry("DEX", Implied, dex);
    t[0x88] = entry("DEY", Implied, dey);

    t[0x0A] = entry("ASL", Accumulator, asl);
    t[0x06] = entry("ASL", ZeroPage, asl);
    t[0x16] = entry("ASL", ZeroPageX, asl);
    t[0x0E] = entry("ASL", Absolute, asl);
    t[0x1E] = entry("ASL", AbsoluteX, asl);

    t[0x4A] = entry("LSR", Accumulator, lsr);
    t[0x46] = entry("LSR", ZeroPage, lsr);
    t[0x56] = entry("LSR", ZeroPageX, lsr);
    t[0x4E] = entry("LSR", Absolute, lsr);
    t[0x5E] = entry("LSR", AbsoluteX, lsr);

    t[0x2A] = entry("ROL", Accumulator, rol);
    t[0x26] = entry("ROL", ZeroPage, rol);
    t[0x36] = entry("ROL", ZeroPageX, rol);
    t[0x2E] = entry("ROL", Absolute, rol);
    t[0x3E] = entry("ROL", AbsoluteX, rol);

    t[0x6A] = entry("ROR", Accumulator, ror);
    t[0x66] = entry("ROR", ZeroPage, ror);
    t[0x76] = entry("ROR", ZeroPageX, ror);
    t[0x6E] = entry("ROR", Absolute, ror);
    t[0x7E] = entry("ROR", AbsoluteX, ror);

    t[0xAA] = entry("TAX", Implied, tax);
    t[0xA8] = entry("TAY", Implied, tay);
    t[0x8A] = entry("TXA", Implied, txa);
    t[0x98] = entry("TYA", Implied, tya);
    t[0xBA] = entry("TSX", Implied, tsx);
    t[0x9A] = entry("TXS", Implied, txs);

    t[0x48] = entry("PHA", Implied, pha);
    t[0x08] = entry("PHP", Implied, php);
    t[0x68] = entry("PLA", Implied, pla);
    t[0x28] = entry("PLP", Implied, plp);

    t[0x4C] = entry("JMP", Absolute, jmp);
    t[0x6C] = entry("JMP", Indirect, jmp);
    t[0x20] = entry("JSR", Absolute, jsr);
    t[0x60] = entry("RTS", Implied, rts);

    t[0x10] = entry("BPL", Relative, bpl);
    t[0x30] = entry("BMI", Relative, bmi);
    t[0x50] = entry("BVC", Relative, bvc);
    t[0x70] = entry("BVS", Relative, bvs);
    t[0x90] = entry("BCC", Relative, bcc);
    t[0xB0] = entry("BCS", Relative, bcs);
    t[0xD0] = entry("BNE", Relative, bne);
    t[0xF0] = entry("BEQ", Relative, beq);

    t[0x18] = entry("CLC", Implied, clc);
    t[0x38] = entry("SEC", Implied, sec);
    t[0x58] = entry("CLI", Implied, cli);
    t[0x78] = entry("SEI", Implied, sei);
    t[0xB8] = entry("CLV", Implied, clv);
    t[0xD8] = entry("CLD", Implied, cld);
    t[0xF8] = entry("SED", Implied, sed);

    t[0xEA] = entry("NOP", Implied, nop);

    t
}

// Stack helpers. SP points at the next free slot; the stack grows downward.

pub fn push(regs: &mut Registers, mem: &mut Memory, value: u8) {
    mem.write(regs.stack_address(), value);
    regs.sp = regs.sp.wrapping_sub(1);
}

pub fn pull(regs: &mut Registers, mem: &Memory) -> u8 {
    regs.sp = regs.sp.wrapping_add(1);
    mem.read(regs.stack_address())
}

pub fn push_word(regs: &mut Registers, mem: &mut Memory, value: u16) {
    push(regs, mem, (value >> 8) as u8);
    push(regs, mem, value as u8);
}

pub fn pull_word(regs: &mut Registers, mem: &Memory) -> u16 {
    let low = pull(regs, mem) as u16;
    let high = pull(regs, mem) as u16;
    (high << 8) | low
}

// Loads and stores

fn lda(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem);
    regs.load(Register::A, value);
}

fn ldx(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem);
    regs.load(Register::X, value);
}

fn ldy(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem);
    regs.load(Register::Y, value);
}

fn store(regs: &Registers, mem: &mut Memory, operand: Operand, reg: Register) {
    if let Some(addr) = operand.address() {
        mem.write(addr, regs.get(reg));
    }
}

fn sta(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    store(regs, mem, operand, Register::A);
}

fn stx(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    store(regs, mem, operand, Register::X);
}

fn sty(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    store(regs, mem, operand, Register::Y);
}

// Transfers

fn tax(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    regs.load(Register::X, regs.a);
}

fn tay(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    regs.load(Register::Y, regs.a);
}

fn txa(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    regs.load(Register::A, regs.x);
}

fn tya(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    regs.load(Register::A, regs.y);
}

fn tsx(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    regs.load(Register::X, regs.sp);
}

fn txs(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    regs.sp = regs.x;
}

// Stack

fn pha(regs: &mut Registers, mem: &mut Memory, _operand: Operand) {
    let value = regs.a;
    push(regs, mem, value);
}

fn php(regs: &mut Registers, mem: &mut Memory, _operand: Operand) {
    // The pushed copy always has B and the unused bit set.
    let value = regs.sr() | StatusFlags::BREAK.bits() | StatusFlags::UNUSED.bits();
    push(regs, mem, value);
}

fn pla(regs: &mut Registers, mem: &mut Memory, _operand: Operand) {
    let value = pull(regs, mem);
    regs.load(Register::A, value);
}

fn plp(regs: &mut Registers, mem: &mut Memory, _operand: Operand) {
    let value = pull(regs, mem);
    regs.set_sr(value);
    regs.status.remove(StatusFlags::BREAK);
    regs.status.insert(StatusFlags::UNUSED);
}

// Logic

fn and(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = regs.a & operand.read(regs, mem);
    regs.load(Register::A, value);
}

fn ora(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = regs.a | operand.read(regs, mem);
    regs.load(Register::A, value);
}

fn eor(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = regs.a ^ operand.read(regs, mem);
    regs.load(Register::A, value);
}

fn bit(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem);
    regs.set_flag(StatusFlags::ZERO, regs.a & value == 0);
    regs.set_flag(StatusFlags::NEGATIVE, value & 0x80 != 0);
    regs.set_flag(StatusFlags::OVERFLOW, value & 0x40 != 0);
}

// Arithmetic. Binary mode only: the decimal flag does not change results.

fn add_with_carry(regs: &mut Registers, value: u8) {
    let carry = regs.flag(StatusFlags::CARRY) as u16;
    let result = regs.a as u16 + value as u16 + carry;

    regs.set_flag(StatusFlags::CARRY, result > 0xFF);
    regs.set_flag(
        StatusFlags::OVERFLOW,
        (regs.a ^ result as u8) & (value ^ result as u8) & 0x80 != 0,
    );
    regs.load(Register::A, result as u8);
}

fn adc(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem);
    add_with_carry(regs, value);
}

fn sbc(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem);
    add_with_carry(regs, !value);
}

// Compare instructions
fn compare(regs: &mut Registers, reg: u8, value: u8) {
    let result = reg.wrapping_sub(value);
    regs.set_flag(StatusFlags::CARRY, reg >= value);
    regs.set_flag(StatusFlags::ZERO, reg == value);
    regs.set_flag(StatusFlags::NEGATIVE, result & 0x80 != 0);
}

fn cmp(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem);
    let reg = regs.a;
    compare(regs, reg, value);
}

fn cpx(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem);
    let reg = regs.x;
    compare(regs, reg, value);
}

fn cpy(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem);
    let reg = regs.y;
    compare(regs, reg, value);
}

// Increments and decrements

fn inc(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem).wrapping_add(1);
    operand.write(regs, mem, value);
    regs.status.set_zero_negative(value);
}

fn dec(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem).wrapping_sub(1);
    operand.write(regs, mem, value);
    regs.status.set_zero_negative(value);
}

fn step_register(regs: &mut Registers, reg: Register, delta: i8) {
    let value = regs.get(reg).wrapping_add(delta as u8);
    regs.load(reg, value);
}

fn inx(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    step_register(regs, Register::X, 1);
}

fn iny(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    step_register(regs, Register::Y, 1);
}

fn dex(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    step_register(regs, Register::X, -1);
}

fn dey(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    step_register(regs, Register::Y, -1);
}

// Shifts and rotates, on AC or memory

fn asl(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem);
    let result = value << 1;
    regs.set_flag(StatusFlags::CARRY, value & 0x80 != 0);
    operand.write(regs, mem, result);
    regs.status.set_zero_negative(result);
}

fn lsr(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem);
    let result = value >> 1;
    regs.set_flag(StatusFlags::CARRY, value & 0x01 != 0);
    operand.write(regs, mem, result);
    regs.status.set_zero_negative(result);
}

fn rol(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem);
    let carry = regs.flag(StatusFlags::CARRY) as u8;
    let result = (value << 1) | carry;
    regs.set_flag(StatusFlags::CARRY, value & 0x80 != 0);
    operand.write(regs, mem, result);
    regs.status.set_zero_negative(result);
}

fn ror(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    let value = operand.read(regs, mem);
    let carry = regs.flag(StatusFlags::CARRY) as u8;
    let result = (value >> 1) | (carry << 7);
    regs.set_flag(StatusFlags::CARRY, value & 0x01 != 0);
    operand.write(regs, mem, result);
    regs.status.set_zero_negative(result);
}

// Jumps and subroutines

fn jmp(regs: &mut Registers, _mem: &mut Memory, operand: Operand) {
    if let Some(target) = operand.address() {
        regs.pc = target;
    }
}

fn jsr(regs: &mut Registers, mem: &mut Memory, operand: Operand) {
    // PC is at opcode+3; hardware pushes opcode+2, the last operand byte.
    let return_addr = regs.pc.wrapping_sub(1);
    push_word(regs, mem, return_addr);
    if let Some(target) = operand.address() {
        regs.pc = target;
    }
}

fn rts(regs: &mut Registers, mem: &mut Memory, _operand: Operand) {
    regs.pc = pull_word(regs, mem).wrapping_add(1);
}

// Branches

fn branch(regs: &mut Registers, operand: Operand, condition: bool) {
    if condition {
        if let Some(target) = operand.address() {
            regs.pc = target;
        }
    }
}

fn bpl(regs: &mut Registers, _mem: &mut Memory, operand: Operand) {
    let taken = !regs.flag(StatusFlags::NEGATIVE);
    branch(regs, operand, taken);
}

fn bmi(regs: &mut Registers, _mem: &mut Memory, operand: Operand) {
    let taken = regs.flag(StatusFlags::NEGATIVE);
    branch(regs, operand, taken);
}

fn bvc(regs: &mut Registers, _mem: &mut Memory, operand: Operand) {
    let taken = !regs.flag(StatusFlags::OVERFLOW);
    branch(regs, operand, taken);
}

fn bvs(regs: &mut Registers, _mem: &mut Memory, operand: Operand) {
    let taken = regs.flag(StatusFlags::OVERFLOW);
    branch(regs, operand, taken);
}

fn bcc(regs: &mut Registers, _mem: &mut Memory, operand: Operand) {
    let taken = !regs.flag(StatusFlags::CARRY);
    branch(regs, operand, taken);
}

fn bcs(regs: &mut Registers, _mem: &mut Memory, operand: Operand) {
    let taken = regs.flag(StatusFlags::CARRY);
    branch(regs, operand, taken);
}

fn bne(regs: &mut Registers, _mem: &mut Memory, operand: Operand) {
    let taken = !regs.flag(StatusFlags::ZERO);
    branch(regs, operand, taken);
}

fn beq(regs: &mut Registers, _mem: &mut Memory, operand: Operand) {
    let taken = regs.flag(StatusFlags::ZERO);
    branch(regs, operand, taken);
}

// Flag instructions

fn clc(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    regs.set_flag(StatusFlags::CARRY, false);
}

fn sec(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    regs.set_flag(StatusFlags::CARRY, true);
}

fn cli(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    regs.set_flag(StatusFlags::INTERRUPT_DISABLE, false);
}

fn sei(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    regs.set_flag(StatusFlags::INTERRUPT_DISABLE, true);
}

fn clv(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    regs.set_flag(StatusFlags::OVERFLOW, false);
}

fn cld(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    regs.set_flag(StatusFlags::DECIMAL, false);
}

fn sed(regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {
    regs.set_flag(StatusFlags::DECIMAL, true);
}

fn nop(_regs: &mut Registers, _mem: &mut Memory, _operand: Operand) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let mapped = INSTRUCTION_SET.iter().filter(|e| e.is_some()).count();
        // 151 documented opcodes minus BRK and RTI
        assert_eq!(mapped, 149);
    }

    #[test]
    fn test_interrupt_opcodes_unmapped() {
        assert!(lookup(0x00).is_none());
        assert!(lookup(0x40).is_none());
        assert!(lookup(0x02).is_none());
    }

    #[test]
    fn test_lookup_metadata() {
        let and = lookup(0x29).unwrap();
        assert_eq!(and.mnemonic, "AND");
        assert_eq!(and.mode, AddressingMode::Immediate);
        assert_eq!(and.size_bytes(), 2);

        let jsr = lookup(0x20).unwrap();
        assert_eq!(jsr.mnemonic, "JSR");
        assert_eq!(jsr.size_bytes(), 3);

        assert_eq!(lookup(0xEA).unwrap().size_bytes(), 1);
    }

    #[test]
    fn test_push_pull_word_order() {
        let mut regs = Registers::new();
        let mut mem = Memory::new();
        regs.sp = 0xFF;

        push_word(&mut regs, &mut mem, 0x1234);
        assert_eq!(regs.sp, 0xFD);
        assert_eq!(mem.read(0x01FF), 0x12);
        assert_eq!(mem.read(0x01FE), 0x34);

        assert_eq!(pull_word(&mut regs, &mem), 0x1234);
        assert_eq!(regs.sp, 0xFF);
    }

    #[test]
    fn test_stack_wraps_within_page() {
        let mut regs = Registers::new();
        let mut mem = Memory::new();
        regs.sp = 0x00;

        push(&mut regs, &mut mem, 0xAB);
        assert_eq!(regs.sp, 0xFF);
        assert_eq!(mem.read(0x0100), 0xAB);
        assert_eq!(mem.read(0x0200), 0x00);

        assert_eq!(pull(&mut regs, &mem), 0xAB);
        assert_eq!(regs.sp, 0x00);
    }
}
