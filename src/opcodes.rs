//! # Opcode Decode Table
//!
//! The single source of truth for instruction decoding: a dense, immutable
//! 256-entry table mapping every opcode byte to its operation and addressing
//! mode. The 151 documented NMOS 6502 opcodes have entries; the 105
//! undocumented ones are `None`, which makes [`crate::CPU::step`] halt.
//!
//! Test programs encode instructions by opcode byte, so this table has to
//! match the standard 6502 encoding bit-for-bit.

use crate::addressing::AddressingMode;

/// The 56 documented 6502 operations.
///
/// Dispatch is an exhaustive `match` in the CPU's execute path; adding a
/// variant without wiring it up is a compile error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Adc, And, Asl, Bcc, Bcs, Beq, Bit, Bmi, Bne, Bpl, Brk, Bvc, Bvs, Clc,
    Cld, Cli, Clv, Cmp, Cpx, Cpy, Dec, Dex, Dey, Eor, Inc, Inx, Iny, Jmp,
    Jsr, Lda, Ldx, Ldy, Lsr, Nop, Ora, Pha, Php, Pla, Plp, Rol, Ror, Rti,
    Rts, Sbc, Sec, Sed, Sei, Sta, Stx, Sty, Tax, Tay, Tsx, Txa, Txs, Tya,
}

/// Static decode information for one opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Three-letter instruction mnemonic (e.g. "LDA").
    pub mnemonic: &'static str,

    /// The operation this opcode selects.
    pub operation: Operation,

    /// How the operand bytes are interpreted.
    pub addressing_mode: AddressingMode,

    /// Total instruction size: opcode plus operand bytes (1-3).
    pub size_bytes: u8,
}

/// Builds one table entry; the size falls out of the addressing mode.
const fn op(
    mnemonic: &'static str,
    operation: Operation,
    mode: AddressingMode,
) -> Option<OpcodeMetadata> {
    Some(OpcodeMetadata {
        mnemonic,
        operation,
        addressing_mode: mode,
        size_bytes: 1 + mode.operand_bytes(),
    })
}

use crate::addressing::AddressingMode as A;
use self::Operation as O;

/// Complete 256-entry decode table indexed by opcode byte.
///
/// # Examples
///
/// ```
/// use nmos6502::{AddressingMode, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
///
/// assert!(OPCODE_TABLE[0x02].is_none()); // undocumented
/// ```
#[rustfmt::skip]
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = [
    /* 0x00 */ op("BRK", O::Brk, A::Implicit),
    /* 0x01 */ op("ORA", O::Ora, A::IndirectX),
    /* 0x02 */ None,
    /* 0x03 */ None,
    /* 0x04 */ None,
    /* 0x05 */ op("ORA", O::Ora, A::ZeroPage),
    /* 0x06 */ op("ASL", O::Asl, A::ZeroPage),
    /* 0x07 */ None,
    /* 0x08 */ op("PHP", O::Php, A::Implicit),
    /* 0x09 */ op("ORA", O::Ora, A::Immediate),
    /* 0x0A */ op("ASL", O::Asl, A::Accumulator),
    /* 0x0B */ None,
    /* 0x0C */ None,
    /* 0x0D */ op("ORA", O::Ora, A::Absolute),
    /* 0x0E */ op("ASL", O::Asl, A::Absolute),
    /* 0x0F */ None,
    /* 0x10 */ op("BPL", O::Bpl, A::Relative),
    /* 0x11 */ op("ORA", O::Ora, A::IndirectY),
    /* 0x12 */ None,
    /* 0x13 */ None,
    /* 0x14 */ None,
    /* 0x15 */ op("ORA", O::Ora, A::ZeroPageX),
    /* 0x16 */ op("ASL", O::Asl, A::ZeroPageX),
    /* 0x17 */ None,
    /* 0x18 */ op("CLC", O::Clc, A::Implicit),
    /* 0x19 */ op("ORA", O::Ora, A::AbsoluteY),
    /* 0x1A */ None,
    /* 0x1B */ None,
    /* 0x1C */ None,
    /* 0x1D */ op("ORA", O::Ora, A::AbsoluteX),
    /* 0x1E */ op("ASL", O::Asl, A::AbsoluteX),
    /* 0x1F */ None,
    /* 0x20 */ op("JSR", O::Jsr, A::Absolute),
    /* 0x21 */ op("AND", O::And, A::IndirectX),
    /* 0x22 */ None,
    /* 0x23 */ None,
    /* 0x24 */ op("BIT", O::Bit, A::ZeroPage),
    /* 0x25 */ op("AND", O::And, A::ZeroPage),
    /* 0x26 */ op("ROL", O::Rol, A::ZeroPage),
    /* 0x27 */ None,
    /* 0x28 */ op("PLP", O::Plp, A::Implicit),
    /* 0x29 */ op("AND", O::And, A::Immediate),
    /* 0x2A */ op("ROL", O::Rol, A::Accumulator),
    /* 0x2B */ None,
    /* 0x2C */ op("BIT", O::Bit, A::Absolute),
    /* 0x2D */ op("AND", O::And, A::Absolute),
    /* 0x2E */ op("ROL", O::Rol, A::Absolute),
    /* 0x2F */ None,
    /* 0x30 */ op("BMI", O::Bmi, A::Relative),
    /* 0x31 */ op("AND", O::And, A::IndirectY),
    /* 0x32 */ None,
    /* 0x33 */ None,
    /* 0x34 */ None,
    /* 0x35 */ op("AND", O::And, A::ZeroPageX),
    /* 0x36 */ op("ROL", O::Rol, A::ZeroPageX),
    /* 0x37 */ None,
    /* 0x38 */ op("SEC", O::Sec, A::Implicit),
    /* 0x39 */ op("AND", O::And, A::AbsoluteY),
    /* 0x3A */ None,
    /* 0x3B */ None,
    /* 0x3C */ None,
    /* 0x3D */ op("AND", O::And, A::AbsoluteX),
    /* 0x3E */ op("ROL", O::Rol, A::AbsoluteX),
    /* 0x3F */ None,
    /* 0x40 */ op("RTI", O::Rti, A::Implicit),
    /* 0x41 */ op("EOR", O::Eor, A::IndirectX),
    /* 0x42 */ None,
    /* 0x43 */ None,
    /* 0x44 */ None,
    /* 0x45 */ op("EOR", O::Eor, A::ZeroPage),
    /* 0x46 */ op("LSR", O::Lsr, A::ZeroPage),
    /* 0x47 */ None,
    /* 0x48 */ op("PHA", O::Pha, A::Implicit),
    /* 0x49 */ op("EOR", O::Eor, A::Immediate),
    /* 0x4A */ op("LSR", O::Lsr, A::Accumulator),
    /* 0x4B */ None,
    /* 0x4C */ op("JMP", O::Jmp, A::Absolute),
    /* 0x4D */ op("EOR", O::Eor, A::Absolute),
    /* 0x4E */ op("LSR", O::Lsr, A::Absolute),
    /* 0x4F */ None,
    /* 0x50 */ op("BVC", O::Bvc, A::Relative),
    /* 0x51 */ op("EOR", O::Eor, A::IndirectY),
    /* 0x52 */ None,
    /* 0x53 */ None,
    /* 0x54 */ None,
    /* 0x55 */ op("EOR", O::Eor, A::ZeroPageX),
    /* 0x56 */ op("LSR", O::Lsr, A::ZeroPageX),
    /* 0x57 */ None,
    /* 0x58 */ op("CLI", O::Cli, A::Implicit),
    /* 0x59 */ op("EOR", O::Eor, A::AbsoluteY),
    /* 0x5A */ None,
    /* 0x5B */ None,
    /* 0x5C */ None,
    /* 0x5D */ op("EOR", O::Eor, A::AbsoluteX),
    /* 0x5E */ op("LSR", O::Lsr, A::AbsoluteX),
    /* 0x5F */ None,
    /* 0x60 */ op("RTS", O::Rts, A::Implicit),
    /* 0x61 */ op("ADC", O::Adc, A::IndirectX),
    /* 0x62 */ None,
    /* 0x63 */ None,
    /* 0x64 */ None,
    /* 0x65 */ op("ADC", O::Adc, A::ZeroPage),
    /* 0x66 */ op("ROR", O::Ror, A::ZeroPage),
    /* 0x67 */ None,
    /* 0x68 */ op("PLA", O::Pla, A::Implicit),
    /* 0x69 */ op("ADC", O::Adc, A::Immediate),
    /* 0x6A */ op("ROR", O::Ror, A::Accumulator),
    /* 0x6B */ None,
    /* 0x6C */ op("JMP", O::Jmp, A::Indirect),
    /* 0x6D */ op("ADC", O::Adc, A::Absolute),
    /* 0x6E */ op("ROR", O::Ror, A::Absolute),
    /* 0x6F */ None,
    /* 0x70 */ op("BVS", O::Bvs, A::Relative),
    /* 0x71 */ op("ADC", O::Adc, A::IndirectY),
    /* 0x72 */ None,
    /* 0x73 */ None,
    /* 0x74 */ None,
    /* 0x75 */ op("ADC", O::Adc, A::ZeroPageX),
    /* 0x76 */ op("ROR", O::Ror, A::ZeroPageX),
    /* 0x77 */ None,
    /* 0x78 */ op("SEI", O::Sei, A::Implicit),
    /* 0x79 */ op("ADC", O::Adc, A::AbsoluteY),
    /* 0x7A */ None,
    /* 0x7B */ None,
    /* 0x7C */ None,
    /* 0x7D */ op("ADC", O::Adc, A::AbsoluteX),
    /* 0x7E */ op("ROR", O::Ror, A::AbsoluteX),
    /* 0x7F */ None,
    /* 0x80 */ None,
    /* 0x81 */ op("STA", O::Sta, A::IndirectX),
    /* 0x82 */ None,
    /* 0x83 */ None,
    /* 0x84 */ op("STY", O::Sty, A::ZeroPage),
    /* 0x85 */ op("STA", O::Sta, A::ZeroPage),
    /* 0x86 */ op("STX", O::Stx, A::ZeroPage),
    /* 0x87 */ None,
    /* 0x88 */ op("DEY", O::Dey, A::Implicit),
    /* 0x89 */ None,
    /* 0x8A */ op("TXA", O::Txa, A::Implicit),
    /* 0x8B */ None,
    /* 0x8C */ op("STY", O::Sty, A::Absolute),
    /* 0x8D */ op("STA", O::Sta, A::Absolute),
    /* 0x8E */ op("STX", O::Stx, A::Absolute),
    /* 0x8F */ None,
    /* 0x90 */ op("BCC", O::Bcc, A::Relative),
    /* 0x91 */ op("STA", O::Sta, A::IndirectY),
    /* 0x92 */ None,
    /* 0x93 */ None,
    /* 0x94 */ op("STY", O::Sty, A::ZeroPageX),
    /* 0x95 */ op("STA", O::Sta, A::ZeroPageX),
    /* 0x96 */ op("STX", O::Stx, A::ZeroPageY),
    /* 0x97 */ None,
    /* 0x98 */ op("TYA", O::Tya, A::Implicit),
    /* 0x99 */ op("STA", O::Sta, A::AbsoluteY),
    /* 0x9A */ op("TXS", O::Txs, A::Implicit),
    /* 0x9B */ None,
    /* 0x9C */ None,
    /* 0x9D */ op("STA", O::Sta, A::AbsoluteX),
    /* 0x9E */ None,
    /* 0x9F */ None,
    /* 0xA0 */ op("LDY", O::Ldy, A::Immediate),
    /* 0xA1 */ op("LDA", O::Lda, A::IndirectX),
    /* 0xA2 */ op("LDX", O::Ldx, A::Immediate),
    /* 0xA3 */ None,
    /* 0xA4 */ op("LDY", O::Ldy, A::ZeroPage),
    /* 0xA5 */ op("LDA", O::Lda, A::ZeroPage),
    /* 0xA6 */ op("LDX", O::Ldx, A::ZeroPage),
    /* 0xA7 */ None,
    /* 0xA8 */ op("TAY", O::Tay, A::Implicit),
    /* 0xA9 */ op("LDA", O::Lda, A::Immediate),
    /* 0xAA */ op("TAX", O::Tax, A::Implicit),
    /* 0xAB */ None,
    /* 0xAC */ op("LDY", O::Ldy, A::Absolute),
    /* 0xAD */ op("LDA", O::Lda, A::Absolute),
    /* 0xAE */ op("LDX", O::Ldx, A::Absolute),
    /* 0xAF */ None,
    /* 0xB0 */ op("BCS", O::Bcs, A::Relative),
    /* 0xB1 */ op("LDA", O::Lda, A::IndirectY),
    /* 0xB2 */ None,
    /* 0xB3 */ None,
    /* 0xB4 */ op("LDY", O::Ldy, A::ZeroPageX),
    /* 0xB5 */ op("LDA", O::Lda, A::ZeroPageX),
    /* 0xB6 */ op("LDX", O::Ldx, A::ZeroPageY),
    /* 0xB7 */ None,
    /* 0xB8 */ op("CLV", O::Clv, A::Implicit),
    /* 0xB9 */ op("LDA", O::Lda, A::AbsoluteY),
    /* 0xBA */ op("TSX", O::Tsx, A::Implicit),
    /* 0xBB */ None,
    /* 0xBC */ op("LDY", O::Ldy, A::AbsoluteX),
    /* 0xBD */ op("LDA", O::Lda, A::AbsoluteX),
    /* 0xBE */ op("LDX", O::Ldx, A::AbsoluteY),
    /* 0xBF */ None,
    /* 0xC0 */ op("CPY", O::Cpy, A::Immediate),
    /* 0xC1 */ op("CMP", O::Cmp, A::IndirectX),
    /* 0xC2 */ None,
    /* 0xC3 */ None,
    /* 0xC4 */ op("CPY", O::Cpy, A::ZeroPage),
    /* 0xC5 */ op("CMP", O::Cmp, A::ZeroPage),
    /* 0xC6 */ op("DEC", O::Dec, A::ZeroPage),
    /* 0xC7 */ None,
    /* 0xC8 */ op("INY", O::Iny, A::Implicit),
    /* 0xC9 */ op("CMP", O::Cmp, A::Immediate),
    /* 0xCA */ op("DEX", O::Dex, A::Implicit),
    /* 0xCB */ None,
    /* 0xCC */ op("CPY", O::Cpy, A::Absolute),
    /* 0xCD */ op("CMP", O::Cmp, A::Absolute),
    /* 0xCE */ op("DEC", O::Dec, A::Absolute),
    /* 0xCF */ None,
    /* 0xD0 */ op("BNE", O::Bne, A::Relative),
    /* 0xD1 */ op("CMP", O::Cmp, A::IndirectY),
    /* 0xD2 */ None,
    /* 0xD3 */ None,
    /* 0xD4 */ None,
    /* 0xD5 */ op("CMP", O::Cmp, A::ZeroPageX),
    /* 0xD6 */ op("DEC", O::Dec, A::ZeroPageX),
    /* 0xD7 */ None,
    /* 0xD8 */ op("CLD", O::Cld, A::Implicit),
    /* 0xD9 */ op("CMP", O::Cmp, A::AbsoluteY),
    /* 0xDA */ None,
    /* 0xDB */ None,
    /* 0xDC */ None,
    /* 0xDD */ op("CMP", O::Cmp, A::AbsoluteX),
    /* 0xDE */ op("DEC", O::Dec, A::AbsoluteX),
    /* 0xDF */ None,
    /* 0xE0 */ op("CPX", O::Cpx, A::Immediate),
    /* 0xE1 */ op("SBC", O::Sbc, A::IndirectX),
    /* 0xE2 */ None,
    /* 0xE3 */ None,
    /* 0xE4 */ op("CPX", O::Cpx, A::ZeroPage),
    /* 0xE5 */ op("SBC", O::Sbc, A::ZeroPage),
    /* 0xE6 */ op("INC", O::Inc, A::ZeroPage),
    /* 0xE7 */ None,
    /* 0xE8 */ op("INX", O::Inx, A::Implicit),
    /* 0xE9 */ op("SBC", O::Sbc, A::Immediate),
    /* 0xEA */ op("NOP", O::Nop, A::Implicit),
    /* 0xEB */ None,
    /* 0xEC */ op("CPX", O::Cpx, A::Absolute),
    /* 0xED */ op("SBC", O::Sbc, A::Absolute),
    /* 0xEE */ op("INC", O::Inc, A::Absolute),
    /* 0xEF */ None,
    /* 0xF0 */ op("BEQ", O::Beq, A::Relative),
    /* 0xF1 */ op("SBC", O::Sbc, A::IndirectY),
    /* 0xF2 */ None,
    /* 0xF3 */ None,
    /* 0xF4 */ None,
    /* 0xF5 */ op("SBC", O::Sbc, A::ZeroPageX),
    /* 0xF6 */ op("INC", O::Inc, A::ZeroPageX),
    /* 0xF7 */ None,
    /* 0xF8 */ op("SED", O::Sed, A::Implicit),
    /* 0xF9 */ op("SBC", O::Sbc, A::AbsoluteY),
    /* 0xFA */ None,
    /* 0xFB */ None,
    /* 0xFC */ None,
    /* 0xFD */ op("SBC", O::Sbc, A::AbsoluteX),
    /* 0xFE */ op("INC", O::Inc, A::AbsoluteX),
    /* 0xFF */ None,
];
