//! # Addressing Modes
//!
//! The 13 addressing modes of the 6502. Each mode determines how many operand
//! bytes follow the opcode and how the effective operand is computed from
//! them; the resolver in [`crate::operand`] implements the computations.

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by the instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: ASL A, LSR A, ROL A
    Accumulator,

    /// 8-bit literal embedded in the instruction stream.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address within the zero page (0x0000-0x00FF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero-page address indexed by X; the sum wraps within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero-page address indexed by Y; the sum wraps within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset from the PC following the operand byte.
    ///
    /// Example: BEQ label
    Relative,

    /// Full little-endian 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address plus X, wrapping modulo 2^16.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address plus Y, wrapping modulo 2^16.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Jump through a 16-bit pointer. Only used by JMP.
    ///
    /// When the pointer's low byte is 0xFF the high byte of the target is
    /// fetched from the start of the *same* page (the 6502 page-wrap bug).
    Indirect,

    /// Indexed indirect: (zp + X) within the zero page, then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: dereference zp, then add Y to the pointer.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes the mode consumes after the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}
