//! # Disassembler
//!
//! Table-driven disassembly of 6502 machine code, sharing [`OPCODE_TABLE`]
//! with the interpreter so the two can never disagree about an encoding.
//! Useful for dumping loaded programs and for locating the instruction where
//! an execution trace diverges from a reference.

use crate::addressing::AddressingMode;
use crate::opcodes::OPCODE_TABLE;

/// One decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Address of the opcode byte.
    pub address: u16,

    /// The opcode byte itself.
    pub opcode: u8,

    /// Mnemonic, or `".byte"` for an undocumented opcode.
    pub mnemonic: &'static str,

    /// Addressing mode (Implicit for `.byte` rows).
    pub addressing_mode: AddressingMode,

    /// The 0-2 operand bytes following the opcode.
    pub operands: Vec<u8>,
}

impl Instruction {
    /// Total encoded size: opcode plus operands.
    pub fn size(&self) -> u16 {
        1 + self.operands.len() as u16
    }
}

/// Decodes the instruction at the start of `bytes`.
///
/// Returns `None` when `bytes` is empty or too short to hold the operand
/// bytes the opcode requires. An undocumented opcode decodes as a one-byte
/// `.byte` row rather than `None`, so a disassembly listing never skips
/// input.
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let opcode = *bytes.first()?;

    let Some(metadata) = OPCODE_TABLE[opcode as usize] else {
        return Some(Instruction {
            address,
            opcode,
            mnemonic: ".byte",
            addressing_mode: AddressingMode::Implicit,
            operands: vec![opcode],
        });
    };

    if bytes.len() < metadata.size_bytes as usize {
        return None;
    }

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        addressing_mode: metadata.addressing_mode,
        operands: bytes[1..metadata.size_bytes as usize].to_vec(),
    })
}

/// Disassembles a byte slice into a listing.
///
/// `start_address` is the address of `bytes[0]`, used for the per-row
/// address and for resolving relative branch targets. A trailing truncated
/// instruction ends the listing.
///
/// # Examples
///
/// ```
/// use nmos6502::disassembler::disassemble;
///
/// let listing = disassemble(&[0xA9, 0x42, 0x00], 0x0600);
/// assert_eq!(listing[0].to_string(), "LDA #$42");
/// assert_eq!(listing[1].to_string(), "BRK");
/// ```
pub fn disassemble(bytes: &[u8], start_address: u16) -> Vec<Instruction> {
    let mut listing = Vec::new();
    let mut offset = 0usize;

    while offset < bytes.len() {
        let address = start_address.wrapping_add(offset as u16);
        match decode_instruction(&bytes[offset..], address) {
            Some(instruction) => {
                offset += instruction.size() as usize;
                listing.push(instruction);
            }
            None => break,
        }
    }

    listing
}

impl std::fmt::Display for Instruction {
    /// Renders standard assembly syntax: `LDA #$42`, `JMP ($10FF)`,
    /// `.byte $02`.
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use AddressingMode::*;

        if self.mnemonic == ".byte" {
            return write!(f, ".byte ${:02X}", self.opcode);
        }

        let byte = |i: usize| self.operands.get(i).copied().unwrap_or(0);
        let word = u16::from_le_bytes([byte(0), byte(1)]);

        match self.addressing_mode {
            Implicit => write!(f, "{}", self.mnemonic),
            Accumulator => write!(f, "{} A", self.mnemonic),
            Immediate => write!(f, "{} #${:02X}", self.mnemonic, byte(0)),
            ZeroPage => write!(f, "{} ${:02X}", self.mnemonic, byte(0)),
            ZeroPageX => write!(f, "{} ${:02X},X", self.mnemonic, byte(0)),
            ZeroPageY => write!(f, "{} ${:02X},Y", self.mnemonic, byte(0)),
            Relative => {
                // Branch targets are resolved against the PC after the
                // two-byte instruction, the way the CPU computes them.
                let target = self
                    .address
                    .wrapping_add(2)
                    .wrapping_add_signed(byte(0) as i8 as i16);
                write!(f, "{} ${:04X}", self.mnemonic, target)
            }
            Absolute => write!(f, "{} ${:04X}", self.mnemonic, word),
            AbsoluteX => write!(f, "{} ${:04X},X", self.mnemonic, word),
            AbsoluteY => write!(f, "{} ${:04X},Y", self.mnemonic, word),
            Indirect => write!(f, "{} (${:04X})", self.mnemonic, word),
            IndirectX => write!(f, "{} (${:02X},X)", self.mnemonic, byte(0)),
            IndirectY => write!(f, "{} (${:02X}),Y", self.mnemonic, byte(0)),
        }
    }
}
