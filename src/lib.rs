//! # NMOS 6502 Interpreter Core
//!
//! An instruction-level emulator for the MOS Technology 6502 as shipped in the
//! NES (the Ricoh 2A03 variant: no decimal mode). The crate models the
//! register file, processor status byte, stack, and a 64 KiB flat address
//! space, and executes machine code one instruction at a time.
//!
//! ## Quick Start
//!
//! ```rust
//! use nmos6502::{FlatMemory, CPU};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//!
//! // LDA #$05; BRK, loaded at the default program start, 0x0600
//! cpu.load_program(&[0xA9, 0x05, 0x00]).unwrap();
//!
//! assert!(cpu.step());
//! assert_eq!(cpu.a, 0x05);
//! assert_eq!(cpu.pc, 0x0602);
//! ```
//!
//! ## Architecture
//!
//! - **Machine state** ([`CPU`]): registers A, X, Y, SP, PC and the status
//!   byte P, all public so a harness can compare them against a reference
//!   trace byte-for-byte.
//! - **Memory** ([`MemoryBus`], [`FlatMemory`]): the CPU is generic over its
//!   bus, which is the extension point for memory-mapped I/O. The stock
//!   implementation is a flat 64 KiB RAM.
//! - **Decoder** ([`OPCODE_TABLE`]): a dense 256-entry constant table mapping
//!   every opcode byte to its operation and addressing mode. Undocumented
//!   opcodes are `None` and halt stepping.
//! - **Operand handle** ([`Operand`]): a small sum type produced by the
//!   addressing-mode resolver each step; instructions read and write through
//!   it without knowing whether they target the accumulator, a memory cell,
//!   or an immediate.
//!
//! Cycle timing is deliberately not modelled; `step` executes exactly one
//! instruction and reports whether decoding succeeded.

pub mod addressing;
pub mod cpu;
pub mod disassembler;
pub mod memory;
pub mod opcodes;
pub mod operand;
pub mod status;

#[cfg(feature = "wasm")]
pub mod wasm;

// Internal instruction implementations (not part of the public API)
mod instructions;

// Re-export the public API
pub use addressing::AddressingMode;
pub use cpu::CPU;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};
pub use operand::Operand;
pub use status::Status;

/// Error returned when a program image cannot be placed in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramLoadError {
    /// `offset + length` exceeds the 64 KiB address space.
    DoesNotFit {
        /// Requested load address.
        offset: u16,
        /// Length of the program image in bytes.
        length: usize,
    },
}

impl std::fmt::Display for ProgramLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ProgramLoadError::DoesNotFit { offset, length } => {
                write!(
                    f,
                    "program of {} bytes does not fit at 0x{:04X}",
                    length, offset
                )
            }
        }
    }
}

impl std::error::Error for ProgramLoadError {}
