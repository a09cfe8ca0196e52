//! # CPU State and Execution
//!
//! The [`CPU`] struct holds the complete machine state: registers, status
//! byte, and the memory bus. It drives the fetch-decode-execute cycle.
//!
//! ## Execution Model
//!
//! One call to [`CPU::step`] interprets exactly one instruction:
//!
//! 1. fetch the opcode byte at PC (PC advances);
//! 2. look it up in [`OPCODE_TABLE`]; an undocumented opcode returns `false`
//!    with the opcode byte already consumed;
//! 3. resolve the addressing mode into an [`Operand`] handle (PC may advance
//!    further);
//! 4. dispatch to the instruction semantics, which read/write through the
//!    handle and update flags.
//!
//! The interpreter is strictly single-threaded; a `step` call is atomic with
//! respect to any outside observer. Independent instances share nothing and
//! may run on separate threads without coordination.

use crate::memory::{FlatMemory, MemoryBus};
use crate::opcodes::{Operation, OPCODE_TABLE};
use crate::operand::Operand;
use crate::status::Status;
use crate::ProgramLoadError;

/// Base address of the stack page.
const STACK_BASE: u16 = 0x0100;

/// 6502 machine state and interpreter.
///
/// All registers are public: the intended harness compares them (and memory)
/// directly against a reference trace after each step. The CPU owns its
/// memory bus for its whole lifetime; the 64 KiB of a [`FlatMemory`] is
/// allocated once at construction and never resized.
///
/// # Type Parameters
///
/// * `M` - memory bus implementation; defaults to [`FlatMemory`]
///
/// # Examples
///
/// ```
/// use nmos6502::{FlatMemory, CPU};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// assert_eq!(cpu.pc, CPU::<FlatMemory>::PROGRAM_START);
/// assert_eq!(cpu.sp, 0xFD);
/// assert_eq!(cpu.p.bits(), 0x24);
/// ```
pub struct CPU<M: MemoryBus = FlatMemory> {
    /// Accumulator.
    pub a: u8,

    /// X index register.
    pub x: u8,

    /// Y index register.
    pub y: u8,

    /// Stack pointer: offset into the stack page, pointing at the next free
    /// slot. The full stack address is `0x0100 + sp`.
    pub sp: u8,

    /// Program counter.
    pub pc: u16,

    /// Processor status register.
    pub p: Status,

    /// Memory bus.
    pub memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Default load address for programs, and the reset value of PC.
    ///
    /// Real silicon reads PC from the reset vector at 0xFFFC/D; this core
    /// starts where the test corpus loads its programs instead.
    pub const PROGRAM_START: u16 = 0x0600;

    /// Reset value of the stack pointer.
    pub const INITIAL_SP: u8 = 0xFD;

    /// Creates a CPU in power-on state, taking ownership of `memory`.
    pub fn new(memory: M) -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: Self::INITIAL_SP,
            pc: Self::PROGRAM_START,
            p: Status::new(),
            memory,
        }
    }

    /// Restores the power-on state: registers zeroed, SP = 0xFD,
    /// PC = [`Self::PROGRAM_START`], P = 0x24, memory cleared.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = Self::INITIAL_SP;
        self.pc = Self::PROGRAM_START;
        self.p = Status::new();
        self.memory.reset();
    }

    /// Copies `program` into memory at `offset` and sets PC to `offset`.
    ///
    /// Fails without touching memory when the image would run past the end
    /// of the address space.
    ///
    /// # Examples
    ///
    /// ```
    /// use nmos6502::{FlatMemory, CPU};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.load_program_at(&[0xEA], 0x8000).unwrap();
    /// assert_eq!(cpu.pc, 0x8000);
    ///
    /// assert!(cpu.load_program_at(&[0; 3], 0xFFFE).is_err());
    /// ```
    pub fn load_program_at(
        &mut self,
        program: &[u8],
        offset: u16,
    ) -> Result<(), ProgramLoadError> {
        if offset as usize + program.len() > 0x10000 {
            return Err(ProgramLoadError::DoesNotFit {
                offset,
                length: program.len(),
            });
        }

        for (i, &byte) in program.iter().enumerate() {
            self.memory.write(offset + i as u16, byte);
        }
        self.pc = offset;

        Ok(())
    }

    /// Loads `program` at the default [`Self::PROGRAM_START`] address.
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), ProgramLoadError> {
        self.load_program_at(program, Self::PROGRAM_START)
    }

    /// Executes one instruction.
    ///
    /// Returns `false` when the fetched opcode is undocumented; the opcode
    /// byte has been consumed but nothing else changes, and the caller
    /// decides whether to stop, reset, or carry on. Halting is not an error.
    pub fn step(&mut self) -> bool {
        let opcode = self.fetch_byte();

        let Some(metadata) = OPCODE_TABLE[opcode as usize] else {
            return false;
        };

        let operand = self.resolve(metadata.addressing_mode);
        self.execute(metadata.operation, operand);

        true
    }

    /// Dispatches a decoded operation to its implementation.
    fn execute(&mut self, operation: Operation, operand: Operand) {
        use crate::instructions::*;

        match operation {
            // ALU
            Operation::Adc => alu::adc(self, operand),
            Operation::Sbc => alu::sbc(self, operand),
            Operation::And => alu::and(self, operand),
            Operation::Ora => alu::ora(self, operand),
            Operation::Eor => alu::eor(self, operand),
            Operation::Cmp => alu::cmp(self, operand),
            Operation::Cpx => alu::cpx(self, operand),
            Operation::Cpy => alu::cpy(self, operand),
            Operation::Bit => alu::bit(self, operand),

            // Loads and stores
            Operation::Lda => load_store::lda(self, operand),
            Operation::Ldx => load_store::ldx(self, operand),
            Operation::Ldy => load_store::ldy(self, operand),
            Operation::Sta => load_store::sta(self, operand),
            Operation::Stx => load_store::stx(self, operand),
            Operation::Sty => load_store::sty(self, operand),

            // Shifts and rotates
            Operation::Asl => shifts::asl(self, operand),
            Operation::Lsr => shifts::lsr(self, operand),
            Operation::Rol => shifts::rol(self, operand),
            Operation::Ror => shifts::ror(self, operand),

            // Increments and decrements
            Operation::Inc => inc_dec::inc(self, operand),
            Operation::Dec => inc_dec::dec(self, operand),
            Operation::Inx => inc_dec::inx(self, operand),
            Operation::Iny => inc_dec::iny(self, operand),
            Operation::Dex => inc_dec::dex(self, operand),
            Operation::Dey => inc_dec::dey(self, operand),

            // Branches
            Operation::Bcc => branches::bcc(self, operand),
            Operation::Bcs => branches::bcs(self, operand),
            Operation::Beq => branches::beq(self, operand),
            Operation::Bne => branches::bne(self, operand),
            Operation::Bmi => branches::bmi(self, operand),
            Operation::Bpl => branches::bpl(self, operand),
            Operation::Bvc => branches::bvc(self, operand),
            Operation::Bvs => branches::bvs(self, operand),

            // Control flow
            Operation::Jmp => control::jmp(self, operand),
            Operation::Jsr => control::jsr(self, operand),
            Operation::Rts => control::rts(self, operand),
            Operation::Rti => control::rti(self, operand),
            Operation::Brk => control::brk(self, operand),
            Operation::Nop => control::nop(self, operand),

            // Stack
            Operation::Pha => stack::pha(self, operand),
            Operation::Php => stack::php(self, operand),
            Operation::Pla => stack::pla(self, operand),
            Operation::Plp => stack::plp(self, operand),

            // Flag manipulation
            Operation::Clc => flags::clc(self, operand),
            Operation::Sec => flags::sec(self, operand),
            Operation::Cli => flags::cli(self, operand),
            Operation::Sei => flags::sei(self, operand),
            Operation::Cld => flags::cld(self, operand),
            Operation::Sed => flags::sed(self, operand),
            Operation::Clv => flags::clv(self, operand),

            // Transfers
            Operation::Tax => transfer::tax(self, operand),
            Operation::Tay => transfer::tay(self, operand),
            Operation::Tsx => transfer::tsx(self, operand),
            Operation::Txa => transfer::txa(self, operand),
            Operation::Txs => transfer::txs(self, operand),
            Operation::Tya => transfer::tya(self, operand),
        }
    }

    // ========== Fetch Helpers ==========

    /// Reads the byte at PC and advances PC (wrapping modulo 2^16).
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Fetches a little-endian 16-bit value from the instruction stream.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian 16-bit value from the zero page, with both
    /// bytes wrapping within the page. `($FF)` reads 0x00FF then 0x0000.
    pub(crate) fn read_word_zero_page(&self, zp: u8) -> u16 {
        let lo = self.memory.read(zp as u16) as u16;
        let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    // ========== Stack Helpers ==========

    /// Pushes a byte: stores at `0x0100 + SP`, then decrements SP (wrapping
    /// within the page).
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE + self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pushes a 16-bit value, high byte first.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push((value >> 8) as u8);
        self.push((value & 0xFF) as u8);
    }

    /// Pops a byte: increments SP (wrapping within the page), then reads
    /// from `0x0100 + SP`.
    pub(crate) fn pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE + self.sp as u16)
    }

    /// Pops a 16-bit value: low byte first, then high.
    pub(crate) fn pop_word(&mut self) -> u16 {
        let lo = self.pop() as u16;
        let hi = self.pop() as u16;
        (hi << 8) | lo
    }

    /// Pops the status byte, forcing UNUSED to 1 and BREAK to 0 in the
    /// restored value. Shared by PLP and RTI.
    pub(crate) fn pop_status(&mut self) {
        let value = self.pop();
        self.p
            .set_bits((value | Status::UNUSED) & !Status::BREAK);
    }
}

impl Default for CPU<FlatMemory> {
    /// A CPU over a fresh zero-filled [`FlatMemory`].
    fn default() -> Self {
        Self::new(FlatMemory::new())
    }
}
