//! # Status Flag Instructions
//!
//! Direct set/clear of individual status bits. All use implicit addressing.
//! SED is honoured even though decimal mode has no effect on arithmetic.

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::operand::Operand;
use crate::status::Status;

/// CLC: clear carry.
pub(crate) fn clc<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.p.set(Status::CARRY, false);
}

/// SEC: set carry.
pub(crate) fn sec<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.p.set(Status::CARRY, true);
}

/// CLI: clear interrupt disable.
pub(crate) fn cli<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.p.set(Status::INTERRUPT_DISABLE, false);
}

/// SEI: set interrupt disable.
pub(crate) fn sei<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.p.set(Status::INTERRUPT_DISABLE, true);
}

/// CLD: clear decimal mode.
pub(crate) fn cld<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.p.set(Status::DECIMAL, false);
}

/// SED: set decimal mode.
pub(crate) fn sed<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.p.set(Status::DECIMAL, true);
}

/// CLV: clear overflow. There is no SEV on the 6502.
pub(crate) fn clv<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.p.set(Status::OVERFLOW, false);
}
