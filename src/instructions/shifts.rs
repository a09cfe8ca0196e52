//! # Shift and Rotate Instructions
//!
//! All four operate through the operand handle, so the accumulator and
//! memory forms share one implementation each. The shifted-out bit always
//! lands in carry; rotates feed the old carry into the vacated bit.

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::operand::Operand;
use crate::status::Status;

/// ASL: C := bit 7; result := operand << 1. Sets Z, N.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = value << 1;

    cpu.p.set(Status::CARRY, value & 0x80 != 0);
    cpu.p.update_zero_negative(result);
    cpu.write_operand(operand, result);
}

/// LSR: C := bit 0; result := operand >> 1 (logical). Sets Z; N is always
/// cleared since bit 7 of the result is 0.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let result = value >> 1;

    cpu.p.set(Status::CARRY, value & 0x01 != 0);
    cpu.p.update_zero_negative(result);
    cpu.write_operand(operand, result);
}

/// ROL: rotate left through carry. C := bit 7; bit 0 := old C. Sets Z, N.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let carry_in = if cpu.p.contains(Status::CARRY) { 1 } else { 0 };
    let result = (value << 1) | carry_in;

    cpu.p.set(Status::CARRY, value & 0x80 != 0);
    cpu.p.update_zero_negative(result);
    cpu.write_operand(operand, result);
}

/// ROR: rotate right through carry. C := bit 0; bit 7 := old C. Sets Z, N.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    let carry_in = if cpu.p.contains(Status::CARRY) { 0x80 } else { 0 };
    let result = (value >> 1) | carry_in;

    cpu.p.set(Status::CARRY, value & 0x01 != 0);
    cpu.p.update_zero_negative(result);
    cpu.write_operand(operand, result);
}
