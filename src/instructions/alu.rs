//! # Arithmetic, Logic, and Compare Instructions
//!
//! ADC and SBC share one adder: SBC is ADC of the operand's bitwise
//! complement. Decimal mode is not implemented: the D flag is settable but
//! arithmetic stays binary, matching the 2A03.

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::operand::Operand;
use crate::status::Status;

/// The shared ADC/SBC core: A := A + value + C.
///
/// Sets C on unsigned overflow (the 16-bit sum exceeds 0xFF), V when both
/// inputs share a sign that differs from the result's sign, and Z/N from the
/// result.
fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let carry_in = if cpu.p.contains(Status::CARRY) { 1 } else { 0 };
    let sum = cpu.a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.p.set(Status::CARRY, sum > 0xFF);
    cpu.p.set(
        Status::OVERFLOW,
        (cpu.a ^ result) & (value ^ result) & 0x80 != 0,
    );
    cpu.p.update_zero_negative(result);

    cpu.a = result;
}

/// Compares `register` against `value` without storing the difference.
///
/// Z iff equal, C iff `register >= value` (unsigned), N from bit 7 of the
/// wrapped difference.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    let result = register.wrapping_sub(value);

    cpu.p.set(Status::ZERO, register == value);
    cpu.p.set(Status::CARRY, register >= value);
    cpu.p.set(Status::NEGATIVE, result & 0x80 != 0);
}

/// ADC: add operand and carry to the accumulator. Sets C, V, Z, N.
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    add_with_carry(cpu, value);
}

/// SBC: subtract operand and borrow from the accumulator. Sets C, V, Z, N.
///
/// Defined as ADC of the complement: A + !M + C.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    add_with_carry(cpu, !value);
}

/// AND: A := A & operand. Sets Z, N.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a &= cpu.read_operand(operand);
    cpu.p.update_zero_negative(cpu.a);
}

/// ORA: A := A | operand. Sets Z, N.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a |= cpu.read_operand(operand);
    cpu.p.update_zero_negative(cpu.a);
}

/// EOR: A := A ^ operand. Sets Z, N.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a ^= cpu.read_operand(operand);
    cpu.p.update_zero_negative(cpu.a);
}

/// CMP: compare A with the operand.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    compare(cpu, cpu.a, value);
}

/// CPX: compare X with the operand.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    compare(cpu, cpu.x, value);
}

/// CPY: compare Y with the operand.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);
    compare(cpu, cpu.y, value);
}

/// BIT: Z from A & operand, N from operand bit 7, V from operand bit 6.
///
/// The accumulator is not modified.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let value = cpu.read_operand(operand);

    cpu.p.set(Status::ZERO, cpu.a & value == 0);
    cpu.p.set(Status::NEGATIVE, value & 0x80 != 0);
    cpu.p.set(Status::OVERFLOW, value & 0x40 != 0);
}
