//! # Increment and Decrement Instructions
//!
//! INC/DEC read-modify-write memory through the operand handle; the register
//! variants touch X and Y directly. All wrap modulo 256 and set Z and N.

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::operand::Operand;

/// INC: memory := memory + 1. Sets Z, N.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.read_operand(operand).wrapping_add(1);
    cpu.p.update_zero_negative(result);
    cpu.write_operand(operand, result);
}

/// DEC: memory := memory - 1. Sets Z, N.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    let result = cpu.read_operand(operand).wrapping_sub(1);
    cpu.p.update_zero_negative(result);
    cpu.write_operand(operand, result);
}

/// INX: X := X + 1. Sets Z, N.
pub(crate) fn inx<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.p.update_zero_negative(cpu.x);
}

/// INY: Y := Y + 1. Sets Z, N.
pub(crate) fn iny<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.p.update_zero_negative(cpu.y);
}

/// DEX: X := X - 1. Sets Z, N.
pub(crate) fn dex<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.p.update_zero_negative(cpu.x);
}

/// DEY: Y := Y - 1. Sets Z, N.
pub(crate) fn dey<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.p.update_zero_negative(cpu.y);
}
