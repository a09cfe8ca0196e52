//! # Register Transfer Instructions
//!
//! Copies between registers. Every transfer sets Z and N from the copied
//! value except TXS, which moves X into the stack pointer untouched.

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::operand::Operand;

/// TAX: X := A. Sets Z, N.
pub(crate) fn tax<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.x = cpu.a;
    cpu.p.update_zero_negative(cpu.x);
}

/// TAY: Y := A. Sets Z, N.
pub(crate) fn tay<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.y = cpu.a;
    cpu.p.update_zero_negative(cpu.y);
}

/// TSX: X := SP. Sets Z, N.
pub(crate) fn tsx<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.x = cpu.sp;
    cpu.p.update_zero_negative(cpu.x);
}

/// TXA: A := X. Sets Z, N.
pub(crate) fn txa<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.a = cpu.x;
    cpu.p.update_zero_negative(cpu.a);
}

/// TXS: SP := X. No flags.
pub(crate) fn txs<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.sp = cpu.x;
}

/// TYA: A := Y. Sets Z, N.
pub(crate) fn tya<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.a = cpu.y;
    cpu.p.update_zero_negative(cpu.a);
}
