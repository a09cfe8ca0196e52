//! # Load and Store Instructions
//!
//! Loads set Z and N from the loaded value; stores affect no flags.

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::operand::Operand;

/// LDA: A := operand. Sets Z, N.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.a = cpu.read_operand(operand);
    cpu.p.update_zero_negative(cpu.a);
}

/// LDX: X := operand. Sets Z, N.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.x = cpu.read_operand(operand);
    cpu.p.update_zero_negative(cpu.x);
}

/// LDY: Y := operand. Sets Z, N.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.y = cpu.read_operand(operand);
    cpu.p.update_zero_negative(cpu.y);
}

/// STA: operand := A.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.write_operand(operand, cpu.a);
}

/// STX: operand := X.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.write_operand(operand, cpu.x);
}

/// STY: operand := Y.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU<M>, operand: Operand) {
    cpu.write_operand(operand, cpu.y);
}
