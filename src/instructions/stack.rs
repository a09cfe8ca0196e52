//! # Stack Instructions
//!
//! The pushed copy of P always has BREAK set; the pulled copy always has
//! BREAK clear and UNUSED set. That asymmetry is the hardware's, not ours.

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::operand::Operand;
use crate::status::Status;

/// PHA: push the accumulator.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.push(cpu.a);
}

/// PHP: push P with BREAK forced to 1 in the pushed copy.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.push(cpu.p.bits() | Status::BREAK);
}

/// PLA: pop into the accumulator. Sets Z, N.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.a = cpu.pop();
    cpu.p.update_zero_negative(cpu.a);
}

/// PLP: pop into P, forcing UNUSED to 1 and BREAK to 0.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU<M>, _operand: Operand) {
    cpu.pop_status();
}
