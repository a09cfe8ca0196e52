//! Fuzz target for CPU stepping.
//!
//! Builds an arbitrary machine state and instruction stream, runs a bounded
//! number of steps, and checks the structural invariants that must hold for
//! every reachable state: no panics, UNUSED always set, and SP staying a
//! plain byte offset into the stack page.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use nmos6502::{FlatMemory, MemoryBus, Status, CPU};

/// Arbitrary starting state for one fuzz run.
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    /// Register file
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Raw status byte (UNUSED will be forced on by the CPU)
    p: u8,
    /// Instruction stream placed at the program start
    program: Vec<u8>,
    /// Zero page contents, indexed-indirect pointers included
    zero_page: [u8; 256],
    /// Stack page contents, so pulls see arbitrary data
    stack_page: [u8; 256],
}

fuzz_target!(|input: FuzzInput| {
    let mut cpu = CPU::new(FlatMemory::new());

    for (i, &byte) in input.zero_page.iter().enumerate() {
        cpu.memory.write(i as u16, byte);
    }
    for (i, &byte) in input.stack_page.iter().enumerate() {
        cpu.memory.write(0x0100 + i as u16, byte);
    }

    let program: Vec<u8> = input.program.into_iter().take(0x1000).collect();
    if cpu.load_program(&program).is_err() {
        return;
    }

    cpu.a = input.a;
    cpu.x = input.x;
    cpu.y = input.y;
    cpu.sp = input.sp;
    cpu.p.set_bits(input.p);

    // Bounded run; halting early on an undocumented opcode is fine
    for _ in 0..256 {
        if !cpu.step() {
            break;
        }

        assert!(
            cpu.p.contains(Status::UNUSED),
            "UNUSED flag must survive every instruction"
        );
    }
});
