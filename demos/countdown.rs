//! Runs a small countdown loop and prints the machine state after each
//! instruction, trace-style.
//!
//! ```text
//! cargo run --example countdown
//! ```

use nmos6502::disassembler::decode_instruction;
use nmos6502::{FlatMemory, MemoryBus, CPU};

fn main() {
    let mut cpu = CPU::new(FlatMemory::new());

    // LDX #$05
    // loop: DEX
    //       BNE loop
    //       BRK
    let program = [0xA2, 0x05, 0xCA, 0xD0, 0xFD, 0x00];
    cpu.load_program(&program).expect("program fits in memory");

    loop {
        // Stop once we reach the BRK terminator
        if cpu.memory.read(cpu.pc) == 0x00 {
            break;
        }

        let window = [
            cpu.memory.read(cpu.pc),
            cpu.memory.read(cpu.pc.wrapping_add(1)),
            cpu.memory.read(cpu.pc.wrapping_add(2)),
        ];
        let listing = decode_instruction(&window, cpu.pc)
            .map(|i| i.to_string())
            .unwrap_or_default();

        print!("{:04X}  {:<12}", cpu.pc, listing);

        if !cpu.step() {
            println!("halted on undocumented opcode");
            break;
        }

        println!(
            "A:{:02X} X:{:02X} Y:{:02X} SP:{:02X} P:{}",
            cpu.a, cpu.x, cpu.y, cpu.sp, cpu.p
        );
    }

    println!("done: X = {:#04X}", cpu.x);
}
