//! Disassembles a binary image from the command line, or a built-in sample
//! when no file is given.
//!
//! ```text
//! cargo run --example disassemble [image.bin] [load-address]
//! ```

use std::env;
use std::fs;
use std::process::ExitCode;

use nmos6502::disassembler::disassemble;

fn main() -> ExitCode {
    let mut args = env::args().skip(1);

    let bytes = match args.next() {
        Some(path) => match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("cannot read {}: {}", path, e);
                return ExitCode::FAILURE;
            }
        },
        // LDA #$C0; TAX; INX; ADC #$C4; BRK
        None => vec![0xA9, 0xC0, 0xAA, 0xE8, 0x69, 0xC4, 0x00],
    };

    let start_address = match args.next() {
        Some(s) => match u16::from_str_radix(s.trim_start_matches("0x"), 16) {
            Ok(addr) => addr,
            Err(_) => {
                eprintln!("invalid load address: {}", s);
                return ExitCode::FAILURE;
            }
        },
        None => 0x0600,
    };

    for instruction in disassemble(&bytes, start_address) {
        let raw: Vec<String> = std::iter::once(instruction.opcode)
            .chain(instruction.operands.iter().copied())
            .map(|b| format!("{:02X}", b))
            .collect();

        println!(
            "{:04X}  {:<9} {}",
            instruction.address,
            raw.join(" "),
            instruction
        );
    }

    ExitCode::SUCCESS
}
