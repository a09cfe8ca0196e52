//! Fuzz target for the disassembler.
//!
//! Arbitrary byte soup must never panic the decoder, and the listing has to
//! account for every byte up to the first truncated instruction.

#![no_main]

use libfuzzer_sys::fuzz_target;
use nmos6502::disassembler::disassemble;

fuzz_target!(|data: &[u8]| {
    let listing = disassemble(data, 0x0600);

    let mut offset = 0usize;
    for instruction in &listing {
        assert_eq!(
            instruction.address,
            0x0600u16.wrapping_add(offset as u16),
            "listing addresses must be contiguous"
        );
        offset += instruction.size() as usize;

        // Rendering must not panic either
        let _ = instruction.to_string();
    }

    assert!(offset <= data.len(), "listing cannot overrun the input");
});
