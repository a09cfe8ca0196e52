//! # WebAssembly Bindings
//!
//! A thin `wasm-bindgen` wrapper around `CPU<FlatMemory>` so the interpreter
//! can drive browser front-ends. Enabled with the `wasm` feature; the core
//! crate has no OS dependencies and runs deterministically, so nothing else
//! is needed for wasm32 targets.

use wasm_bindgen::prelude::*;

use crate::cpu::CPU;
use crate::disassembler;
use crate::memory::{FlatMemory, MemoryBus};

/// A 6502 machine with flat 64 KiB RAM, exported to JavaScript.
#[wasm_bindgen]
pub struct Machine {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Machine {
    /// Creates a machine in power-on state.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Machine {
        Machine {
            cpu: CPU::new(FlatMemory::new()),
        }
    }

    /// Resets registers, flags, and memory to the power-on state.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Loads a program at the default start address (0x0600).
    ///
    /// Returns an error string when the image does not fit.
    #[wasm_bindgen(js_name = loadProgram)]
    pub fn load_program(&mut self, program: &[u8]) -> Result<(), JsError> {
        self.cpu.load_program(program).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Loads a program at `offset`.
    #[wasm_bindgen(js_name = loadProgramAt)]
    pub fn load_program_at(&mut self, program: &[u8], offset: u16) -> Result<(), JsError> {
        self.cpu
            .load_program_at(program, offset)
            .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Executes one instruction; returns false on halt.
    pub fn step(&mut self) -> bool {
        self.cpu.step()
    }

    /// Executes up to `limit` instructions, stopping early on halt.
    /// Returns the number actually executed.
    pub fn run(&mut self, limit: u32) -> u32 {
        for executed in 0..limit {
            if !self.cpu.step() {
                return executed;
            }
        }
        limit
    }

    /// Disassembles `count` instructions starting at `address`.
    pub fn disassemble(&self, address: u16, count: usize) -> String {
        let mut bytes = Vec::with_capacity(count * 3);
        for i in 0..count * 3 {
            bytes.push(self.cpu.memory.read(address.wrapping_add(i as u16)));
        }

        disassembler::disassemble(&bytes, address)
            .iter()
            .take(count)
            .map(|instr| format!("{:04X}  {}", instr.address, instr))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Reads one byte of memory.
    #[wasm_bindgen(js_name = readMemory)]
    pub fn read_memory(&self, addr: u16) -> u8 {
        self.cpu.memory.read(addr)
    }

    /// Writes one byte of memory.
    #[wasm_bindgen(js_name = writeMemory)]
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory.write(addr, value);
    }

    // Register accessors, named for the silkscreen.

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc
    }

    /// The packed status byte (NV-BDIZC).
    #[wasm_bindgen(getter)]
    pub fn p(&self) -> u8 {
        self.cpu.p.bits()
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new()
    }
}
