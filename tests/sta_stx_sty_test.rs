//! Tests for the STA, STX, and STY (Store Register) instructions.
//!
//! Stores write through the operand handle and never touch flags.

use nmos6502::{FlatMemory, MemoryBus, CPU};

fn cpu_with_program(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load_program(program).unwrap();
    cpu
}

#[test]
fn test_sta_zero_page() {
    let mut cpu = cpu_with_program(&[0x85, 0x42]); // STA $42
    cpu.a = 0x77;

    cpu.step();

    assert_eq!(cpu.memory.read(0x0042), 0x77);
}

#[test]
fn test_sta_does_not_touch_flags() {
    let mut cpu = cpu_with_program(&[0x85, 0x42]); // STA $42
    cpu.a = 0x00; // would set Z if this were a load
    let before = cpu.p.bits();

    cpu.step();

    assert_eq!(cpu.p.bits(), before, "stores affect no flags");
}

#[test]
fn test_sta_absolute() {
    let mut cpu = cpu_with_program(&[0x8D, 0x34, 0x12]); // STA $1234
    cpu.a = 0xAB;

    cpu.step();

    assert_eq!(cpu.memory.read(0x1234), 0xAB);
    assert_eq!(cpu.pc, 0x0603);
}

#[test]
fn test_sta_absolute_x() {
    let mut cpu = cpu_with_program(&[0x9D, 0x00, 0x20]); // STA $2000,X
    cpu.a = 0x5C;
    cpu.x = 0x0F;

    cpu.step();

    assert_eq!(cpu.memory.read(0x200F), 0x5C);
}

#[test]
fn test_sta_indirect_y() {
    let mut cpu = cpu_with_program(&[0x91, 0x40]); // STA ($40),Y
    cpu.a = 0x3E;
    cpu.y = 0x02;
    cpu.memory.write(0x0040, 0x00);
    cpu.memory.write(0x0041, 0x30);

    cpu.step();

    assert_eq!(cpu.memory.read(0x3002), 0x3E);
}

#[test]
fn test_stx_zero_page_y() {
    let mut cpu = cpu_with_program(&[0x96, 0x10]); // STX $10,Y
    cpu.x = 0x88;
    cpu.y = 0x05;

    cpu.step();

    assert_eq!(cpu.memory.read(0x0015), 0x88);
}

#[test]
fn test_sty_zero_page_x_wraps() {
    let mut cpu = cpu_with_program(&[0x94, 0xFE]); // STY $FE,X
    cpu.y = 0x21;
    cpu.x = 0x03; // 0xFE + 0x03 wraps to 0x01

    cpu.step();

    assert_eq!(cpu.memory.read(0x0001), 0x21);
    assert_eq!(cpu.memory.read(0x0101), 0x00, "no write past the zero page");
}

#[test]
fn test_store_load_roundtrip() {
    // LDA #$5A; STA $20; LDA #$00; LDA $20
    let mut cpu = cpu_with_program(&[0xA9, 0x5A, 0x85, 0x20, 0xA9, 0x00, 0xA5, 0x20]);

    for _ in 0..4 {
        cpu.step();
    }

    assert_eq!(cpu.a, 0x5A);
}
