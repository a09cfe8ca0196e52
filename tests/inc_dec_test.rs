//! Tests for INC, DEC, INX, INY, DEX, and DEY.
//!
//! All six wrap modulo 256 and set Z and N from the result.

use nmos6502::{FlatMemory, MemoryBus, Status, CPU};

fn cpu_with_program(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load_program(program).unwrap();
    cpu
}

#[test]
fn test_inc_zero_page() {
    let mut cpu = cpu_with_program(&[0xE6, 0x42]); // INC $42
    cpu.memory.write(0x0042, 0x41);

    cpu.step();

    assert_eq!(cpu.memory.read(0x0042), 0x42);
    assert!(!cpu.p.contains(Status::ZERO));
    assert!(!cpu.p.contains(Status::NEGATIVE));
}

#[test]
fn test_inc_wraps_to_zero() {
    let mut cpu = cpu_with_program(&[0xE6, 0x42]); // INC $42
    cpu.memory.write(0x0042, 0xFF);

    cpu.step();

    assert_eq!(cpu.memory.read(0x0042), 0x00);
    assert!(cpu.p.contains(Status::ZERO));
}

#[test]
fn test_inc_absolute_x() {
    let mut cpu = cpu_with_program(&[0xFE, 0x00, 0x20]); // INC $2000,X
    cpu.x = 0x05;
    cpu.memory.write(0x2005, 0x7F);

    cpu.step();

    assert_eq!(cpu.memory.read(0x2005), 0x80);
    assert!(cpu.p.contains(Status::NEGATIVE));
}

#[test]
fn test_dec_zero_page() {
    let mut cpu = cpu_with_program(&[0xC6, 0x42]); // DEC $42
    cpu.memory.write(0x0042, 0x01);

    cpu.step();

    assert_eq!(cpu.memory.read(0x0042), 0x00);
    assert!(cpu.p.contains(Status::ZERO));
}

#[test]
fn test_dec_wraps_below_zero() {
    let mut cpu = cpu_with_program(&[0xC6, 0x42]); // DEC $42

    cpu.step();

    assert_eq!(cpu.memory.read(0x0042), 0xFF);
    assert!(cpu.p.contains(Status::NEGATIVE));
}

#[test]
fn test_inx_increments() {
    let mut cpu = cpu_with_program(&[0xE8]); // INX
    cpu.x = 0x41;

    cpu.step();

    assert_eq!(cpu.x, 0x42, "INX adds one");
}

#[test]
fn test_inx_wraps() {
    let mut cpu = cpu_with_program(&[0xE8]); // INX
    cpu.x = 0xFF;

    cpu.step();

    assert_eq!(cpu.x, 0x00);
    assert!(cpu.p.contains(Status::ZERO));
}

#[test]
fn test_iny_increments() {
    let mut cpu = cpu_with_program(&[0xC8]); // INY
    cpu.y = 0x7F;

    cpu.step();

    assert_eq!(cpu.y, 0x80);
    assert!(cpu.p.contains(Status::NEGATIVE));
}

#[test]
fn test_dex_decrements() {
    let mut cpu = cpu_with_program(&[0xCA]); // DEX
    cpu.x = 0x01;

    cpu.step();

    assert_eq!(cpu.x, 0x00);
    assert!(cpu.p.contains(Status::ZERO));
}

#[test]
fn test_dex_wraps() {
    let mut cpu = cpu_with_program(&[0xCA]); // DEX

    cpu.step();

    assert_eq!(cpu.x, 0xFF);
    assert!(cpu.p.contains(Status::NEGATIVE));
}

#[test]
fn test_dey_decrements() {
    let mut cpu = cpu_with_program(&[0x88]); // DEY
    cpu.y = 0x80;

    cpu.step();

    assert_eq!(cpu.y, 0x7F);
    assert!(!cpu.p.contains(Status::NEGATIVE));
    assert!(!cpu.p.contains(Status::ZERO));
}
