//! Tests for the ASL, LSR, ROL, and ROR instructions.
//!
//! Each is exercised in accumulator form and through memory, since the
//! result is written back through the operand handle in both cases.

use nmos6502::{FlatMemory, MemoryBus, Status, CPU};

fn cpu_with_program(program: &[u8]) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.load_program(program).unwrap();
    cpu
}

// ========== ASL ==========

#[test]
fn test_asl_accumulator() {
    let mut cpu = cpu_with_program(&[0x0A]); // ASL A
    cpu.a = 0x41;

    cpu.step();

    assert_eq!(cpu.a, 0x82);
    assert!(!cpu.p.contains(Status::CARRY));
    assert!(cpu.p.contains(Status::NEGATIVE));
}

#[test]
fn test_asl_shifts_bit7_into_carry() {
    let mut cpu = cpu_with_program(&[0x0A]); // ASL A
    cpu.a = 0x80;

    cpu.step();

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.p.contains(Status::CARRY));
    assert!(cpu.p.contains(Status::ZERO));
}

#[test]
fn test_asl_memory_write_back() {
    let mut cpu = cpu_with_program(&[0x06, 0x42]); // ASL $42
    cpu.memory.write(0x0042, 0x40);

    cpu.step();

    assert_eq!(cpu.memory.read(0x0042), 0x80);
    assert!(cpu.p.contains(Status::NEGATIVE));
    assert_eq!(cpu.a, 0x00, "memory form leaves A alone");
}

// ========== LSR ==========

#[test]
fn test_lsr_accumulator() {
    let mut cpu = cpu_with_program(&[0x4A]); // LSR A
    cpu.a = 0x03;

    cpu.step();

    assert_eq!(cpu.a, 0x01);
    assert!(cpu.p.contains(Status::CARRY), "bit 0 shifted out");
    assert!(!cpu.p.contains(Status::NEGATIVE), "LSR can never set N");
}

#[test]
fn test_lsr_to_zero() {
    let mut cpu = cpu_with_program(&[0x4A]); // LSR A
    cpu.a = 0x01;

    cpu.step();

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.p.contains(Status::ZERO));
    assert!(cpu.p.contains(Status::CARRY));
}

#[test]
fn test_lsr_absolute() {
    let mut cpu = cpu_with_program(&[0x4E, 0x00, 0x20]); // LSR $2000
    cpu.memory.write(0x2000, 0xFE);

    cpu.step();

    assert_eq!(cpu.memory.read(0x2000), 0x7F);
    assert!(!cpu.p.contains(Status::CARRY));
}

// ========== ROL ==========

#[test]
fn test_rol_pulls_in_carry() {
    let mut cpu = cpu_with_program(&[0x2A]); // ROL A
    cpu.a = 0x40;
    cpu.p.set(Status::CARRY, true);

    cpu.step();

    assert_eq!(cpu.a, 0x81, "old carry becomes bit 0");
    assert!(!cpu.p.contains(Status::CARRY), "old bit 7 was clear");
    assert!(cpu.p.contains(Status::NEGATIVE));
}

#[test]
fn test_rol_pushes_out_bit7() {
    let mut cpu = cpu_with_program(&[0x2A]); // ROL A
    cpu.a = 0x80;

    cpu.step();

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.p.contains(Status::CARRY));
    assert!(cpu.p.contains(Status::ZERO));
}

#[test]
fn test_rol_zero_page() {
    let mut cpu = cpu_with_program(&[0x26, 0x10]); // ROL $10
    cpu.memory.write(0x0010, 0x55);
    cpu.p.set(Status::CARRY, true);

    cpu.step();

    assert_eq!(cpu.memory.read(0x0010), 0xAB);
}

// ========== ROR ==========

#[test]
fn test_ror_pulls_carry_into_bit7() {
    let mut cpu = cpu_with_program(&[0x6A]); // ROR A
    cpu.a = 0x02;
    cpu.p.set(Status::CARRY, true);

    cpu.step();

    assert_eq!(cpu.a, 0x81);
    assert!(!cpu.p.contains(Status::CARRY), "old bit 0 was clear");
    assert!(cpu.p.contains(Status::NEGATIVE));
}

#[test]
fn test_ror_pushes_out_bit0() {
    let mut cpu = cpu_with_program(&[0x6A]); // ROR A
    cpu.a = 0x01;

    cpu.step();

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.p.contains(Status::CARRY));
    assert!(cpu.p.contains(Status::ZERO));
}

#[test]
fn test_rol_ror_roundtrip() {
    // With the same carry in and out, ROL then ROR restores the value
    let mut cpu = cpu_with_program(&[0x2A, 0x6A]); // ROL A; ROR A
    cpu.a = 0x5A;

    cpu.step();
    cpu.step();

    assert_eq!(cpu.a, 0x5A);
}
