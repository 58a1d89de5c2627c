//! Unit tests for ALU operations.

use mips_emulator::core::units::alu::{Alu, AluControl};

/// Tests addition.
#[test]
fn test_alu_add() {
    assert_eq!(Alu::execute(AluControl::Add, 10, 20), (30, false));
    assert_eq!(Alu::execute(AluControl::Add, -10, 10), (0, true));
    assert_eq!(Alu::execute(AluControl::Add, 100, 200), (300, false));
}

/// Tests that addition wraps modulo 2^32.
#[test]
fn test_alu_add_wraps() {
    assert_eq!(Alu::execute(AluControl::Add, i32::MAX, 1).0, i32::MIN);
    assert_eq!(Alu::execute(AluControl::Add, i32::MIN, -1).0, i32::MAX);
}

/// Tests subtraction.
#[test]
fn test_alu_sub() {
    assert_eq!(Alu::execute(AluControl::Sub, 30, 10), (20, false));
    assert_eq!(Alu::execute(AluControl::Sub, 5, 5), (0, true));
    assert_eq!(Alu::execute(AluControl::Sub, 0, 1).0, -1);
}

/// Tests that subtraction wraps modulo 2^32.
#[test]
fn test_alu_sub_wraps() {
    assert_eq!(Alu::execute(AluControl::Sub, i32::MIN, 1).0, i32::MAX);
}

/// Tests bitwise AND and OR.
#[test]
fn test_alu_logical() {
    assert_eq!(Alu::execute(AluControl::And, 0x1234, 0x5678).0, 0x1230);
    assert_eq!(Alu::execute(AluControl::Or, 0x1234, 0x5678).0, 0x567C);
    assert_eq!(Alu::execute(AluControl::And, 0x0F0F, 0xF0F0), (0, true));
}

/// Tests bitwise NOR.
#[test]
fn test_alu_nor() {
    assert_eq!(Alu::execute(AluControl::Nor, 0, 0).0, -1);
    assert_eq!(Alu::execute(AluControl::Nor, -1, 0), (0, true));
    assert_eq!(Alu::execute(AluControl::Nor, 0x0000_00FF, 0x0000_FF00).0, !0x0000_FFFF);
}

/// Tests signed set-less-than.
#[test]
fn test_alu_slt() {
    assert_eq!(Alu::execute(AluControl::Slt, 10, 20).0, 1);
    assert_eq!(Alu::execute(AluControl::Slt, 20, 10).0, 0);
    assert_eq!(Alu::execute(AluControl::Slt, -1, 0).0, 1);
    assert_eq!(Alu::execute(AluControl::Slt, 0, -1).0, 0);
    assert_eq!(Alu::execute(AluControl::Slt, i32::MIN, i32::MAX).0, 1);
}

/// Tests the zero flag.
#[test]
fn test_alu_zero_flag() {
    assert!(Alu::execute(AluControl::Sub, 7, 7).1);
    assert!(!Alu::execute(AluControl::Sub, 7, 6).1);
    assert!(Alu::execute(AluControl::And, 0, -1).1);
}

/// Tests that `(a ADD b) SUB b == a` for all operand extremes.
#[test]
fn test_alu_add_sub_round_trip() {
    let samples = [0, 1, -1, 42, -42, 123_456_789, i32::MAX, i32::MIN];
    for &a in &samples {
        for &b in &samples {
            let (sum, _) = Alu::execute(AluControl::Add, a, b);
            let (back, _) = Alu::execute(AluControl::Sub, sum, b);
            assert_eq!(back, a, "({} + {}) - {} should round-trip", a, b, b);
        }
    }
}
