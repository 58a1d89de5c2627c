//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage.
//! It operates on signed 32-bit two's-complement words; arithmetic wraps
//! modulo 2^32.

/// ALU operation codes.
///
/// The discriminants are the classic 4-bit MIPS ALU-control encodings
/// produced by the control unit's second-level decoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluControl {
    /// Bitwise AND.
    And = 0,
    /// Bitwise OR.
    Or = 1,
    /// Wrapping addition.
    #[default]
    Add = 2,
    /// Wrapping subtraction.
    Sub = 6,
    /// Set-less-than (signed): 1 if `a < b`, else 0.
    Slt = 7,
    /// Bitwise NOR.
    Nor = 12,
}

/// Arithmetic Logic Unit for integer operations.
///
/// Stateless; every operation is a pure function of its operands with
/// no failure paths.
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `ctrl` - The operation to perform
    /// * `a` - First operand
    /// * `b` - Second operand
    ///
    /// # Returns
    ///
    /// The 32-bit result and the zero flag (`result == 0`).
    pub fn execute(ctrl: AluControl, a: i32, b: i32) -> (i32, bool) {
        let result = match ctrl {
            AluControl::And => a & b,
            AluControl::Or => a | b,
            AluControl::Add => a.wrapping_add(b),
            AluControl::Sub => a.wrapping_sub(b),
            AluControl::Slt => (a < b) as i32,
            AluControl::Nor => !(a | b),
        };
        (result, result == 0)
    }
}
