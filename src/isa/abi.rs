//! MIPS ABI register numbering.
//!
//! Conventional register numbers and names for the 32 general-purpose
//! registers. Register `$zero` is hardwired to zero by the register file.

pub const REG_ZERO: usize = 0;
pub const REG_AT: usize = 1;
pub const REG_V0: usize = 2;
pub const REG_V1: usize = 3;
pub const REG_A0: usize = 4;
pub const REG_A1: usize = 5;
pub const REG_A2: usize = 6;
pub const REG_A3: usize = 7;
pub const REG_T0: usize = 8;
pub const REG_T1: usize = 9;
pub const REG_T2: usize = 10;
pub const REG_T3: usize = 11;
pub const REG_T4: usize = 12;
pub const REG_T5: usize = 13;
pub const REG_T6: usize = 14;
pub const REG_T7: usize = 15;
pub const REG_S0: usize = 16;
pub const REG_S1: usize = 17;
pub const REG_S2: usize = 18;
pub const REG_S3: usize = 19;
pub const REG_S4: usize = 20;
pub const REG_S5: usize = 21;
pub const REG_S6: usize = 22;
pub const REG_S7: usize = 23;
pub const REG_T8: usize = 24;
pub const REG_T9: usize = 25;
pub const REG_K0: usize = 26;
pub const REG_K1: usize = 27;
pub const REG_GP: usize = 28;
pub const REG_SP: usize = 29;
pub const REG_FP: usize = 30;
pub const REG_RA: usize = 31;

/// Conventional register names indexed by register number.
pub const NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3",
    "t4", "t5", "t6", "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7",
    "t8", "t9", "k0", "k1", "gp", "sp", "fp", "ra",
];
