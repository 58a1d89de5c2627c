//! Instruction Set Architecture definitions.
//!
//! This module groups everything that describes the MIPS integer subset
//! independently of the pipeline: opcode and funct constants, the ABI
//! register numbering, instruction field extraction, and the assembler
//! helpers that build bit-exact instruction words.

/// ABI register numbering and conventional names.
pub mod abi;

/// Instruction field extraction and immediate sign extension.
pub mod decode;

/// Assembler helpers producing bit-exact instruction words.
pub mod encode;

/// Opcode and funct constants for the supported subset.
pub mod opcodes;
