//! Architectural state: register file and memories.

/// General-purpose register file.
pub mod gpr;

/// Word-addressed instruction and data memories.
pub mod mem;

pub use gpr::RegisterFile;
pub use mem::{DataMemory, InstructionMemory};
