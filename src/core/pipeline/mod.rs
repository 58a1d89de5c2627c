//! Instruction pipeline plumbing.
//!
//! This module contains the pipeline latches that connect the five stages,
//! the hazard detection and forwarding logic, and the latch trait shared
//! by all four inter-stage registers.

/// Pipeline hazard detection and forwarding logic.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Traits for pipeline latch components.
pub mod traits;

pub use latches::{ExMem, ExMemEntry, IdEx, IdExEntry, IfId, IfIdEntry, MemWb, MemWbEntry};
pub use traits::PipelineLatch;
