//! Processor core.
//!
//! The core is organized the way the hardware is: architectural state
//! (`arch`), the control decoder (`control`), the inter-stage plumbing
//! (`pipeline`), the five stage bodies (`stages`), the execution units
//! (`units`), and the driver that clocks them (`cpu`).

/// Architectural state: register file and memories.
pub mod arch;

/// Control-signal decoding.
pub mod control;

/// Pipeline driver.
pub mod cpu;

/// Pipeline latches, hazards, and forwarding.
pub mod pipeline;

/// Pipeline stage bodies.
pub mod stages;

/// Execution units.
pub mod units;

pub use cpu::Processor;
