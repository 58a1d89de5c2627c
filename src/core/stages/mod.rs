//! Pipeline stage bodies.
//!
//! One module per stage. Each body is run against the current latch state
//! and produces the candidate contents of the downstream latch; nothing is
//! committed until every body has run.

pub mod decode;
pub mod execute;
pub mod fetch;
pub mod memory_access;
pub mod write_back;
