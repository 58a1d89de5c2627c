//! Pipeline Latch Interface.
//!
//! Defines the common behavior of the latches that connect adjacent
//! pipeline stages, allowing generic handling of flushes and emptiness
//! checks.

/// Represents a pipeline latch (inter-stage buffer).
///
/// Latches hold the state of an instruction as it moves between stages.
/// They must support flushing (clearing contents when a taken branch
/// squashes younger instructions) and checking for emptiness.
pub trait PipelineLatch {
    /// Clears the latch, turning it into a bubble.
    fn flush(&mut self);

    /// Checks whether the latch holds no instruction.
    fn is_empty(&self) -> bool;
}
