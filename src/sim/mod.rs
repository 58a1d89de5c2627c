//! Simulation harness utilities.

/// Program-image loaders for the command-line front end.
pub mod loader;
