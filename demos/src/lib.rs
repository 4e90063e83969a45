//! Shared plumbing for the demo binaries under `examples/`.

pub mod common;
