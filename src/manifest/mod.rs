//! Manifest module - File I/O around the merge engine.
//!
//! Loads source and target manifests, runs the merge and writes the target
//! back once the result is complete.

mod command;
mod error;
mod loader;

pub use command::*;
pub use error::*;
pub use loader::*;
