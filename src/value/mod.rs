//! Value module - In-memory representation of JSON manifests.
//!
//! This module provides the value model and the field classification the
//! merge rules dispatch on.

mod kind;
mod value;

pub use kind::*;
pub use value::*;
