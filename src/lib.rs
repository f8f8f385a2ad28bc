//! # package-json-merge
//!
//! Merges several `package.json` manifests into a single target manifest.
//!
//! Sources are merged in precedence order: on any scalar conflict the
//! earliest manifest wins. Dictionaries are merged recursively, arrays become
//! their order-preserving union, and the `dependencies`, `devDependencies`
//! and `peerDependencies` maps get a dedicated merge.
//!
//! ## Modules
//!
//! - [`value`] - In-memory JSON values and field classification
//! - [`merge`] - The merge engine: dictionary, dependency and per-field merges
//! - [`manifest`] - Loading and writing manifest files around a merge run

pub mod manifest;
pub mod merge;
pub mod value;

pub use manifest::{MergeCommand, MergeError};
pub use merge::{
    merge_dependencies, merge_dictionaries, merge_manifests, FieldAction, MergeOptions,
    MergeOutcome, MergeReport, Merger,
};
pub use value::{FieldKind, Map, Value};
