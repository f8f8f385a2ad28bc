//! Merge module - Precedence-ordered deep merge of manifests.
//!
//! Dependency maps, dictionaries and string lists are combined across all
//! sources; scalars resolve first-write-wins.

mod dependencies;
mod dictionary;
mod fields;
mod merger;
mod options;
mod report;


pub use dependencies::{is_dependency_field, merge_dependencies, DEPENDENCY_FIELDS};
pub use dictionary::{merge_dictionaries, union_lists};
pub use merger::*;
pub use options::*;
pub use report::*;
