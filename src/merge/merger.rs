//! Merger drives a complete merge of source manifests into a target.

use tracing::debug;

use super::dependencies::apply_dependencies;
use super::fields::FieldMerge;
use super::options::MergeOptions;
use super::report::{FieldAction, MergeReport};
use crate::value::{Map, Value};

/// Merged manifest together with what was done to produce it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub manifest: Map,
    pub report: MergeReport,
}

/// Merger merges an ordered list of source manifests into a target.
///
/// Sources earlier in the list take precedence over later ones. The merge is
/// pure: inputs are never modified and no I/O happens here.
#[derive(Debug, Clone, Default)]
pub struct Merger {
    options: MergeOptions,
}

impl Merger {
    /// Creates a new Merger.
    pub fn new(options: MergeOptions) -> Self {
        Merger { options }
    }

    /// Returns the options of this merger.
    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Merges `sources` into `target`.
    pub fn merge(&self, sources: &[Map], mut target: Map) -> MergeOutcome {
        let mut report = MergeReport::new();
        let excluded = &self.options.not_merge;

        if self.options.only_dependencies {
            debug!(sources = sources.len(), "merging dependency fields only");
            apply_dependencies(sources, &mut target, excluded, &mut report);
            return MergeOutcome {
                manifest: target,
                report,
            };
        }

        debug!(sources = sources.len(), "merging manifests");
        for (field, value) in self.options.overrides() {
            debug!(field, value, "overriding field");
            let created = !target.has(field);
            target.set(field, Value::from(value));
            report.record(field, FieldAction::Overridden, created);
        }

        apply_dependencies(sources, &mut target, excluded, &mut report);
        FieldMerge::new(sources, excluded).run(&mut target, &mut report);

        MergeOutcome {
            manifest: target,
            report,
        }
    }
}

/// Merges `sources` into `target` with the given options.
pub fn merge_manifests(sources: &[Map], target: Map, options: &MergeOptions) -> Map {
    Merger::new(options.clone()).merge(sources, target).manifest
}
