//! Dedicated merge for the dependency maps of a manifest.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::dictionary::merge_dictionaries;
use super::report::{FieldAction, MergeReport};
use crate::value::{Map, Value};

/// Manifest fields merged only by [`merge_dependencies`].
pub const DEPENDENCY_FIELDS: [&str; 3] = ["dependencies", "devDependencies", "peerDependencies"];

/// Returns true if `field` is one of [`DEPENDENCY_FIELDS`].
pub fn is_dependency_field(field: &str) -> bool {
    DEPENDENCY_FIELDS.contains(&field)
}

/// Replaces each dependency field of `target` with the merge of the same
/// field across `sources`.
///
/// The target's own dependency maps do not take part in the merge. A field
/// that no source declares is left as it is on the target.
pub fn merge_dependencies(sources: &[Map], mut target: Map) -> Map {
    apply_dependencies(sources, &mut target, &HashSet::new(), &mut MergeReport::new());
    target
}

pub(crate) fn apply_dependencies(
    sources: &[Map],
    target: &mut Map,
    excluded: &HashSet<String>,
    report: &mut MergeReport,
) {
    for field in DEPENDENCY_FIELDS {
        if excluded.contains(field) {
            debug!(field, "skipping excluded dependency field");
            report.record(field, FieldAction::Excluded, false);
            continue;
        }

        let collected: Vec<&Map> = sources
            .iter()
            .enumerate()
            .filter_map(|(index, source)| match source.get(field)? {
                Value::Map(deps) => Some(deps),
                other => {
                    warn!(
                        field,
                        source = index,
                        found = other.type_name(),
                        "ignoring dependency field that is not an object"
                    );
                    None
                }
            })
            .collect();

        if collected.is_empty() {
            continue;
        }

        let created = !target.has(field);
        debug!(field, sources = collected.len(), "merging dependency field");
        target.set(field, Value::Map(merge_dictionaries(collected.iter().copied())));
        report.record(
            field,
            FieldAction::DependenciesMerged {
                sources: collected.len(),
            },
            created,
        );
    }
}
