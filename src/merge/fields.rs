//! Generic per-field merge of every non-dependency field.

use std::collections::HashSet;

use tracing::{debug, trace};

use super::dependencies::is_dependency_field;
use super::dictionary::{merge_dictionaries, union_lists};
use super::report::{FieldAction, MergeReport};
use crate::value::{FieldKind, Map, Value};

/// State shared by the target-driven and source-driven passes.
pub(crate) struct FieldMerge<'a> {
    sources: &'a [Map],
    excluded: &'a HashSet<String>,
    /// Keys already merged, so each key is folded once.
    merged: HashSet<String>,
}

impl<'a> FieldMerge<'a> {
    pub(crate) fn new(sources: &'a [Map], excluded: &'a HashSet<String>) -> Self {
        FieldMerge {
            sources,
            excluded,
            merged: HashSet::new(),
        }
    }

    /// Runs the target-driven pass, then the source-driven pass.
    pub(crate) fn run(mut self, target: &mut Map, report: &mut MergeReport) {
        self.merge_target_fields(target, report);
        self.merge_source_fields(target, report);
    }

    fn is_skipped(&self, key: &str, report: &mut MergeReport) -> bool {
        if is_dependency_field(key) {
            return true;
        }
        if self.excluded.contains(key) {
            debug!(field = key, "skipping excluded field");
            report.record(key, FieldAction::Excluded, false);
            return true;
        }
        false
    }

    /// Folds every source dictionary at a key into the target's own
    /// dictionary. Scalars already on the target are left as they are.
    fn merge_target_fields(&mut self, target: &mut Map, report: &mut MergeReport) {
        let keys: Vec<String> = target.keys().cloned().collect();
        for key in keys {
            if self.is_skipped(&key, report) {
                continue;
            }
            let Some(value) = target.get(&key) else {
                continue;
            };
            match FieldKind::of(value) {
                FieldKind::Scalar(_) => {
                    trace!(field = %key, "keeping target scalar");
                    if report.action_for(&key).is_none() {
                        report.record(key.as_str(), FieldAction::ScalarKept, false);
                    }
                }
                FieldKind::Dictionary(own) => {
                    let merged = self.fold_dictionaries(Some(own), &key);
                    debug!(field = %key, "merging dictionary field into target");
                    target.set(key.as_str(), Value::Map(merged));
                    report.record(key.as_str(), FieldAction::DictionaryMerged, false);
                    self.merged.insert(key);
                }
                // lists are merged by the source-driven pass
                FieldKind::ListOfStrings(_) | FieldKind::Other(_) => {}
            }
        }
    }

    /// Walks every source field and merges string lists and dictionaries
    /// onto the target.
    ///
    /// A scalar that only appears in sources is never copied: the target is
    /// expected to carry its own name, version and similar fields, or to
    /// receive them through override options.
    fn merge_source_fields(&mut self, target: &mut Map, report: &mut MergeReport) {
        let sources = self.sources;
        for source in sources {
            for (key, value) in source.iter() {
                if self.merged.contains(key) || self.is_skipped(key, report) {
                    continue;
                }
                let existing = target.get(key);
                let created = existing.is_none();
                match FieldKind::of(value) {
                    FieldKind::Scalar(_) => {
                        if created {
                            debug!(field = %key, "source scalar not copied onto target");
                            report.record(key.as_str(), FieldAction::ScalarNotCopied, false);
                        }
                    }
                    FieldKind::ListOfStrings(_) => {
                        let own = match existing {
                            None => None,
                            Some(Value::List(own)) => Some(own.as_slice()),
                            Some(other) => {
                                debug!(field = %key, found = other.type_name(), "target value is not a list, keeping it");
                                self.merged.insert(key.clone());
                                continue;
                            }
                        };
                        let merged = self.fold_lists(own, key);
                        debug!(field = %key, created, "merging list field");
                        target.set(key.as_str(), Value::List(merged));
                        report.record(key.as_str(), FieldAction::ListMerged, created);
                        self.merged.insert(key.clone());
                    }
                    FieldKind::Dictionary(_) => {
                        let own = match existing {
                            None => None,
                            Some(Value::Map(own)) => Some(own),
                            Some(other) => {
                                debug!(field = %key, found = other.type_name(), "target value is not an object, keeping it");
                                self.merged.insert(key.clone());
                                continue;
                            }
                        };
                        let merged = self.fold_dictionaries(own, key);
                        debug!(field = %key, created, "merging dictionary field");
                        target.set(key.as_str(), Value::Map(merged));
                        report.record(key.as_str(), FieldAction::DictionaryMerged, created);
                        self.merged.insert(key.clone());
                    }
                    FieldKind::Other(_) => {
                        trace!(field = %key, "no merge rule for field");
                    }
                }
            }
        }
    }

    /// Merges `own` (highest precedence) with every source dictionary at `key`.
    fn fold_dictionaries(&self, own: Option<&Map>, key: &str) -> Map {
        let from_sources = self.sources.iter().filter_map(|s| s.get(key)?.as_map());
        merge_dictionaries(own.into_iter().chain(from_sources))
    }

    /// Unions `own` with every source array at `key`, in source order.
    fn fold_lists(&self, own: Option<&[Value]>, key: &str) -> Vec<Value> {
        let from_sources = self
            .sources
            .iter()
            .filter_map(|s| s.get(key)?.as_list().map(Vec::as_slice));
        union_lists(own.into_iter().chain(from_sources))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::from_json;
    use pretty_assertions::assert_eq;

    fn map(json: &str) -> Map {
        match from_json(json).unwrap() {
            Value::Map(m) => m,
            other => panic!("expected object, got {:?}", other),
        }
    }

    fn run(sources: &[Map], target: &mut Map, excluded: &[&str]) -> MergeReport {
        let excluded: HashSet<String> = excluded.iter().map(|s| s.to_string()).collect();
        let mut report = MergeReport::new();
        FieldMerge::new(sources, &excluded).run(target, &mut report);
        report
    }

    #[test]
    fn test_target_dictionary_takes_precedence() {
        let sources = vec![
            map(r#"{"scripts":{"build":"webpack","lint":"eslint"}}"#),
            map(r#"{"scripts":{"test":"jest","lint":"tslint"}}"#),
        ];
        let mut target = map(r#"{"scripts":{"build":"tsc"}}"#);
        let report = run(&sources, &mut target, &[]);

        assert_eq!(
            target,
            map(r#"{"scripts":{"build":"tsc","lint":"eslint","test":"jest"}}"#)
        );
        assert_eq!(report.action_for("scripts"), Some(&FieldAction::DictionaryMerged));
        assert!(report.created_fields().is_empty());
    }

    #[test]
    fn test_source_only_dictionary_is_created() {
        let sources = vec![
            map(r#"{"engines":{"node":">=18"}}"#),
            map(r#"{"engines":{"npm":">=9","node":">=16"}}"#),
        ];
        let mut target = map(r#"{"name":"t"}"#);
        let report = run(&sources, &mut target, &[]);

        assert_eq!(
            target,
            map(r#"{"name":"t","engines":{"node":">=18","npm":">=9"}}"#)
        );
        assert_eq!(report.created_fields(), vec!["engines"]);
    }

    #[test]
    fn test_lists_union_target_first() {
        let sources = vec![
            map(r#"{"files":["lib","dist"]}"#),
            map(r#"{"files":["dist","types"]}"#),
        ];
        let mut target = map(r#"{"files":["src","lib"]}"#);
        run(&sources, &mut target, &[]);

        assert_eq!(target, map(r#"{"files":["src","lib","dist","types"]}"#));
    }

    #[test]
    fn test_target_scalars_are_kept() {
        let sources = vec![map(r#"{"name":"a","version":"2.0.0","private":false}"#)];
        let mut target = map(r#"{"name":"t","version":"1.0.0","private":true}"#);
        let report = run(&sources, &mut target, &[]);

        assert_eq!(target, map(r#"{"name":"t","version":"1.0.0","private":true}"#));
        assert_eq!(report.action_for("name"), Some(&FieldAction::ScalarKept));
    }

    #[test]
    fn test_source_only_scalars_are_not_copied() {
        let sources = vec![map(r#"{"name":"a","license":"MIT"}"#), map(r#"{"name":"b"}"#)];
        let mut target = Map::new();
        let report = run(&sources, &mut target, &[]);

        assert!(target.is_empty());
        assert_eq!(report.action_for("name"), Some(&FieldAction::ScalarNotCopied));
        assert_eq!(report.action_for("license"), Some(&FieldAction::ScalarNotCopied));
    }

    #[test]
    fn test_excluded_fields_are_untouched() {
        let sources = vec![
            map(r#"{"scripts":{"a":"1"},"keywords":["x"]}"#),
            map(r#"{"scripts":{"b":"2"}}"#),
        ];
        let mut target = map(r#"{"keywords":["t"]}"#);
        let report = run(&sources, &mut target, &["scripts", "keywords"]);

        assert_eq!(target, map(r#"{"keywords":["t"]}"#));
        assert_eq!(report.action_for("scripts"), Some(&FieldAction::Excluded));
        assert_eq!(report.action_for("keywords"), Some(&FieldAction::Excluded));
    }

    #[test]
    fn test_dependency_fields_are_left_alone() {
        let sources = vec![map(r#"{"dependencies":{"a":"1"}}"#)];
        let mut target = map(r#"{"devDependencies":{"b":"1"}}"#);
        let report = run(&sources, &mut target, &[]);

        assert_eq!(target, map(r#"{"devDependencies":{"b":"1"}}"#));
        assert!(report.is_empty());
    }

    #[test]
    fn test_mismatched_target_value_is_kept() {
        let sources = vec![map(r#"{"bin":{"tool":"tool.js"},"man":["a.1"]}"#)];
        let mut target = map(r#"{"bin":"cli.js","man":"main.1"}"#);
        run(&sources, &mut target, &[]);

        assert_eq!(target, map(r#"{"bin":"cli.js","man":"main.1"}"#));
    }

    #[test]
    fn test_non_string_lists_are_not_merged() {
        let sources = vec![map(r#"{"ports":[1,2]}"#), map(r#"{"ports":[3]}"#)];
        let mut target = Map::new();
        run(&sources, &mut target, &[]);

        assert!(target.is_empty());
    }

    #[test]
    fn test_string_list_absorbs_other_arrays_at_same_key() {
        let sources = vec![map(r#"{"os":[1]}"#), map(r#"{"os":["linux"]}"#)];
        let mut target = Map::new();
        run(&sources, &mut target, &[]);

        assert_eq!(target, map(r#"{"os":[1,"linux"]}"#));
    }

    #[test]
    fn test_new_keys_appended_in_first_seen_order() {
        let sources = vec![
            map(r#"{"keywords":["a"],"scripts":{"x":"1"}}"#),
            map(r#"{"files":["f"],"keywords":["b"]}"#),
        ];
        let mut target = map(r#"{"name":"t","config":{"k":"v"}}"#);
        run(&sources, &mut target, &[]);

        let keys: Vec<&str> = target.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "config", "keywords", "scripts", "files"]);
    }
}
