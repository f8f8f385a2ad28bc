//! Record of what a merge did to each target field.

use std::fmt;

/// FieldAction describes what happened to a single top-level field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldAction {
    /// Set from an explicit override option.
    Overridden,
    /// Replaced by the merge of the sources' dependency maps.
    DependenciesMerged { sources: usize },
    /// Deep-merged dictionary.
    DictionaryMerged,
    /// Order-preserving union of string lists.
    ListMerged,
    /// Named in the exclusion set and left untouched.
    Excluded,
    /// Scalar already on the target, kept as-is.
    ScalarKept,
    /// Scalar only present in sources; not copied onto the target.
    ScalarNotCopied,
}

impl fmt::Display for FieldAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldAction::Overridden => write!(f, "overridden"),
            FieldAction::DependenciesMerged { sources } => {
                write!(f, "dependencies merged from {} manifest(s)", sources)
            }
            FieldAction::DictionaryMerged => write!(f, "dictionary merged"),
            FieldAction::ListMerged => write!(f, "list merged"),
            FieldAction::Excluded => write!(f, "excluded"),
            FieldAction::ScalarKept => write!(f, "kept"),
            FieldAction::ScalarNotCopied => write!(f, "not copied"),
        }
    }
}

/// FieldReport pairs a field name with the action taken on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldReport {
    pub field: String,
    pub action: FieldAction,
    /// True when the field did not exist on the target before the merge.
    pub created: bool,
}

impl fmt::Display for FieldReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.created {
            write!(f, "{}: {} (created)", self.field, self.action)
        } else {
            write!(f, "{}: {}", self.field, self.action)
        }
    }
}

/// MergeReport lists field actions in the order they happened.
///
/// A field/action pair is recorded at most once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeReport {
    entries: Vec<FieldReport>,
}

impl MergeReport {
    /// Creates a new empty MergeReport.
    pub fn new() -> Self {
        MergeReport {
            entries: Vec::new(),
        }
    }

    /// Records an action on `field`.
    pub fn record(&mut self, field: impl Into<String>, action: FieldAction, created: bool) {
        let field = field.into();
        if self.action_for(&field) == Some(&action) {
            return;
        }
        self.entries.push(FieldReport {
            field,
            action,
            created,
        });
    }

    /// Returns the latest action recorded for `field`.
    pub fn action_for(&self, field: &str) -> Option<&FieldAction> {
        self.entries
            .iter()
            .rev()
            .find(|e| e.field == field)
            .map(|e| &e.action)
    }

    /// Returns the names of fields created on the target.
    pub fn created_fields(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|e| e.created)
            .map(|e| e.field.as_str())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldReport> {
        self.entries.iter()
    }
}

impl fmt::Display for MergeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", entry)?;
        }
        Ok(())
    }
}
