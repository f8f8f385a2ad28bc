//! Field classification used to pick a merge rule for each manifest key.

use super::{Map, Value};

/// FieldKind is the merge-relevant shape of a manifest field.
///
/// Checks run in declaration order: a list of strings is recognized before
/// the generic dictionary case, and anything that matches none of the first
/// three shapes is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind<'a> {
    /// String, number, boolean or null.
    Scalar(&'a Value),
    /// An array whose every element is a string. Empty arrays qualify.
    ListOfStrings(&'a [Value]),
    /// A JSON object.
    Dictionary(&'a Map),
    /// Arrays holding anything other than strings.
    Other(&'a Value),
}

impl<'a> FieldKind<'a> {
    /// Classifies a field value.
    pub fn of(value: &'a Value) -> Self {
        match value {
            Value::Null | Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::String(_) => {
                FieldKind::Scalar(value)
            }
            Value::List(items) if items.iter().all(Value::is_string) => {
                FieldKind::ListOfStrings(items)
            }
            Value::Map(map) => FieldKind::Dictionary(map),
            Value::List(_) => FieldKind::Other(value),
        }
    }

    /// Returns a short label for logging.
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::Scalar(_) => "scalar",
            FieldKind::ListOfStrings(_) => "list of strings",
            FieldKind::Dictionary(_) => "dictionary",
            FieldKind::Other(_) => "other",
        }
    }
}
