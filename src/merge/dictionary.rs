//! First-write-wins deep merge of dictionaries.

use crate::value::{Map, Value};

/// Merges dictionaries in precedence order.
///
/// The earliest dictionary wins on every conflict between scalars or between
/// values of different types. Arrays present on both sides become their
/// order-preserving union, and nested dictionaries are merged recursively
/// with the same rules.
///
/// An empty input yields an empty map; a single input yields a copy of it.
pub fn merge_dictionaries<'a, I>(dicts: I) -> Map
where
    I: IntoIterator<Item = &'a Map>,
{
    let mut merged = Map::new();
    for dict in dicts {
        for (key, value) in dict.iter() {
            merge_entry(&mut merged, key, value);
        }
    }
    merged
}

/// Folds `value` into `merged[key]` following the collision rules of
/// [`merge_dictionaries`].
fn merge_entry(merged: &mut Map, key: &str, value: &Value) {
    let Some(existing) = merged.fields.get_mut(key) else {
        merged.set(key, value.clone());
        return;
    };

    match (existing, value) {
        (Value::List(existing), Value::List(incoming)) => {
            union_into(existing, incoming);
        }
        (Value::Map(existing), Value::Map(incoming)) => {
            *existing = merge_dictionaries([&*existing, incoming]);
        }
        // scalar or mismatched types: first write wins
        _ => {}
    }
}

/// Returns the union of `lists`, keeping the first occurrence of every
/// element in concatenation order.
pub fn union_lists<'a, I>(lists: I) -> Vec<Value>
where
    I: IntoIterator<Item = &'a [Value]>,
{
    let mut out = Vec::new();
    for list in lists {
        union_into(&mut out, list);
    }
    out
}

fn union_into(out: &mut Vec<Value>, incoming: &[Value]) {
    // Deduplicate the existing side too: a JSON array may already repeat items.
    let mut deduped: Vec<Value> = Vec::with_capacity(out.len() + incoming.len());
    for item in out.drain(..).chain(incoming.iter().cloned()) {
        if !deduped.contains(&item) {
            deduped.push(item);
        }
    }
    *out = deduped;
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

    fn keys(m: &Map) -> Vec<&str> {
        m.keys().map(String::as_str).collect()
    }

    #[test]
    fn test_empty_input() {
        let merged = merge_dictionaries(Vec::<&Map>::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn test_single_input_is_identity() {
        let a = map(r#"{"name":"a","files":["x","x"],"scripts":{"build":"tsc"}}"#);
        let merged = merge_dictionaries([&a]);
        assert_eq!(merged, a);
        assert_eq!(keys(&merged), keys(&a));
    }

    #[test]
    fn test_disjoint_keys_union() {
        let a = map(r#"{"a":1,"b":2}"#);
        let b = map(r#"{"c":3}"#);
        let merged = merge_dictionaries([&a, &b]);
        assert_eq!(merged, map(r#"{"a":1,"b":2,"c":3}"#));
        assert_eq!(keys(&merged), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_first_write_wins_for_scalars() {
        let a = map(r#"{"version":"1.0.0","private":true}"#);
        let b = map(r#"{"version":"2.0.0","private":false}"#);
        let merged = merge_dictionaries([&a, &b]);
        assert_eq!(merged, a);

        let merged = merge_dictionaries([&b, &a]);
        assert_eq!(merged, b);
    }

    #[test]
    fn test_type_mismatch_keeps_first() {
        let a = map(r#"{"bin":"cli.js","man":["a.1"],"author":{"name":"x"}}"#);
        let b = map(r#"{"bin":{"tool":"tool.js"},"man":"b.1","author":"y"}"#);
        let merged = merge_dictionaries([&a, &b]);
        assert_eq!(merged, a);
    }

    #[test]
    fn test_lists_union_in_order() {
        let a = map(r#"{"keywords":["x","y"]}"#);
        let b = map(r#"{"keywords":["y","z"]}"#);
        let c = map(r#"{"keywords":["w","x"]}"#);
        let merged = merge_dictionaries([&a, &b, &c]);
        assert_eq!(merged, map(r#"{"keywords":["x","y","z","w"]}"#));
    }

    #[test]
    fn test_lists_of_any_element_type_union() {
        let a = map(r#"{"contributors":[{"name":"a"},1]}"#);
        let b = map(r#"{"contributors":[1,{"name":"b"},{"name":"a"}]}"#);
        let merged = merge_dictionaries([&a, &b]);
        assert_eq!(
            merged,
            map(r#"{"contributors":[{"name":"a"},1,{"name":"b"}]}"#)
        );
    }

    #[test]
    fn test_nested_dictionaries_merge_recursively() {
        let a = map(r#"{"config":{"port":8080,"hosts":["a"],"tls":{"enabled":true}}}"#);
        let b = map(r#"{"config":{"port":9090,"hosts":["b"],"tls":{"cert":"c.pem"},"debug":false}}"#);
        let merged = merge_dictionaries([&a, &b]);
        assert_eq!(
            merged,
            map(r#"{"config":{"port":8080,"hosts":["a","b"],"tls":{"enabled":true,"cert":"c.pem"},"debug":false}}"#)
        );
    }

    #[test]
    fn test_inputs_are_not_modified() {
        let a = map(r#"{"files":["a"]}"#);
        let b = map(r#"{"files":["b"]}"#);
        let _ = merge_dictionaries([&a, &b]);
        assert_eq!(a, map(r#"{"files":["a"]}"#));
        assert_eq!(b, map(r#"{"files":["b"]}"#));
    }

    #[test]
    fn test_union_lists() {
        let a = vec![Value::from("a"), Value::from("b"), Value::from("a")];
        let b = vec![Value::from("c"), Value::from("b")];
        assert_eq!(
            union_lists([&a[..], &b[..]]),
            vec![Value::from("a"), Value::from("b"), Value::from("c")]
        );
    }
}
