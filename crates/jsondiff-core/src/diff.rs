//! Recursive structural diff over two JSON objects.
//!
//! Keys are visited in lexicographic order so output is reproducible. Keys of
//! the first document come first (removed/changed/same), followed by keys
//! found only in the second (added).

use serde_json::{Map, Value};

use crate::record::{DiffRecord, JsonDiff};

/// A parsed JSON document. Only objects are accepted at the root.
pub type Document = Map<String, Value>;

/// Compute the diff between two documents.
///
/// Objects present on both sides are descended into, producing one record
/// per leaf. Everything else (arrays included) is compared as a whole value.
pub fn diff_documents(old: &Document, new: &Document) -> JsonDiff {
    let mut records = Vec::new();
    diff_objects(old, new, "", &mut records);
    JsonDiff { records }
}

fn diff_objects(old: &Document, new: &Document, prefix: &str, out: &mut Vec<DiffRecord>) {
    let mut entries: Vec<(&String, &Value)> = old.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (key, old_val) in entries {
        match new.get(key) {
            Some(new_val) => diff_value(key, old_val, new_val, prefix, out),
            None => out.push(DiffRecord::removed(format!("{prefix}{key}"))),
        }
    }

    let mut added: Vec<&String> = new.keys().filter(|k| !old.contains_key(*k)).collect();
    added.sort();

    for key in added {
        out.push(DiffRecord::added(format!("{prefix}{key}")));
    }
}

fn diff_value(key: &str, old: &Value, new: &Value, prefix: &str, out: &mut Vec<DiffRecord>) {
    let path = format!("{prefix}{key}");
    match (old, new) {
        // Two empty objects have no leaves; still account for the key.
        (Value::Object(a), Value::Object(b)) if a.is_empty() && b.is_empty() => {
            out.push(DiffRecord::same(path));
        }
        (Value::Object(a), Value::Object(b)) => {
            diff_objects(a, b, &format!("{path}."), out);
        }
        (Value::Object(_), _) => out.push(DiffRecord::type_changed(path)),
        (_, _) if json_eq(old, new) => out.push(DiffRecord::same(path)),
        (_, _) => out.push(DiffRecord::changed(path)),
    }
}

/// Deep value equality with numbers compared as `f64`, so `1`, `1.0` and
/// `1e0` are equal. Types still have to match: `1 != "1"`.
pub fn json_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x == y,
            _ => x == y,
        },
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(x, y)| json_eq(x, y))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, x)| y.get(key).is_some_and(|y| json_eq(x, y)))
        }
        _ => a == b,
    }
}
