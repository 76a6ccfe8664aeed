//! Structured export of a diff as a pretty-printed JSON array.

use std::path::Path;

use jsondiff_core::JsonDiff;
use tracing::debug;

use crate::error::{ReportError, ReportResult};

/// Serialize the records as a 2-space indented JSON array.
pub fn to_json(diff: &JsonDiff) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(diff)?)
}

/// Write the full record set to `path`, replacing any existing file.
pub fn export_json(path: impl AsRef<Path>, diff: &JsonDiff) -> ReportResult<()> {
    let path = path.as_ref();
    let data = to_json(diff)?;
    std::fs::write(path, data).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), records = diff.len(), "exported diff");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsondiff_core::DiffRecord;
    use serde_json::{json, Value};

    fn sample() -> JsonDiff {
        JsonDiff {
            records: vec![
                DiffRecord::changed("age"),
                DiffRecord::same("name"),
                DiffRecord::type_changed("profile"),
                DiffRecord::added("city"),
            ],
        }
    }

    #[test]
    fn json_is_two_space_indented_array() {
        let text = to_json(&sample()).unwrap();
        assert!(text.starts_with("[\n  {\n    \"type\": \"changed\","));
        assert!(!text.ends_with('\n'));
    }

    #[test]
    fn export_round_trip_preserves_order_and_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diff.json");

        export_json(&path, &sample()).unwrap();

        let parsed: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(
            parsed,
            json!([
                {"type": "changed", "field": "age"},
                {"type": "same", "field": "name"},
                {"type": "changed", "field": "profile"},
                {"type": "added", "field": "city"}
            ])
        );
        for entry in parsed.as_array().unwrap() {
            assert_eq!(entry.as_object().unwrap().len(), 2);
        }

        let back: JsonDiff = serde_json::from_value(parsed).unwrap();
        let fields: Vec<_> = back.iter().map(|r| (r.kind, r.field.clone())).collect();
        let expected: Vec<_> = sample().iter().map(|r| (r.kind, r.field.clone())).collect();
        assert_eq!(fields, expected);
    }

    #[test]
    fn export_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("diff.json");
        std::fs::write(&path, "x".repeat(4096)).unwrap();

        export_json(&path, &JsonDiff::new()).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn unwritable_path_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("diff.json");

        let err = export_json(&path, &sample()).unwrap_err();
        assert!(matches!(err, ReportError::Write { .. }), "got {err:?}");
        assert!(err.to_string().contains("diff.json"));
    }
}
