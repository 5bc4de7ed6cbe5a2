//! Configuration document loading and serialization.
//!
//! The on-disk format is chosen by file extension: `.json` parses as JSON,
//! `.yaml`/`.yml` as YAML, anything else is rejected. In memory every
//! document is a `serde_json::Value` regardless of source format; YAML trees
//! are converted at the I/O boundary so the rest of the store deals with a
//! single value type. JSON mappings keep insertion order (`preserve_order`).

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use super::error::StoreError;

// ============================================================================
// format selection
// ============================================================================

/// On-disk serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Detect the format from a path's file extension.
    pub fn from_path(path: &Path) -> Result<Self, StoreError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(StoreError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

// ============================================================================
// load
// ============================================================================

/// Read and parse the document at `path`.
///
/// The top-level shape is not checked here; a scalar or sequence document
/// loads fine and only fails validation.
pub fn load(path: &Path) -> Result<Value, StoreError> {
    let format = Format::from_path(path)?;

    let content = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
        _ => StoreError::Io(path.to_path_buf(), err),
    })?;

    parse(&content, format, path)
}

/// Parse `content` as `format`. `path` only feeds error messages.
pub fn parse(content: &str, format: Format, path: &Path) -> Result<Value, StoreError> {
    match format {
        Format::Json => serde_json::from_str(content)
            .map_err(|err| StoreError::Json(path.to_path_buf(), err)),
        Format::Yaml => {
            let yaml: serde_yaml::Value = serde_yaml::from_str(content)
                .map_err(|err| StoreError::Yaml(path.to_path_buf(), err))?;

            // YAML mappings may carry keys the JSON value model cannot
            // express (sequences, nested mappings); surface those as
            // format errors. Scalar keys convert to strings.
            serde_json::to_value(yaml)
                .map_err(|err| StoreError::YamlStructure(path.to_path_buf(), err))
        }
    }
}

// ============================================================================
// write
// ============================================================================

/// Serialize `document` and write it to `path` in the format its extension
/// names.
pub fn write(path: &Path, document: &Value) -> Result<(), StoreError> {
    let format = Format::from_path(path)?;
    let content = serialize(document, format, path)?;

    fs::write(path, content).map_err(|err| StoreError::Io(path.to_path_buf(), err))
}

/// Serialize `document` as `format`: JSON with 4-space indentation, YAML in
/// block style (serde_yaml never emits flow collections).
pub fn serialize(document: &Value, format: Format, path: &Path) -> Result<Vec<u8>, StoreError> {
    match format {
        Format::Json => {
            let mut buf = Vec::new();
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut ser = Serializer::with_formatter(&mut buf, formatter);
            document
                .serialize(&mut ser)
                .map_err(|err| StoreError::Json(path.to_path_buf(), err))?;
            Ok(buf)
        }
        Format::Yaml => serde_yaml::to_string(document)
            .map(String::into_bytes)
            .map_err(|err| StoreError::Yaml(path.to_path_buf(), err)),
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            Format::from_path(Path::new("app.json")).unwrap(),
            Format::Json
        );
        assert_eq!(
            Format::from_path(Path::new("app.yaml")).unwrap(),
            Format::Yaml
        );
        assert_eq!(
            Format::from_path(Path::new("app.yml")).unwrap(),
            Format::Yaml
        );
    }

    #[test]
    fn test_format_from_path_unsupported() {
        // .toml and bare names are rejected, not guessed at
        assert!(matches!(
            Format::from_path(Path::new("app.toml")),
            Err(StoreError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            Format::from_path(Path::new("config")),
            Err(StoreError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(_)));
    }

    #[test]
    fn test_parse_invalid_json() {
        let err = parse("{\"a\": ", Format::Json, Path::new("app.json")).unwrap_err();
        assert!(matches!(err, StoreError::Json(..)));
    }

    #[test]
    fn test_parse_invalid_yaml() {
        let err = parse("a: [1, 2", Format::Yaml, Path::new("app.yaml")).unwrap_err();
        assert!(matches!(err, StoreError::Yaml(..)));
    }

    #[test]
    fn test_parse_yaml_as_json_value() {
        let doc = parse(
            "database:\n  host: localhost\n  port: 5432\n",
            Format::Yaml,
            Path::new("app.yaml"),
        )
        .unwrap();
        assert_eq!(doc, json!({"database": {"host": "localhost", "port": 5432}}));
    }

    #[test]
    fn test_parse_yaml_integer_keys_become_strings() {
        let doc = parse("1: one\n2: two\n", Format::Yaml, Path::new("app.yaml")).unwrap();
        assert_eq!(doc, json!({"1": "one", "2": "two"}));
    }

    #[test]
    fn test_parse_yaml_complex_keys() {
        // a sequence-valued key has no JSON equivalent
        let err = parse("[a, b]: value\n", Format::Yaml, Path::new("app.yaml")).unwrap_err();
        assert!(matches!(err, StoreError::YamlStructure(..)));
    }

    #[test]
    fn test_serialize_json_four_space_indent() {
        let doc = json!({"database": {"port": 5432}});
        let out = serialize(&doc, Format::Json, Path::new("app.json")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "{\n    \"database\": {\n        \"port\": 5432\n    }\n}"
        );
    }

    #[test]
    fn test_serialize_yaml_block_style() {
        let doc = json!({"servers": ["a", "b"], "port": 80});
        let out = serialize(&doc, Format::Yaml, Path::new("app.yaml")).unwrap();
        let text = String::from_utf8(out).unwrap();
        // Block style: one line per element, no inline `[...]` collections
        assert!(text.contains("servers:\n- a\n- b\n"));
        assert!(!text.contains('['));
    }

    #[test]
    fn test_write_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();

        for name in ["roundtrip.json", "roundtrip.yaml"] {
            let path: PathBuf = dir.path().join(name);
            let doc = json!({"a": {"b": [1, 2, 3]}, "c": null, "ok": true});
            write(&path, &doc).unwrap();
            assert_eq!(load(&path).unwrap(), doc);
        }
    }

    #[test]
    fn test_json_round_trip_preserves_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ordered.json");

        let doc = parse(
            "{\"zeta\": 1, \"alpha\": 2, \"mid\": 3}",
            Format::Json,
            &path,
        )
        .unwrap();
        write(&path, &doc).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        let mid = text.find("mid").unwrap();
        assert!(zeta < alpha && alpha < mid);
    }
}
