use crate::domain::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs;
use std::path::Path;

/// Pretty-prints `value` with four-space indentation and replaces any file
/// already at `path`. Non-ASCII text is written as-is.
pub fn write_json_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    fs::write(path, buffer).map_err(|e| {
        AppError::IoError(format!("Failed to write {}: {}", path.display(), e))
    })
}

pub fn read_json_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path)
        .map_err(|e| AppError::IoError(format!("Failed to read {}: {}", path.display(), e)))?;
    Ok(serde_json::from_str(&contents)?)
}

pub fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            fs::create_dir_all(parent)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_writes_unescaped_utf8_with_four_space_indent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        write_json_document(&path, &json!({ "name": "Café de Flore" })).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Café de Flore"));
        assert!(text.contains("\n    \"name\""));
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, "stale content that is longer than the new document").unwrap();
        write_json_document(&path, &json!([])).unwrap();

        let value: serde_json::Value = read_json_document(&path).unwrap();
        assert_eq!(value, json!([]));
    }

    #[test]
    fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("doc.json");
        let err = write_json_document(&path, &json!({})).unwrap_err();
        assert!(matches!(err, AppError::IoError(_)));
    }

    #[test]
    fn test_ensure_parent_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a").join("b").join("chart.png");
        ensure_parent_dir(&path).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());
        ensure_parent_dir(Path::new("chart.png")).unwrap();
    }
}
