//! Loading and saving YAML files.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use tracing::debug;

use crate::config::EditorOptions;
use crate::document::YamlDocument;
use crate::error::EditorError;

/// Read and parse a YAML file.
pub fn load(path: impl AsRef<Path>, options: EditorOptions) -> Result<YamlDocument, EditorError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| EditorError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "loaded yaml file");
    YamlDocument::parse(&text, options)
}

/// Like [`load`], but a missing file yields an empty mapping document.
pub fn load_or_empty(
    path: impl AsRef<Path>,
    options: EditorOptions,
) -> Result<YamlDocument, EditorError> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => {
            debug!(path = %path.display(), bytes = text.len(), "loaded yaml file");
            YamlDocument::parse(&text, options)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "yaml file does not exist, starting empty");
            Ok(YamlDocument::new(options))
        }
        Err(source) => Err(EditorError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Serialize `doc` and write it to `path`, replacing any previous content.
///
/// Missing parent directories are created when the document's options
/// allow it.
pub fn save(doc: &YamlDocument, path: impl AsRef<Path>) -> Result<(), EditorError> {
    let path = path.as_ref();
    let text = doc.to_yaml_string()?;
    let write_err = |source| EditorError::Write {
        path: path.to_path_buf(),
        source,
    };
    if doc.options().create_dirs() {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }
    fs::write(path, text.as_bytes()).map_err(write_err)?;
    debug!(path = %path.display(), bytes = text.len(), "saved yaml file");
    Ok(())
}

/// Update an existing value in a file, see [`YamlDocument::update`].
///
/// The file is only rewritten when the value changed.
pub fn update_file(
    path: impl AsRef<Path>,
    key: &str,
    value: Value,
    options: EditorOptions,
) -> Result<bool, EditorError> {
    let path = path.as_ref();
    let mut doc = load(path, options)?;
    let changed = doc.update(key, value)?;
    if changed {
        save(&doc, path)?;
    }
    Ok(changed)
}

/// Insert a value into a file, creating the file and any missing
/// containers as needed.
pub fn insert_file(
    path: impl AsRef<Path>,
    key: &str,
    value: Value,
    options: EditorOptions,
) -> Result<Option<Value>, EditorError> {
    let path = path.as_ref();
    let mut doc = load_or_empty(path, options)?;
    let old = doc.insert(key, value)?;
    save(&doc, path)?;
    Ok(old)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.yaml");
        assert!(matches!(
            load(&path, EditorOptions::default()),
            Err(EditorError::Read { .. })
        ));
        let doc = load_or_empty(&path, EditorOptions::default()).unwrap();
        assert_eq!(doc.root(), &json!({}));
    }

    #[test]
    fn test_save_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.yaml");
        let mut doc = YamlDocument::new(EditorOptions::default());
        doc.insert("a.0", json!(1)).unwrap();
        save(&doc, &path).unwrap();

        let loaded = load(&path, EditorOptions::default()).unwrap();
        assert_eq!(loaded.root(), &json!({"a": [1]}));
    }

    #[test]
    fn test_save_without_create_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out.yaml");
        let doc = YamlDocument::new(EditorOptions::default().with_create_dirs(false));
        assert!(matches!(save(&doc, &path), Err(EditorError::Write { .. })));
        assert!(!path.exists());
    }
}
