//! In-memory YAML document addressed by composite keys.

use serde_json::{Map, Value};
use tracing::{info, warn};
use yaml_key_path::{tokenize, validate_path_len, NodeKind, Path};

use crate::config::EditorOptions;
use crate::convert;
use crate::error::EditorError;

/// A parsed YAML document whose root is a mapping or a sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct YamlDocument {
    root: Value,
    options: EditorOptions,
}

impl YamlDocument {
    /// An empty mapping document.
    pub fn new(options: EditorOptions) -> Self {
        Self {
            root: Value::Object(Map::new()),
            options,
        }
    }

    /// Wrap an existing tree. A `null` root becomes an empty mapping.
    pub fn from_value(root: Value, options: EditorOptions) -> Result<Self, EditorError> {
        match root {
            Value::Null => Ok(Self::new(options)),
            Value::Object(_) | Value::Array(_) => Ok(Self { root, options }),
            scalar => Err(EditorError::ScalarRoot(NodeKind::of(&scalar))),
        }
    }

    /// Parse YAML text. Mapping order is kept as written.
    ///
    /// Fails with `EditorError::Unsupported` if the text holds a node that
    /// would not survive being saved again.
    ///
    /// # Example
    ///
    /// ```
    /// use yaml_editor::{EditorOptions, YamlDocument};
    ///
    /// let doc = YamlDocument::parse("server:\n  port: 80\n", EditorOptions::default()).unwrap();
    /// assert_eq!(doc.get("server.port").unwrap(), &serde_json::json!(80));
    /// ```
    pub fn parse(text: &str, options: EditorOptions) -> Result<Self, EditorError> {
        if text.trim().is_empty() {
            return Ok(Self::new(options));
        }
        Self::from_value(convert::from_yaml_str(text)?, options)
    }

    /// Serialize to block-style YAML.
    pub fn to_yaml_string(&self) -> Result<String, EditorError> {
        serde_yaml::to_string(&self.root).map_err(EditorError::Encode)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    fn path(&self, key: &str) -> Result<Path, EditorError> {
        let path = tokenize(key, self.options.escape_keys())?;
        validate_path_len(&path, self.options.max_depth())?;
        Ok(path)
    }

    /// Read the node at `key`.
    pub fn get(&self, key: &str) -> Result<&Value, EditorError> {
        let path = self.path(key)?;
        Ok(yaml_key_path::get(&self.root, &path)?)
    }

    /// Overwrite the node at `key`; its parent must exist.
    pub fn set(&mut self, key: &str, value: Value) -> Result<Option<Value>, EditorError> {
        let path = self.path(key)?;
        Ok(yaml_key_path::set(&mut self.root, &path, value)?)
    }

    /// Write the node at `key`, creating missing containers.
    pub fn insert(&mut self, key: &str, value: Value) -> Result<Option<Value>, EditorError> {
        let path = self.path(key)?;
        Ok(yaml_key_path::insert(&mut self.root, &path, value)?)
    }

    /// Remove the node at `key`.
    pub fn remove(&mut self, key: &str) -> Result<Option<Value>, EditorError> {
        let path = self.path(key)?;
        Ok(yaml_key_path::remove(&mut self.root, &path)?)
    }

    /// Overwrite an existing value only when it differs from `value`.
    ///
    /// Returns `Ok(false)` without touching the document when nothing lives
    /// at `key` or the stored value already equals `value`.
    pub fn update(&mut self, key: &str, value: Value) -> Result<bool, EditorError> {
        let path = self.path(key)?;
        match yaml_key_path::get(&self.root, &path) {
            Ok(old) if *old == value => {
                info!(key = %key, "new value equals old value, not updating");
                return Ok(false);
            }
            Ok(_) => {}
            Err(e) if e.is_not_found() => {
                warn!(key = %key, error = %e, "key is not found, not updating");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        }
        yaml_key_path::set(&mut self.root, &path, value)?;
        Ok(true)
    }
}
