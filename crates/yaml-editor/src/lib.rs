//! Edit YAML documents and files through dot-delimited composite keys.
//!
//! Parsing and serialization go through `serde_yaml` into an
//! order-preserving `serde_json::Value` tree; path resolution is done by
//! [`yaml_key_path`]. Documents the tree cannot hold exactly (non-string
//! keys, `.nan`, tags) are rejected on load.
//!
//! # Example
//!
//! ```
//! use yaml_editor::{EditorOptions, YamlDocument};
//! use serde_json::json;
//!
//! let mut doc = YamlDocument::new(EditorOptions::default());
//! doc.insert("Organizations.0.Name", json!("org1")).unwrap();
//! doc.insert("Organizations.1.Name", json!("org2")).unwrap();
//! assert_eq!(doc.get("Organizations.1.Name").unwrap(), &json!("org2"));
//!
//! let text = doc.to_yaml_string().unwrap();
//! assert!(text.starts_with("Organizations:\n"));
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod document;
pub mod error;
pub mod persist;

pub use config::EditorOptions;
pub use document::YamlDocument;
pub use error::EditorError;
pub use persist::{insert_file, load, load_or_empty, save, update_file};
