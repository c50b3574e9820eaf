//! `yaml-edit` command line.
//!
//! The binary only parses arguments and prints; [`run`] holds the logic so
//! it can be exercised without a process.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::config::EditorOptions;
use crate::convert;
use crate::error::EditorError;
use crate::persist::{insert_file, load, save, update_file};

#[derive(Debug, Parser)]
#[command(name = "yaml-edit", version, about = "Read and edit YAML files by dot-delimited keys")]
pub struct Cli {
    /// Treat `\.` in keys as a literal dot
    #[arg(long, global = true, env = "YAML_EDIT_ESCAPE")]
    pub escape: bool,

    /// Fail instead of creating missing parent directories on save
    #[arg(long, global = true, env = "YAML_EDIT_NO_CREATE_DIRS")]
    pub no_create_dirs: bool,

    /// Maximum number of key segments
    #[arg(long, global = true, env = "YAML_EDIT_MAX_DEPTH")]
    pub max_depth: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn options(&self) -> EditorOptions {
        let mut options = EditorOptions::new()
            .with_escape_keys(self.escape)
            .with_create_dirs(!self.no_create_dirs);
        if let Some(max_depth) = self.max_depth {
            options = options.with_max_depth(max_depth);
        }
        options
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the node at KEY
    Get { file: PathBuf, key: String },
    /// Overwrite the node at KEY; its parent must exist
    Set {
        file: PathBuf,
        key: String,
        value: String,
    },
    /// Write the node at KEY, creating the file and missing containers
    Insert {
        file: PathBuf,
        key: String,
        value: String,
    },
    /// Remove the node at KEY
    Remove { file: PathBuf, key: String },
    /// Overwrite the node at KEY only if it exists and differs
    Update {
        file: PathBuf,
        key: String,
        value: String,
    },
}

/// Parse a command line VALUE as YAML, so `8080` is a number and `'8080'`
/// a string. An empty argument is the empty string.
pub fn parse_value(raw: &str) -> Result<Value, EditorError> {
    if raw.is_empty() {
        return Ok(Value::String(String::new()));
    }
    convert::from_yaml_str(raw)
}

/// Execute a command and return what should be printed.
pub fn run(command: &Command, options: EditorOptions) -> Result<String, EditorError> {
    match command {
        Command::Get { file, key } => {
            let doc = load(file, options)?;
            let node = doc.get(key)?;
            let text = serde_yaml::to_string(node).map_err(EditorError::Encode)?;
            Ok(text.trim_end().to_string())
        }
        Command::Set { file, key, value } => {
            let mut doc = load(file, options)?;
            doc.set(key, parse_value(value)?)?;
            save(&doc, file)?;
            Ok(String::new())
        }
        Command::Insert { file, key, value } => {
            insert_file(file, key, parse_value(value)?, options)?;
            Ok(String::new())
        }
        Command::Remove { file, key } => {
            let mut doc = load(file, options)?;
            doc.remove(key)?;
            save(&doc, file)?;
            Ok(String::new())
        }
        Command::Update { file, key, value } => {
            let changed = update_file(file, key, parse_value(value)?, options)?;
            Ok(if changed { "updated" } else { "unchanged" }.to_string())
        }
    }
}
