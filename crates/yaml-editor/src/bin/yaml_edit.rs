//! `yaml-edit`: read and edit YAML files by composite key.
//!
//! Usage:
//!   yaml-edit [--escape] <get|set|insert|remove|update> <FILE> <KEY> [VALUE]
//!
//! Log output goes to stderr and is filtered with `RUST_LOG`.

use clap::Parser;
use tracing_subscriber::EnvFilter;
use yaml_editor::cli::{run, Cli};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yaml_editor=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli.command, cli.options()) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
