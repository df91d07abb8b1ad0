//! Utility functions for CLI operations.
//!
//! Configuration loading and output formatting shared by all commands.

use crate::error::CliError;
use pathclerk::config::OutputFormat;
use pathclerk::{Config, ConfigBuilder};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Output format given on the command line.
    pub format: Option<OutputFormat>,
}

impl GlobalOptions {
    /// The output format: the command-line flag, else the configured one.
    pub fn output_format(&self) -> Result<OutputFormat, CliError> {
        match self.format {
            Some(format) => Ok(format),
            None => Ok(load_configuration(self)?.effective_output_format()),
        }
    }
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. The configuration file in the data directory
/// 3. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.data_dir {
        builder = builder.with_data_dir(dir);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Print a value as text or JSON.
///
/// In text mode `text` is printed as is; an empty string prints nothing.
pub fn emit<T: Serialize + ?Sized>(format: OutputFormat, value: &T, text: &str) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => {
            if !text.is_empty() {
                println!("{text}");
            }
        }
    }
    Ok(())
}

/// Print a single path.
pub fn emit_path(global: &GlobalOptions, path: &str) -> Result<(), CliError> {
    emit(global.output_format()?, path, path)
}

/// Print a path that may be absent.
pub fn emit_optional(global: &GlobalOptions, path: Option<&str>) -> Result<(), CliError> {
    emit(global.output_format()?, &path, path.unwrap_or_default())
}

/// Print a list, one entry per line in text mode.
pub fn emit_list<S: AsRef<str> + Serialize>(global: &GlobalOptions, items: &[S]) -> Result<(), CliError> {
    let text = items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n");
    emit(global.output_format()?, items, &text)
}

/// Print a filesystem path produced by an operation.
pub fn emit_fs_path(global: &GlobalOptions, path: &Path) -> Result<(), CliError> {
    emit_path(global, &path.to_string_lossy())
}

/// Borrow an argument path as text, rejecting non-UTF-8 paths.
pub fn path_arg(path: &Path) -> Result<&str, CliError> {
    path.to_str().ok_or_else(|| {
        CliError::InvalidArguments(format!("path is not valid UTF-8: {}", path.display()))
    })
}
