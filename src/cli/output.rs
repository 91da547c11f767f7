//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Where the database is expected and whether it is there.
#[derive(Debug, Serialize)]
pub struct DatabaseLocation {
    pub path: String,
    pub exists: bool,
}

impl DatabaseLocation {
    pub fn probe(path: &Path) -> Self {
        Self {
            path: path.to_string_lossy().to_string(),
            exists: crate::store::exists(path),
        }
    }
}
