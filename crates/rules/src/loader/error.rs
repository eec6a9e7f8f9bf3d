//! Error types and load summary for the rule loader.

use std::path::PathBuf;

use serde::Serialize;

/// Errors that abort loading a rule document as a whole.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    /// The rule document does not exist.
    #[error("rule file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Filesystem I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed XML.
    #[error("XML parse error: {0}")]
    Parse(#[from] roxmltree::Error),

    /// Schema violation that the legacy dialect treats as fatal.
    #[error("Schema error: {0}")]
    Schema(String),
}

/// Result alias for rule operations.
pub type Result<T> = std::result::Result<T, RuleError>;

/// Outcome of compiling one document into a registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Rule sets added to the registry.
    pub registered: usize,
    /// Rule sets skipped (bad name, no predicates).
    pub discarded: usize,
    /// Diagnostics reported while compiling this document.
    pub diagnostics: usize,
}
