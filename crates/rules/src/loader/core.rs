//! Core [`RuleLoader`]: read a rule document and compile it into a registry.

use std::fs;
use std::io;
use std::path::Path;

use sift_core::Dialect;
use tracing::{info, warn};

use crate::compiler::compile_document;
use crate::legacy::compile_legacy_document;
use crate::registry::RuleSetRegistry;
use crate::session::CompileSession;

use super::document::parse_document;
use super::error::{LoadSummary, Result, RuleError};

/// Loads one rule document in a fixed dialect.
///
/// The loader holds no run state; the caller owns the [`CompileSession`]
/// and [`RuleSetRegistry`] and resets them between runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleLoader {
    dialect: Dialect,
}

impl RuleLoader {
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// Read and compile the document at `path`.
    pub fn load_path(
        &self,
        path: &Path,
        session: &mut CompileSession,
        registry: &mut RuleSetRegistry,
    ) -> Result<LoadSummary> {
        let text = fs::read_to_string(path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "cannot open rule file");
            if e.kind() == io::ErrorKind::NotFound {
                RuleError::NotFound(path.to_path_buf())
            } else {
                RuleError::Io(e)
            }
        })?;
        info!(path = %path.display(), dialect = %self.dialect, "loading rule file");
        self.load_str(&text, session, registry)
    }

    /// Parse and compile `xml`.
    ///
    /// Malformed XML registers nothing. In the legacy dialect a schema
    /// error also registers nothing.
    pub fn load_str(
        &self,
        xml: &str,
        session: &mut CompileSession,
        registry: &mut RuleSetRegistry,
    ) -> Result<LoadSummary> {
        let root = parse_document(xml).map_err(|e| {
            warn!(error = %e, "rule document is not well-formed XML");
            e
        })?;

        match self.dialect {
            Dialect::Canonical => Ok(compile_document(&root, session, registry)),
            Dialect::Legacy => compile_legacy_document(&root, session, registry),
        }
    }
}
