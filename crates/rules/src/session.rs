//! Run-scoped compilation state.
//!
//! Everything that must not leak from one processing run into the next
//! lives here: accepted rule-set names, the `Unnamed_<N>` counter and the
//! diagnostics collected so far. Call [`CompileSession::reset`] at the start
//! of every run.

use std::collections::HashSet;

use tracing::warn;

use crate::diagnostic::{Diagnostic, DiagnosticKind};

/// Prefix of generated rule-set names.
pub const UNNAMED_PREFIX: &str = "Unnamed_";

#[derive(Debug)]
pub struct CompileSession {
    accepted_names: HashSet<String>,
    next_unnamed: u32,
    diagnostics: Vec<Diagnostic>,
}

impl Default for CompileSession {
    fn default() -> Self {
        Self {
            accepted_names: HashSet::new(),
            next_unnamed: 1,
            diagnostics: Vec::new(),
        }
    }
}

impl CompileSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget accepted names, restart the unnamed counter and drop diagnostics.
    pub fn reset(&mut self) {
        self.accepted_names.clear();
        self.next_unnamed = 1;
        self.diagnostics.clear();
    }

    /// `Unnamed_1`, `Unnamed_2`, … in call order.
    pub fn next_default_name(&mut self) -> String {
        let name = format!("{}{}", UNNAMED_PREFIX, self.next_unnamed);
        self.next_unnamed += 1;
        name
    }

    pub fn is_name_taken(&self, name: &str) -> bool {
        self.accepted_names.contains(name)
    }

    pub(crate) fn accept_name(&mut self, name: &str) {
        self.accepted_names.insert(name.to_string());
    }

    /// Log a diagnostic and keep it for the run summary.
    pub fn report(&mut self, diagnostic: Diagnostic) {
        let kind = match diagnostic.kind {
            DiagnosticKind::Validation => "validation",
            DiagnosticKind::Schema => "schema",
        };
        warn!(
            kind,
            rule_set = diagnostic.rule_set.as_deref().unwrap_or("-"),
            element = diagnostic.element.as_deref().unwrap_or("-"),
            attribute = diagnostic.attribute.as_deref().unwrap_or("-"),
            value = diagnostic.value.as_deref().unwrap_or("-"),
            suggestion = diagnostic.suggestion.as_deref().unwrap_or("-"),
            "{}",
            diagnostic.message
        );
        self.diagnostics.push(diagnostic);
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
