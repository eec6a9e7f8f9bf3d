//! Non-fatal findings produced while compiling a rule document.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    /// A rule-set name was rejected; the whole set is skipped.
    Validation,
    /// Unknown or malformed element/attribute; only that piece is skipped.
    Schema,
}

/// A recoverable problem in the rule document, with enough context to fix
/// the file without re-running at a higher log level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_set: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Optional "did you mean …?" hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl Diagnostic {
    fn new(kind: DiagnosticKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            rule_set: None,
            element: None,
            attribute: None,
            value: None,
            suggestion: None,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Validation, message)
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::new(DiagnosticKind::Schema, message)
    }

    pub fn in_set(mut self, name: &str) -> Self {
        self.rule_set = Some(name.to_string());
        self
    }

    pub fn element(mut self, tag: &str) -> Self {
        self.element = Some(tag.to_string());
        self
    }

    pub fn attribute(mut self, name: &str) -> Self {
        self.attribute = Some(name.to_string());
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = Some(value.to_string());
        self
    }

    pub fn suggest(mut self, suggestion: Option<&str>) -> Self {
        self.suggestion = suggestion.map(str::to_string);
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(set) = &self.rule_set {
            write!(f, "rule set '{}': ", set)?;
        }
        if let Some(element) = &self.element {
            write!(f, "<{}> ", element)?;
        }
        if let Some(attribute) = &self.attribute {
            write!(f, "@{} ", attribute)?;
        }
        if let Some(value) = &self.value {
            write!(f, "{:?} ", value)?;
        }
        write!(f, "{}", self.message)?;
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
