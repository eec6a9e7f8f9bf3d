//! Structured match predicates.
//!
//! A [`Predicate`] says *what* to match, never *how* a particular store
//! should search for it. Renderers in `sift-catalog` turn it into SQL text
//! or an in-memory matcher; both share the semantics documented here:
//!
//! - all comparisons are case-insensitive;
//! - `ExactName` compares the whole entry name;
//! - `ExtensionSuffix` requires the entry name to end with the value
//!   (which always starts with `.`);
//! - `path_filter` requires the full path to contain the substring;
//! - `type_filter` restricts the entry kind.

use serde::{Deserialize, Serialize};

use crate::entry::EntryKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    ExactName,
    ExtensionSuffix,
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchKind::ExactName => write!(f, "name"),
            MatchKind::ExtensionSuffix => write!(f, "extension"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeFilter {
    #[default]
    None,
    RegularFileOnly,
    DirectoryOnly,
}

impl TypeFilter {
    /// Parse the `typeFilter` attribute value. Only `file` and `dir` are recognized.
    pub fn from_attr(value: &str) -> Option<TypeFilter> {
        match value {
            "file" => Some(TypeFilter::RegularFileOnly),
            "dir" => Some(TypeFilter::DirectoryOnly),
            _ => None,
        }
    }

    pub fn admits(&self, kind: EntryKind) -> bool {
        match self {
            TypeFilter::None => true,
            TypeFilter::RegularFileOnly => kind == EntryKind::File,
            TypeFilter::DirectoryOnly => kind == EntryKind::Directory,
        }
    }
}

/// One compiled match condition plus optional path/type filters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Predicate {
    pub match_kind: MatchKind,
    pub match_value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_filter: Option<String>,
    #[serde(default)]
    pub type_filter: TypeFilter,
}

impl Predicate {
    pub fn exact_name(name: impl Into<String>) -> Self {
        Self {
            match_kind: MatchKind::ExactName,
            match_value: name.into(),
            path_filter: None,
            type_filter: TypeFilter::None,
        }
    }

    /// Extension match; a leading `.` is inserted when missing so `jpg` and
    /// `.jpg` compile to the same predicate.
    pub fn extension_suffix(extension: impl Into<String>) -> Self {
        let mut value = extension.into();
        if !value.starts_with('.') {
            value.insert(0, '.');
        }
        Self {
            match_kind: MatchKind::ExtensionSuffix,
            match_value: value,
            path_filter: None,
            type_filter: TypeFilter::None,
        }
    }

    /// Set the path filter. Empty strings leave the predicate unfiltered.
    pub fn with_path_filter(mut self, filter: Option<String>) -> Self {
        self.path_filter = filter.filter(|f| !f.is_empty());
        self
    }

    pub fn with_type_filter(mut self, filter: TypeFilter) -> Self {
        self.type_filter = filter;
        self
    }
}

impl std::fmt::Display for Predicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {:?}", self.match_kind, self.match_value)?;
        if let Some(path) = &self.path_filter {
            write!(f, " path ~ {:?}", path)?;
        }
        match self.type_filter {
            TypeFilter::None => Ok(()),
            TypeFilter::RegularFileOnly => write!(f, " type = file"),
            TypeFilter::DirectoryOnly => write!(f, " type = dir"),
        }
    }
}
