use serde::{Deserialize, Serialize};

/// Catalog-assigned entry identifier. Query results are ordered by it.
pub type EntryId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    File,
    Directory,
    Other,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntryKind::File => write!(f, "file"),
            EntryKind::Directory => write!(f, "dir"),
            EntryKind::Other => write!(f, "other"),
        }
    }
}

/// A filesystem object known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    /// Final path component, e.g. `a.jpg`.
    pub name: String,
    /// Full path including the name, e.g. `/tmp/temp/a.jpg`.
    pub full_path: String,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(
        id: EntryId,
        name: impl Into<String>,
        full_path: impl Into<String>,
        kind: EntryKind,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            full_path: full_path.into(),
            kind,
        }
    }
}
