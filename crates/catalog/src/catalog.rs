use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sift_core::{Entry, EntryId, EntryKind, Predicate};
use tracing::debug;

use crate::error::{QueryError, SnapshotError};
use crate::render::{MatcherRenderer, PredicateRenderer};

/// Query-by-predicate access to file metadata.
///
/// Implementations must return matching ids in ascending order so repeated
/// runs over unchanged data produce identical hit streams. `Sync` lets the
/// evaluator fan rule sets out over a thread pool.
pub trait EntryCatalog: Send + Sync {
    fn query(&self, predicate: &Predicate) -> Result<Vec<EntryId>, QueryError>;
}

/// In-memory catalog keyed by entry id.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    entries: BTreeMap<EntryId, Entry>,
    renderer: MatcherRenderer,
}

/// On-disk snapshot format: entries in id order.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogSnapshot {
    entries: Vec<Entry>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry);
        }
        catalog
    }

    /// Insert or replace an entry, returning the previous one with the same id.
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.id, entry)
    }

    /// Append an entry with the next free id (one past the current maximum).
    pub fn push(
        &mut self,
        name: impl Into<String>,
        full_path: impl Into<String>,
        kind: EntryKind,
    ) -> EntryId {
        let id = self.entries.keys().next_back().map(|id| id + 1).unwrap_or(1);
        self.entries.insert(id, Entry::new(id, name, full_path, kind));
        id
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.get(&id)
    }

    /// Entries in ascending id order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // ── Snapshots ───────────────────────────────────────────────

    /// Write all entries as pretty JSON.
    pub fn save_snapshot(&self, path: &Path) -> Result<(), SnapshotError> {
        let snapshot = CatalogSnapshot {
            entries: self.entries.values().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&snapshot)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a snapshot written by [`save_snapshot`](Self::save_snapshot).
    pub fn load_snapshot(path: &Path) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path)?;
        let snapshot: CatalogSnapshot = serde_json::from_str(&json)?;
        Ok(Self::from_entries(snapshot.entries))
    }
}

impl EntryCatalog for MemoryCatalog {
    fn query(&self, predicate: &Predicate) -> Result<Vec<EntryId>, QueryError> {
        let matcher = self.renderer.render(predicate);
        let ids: Vec<EntryId> = self
            .entries
            .values()
            .filter(|entry| matcher.matches(entry))
            .map(|entry| entry.id)
            .collect();
        debug!(predicate = %predicate, matched = ids.len(), "memory catalog query");
        Ok(ids)
    }
}

#[cfg(test)]
mod tests;
