//! Catalog-side collaborators of the interesting-file engine.
//!
//! - [`EntryCatalog`]: query-by-predicate interface, ids ascending
//! - [`MemoryCatalog`]: in-memory store with JSON snapshots
//! - [`scan_directory`]: builds a [`MemoryCatalog`] from a directory tree
//! - [`render`]: predicate renderers (SQL text, in-memory matcher)
//! - [`HitSink`]: where matches are recorded

pub mod catalog;
pub mod error;
pub mod like;
pub mod render;
pub mod scan;
pub mod sink;

pub use catalog::{EntryCatalog, MemoryCatalog};
pub use error::{QueryError, SnapshotError};
pub use like::LikePattern;
pub use render::{EntryMatcher, MatcherRenderer, PredicateRenderer, SqlRenderer};
pub use scan::scan_directory;
pub use sink::{HitSink, JsonLinesSink, MemorySink};
