//! Rule document loading.
//!
//! Reads XML rule files, parses them into an owned [`Element`] tree and
//! hands the tree to the compiler for the configured dialect.

mod core;
mod document;
mod error;


pub use self::core::RuleLoader;
pub use self::document::{parse_document, Element};
pub use self::error::{LoadSummary, Result, RuleError};
