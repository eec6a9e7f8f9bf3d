//! Interesting-file rule engine.
//!
//! This crate provides:
//! - XML rule documents parsed into an owned element tree
//! - Canonical (`INTERESTING_FILE_SET`) and legacy (`INTERESTING_FILE`) compilers
//! - Rule-set name validation with run-scoped state in a [`CompileSession`]
//! - An evaluation driver that queries a catalog and records hits
//! - A pipeline module with initialize / execute / finalize calls

pub mod compiler;
pub mod diagnostic;
pub mod evaluator;
pub mod legacy;
pub mod loader;
pub mod pipeline;
pub mod registry;
pub mod schema;
pub mod session;
pub mod validation;

pub use compiler::{compile_document, RuleCompiler};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use evaluator::{EvaluationReport, Evaluator, PredicateFailure, RunStatus};
pub use loader::{parse_document, Element, LoadSummary, RuleError, RuleLoader};
pub use pipeline::{InterestingFilesModule, Status};
pub use registry::RuleSetRegistry;
pub use schema::RuleSet;
pub use session::CompileSession;
