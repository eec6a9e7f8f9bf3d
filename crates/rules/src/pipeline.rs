//! Host-facing module with an initialize / execute / finalize lifecycle.
//!
//! One [`InterestingFilesModule`] can run many times in the same process;
//! every `execute` starts from a fresh session and registry.

use std::path::PathBuf;

use serde::Serialize;
use sift_catalog::{EntryCatalog, HitSink};
use sift_core::{Config, Dialect, DEFAULT_RULES_FILE};
use tracing::{error, info};

use crate::diagnostic::Diagnostic;
use crate::evaluator::{EvaluationReport, Evaluator};
use crate::loader::{LoadSummary, Result, RuleLoader};
use crate::registry::RuleSetRegistry;
use crate::session::CompileSession;

/// Name under which hits are attributed to this module.
pub const MODULE_NAME: &str = "InterestingFiles";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    pub fn is_success(self) -> bool {
        self == Status::Success
    }
}

pub struct InterestingFilesModule {
    /// Directory searched for the default rule file.
    default_dir: PathBuf,
    /// Rule file given at initialization, if any.
    rules_path: Option<PathBuf>,
    loader: RuleLoader,
    parallel: bool,
    session: CompileSession,
    registry: RuleSetRegistry,
    last_report: Option<EvaluationReport>,
}

impl InterestingFilesModule {
    pub fn new(default_dir: impl Into<PathBuf>, dialect: Dialect) -> Self {
        Self {
            default_dir: default_dir.into(),
            rules_path: None,
            loader: RuleLoader::new(dialect),
            parallel: false,
            session: CompileSession::new(),
            registry: RuleSetRegistry::new(),
            last_report: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let mut module = Self::new(&config.output.out_dir, config.rules.dialect);
        module.rules_path = config.rules.path.clone();
        module
    }

    /// Evaluate rule sets on the rayon pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Accept the module argument. A non-blank argument is the rule file path.
    pub fn initialize(&mut self, args: &str) -> Status {
        let args = args.trim();
        if !args.is_empty() {
            self.rules_path = Some(PathBuf::from(args));
        }
        info!(
            module = MODULE_NAME,
            rules = %self.rules_path().display(),
            dialect = %self.loader.dialect(),
            "module initialized"
        );
        Status::Success
    }

    /// The rule file `execute` will read.
    pub fn rules_path(&self) -> PathBuf {
        match &self.rules_path {
            Some(path) => path.clone(),
            None => self.default_dir.join(DEFAULT_RULES_FILE),
        }
    }

    /// Reset run state and compile the rule file into the registry.
    pub fn load_rules(&mut self) -> Result<LoadSummary> {
        self.session.reset();
        self.registry.clear();
        let path = self.rules_path();
        let summary = self.loader.load_path(&path, &mut self.session, &mut self.registry)?;
        info!(
            module = MODULE_NAME,
            rule_sets = self.registry.len(),
            predicates = self.registry.predicate_count(),
            "rules loaded"
        );
        Ok(summary)
    }

    /// Load rules and evaluate them against `catalog`, writing hits to `sink`.
    pub fn execute(&mut self, catalog: &dyn EntryCatalog, sink: &dyn HitSink) -> Status {
        if let Err(e) = self.load_rules() {
            error!(module = MODULE_NAME, path = %self.rules_path().display(), error = %e, "failed to load rules");
            self.last_report = None;
            return Status::Failure;
        }

        let report = if self.parallel {
            Evaluator::evaluate_parallel(&self.registry, catalog, sink)
        } else {
            Evaluator::evaluate(&self.registry, catalog, sink)
        };
        let status = if report.is_success() { Status::Success } else { Status::Failure };
        self.last_report = Some(report);
        status
    }

    /// Drop all run state.
    pub fn finalize(&mut self) -> Status {
        self.registry.clear();
        self.session.reset();
        self.last_report = None;
        info!(module = MODULE_NAME, "module finalized");
        Status::Success
    }

    pub fn registry(&self) -> &RuleSetRegistry {
        &self.registry
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.session.diagnostics()
    }

    pub fn last_report(&self) -> Option<&EvaluationReport> {
        self.last_report.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use sift_catalog::{MemoryCatalog, MemorySink};
    use sift_core::EntryKind;
    use tempfile::TempDir;

    use super::*;

    const RULES: &str = r#"<INTERESTING_FILE_SET name="Pics"><EXTENSION>jpg</EXTENSION></INTERESTING_FILE_SET>"#;

    fn catalog() -> MemoryCatalog {
        let mut catalog = MemoryCatalog::new();
        catalog.push("a.jpg", "/a.jpg", EntryKind::File);
        catalog.push("b.txt", "/b.txt", EntryKind::File);
        catalog
    }

    #[test]
    fn default_rule_file_lives_in_default_dir() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(DEFAULT_RULES_FILE), RULES).unwrap();

        let mut module = InterestingFilesModule::new(dir.path(), Dialect::Canonical);
        assert_eq!(module.initialize("   "), Status::Success);
        assert_eq!(module.rules_path(), dir.path().join("interesting_files.xml"));

        let sink = MemorySink::new();
        assert_eq!(module.execute(&catalog(), &sink), Status::Success);
        assert_eq!(sink.len(), 1);
        assert_eq!(module.last_report().map(|r| r.hits_emitted), Some(1));
    }

    #[test]
    fn argument_overrides_default_path() {
        let dir = TempDir::new().unwrap();
        let custom = dir.path().join("custom.xml");
        fs::write(&custom, RULES).unwrap();

        let mut module = InterestingFilesModule::new("/nonexistent", Dialect::Canonical);
        module.initialize(custom.to_str().unwrap());
        assert_eq!(module.execute(&catalog(), &MemorySink::new()), Status::Success);
    }

    #[test]
    fn missing_rule_file_fails() {
        let dir = TempDir::new().unwrap();
        let mut module = InterestingFilesModule::new(dir.path(), Dialect::Canonical);
        module.initialize("");
        assert_eq!(module.execute(&catalog(), &MemorySink::new()), Status::Failure);
        assert!(module.last_report().is_none());
    }

    #[test]
    fn repeated_runs_are_independent() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(DEFAULT_RULES_FILE),
            "<INTERESTING_FILE_SET><NAME>a.jpg</NAME></INTERESTING_FILE_SET>",
        )
        .unwrap();
        let mut module = InterestingFilesModule::new(dir.path(), Dialect::Canonical).with_parallel(true);
        module.initialize("");

        for _ in 0..3 {
            let sink = MemorySink::new();
            assert_eq!(module.execute(&catalog(), &sink), Status::Success);
            assert!(module.diagnostics().is_empty());
            assert_eq!(sink.hits()[0].set_name, "Unnamed_1");
        }

        assert_eq!(module.finalize(), Status::Success);
        assert!(module.registry().is_empty());
    }

    #[test]
    fn from_config_uses_configured_path_and_dialect() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("legacy.xml");
        fs::write(&path, "<INTERESTING_FILE><EXTENSION>jpg</EXTENSION></INTERESTING_FILE>").unwrap();

        let mut config = Config::for_profile("PIPELINE_TEST_UNSET");
        config.rules.path = Some(path.clone());
        config.rules.dialect = Dialect::Legacy;

        let mut module = InterestingFilesModule::from_config(&config);
        assert_eq!(module.rules_path(), path);
        assert_eq!(module.execute(&catalog(), &MemorySink::new()), Status::Success);
        assert_eq!(module.registry().len(), 1);
    }
}
