//! Evaluation driver: run every compiled predicate against a catalog.
//!
//! For each rule set (registry order) and predicate (set order) the catalog
//! is queried and one [`Hit`] per returned entry id goes to the sink. A
//! failed query is logged and recorded, and evaluation moves on to the next
//! predicate; the run as a whole is then reported as failed.

mod report;

pub use report::{EvaluationReport, PredicateFailure, RunStatus};

use rayon::prelude::*;
use sift_catalog::{EntryCatalog, HitSink};
use sift_core::Hit;
use tracing::{debug, error, info, warn};

use crate::registry::RuleSetRegistry;
use crate::schema::RuleSet;

/// Per-set counters, merged into the report.
#[derive(Default)]
struct SetOutcome {
    executed: usize,
    hits: usize,
    failures: Vec<PredicateFailure>,
}

pub struct Evaluator;

impl Evaluator {
    /// Evaluate sequentially. Hits arrive in registry, predicate, then
    /// entry id order.
    pub fn evaluate(
        registry: &RuleSetRegistry,
        catalog: &dyn EntryCatalog,
        sink: &dyn HitSink,
    ) -> EvaluationReport {
        Self::run(registry, |sets| {
            sets.iter()
                .map(|set| evaluate_set(set, catalog, sink))
                .collect()
        })
    }

    /// Evaluate rule sets on the rayon pool.
    ///
    /// Hits of one predicate stay in entry id order; hits of different rule
    /// sets may interleave.
    pub fn evaluate_parallel(
        registry: &RuleSetRegistry,
        catalog: &dyn EntryCatalog,
        sink: &dyn HitSink,
    ) -> EvaluationReport {
        Self::run(registry, |sets| {
            sets.par_iter()
                .map(|set| evaluate_set(set, catalog, sink))
                .collect()
        })
    }

    fn run<F>(registry: &RuleSetRegistry, evaluate_all: F) -> EvaluationReport
    where
        F: FnOnce(&[RuleSet]) -> Vec<SetOutcome>,
    {
        let mut report = EvaluationReport::start();

        if registry.is_empty() {
            error!(run_id = %report.run_id, "no valid rule sets, nothing to evaluate");
            report.status = RunStatus::Failure;
            return report.finish();
        }

        report.rule_sets = registry.len();
        for outcome in evaluate_all(registry.as_slice()) {
            report.predicates_executed += outcome.executed;
            report.hits_emitted += outcome.hits;
            report.failures.extend(outcome.failures);
        }
        report.predicates_failed = report.failures.len();
        if report.predicates_failed > 0 {
            report.status = RunStatus::Failure;
        }

        let report = report.finish();
        info!(
            run_id = %report.run_id,
            status = ?report.status,
            rule_sets = report.rule_sets,
            predicates = report.predicates_executed,
            failed = report.predicates_failed,
            hits = report.hits_emitted,
            elapsed_ms = report.elapsed_ms,
            "evaluation finished"
        );
        report
    }
}

fn evaluate_set(set: &RuleSet, catalog: &dyn EntryCatalog, sink: &dyn HitSink) -> SetOutcome {
    let mut outcome = SetOutcome::default();

    for predicate in set.predicates() {
        outcome.executed += 1;
        match catalog.query(predicate) {
            Ok(ids) => {
                debug!(rule_set = %set.name(), predicate = %predicate, matches = ids.len(), "predicate evaluated");
                for id in ids {
                    sink.record_hit(&Hit::new(id, set.name(), set.description()));
                    outcome.hits += 1;
                }
            }
            Err(e) => {
                warn!(rule_set = %set.name(), predicate = %predicate, error = %e, "catalog query failed");
                outcome.failures.push(PredicateFailure {
                    rule_set: set.name().to_string(),
                    predicate: predicate.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use sift_catalog::{MemoryCatalog, MemorySink, QueryError};
    use sift_core::{Entry, EntryId, EntryKind, Predicate};

    use super::*;

    /// Fails every query for one match value, delegates the rest.
    struct FlakyCatalog {
        inner: MemoryCatalog,
        poison: &'static str,
        calls: AtomicUsize,
    }

    impl EntryCatalog for FlakyCatalog {
        fn query(&self, predicate: &Predicate) -> Result<Vec<EntryId>, QueryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if predicate.match_value == self.poison {
                return Err(QueryError::Backend("database is locked".into()));
            }
            self.inner.query(predicate)
        }
    }

    fn catalog() -> MemoryCatalog {
        MemoryCatalog::from_entries(vec![
            Entry::new(1, "a.jpg", "/pics/a.jpg", EntryKind::File),
            Entry::new(2, "A.JPG", "/pics/A.JPG", EntryKind::File),
            Entry::new(3, "a.png", "/pics/a.png", EntryKind::File),
            Entry::new(4, "notes.txt", "/docs/notes.txt", EntryKind::File),
        ])
    }

    fn registry(sets: Vec<RuleSet>) -> RuleSetRegistry {
        let mut registry = RuleSetRegistry::new();
        for set in sets {
            registry.push(set);
        }
        registry
    }

    #[test]
    fn emits_one_hit_per_entry_per_predicate() {
        let registry = registry(vec![RuleSet::new(
            "Pics",
            "pictures",
            vec![Predicate::extension_suffix("jpg"), Predicate::exact_name("a.jpg")],
        )]);
        let sink = MemorySink::new();

        let report = Evaluator::evaluate(&registry, &catalog(), &sink);

        assert!(report.is_success());
        assert_eq!(report.predicates_executed, 2);
        assert_eq!(report.hits_emitted, 4);
        let ids: Vec<_> = sink.hits().iter().map(|h| h.entry_id).collect();
        assert_eq!(ids, vec![1, 2, 1, 2]);
        assert!(sink.hits().iter().all(|h| h.set_name == "Pics" && h.set_description == "pictures"));
    }

    #[test]
    fn empty_registry_fails_without_querying() {
        let flaky = FlakyCatalog { inner: catalog(), poison: "", calls: AtomicUsize::new(0) };
        let sink = MemorySink::new();

        let report = Evaluator::evaluate(&RuleSetRegistry::new(), &flaky, &sink);

        assert_eq!(report.status, RunStatus::Failure);
        assert_eq!(flaky.calls.load(Ordering::SeqCst), 0);
        assert!(sink.is_empty());
    }

    #[test]
    fn query_failure_does_not_stop_other_predicates() {
        let registry = registry(vec![
            RuleSet::new("Broken", "", vec![Predicate::exact_name("boom")]),
            RuleSet::new("Text", "text", vec![Predicate::extension_suffix("txt")]),
        ]);
        let flaky = FlakyCatalog { inner: catalog(), poison: "boom", calls: AtomicUsize::new(0) };
        let sink = MemorySink::new();

        let report = Evaluator::evaluate(&registry, &flaky, &sink);

        assert_eq!(report.status, RunStatus::Failure);
        assert_eq!(flaky.calls.load(Ordering::SeqCst), 2);
        assert_eq!(report.predicates_failed, 1);
        assert_eq!(report.failures[0].rule_set, "Broken");
        assert!(report.failures[0].error.contains("database is locked"));
        assert_eq!(sink.hits(), vec![Hit::new(4, "Text", "text")]);
    }

    #[test]
    fn no_matches_is_still_success() {
        let registry = registry(vec![RuleSet::new("None", "", vec![Predicate::exact_name("zzz")])]);
        let report = Evaluator::evaluate(&registry, &catalog(), &MemorySink::new());
        assert!(report.is_success());
        assert_eq!(report.hits_emitted, 0);
    }

    #[test]
    fn parallel_matches_sequential_hit_multiset() {
        let registry = registry(vec![
            RuleSet::new("Pics", "", vec![Predicate::extension_suffix("jpg")]),
            RuleSet::new("Png", "", vec![Predicate::extension_suffix("png")]),
            RuleSet::new("Text", "", vec![Predicate::extension_suffix("txt")]),
        ]);
        let catalog = catalog();

        let seq = MemorySink::new();
        let par = MemorySink::new();
        let seq_report = Evaluator::evaluate(&registry, &catalog, &seq);
        let par_report = Evaluator::evaluate_parallel(&registry, &catalog, &par);

        assert_eq!(seq_report.hits_emitted, par_report.hits_emitted);
        let key = |h: &Hit| (h.set_name.clone(), h.entry_id);
        let mut a: Vec<_> = seq.hits().iter().map(key).collect();
        let mut b: Vec<_> = par.hits().iter().map(key).collect();
        a.sort();
        b.sort();
        assert_eq!(a, b);
    }
}
