//! Outcome of one evaluation run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sift_core::Predicate;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Failure,
}

/// A predicate whose catalog query failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredicateFailure {
    pub rule_set: String,
    pub predicate: Predicate,
    pub error: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub elapsed_ms: u64,
    pub status: RunStatus,
    pub rule_sets: usize,
    /// Catalog queries issued, failed ones included.
    pub predicates_executed: usize,
    pub predicates_failed: usize,
    pub hits_emitted: usize,
    pub failures: Vec<PredicateFailure>,
}

impl EvaluationReport {
    pub(crate) fn start() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            elapsed_ms: 0,
            status: RunStatus::Success,
            rule_sets: 0,
            predicates_executed: 0,
            predicates_failed: 0,
            hits_emitted: 0,
            failures: Vec::new(),
        }
    }

    pub(crate) fn finish(mut self) -> Self {
        let elapsed = Utc::now() - self.started_at;
        self.elapsed_ms = elapsed.num_milliseconds().max(0) as u64;
        self
    }

    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }
}
