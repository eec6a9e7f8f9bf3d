use thiserror::Error;

/// Failure of a single catalog query. The evaluator records it and moves on.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("catalog backend error: {0}")]
    Backend(String),
}

/// Errors produced while saving or loading a catalog snapshot.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
