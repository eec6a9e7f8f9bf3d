use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown rules dialect '{0}' (expected 'canonical' or 'legacy')")]
    UnknownDialect(String),
}
