pub mod config;
pub mod entry;
pub mod error;
pub mod hit;
pub mod pattern;
pub mod predicate;

pub use config::{load_dotenv, Config, Dialect, DEFAULT_RULES_FILE};
pub use entry::*;
pub use error::*;
pub use hit::*;
pub use pattern::{escape_wildcards, WildcardSyntax};
pub use predicate::*;
