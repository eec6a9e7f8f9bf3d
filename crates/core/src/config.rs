use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name looked up in the output directory when no rule path is given.
pub const DEFAULT_RULES_FILE: &str = "interesting_files.xml";

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key).ok().filter(|s| !s.is_empty())
}

/// Read a profiled env var: tries {PROFILE}_{KEY} first, falls back to {KEY}.
fn profiled_env_opt(profile: &str, key: &str) -> Option<String> {
    if !profile.is_empty() {
        let prefixed = format!("{}_{}", profile, key);
        if let Some(v) = env_opt(&prefixed) {
            return Some(v);
        }
    }
    env_opt(key)
}

fn profiled_env_or(profile: &str, key: &str, default: &str) -> String {
    profiled_env_opt(profile, key).unwrap_or_else(|| default.to_string())
}

// ── Dialect ───────────────────────────────────────────────────

/// Rule-file dialect.
///
/// `Canonical` is the rule-set format (`INTERESTING_FILE_SET` with filtered
/// `NAME`/`EXTENSION` children, recoverable errors). `Legacy` is the older
/// one-rule-per-element format (`INTERESTING_FILE`) where any schema problem
/// aborts the whole load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Canonical,
    Legacy,
}

impl FromStr for Dialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "canonical" | "set" | "sets" => Ok(Dialect::Canonical),
            "legacy" => Ok(Dialect::Legacy),
            other => Err(ConfigError::UnknownDialect(other.to_string())),
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Canonical => write!(f, "canonical"),
            Dialect::Legacy => write!(f, "legacy"),
        }
    }
}

// ── Top-level config ──────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Active profile name (empty = default).
    pub profile: String,
    pub rules: RulesConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `SIFT_PROFILE` env var. When set (e.g. `CASE42`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env_or("SIFT_PROFILE", "").to_uppercase();
        Self::for_profile(&profile)
    }

    /// Build config for a specific named profile (empty string = default).
    pub fn for_profile(profile: &str) -> Self {
        let p = profile.to_uppercase();
        let p = p.as_str();
        Self {
            profile: p.to_string(),
            rules: RulesConfig::from_env_profiled(p),
            output: OutputConfig::from_env_profiled(p),
        }
    }

    /// Explicit rule path, else the well-known file in the output directory.
    pub fn rules_path(&self) -> PathBuf {
        self.rules
            .path
            .clone()
            .unwrap_or_else(|| self.output.default_rules_path())
    }

    pub fn profile_label(&self) -> &str {
        if self.profile.is_empty() { "default" } else { &self.profile }
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Config loaded (profile: {}):", self.profile_label());
        tracing::info!("  rules:   path={}, dialect={}", self.rules_path().display(), self.rules.dialect);
        tracing::info!(
            "  output:  out_dir={}, hits_file={}",
            self.output.out_dir.display(),
            self.output
                .hits_file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(stdout)".to_string())
        );
    }

    /// Summary as JSON, e.g. for `sift check --json`.
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "profile": self.profile_label(),
            "rules": { "path": self.rules_path(), "dialect": self.rules.dialect },
            "output": { "out_dir": self.output.out_dir, "hits_file": self.output.hits_file },
        })
    }
}

// ── Rules ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Explicit rule document path (`RULES_PATH`). See [`Config::rules_path`].
    pub path: Option<PathBuf>,
    pub dialect: Dialect,
}

impl RulesConfig {
    fn from_env_profiled(p: &str) -> Self {
        let path = profiled_env_opt(p, "RULES_PATH").map(PathBuf::from);
        let dialect = match profiled_env_opt(p, "RULES_DIALECT") {
            Some(raw) => raw.parse().unwrap_or_else(|e: ConfigError| {
                tracing::warn!(error = %e, "falling back to canonical dialect");
                Dialect::Canonical
            }),
            None => Dialect::Canonical,
        };
        Self { path, dialect }
    }
}

// ── Output ────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub out_dir: PathBuf,
    /// JSON-lines hit file; stdout when unset.
    pub hits_file: Option<PathBuf>,
}

impl OutputConfig {
    fn from_env_profiled(p: &str) -> Self {
        Self {
            out_dir: PathBuf::from(profiled_env_or(p, "OUT_DIR", ".")),
            hits_file: profiled_env_opt(p, "HITS_FILE").map(PathBuf::from),
        }
    }

    /// Well-known rule file location inside the output directory.
    pub fn default_rules_path(&self) -> PathBuf {
        self.out_dir.join(DEFAULT_RULES_FILE)
    }
}
