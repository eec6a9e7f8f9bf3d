use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use sift_core::Dialect;

/// Flag interesting files by name, extension, path and type.
///
/// Rules come from an XML rule document; entries come from a live
/// directory scan or a catalog snapshot.
#[derive(Parser, Debug)]
#[command(name = "sift", version, about)]
pub struct CliArgs {
    /// Config profile; keys are looked up as `{PROFILE}_{KEY}` first.
    #[arg(long, global = true, env = "SIFT_PROFILE")]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate the rules against a directory tree or snapshot and emit hits as JSON lines.
    Scan(ScanArgs),
    /// Compile the rule document and report rule sets and diagnostics.
    Check(CheckArgs),
    /// Print the SQL condition for every compiled predicate.
    Explain(RuleArgs),
    /// Scan a directory tree into a catalog snapshot file.
    Snapshot(SnapshotArgs),
}

/// Rule document selection shared by all rule-reading commands.
#[derive(Args, Debug, Clone, Default)]
pub struct RuleArgs {
    /// Rule document (default: `$RULES_PATH`, else `$OUT_DIR/interesting_files.xml`)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Rule dialect: canonical or legacy (default: `$RULES_DIALECT`, else canonical)
    #[arg(long)]
    pub dialect: Option<Dialect>,
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory tree to scan.
    #[arg(long, required_unless_present = "catalog")]
    pub root: Option<PathBuf>,

    /// Catalog snapshot to evaluate instead of scanning.
    #[arg(long, conflicts_with = "root")]
    pub catalog: Option<PathBuf>,

    /// Hit output file (default: `$HITS_FILE`, else stdout).
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Evaluate rule sets in parallel.
    #[arg(long)]
    pub parallel: bool,

    #[command(flatten)]
    pub rules: RuleArgs,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Print the result as JSON.
    #[arg(long)]
    pub json: bool,

    #[command(flatten)]
    pub rules: RuleArgs,
}

#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Directory tree to scan.
    #[arg(long)]
    pub root: PathBuf,

    /// Snapshot file to write.
    #[arg(long)]
    pub out: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_requires_root_or_catalog() {
        assert!(CliArgs::try_parse_from(["sift", "scan"]).is_err());
        assert!(CliArgs::try_parse_from(["sift", "scan", "--root", "/a", "--catalog", "b.json"]).is_err());

        let args = CliArgs::try_parse_from(["sift", "scan", "--catalog", "b.json", "--parallel"]).unwrap();
        match args.command {
            Command::Scan(scan) => {
                assert_eq!(scan.catalog, Some(PathBuf::from("b.json")));
                assert!(scan.parallel);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn dialect_flag_parses() {
        let args = CliArgs::try_parse_from(["sift", "check", "--dialect", "legacy", "--json"]).unwrap();
        match args.command {
            Command::Check(check) => {
                assert_eq!(check.rules.dialect, Some(Dialect::Legacy));
                assert!(check.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(CliArgs::try_parse_from(["sift", "explain", "--dialect", "yaml"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }
}
