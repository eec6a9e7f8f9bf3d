//! Subcommand implementations.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use sift_catalog::{scan_directory, JsonLinesSink, MemoryCatalog, PredicateRenderer, SqlRenderer};
use sift_core::Config;
use sift_rules::{CompileSession, InterestingFilesModule, LoadSummary, RuleLoader, RuleSetRegistry, Status};
use tracing::{info, warn};

use crate::cli::{CheckArgs, RuleArgs, ScanArgs, SnapshotArgs};

/// Apply rule flags on top of the environment config.
pub fn apply_rule_args(config: &mut Config, args: &RuleArgs) {
    if let Some(path) = &args.rules {
        config.rules.path = Some(path.clone());
    }
    if let Some(dialect) = args.dialect {
        config.rules.dialect = dialect;
    }
}

pub fn scan(config: &Config, args: &ScanArgs) -> Result<Status> {
    let catalog = match (&args.catalog, &args.root) {
        (Some(snapshot), _) => MemoryCatalog::load_snapshot(snapshot)
            .with_context(|| format!("failed to load catalog snapshot {}", snapshot.display()))?,
        (None, Some(root)) => scan_directory(root)
            .with_context(|| format!("failed to scan {}", root.display()))?,
        (None, None) => bail!("either --root or --catalog is required"),
    };

    // Rule flags are already folded into `config` by `apply_rule_args`.
    let mut module = InterestingFilesModule::from_config(config).with_parallel(args.parallel);
    module.initialize("");

    let output = args.output.as_ref().or(config.output.hits_file.as_ref());
    let status = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create hit file {}", path.display()))?;
            run_module(&mut module, &catalog, BufWriter::new(file))?
        }
        None => run_module(&mut module, &catalog, io::stdout())?,
    };

    if let Some(report) = module.last_report() {
        info!(
            run_id = %report.run_id,
            rule_sets = report.rule_sets,
            hits = report.hits_emitted,
            failed = report.predicates_failed,
            "scan complete"
        );
    }
    module.finalize();
    Ok(status)
}

fn run_module<W: Write + Send>(
    module: &mut InterestingFilesModule,
    catalog: &MemoryCatalog,
    writer: W,
) -> Result<Status> {
    let sink = JsonLinesSink::new(writer);
    let status = module.execute(catalog, &sink);
    sink.flush().context("failed to flush hit output")?;
    if sink.failed() > 0 {
        warn!(failed = sink.failed(), written = sink.written(), "some hits could not be written");
    }
    Ok(status)
}

/// Compile the configured rule document into a fresh registry.
fn compile(config: &Config) -> Result<(RuleSetRegistry, CompileSession, LoadSummary)> {
    let path = config.rules_path();
    let mut session = CompileSession::new();
    let mut registry = RuleSetRegistry::new();
    let summary = RuleLoader::new(config.rules.dialect)
        .load_path(&path, &mut session, &mut registry)
        .with_context(|| format!("failed to load rules from {}", path.display()))?;
    Ok((registry, session, summary))
}

pub fn check(config: &Config, args: &CheckArgs) -> Result<Status> {
    let (registry, session, summary) = compile(config)?;
    let status = if registry.is_empty() { Status::Failure } else { Status::Success };

    if args.json {
        let out = serde_json::json!({
            "config": config.summary(),
            "summary": summary,
            "predicates": registry.predicate_count(),
            "rule_sets": registry.as_slice(),
            "diagnostics": session.diagnostics(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(status);
    }

    for set in &registry {
        if set.description().is_empty() {
            println!("{}", set.name());
        } else {
            println!("{}  ({})", set.name(), set.description());
        }
        for predicate in set.predicates() {
            println!("  - {}", predicate);
        }
    }
    for diagnostic in session.diagnostics() {
        println!("warning: {}", diagnostic);
    }
    println!(
        "{} rule set(s) registered with {} predicate(s), {} discarded, {} diagnostic(s)",
        summary.registered,
        registry.predicate_count(),
        summary.discarded,
        summary.diagnostics
    );
    Ok(status)
}

pub fn explain(config: &Config) -> Result<Status> {
    let (registry, _, _) = compile(config)?;
    let renderer = SqlRenderer::default();
    for set in &registry {
        println!("-- {}", set.name());
        for predicate in set.predicates() {
            println!("{}", renderer.render(predicate));
        }
    }
    Ok(if registry.is_empty() { Status::Failure } else { Status::Success })
}

pub fn snapshot(args: &SnapshotArgs) -> Result<Status> {
    let catalog = scan_directory(&args.root)
        .with_context(|| format!("failed to scan {}", args.root.display()))?;
    write_snapshot(&catalog, &args.out)?;
    info!(entries = catalog.len(), out = %args.out.display(), "snapshot written");
    Ok(Status::Success)
}

fn write_snapshot(catalog: &MemoryCatalog, out: &Path) -> Result<()> {
    catalog
        .save_snapshot(out)
        .with_context(|| format!("failed to write snapshot {}", out.display()))
}
