//! Legacy single-rule dialect: `INTERESTING_FILE` elements.
//!
//! Stricter than the canonical dialect. A repeated `NAME`, `EXTENSION` or
//! `PATH_KEYWORD`, both `NAME` and `EXTENSION` in one rule, or any unknown
//! child aborts the whole document and nothing is registered.

use sift_core::Predicate;
use tracing::{error, info};

use crate::diagnostic::Diagnostic;
use crate::loader::{Element, LoadSummary, Result, RuleError};
use crate::registry::RuleSetRegistry;
use crate::schema::{ElementKind, RuleSet, INTERESTING_FILE};
use crate::session::CompileSession;
use crate::validation::validate_name;

#[derive(Debug, Default)]
struct LegacyRule {
    name: String,
    extension: String,
    path_keyword: String,
    description: String,
}

impl LegacyRule {
    fn parse(element: &Element) -> Result<Self> {
        let mut rule = LegacyRule::default();

        for child in &element.children {
            let text = child.trimmed_text().to_string();
            let slot = match child.kind() {
                ElementKind::Name => &mut rule.name,
                ElementKind::Extension => &mut rule.extension,
                ElementKind::PathKeyword => &mut rule.path_keyword,
                ElementKind::Description => {
                    rule.description = text;
                    continue;
                }
                _ => return Err(fatal(format!("unknown element <{}>", child.tag))),
            };
            if !slot.is_empty() {
                return Err(fatal(format!(
                    "multiple <{}> in one rule: '{}' and '{}'",
                    child.tag, slot, text
                )));
            }
            *slot = text;

            if !rule.name.is_empty() && !rule.extension.is_empty() {
                return Err(fatal(format!(
                    "cannot specify both NAME and EXTENSION: '{}' and '{}'",
                    rule.name, rule.extension
                )));
            }
        }

        Ok(rule)
    }

    fn predicate(&self) -> Option<Predicate> {
        let base = if !self.name.is_empty() {
            Predicate::exact_name(self.name.clone())
        } else if !self.extension.is_empty() {
            Predicate::extension_suffix(self.extension.clone())
        } else {
            return None;
        };
        Some(base.with_path_filter(Some(self.path_keyword.clone())))
    }
}

fn fatal(message: String) -> RuleError {
    error!(dialect = "legacy", "{}", message);
    RuleError::Schema(message)
}

/// Compile every `INTERESTING_FILE` in `root` into one rule set each.
///
/// On error the registry is left untouched.
pub fn compile_legacy_document(
    root: &Element,
    session: &mut CompileSession,
    registry: &mut RuleSetRegistry,
) -> Result<LoadSummary> {
    let rules = root
        .find_all(ElementKind::InterestingFile)
        .into_iter()
        .map(LegacyRule::parse)
        .collect::<Result<Vec<_>>>()?;

    let diagnostics_before = session.diagnostics().len();
    let mut summary = LoadSummary::default();
    let mut compiled = Vec::new();

    for rule in rules {
        let name = session.next_default_name();
        let Some(predicate) = rule.predicate() else {
            session.report(
                Diagnostic::schema("rule has neither NAME nor EXTENSION, discarded")
                    .in_set(&name)
                    .element(INTERESTING_FILE),
            );
            summary.discarded += 1;
            continue;
        };
        if !validate_name(&name, session) {
            summary.discarded += 1;
            continue;
        }
        info!(
            rule_set = %name,
            name = %rule.name,
            extension = %rule.extension,
            path_keyword = %rule.path_keyword,
            description = %rule.description,
            "legacy rule compiled"
        );
        compiled.push(RuleSet::new(name, rule.description, vec![predicate]));
    }

    summary.registered = compiled.len();
    summary.diagnostics = session.diagnostics().len() - diagnostics_before;
    for set in compiled {
        registry.push(set);
    }
    Ok(summary)
}
