//! Canonical-dialect compiler: `INTERESTING_FILE_SET` elements into [`RuleSet`]s.
//!
//! Every malformed piece of input is reported through the
//! [`CompileSession`] and skipped. Only the offending attribute, child or
//! (for bad names and empty sets) rule set is dropped; the rest of the
//! document still compiles.


use sift_core::{Predicate, TypeFilter};
use tracing::{debug, info};

use crate::diagnostic::Diagnostic;
use crate::loader::{Element, LoadSummary};
use crate::registry::RuleSetRegistry;
use crate::schema::{
    ElementKind, RuleSet, ATTR_DESCRIPTION, ATTR_NAME, ATTR_PATH_FILTER, ATTR_TYPE_FILTER,
    EXTENSION, FILTER_ATTRIBUTES, NAME, SET_ATTRIBUTES,
};
use crate::session::CompileSession;
use crate::validation::fuzzy::fuzzy_match;
use crate::validation::validate_name;

type PredicateBuilder = fn(String) -> Predicate;

/// Child tags that produce a predicate, and how.
const PREDICATE_TABLE: &[(&str, PredicateBuilder)] = &[
    (NAME, name_predicate),
    (EXTENSION, extension_predicate),
];

const PREDICATE_TAGS: &[&str] = &[NAME, EXTENSION];
const TYPE_FILTER_VALUES: &[&str] = &["file", "dir"];

fn name_predicate(value: String) -> Predicate {
    Predicate::exact_name(value)
}

fn extension_predicate(value: String) -> Predicate {
    Predicate::extension_suffix(value)
}

fn builder_for(tag: &str) -> Option<PredicateBuilder> {
    PREDICATE_TABLE
        .iter()
        .find(|(t, _)| *t == tag)
        .map(|(_, build)| *build)
}

pub struct RuleCompiler;

impl RuleCompiler {
    /// Compile one `INTERESTING_FILE_SET` element.
    ///
    /// Returns `None` when the set's name is rejected or no predicate
    /// survived; the reason is recorded in `session`.
    pub fn compile(set: &Element, session: &mut CompileSession) -> Option<RuleSet> {
        let mut name = String::new();
        let mut description = String::new();
        let mut pending = Vec::new();

        for (attr, value) in &set.attributes {
            if value.is_empty() {
                pending.push(
                    Diagnostic::schema("empty attribute value ignored")
                        .element(&set.tag)
                        .attribute(attr),
                );
                continue;
            }
            match attr.as_str() {
                ATTR_NAME => name = value.clone(),
                ATTR_DESCRIPTION => description = value.clone(),
                _ => pending.push(
                    Diagnostic::schema("unrecognized attribute ignored")
                        .element(&set.tag)
                        .attribute(attr)
                        .value(value)
                        .suggest(fuzzy_match(attr, SET_ATTRIBUTES)),
                ),
            }
        }

        if name.is_empty() {
            name = session.next_default_name();
            debug!(rule_set = %name, "no name attribute, using generated name");
        }
        for diagnostic in pending {
            session.report(diagnostic.in_set(&name));
        }

        if !validate_name(&name, session) {
            return None;
        }

        let mut predicates = Vec::new();
        for child in &set.children {
            let Some(build) = builder_for(&child.tag) else {
                session.report(
                    Diagnostic::schema("unrecognized element ignored")
                        .in_set(&name)
                        .element(&child.tag)
                        .suggest(fuzzy_match(&child.tag, PREDICATE_TAGS)),
                );
                continue;
            };

            let text = child.trimmed_text();
            if text.is_empty() {
                session.report(
                    Diagnostic::schema("element has no text, ignored")
                        .in_set(&name)
                        .element(&child.tag),
                );
                continue;
            }

            let predicate = apply_filters(build(text.to_string()), child, &name, session);
            predicates.push(predicate);
        }

        if predicates.is_empty() {
            session.report(
                Diagnostic::schema("no NAME or EXTENSION predicates, rule set discarded")
                    .in_set(&name)
                    .element(&set.tag),
            );
            return None;
        }

        debug!(rule_set = %name, predicates = predicates.len(), "rule set compiled");
        Some(RuleSet::new(name, description, predicates))
    }
}

/// Apply a predicate element's `pathFilter` / `typeFilter` attributes.
fn apply_filters(
    mut predicate: Predicate,
    child: &Element,
    set_name: &str,
    session: &mut CompileSession,
) -> Predicate {
    for (attr, value) in &child.attributes {
        if value.is_empty() {
            session.report(
                Diagnostic::schema("empty attribute value ignored")
                    .in_set(set_name)
                    .element(&child.tag)
                    .attribute(attr),
            );
            continue;
        }
        match attr.as_str() {
            ATTR_PATH_FILTER => predicate = predicate.with_path_filter(Some(value.clone())),
            ATTR_TYPE_FILTER => match TypeFilter::from_attr(value) {
                Some(filter) => predicate = predicate.with_type_filter(filter),
                None => session.report(
                    Diagnostic::schema("unrecognized type filter, entries of any type match")
                        .in_set(set_name)
                        .element(&child.tag)
                        .attribute(attr)
                        .value(value)
                        .suggest(fuzzy_match(value, TYPE_FILTER_VALUES)),
                ),
            },
            _ => session.report(
                Diagnostic::schema("unrecognized attribute ignored")
                    .in_set(set_name)
                    .element(&child.tag)
                    .attribute(attr)
                    .value(value)
                    .suggest(fuzzy_match(attr, FILTER_ATTRIBUTES)),
            ),
        }
    }
    predicate
}

/// Compile every `INTERESTING_FILE_SET` in `root` (the root itself
/// included) in document order and register the survivors.
pub fn compile_document(
    root: &Element,
    session: &mut CompileSession,
    registry: &mut RuleSetRegistry,
) -> LoadSummary {
    let diagnostics_before = session.diagnostics().len();
    let mut summary = LoadSummary::default();

    for set in root.find_all(ElementKind::InterestingFileSet) {
        match RuleCompiler::compile(set, session) {
            Some(rule_set) => {
                registry.push(rule_set);
                summary.registered += 1;
            }
            None => summary.discarded += 1,
        }
    }

    summary.diagnostics = session.diagnostics().len() - diagnostics_before;
    info!(
        registered = summary.registered,
        discarded = summary.discarded,
        diagnostics = summary.diagnostics,
        "rule document compiled"
    );
    summary
}
