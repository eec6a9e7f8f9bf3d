//! Rule-set name validation.
//!
//! Rule-set names may end up as directory names downstream, so they must
//! not contain path-breaking characters and must not be `.` or `..`.
//! Uniqueness is tracked per [`CompileSession`].

pub(crate) mod fuzzy;

use thiserror::Error;
use tracing::debug;

use crate::diagnostic::Diagnostic;
use crate::session::CompileSession;

/// Characters that are not allowed anywhere in a rule-set name.
pub const RESERVED_NAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Why a rule-set name was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameViolation {
    #[error("name contains reserved character '{0}'")]
    ReservedChar(char),
    #[error("name must not be '.' or '..'")]
    DirectoryAlias,
    #[error("name is already used by an earlier rule set")]
    Duplicate,
}

/// Session-independent checks: reserved characters and directory aliases.
pub fn check_name(name: &str) -> Result<(), NameViolation> {
    if let Some(c) = name.chars().find(|c| RESERVED_NAME_CHARS.contains(c)) {
        return Err(NameViolation::ReservedChar(c));
    }
    if name == "." || name == ".." {
        return Err(NameViolation::DirectoryAlias);
    }
    Ok(())
}

/// Validate `name` and, when it passes, reserve it for the rest of the session.
///
/// Never fails hard: a rejected name is reported through the session and
/// `false` is returned so the caller can skip the rule set.
pub fn validate_name(name: &str, session: &mut CompileSession) -> bool {
    let verdict = check_name(name).and_then(|()| {
        if session.is_name_taken(name) {
            Err(NameViolation::Duplicate)
        } else {
            Ok(())
        }
    });

    match verdict {
        Ok(()) => {
            session.accept_name(name);
            debug!(rule_set = %name, "rule set name accepted");
            true
        }
        Err(violation) => {
            session.report(
                Diagnostic::validation(format!("{violation}; rule set skipped"))
                    .in_set(name)
                    .value(name),
            );
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::DiagnosticKind;

    #[test]
    fn every_reserved_char_is_rejected() {
        for c in RESERVED_NAME_CHARS {
            let name = format!("bad{c}name");
            assert_eq!(check_name(&name), Err(NameViolation::ReservedChar(*c)), "{name}");
        }
    }

    #[test]
    fn directory_aliases_are_rejected() {
        assert_eq!(check_name("."), Err(NameViolation::DirectoryAlias));
        assert_eq!(check_name(".."), Err(NameViolation::DirectoryAlias));
        assert_eq!(check_name("..."), Ok(()));
        assert_eq!(check_name(".hidden"), Ok(()));
    }

    #[test]
    fn ordinary_names_pass() {
        assert_eq!(check_name("Pics"), Ok(()));
        assert_eq!(check_name("Unnamed_1"), Ok(()));
        assert_eq!(check_name("Photos & Video (2024)"), Ok(()));
    }

    #[test]
    fn validate_rejects_repeats_within_session() {
        let mut session = CompileSession::new();
        assert!(validate_name("Pics", &mut session));
        assert!(!validate_name("Pics", &mut session));
        assert!(validate_name("pics", &mut session), "uniqueness is case-sensitive");

        let diags = session.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].kind, DiagnosticKind::Validation);
        assert_eq!(diags[0].rule_set.as_deref(), Some("Pics"));
    }

    #[test]
    fn rejected_names_are_not_reserved() {
        let mut session = CompileSession::new();
        assert!(!validate_name("a/b", &mut session));
        assert!(!session.is_name_taken("a/b"));
        assert!(session.diagnostics()[0].message.contains("'/'"));
    }

    #[test]
    fn new_session_forgets_names() {
        let mut session = CompileSession::new();
        assert!(validate_name("Pics", &mut session));
        session.reset();
        assert!(validate_name("Pics", &mut session));
    }
}
