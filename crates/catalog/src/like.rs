//! Case-insensitive SQL `LIKE` matching for in-memory catalogs.
//!
//! Patterns are built from text that went through
//! [`escape_wildcards`](sift_core::escape_wildcards), so an in-memory store
//! and a SQL store given the same predicate agree on every entry.

use sift_core::{escape_wildcards, WildcardSyntax};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyOne,
    AnySequence,
}

/// A compiled `LIKE` pattern. Literals are stored upper-cased, mirroring
/// `UPPER(column) LIKE UPPER(pattern)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LikePattern {
    tokens: Vec<Token>,
}

impl LikePattern {
    /// Compile an already-escaped pattern written in `syntax`.
    pub fn new(pattern: &str, syntax: &WildcardSyntax) -> Self {
        let mut tokens = Vec::with_capacity(pattern.len());
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            if c == syntax.escape {
                // A dangling escape matches itself.
                let literal = chars.next().unwrap_or(c);
                push_literal(&mut tokens, literal);
            } else if c == syntax.any_sequence {
                if tokens.last() != Some(&Token::AnySequence) {
                    tokens.push(Token::AnySequence);
                }
            } else if c == syntax.any_single {
                tokens.push(Token::AnyOne);
            } else {
                push_literal(&mut tokens, c);
            }
        }
        Self { tokens }
    }

    /// `%needle%`: the text contains `needle` literally.
    pub fn contains(needle: &str, syntax: &WildcardSyntax) -> Self {
        let pattern = format!(
            "{any}{}{any}",
            escape_wildcards(needle, syntax),
            any = syntax.any_sequence
        );
        Self::new(&pattern, syntax)
    }

    /// `%needle`: the text ends with `needle` literally.
    pub fn suffix(needle: &str, syntax: &WildcardSyntax) -> Self {
        let pattern = format!("{}{}", syntax.any_sequence, escape_wildcards(needle, syntax));
        Self::new(&pattern, syntax)
    }

    pub fn is_match(&self, text: &str) -> bool {
        let text: Vec<char> = text.to_uppercase().chars().collect();
        let (mut t, mut p) = (0usize, 0usize);
        // Resume point after the most recent `%`: (pattern index, text index).
        let mut resume: Option<(usize, usize)> = None;

        while t < text.len() {
            match self.tokens.get(p) {
                Some(Token::AnySequence) => {
                    p += 1;
                    resume = Some((p, t));
                    continue;
                }
                Some(Token::AnyOne) => {
                    p += 1;
                    t += 1;
                    continue;
                }
                Some(Token::Literal(c)) if *c == text[t] => {
                    p += 1;
                    t += 1;
                    continue;
                }
                _ => {}
            }
            match resume {
                Some((rp, rt)) => {
                    p = rp;
                    t = rt + 1;
                    resume = Some((rp, rt + 1));
                }
                None => return false,
            }
        }

        while self.tokens.get(p) == Some(&Token::AnySequence) {
            p += 1;
        }
        p == self.tokens.len()
    }
}

fn push_literal(tokens: &mut Vec<Token>, c: char) {
    tokens.extend(c.to_uppercase().map(Token::Literal));
}
