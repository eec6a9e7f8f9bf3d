//! Wildcard escaping for substring patterns.
//!
//! User-supplied substrings (extensions, path keywords) end up inside
//! wildcard patterns such as SQL `LIKE '%keyword%'`. Any wildcard or escape
//! character in the user text must be neutralized first, otherwise `50%`
//! would match `500` and `a_b` would match `axb`.

use serde::{Deserialize, Serialize};

/// The special characters of a wildcard-matching language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildcardSyntax {
    /// Matches any (possibly empty) sequence.
    pub any_sequence: char,
    /// Matches exactly one character.
    pub any_single: char,
    /// Makes the following character literal.
    pub escape: char,
}

impl WildcardSyntax {
    /// SQL `LIKE` with `ESCAPE '#'`.
    pub const SQL_LIKE: WildcardSyntax = WildcardSyntax {
        any_sequence: '%',
        any_single: '_',
        escape: '#',
    };

    pub fn is_special(&self, c: char) -> bool {
        c == self.any_sequence || c == self.any_single || c == self.escape
    }
}

impl Default for WildcardSyntax {
    fn default() -> Self {
        Self::SQL_LIKE
    }
}

/// Prefix every wildcard and escape character in `input` with the escape character.
pub fn escape_wildcards(input: &str, syntax: &WildcardSyntax) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for c in input.chars() {
        if syntax.is_special(c) {
            out.push(syntax.escape);
        }
        out.push(c);
    }
    out
}
