//! In-memory rendering: a [`Predicate`] becomes an [`EntryMatcher`] that
//! answers the same question the SQL condition would, one entry at a time.

use sift_core::{Entry, MatchKind, Predicate, TypeFilter, WildcardSyntax};

use super::PredicateRenderer;
use crate::like::LikePattern;

#[derive(Debug, Clone)]
enum NameTest {
    /// `UPPER(name) = UPPER(value)`; value stored upper-cased.
    Equals(String),
    Like(LikePattern),
}

/// Pre-folded, ready-to-run form of a predicate.
#[derive(Debug, Clone)]
pub struct EntryMatcher {
    name: NameTest,
    path: Option<LikePattern>,
    type_filter: TypeFilter,
}

impl EntryMatcher {
    pub fn matches(&self, entry: &Entry) -> bool {
        if !self.type_filter.admits(entry.kind) {
            return false;
        }
        let name_ok = match &self.name {
            NameTest::Equals(expected) => entry.name.to_uppercase() == *expected,
            NameTest::Like(pattern) => pattern.is_match(&entry.name),
        };
        if !name_ok {
            return false;
        }
        match &self.path {
            Some(pattern) => pattern.is_match(&entry.full_path),
            None => true,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MatcherRenderer {
    pub syntax: WildcardSyntax,
}

impl PredicateRenderer for MatcherRenderer {
    type Output = EntryMatcher;

    fn render(&self, predicate: &Predicate) -> EntryMatcher {
        let name = match predicate.match_kind {
            MatchKind::ExactName => NameTest::Equals(predicate.match_value.to_uppercase()),
            MatchKind::ExtensionSuffix => {
                NameTest::Like(LikePattern::suffix(&predicate.match_value, &self.syntax))
            }
        };
        EntryMatcher {
            name,
            path: predicate
                .path_filter
                .as_deref()
                .map(|p| LikePattern::contains(p, &self.syntax)),
            type_filter: predicate.type_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_core::EntryKind;

    fn matcher(p: &Predicate) -> EntryMatcher {
        MatcherRenderer::default().render(p)
    }

    fn file(name: &str, path: &str) -> Entry {
        Entry::new(1, name, path, EntryKind::File)
    }

    #[test]
    fn exact_name_is_whole_name_and_case_insensitive() {
        let m = matcher(&Predicate::exact_name("bomb"));
        assert!(m.matches(&file("Bomb", "/x/Bomb")));
        assert!(m.matches(&file("BOMB", "/BOMB")));
        assert!(!m.matches(&file("abomb", "/x/abomb")));
        assert!(!m.matches(&file("bomb.txt", "/x/bomb.txt")));
    }

    #[test]
    fn exact_name_treats_wildcards_literally() {
        let m = matcher(&Predicate::exact_name("a_c"));
        assert!(m.matches(&file("A_C", "/a_c")));
        assert!(!m.matches(&file("abc", "/abc")));
    }

    #[test]
    fn extension_is_suffix_match() {
        let m = matcher(&Predicate::extension_suffix("jpg"));
        assert!(m.matches(&file("a.jpg", "/a.jpg")));
        assert!(m.matches(&file("A.JPG", "/A.JPG")));
        assert!(!m.matches(&file("a.png", "/a.png")));
        assert!(!m.matches(&file("jpg", "/jpg")));
    }

    #[test]
    fn path_filter_is_substring() {
        let m = matcher(&Predicate::exact_name("bomb").with_path_filter(Some("temp".into())));
        assert!(m.matches(&file("Bomb", "/tmp/temp/x")));
        assert!(m.matches(&file("bomb", "/Users/Templates/bomb")));
        assert!(!m.matches(&file("bomb", "/tmp/bomb")));
    }

    #[test]
    fn type_filter_applies() {
        let m = matcher(&Predicate::exact_name("cache").with_type_filter(TypeFilter::DirectoryOnly));
        assert!(m.matches(&Entry::new(1, "cache", "/var/cache", EntryKind::Directory)));
        assert!(!m.matches(&Entry::new(2, "cache", "/var/cache", EntryKind::File)));
    }
}
