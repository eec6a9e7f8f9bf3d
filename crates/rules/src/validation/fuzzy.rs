//! "Did you mean …?" hints for misspelled tags, attributes and filter values.
//!
//! The vocabularies are tiny (two tags, two attributes per element), so the
//! edit budget is a fixed band by candidate length rather than a ratio.
//! Case is ignored: `typefilter` is one case fix away from `typeFilter`.

/// Edits tolerated before a candidate stops being a plausible typo.
fn edit_budget(candidate: &str) -> usize {
    match candidate.chars().count() {
        0..=4 => 1,
        5..=8 => 2,
        _ => 3,
    }
}

/// Closest candidate within its edit budget. Ties go to the earlier candidate.
pub(crate) fn fuzzy_match<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let input = input.to_lowercase();
    candidates
        .iter()
        .map(|&candidate| (candidate, edit_distance(&input, &candidate.to_lowercase())))
        .filter(|&(candidate, dist)| dist <= edit_budget(candidate))
        .min_by_key(|&(_, dist)| dist)
        .map(|(candidate, _)| candidate)
}

/// Levenshtein distance over chars, one row of state.
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(row[j + 1] + 1);
        }
    }

    row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHILD_TAGS: &[&str] = &["NAME", "EXTENSION"];
    const FILTER_ATTRS: &[&str] = &["pathFilter", "typeFilter"];
    const TYPE_VALUES: &[&str] = &["file", "dir"];

    #[test]
    fn edit_distance_basic() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abc", ""), 3);
        assert_eq!(edit_distance("abc", "abc"), 0);
        assert_eq!(edit_distance("été", "ete"), 2);
    }

    #[test]
    fn close_spellings_are_suggested() {
        assert_eq!(fuzzy_match("EXTENTION", CHILD_TAGS), Some("EXTENSION"));
        assert_eq!(fuzzy_match("name", CHILD_TAGS), Some("NAME"));
        assert_eq!(fuzzy_match("pathfilter", FILTER_ATTRS), Some("pathFilter"));
        assert_eq!(fuzzy_match("typeFiler", FILTER_ATTRS), Some("typeFilter"));
        assert_eq!(fuzzy_match("File", TYPE_VALUES), Some("file"));
        assert_eq!(fuzzy_match("dirs", TYPE_VALUES), Some("dir"));
    }

    #[test]
    fn short_candidates_get_a_tight_budget() {
        // Two edits from NAME, which is too far for a four-letter tag.
        assert_eq!(fuzzy_match("NOMS", CHILD_TAGS), None);
        assert_eq!(fuzzy_match("folder", TYPE_VALUES), None);
        assert_eq!(fuzzy_match("directory", TYPE_VALUES), None);
    }

    #[test]
    fn distant_input_gets_no_suggestion() {
        assert_eq!(fuzzy_match("PATH_KEYWORD", CHILD_TAGS), None);
        assert_eq!(fuzzy_match("zzzzzzzzzzzzz", FILTER_ATTRS), None);
        assert_eq!(fuzzy_match("", FILTER_ATTRS), None);
    }
}
