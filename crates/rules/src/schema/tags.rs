//! Element and attribute names of both rule-file dialects.

/// Canonical dialect: one rule set, many filtered predicates.
pub const INTERESTING_FILE_SET: &str = "INTERESTING_FILE_SET";
pub const NAME: &str = "NAME";
pub const EXTENSION: &str = "EXTENSION";

/// Legacy dialect: one predicate per element.
pub const INTERESTING_FILE: &str = "INTERESTING_FILE";
pub const PATH_KEYWORD: &str = "PATH_KEYWORD";
pub const DESCRIPTION: &str = "DESCRIPTION";

pub const ATTR_NAME: &str = "name";
pub const ATTR_DESCRIPTION: &str = "description";
pub const ATTR_PATH_FILTER: &str = "pathFilter";
pub const ATTR_TYPE_FILTER: &str = "typeFilter";

pub const SET_ATTRIBUTES: &[&str] = &[ATTR_NAME, ATTR_DESCRIPTION];
pub const FILTER_ATTRIBUTES: &[&str] = &[ATTR_PATH_FILTER, ATTR_TYPE_FILTER];

/// Tagged view of an element name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    InterestingFileSet,
    Name,
    Extension,
    InterestingFile,
    PathKeyword,
    Description,
    Unknown,
}

impl ElementKind {
    /// Tags are case-sensitive, as in XML.
    pub fn of(tag: &str) -> ElementKind {
        match tag {
            INTERESTING_FILE_SET => ElementKind::InterestingFileSet,
            NAME => ElementKind::Name,
            EXTENSION => ElementKind::Extension,
            INTERESTING_FILE => ElementKind::InterestingFile,
            PATH_KEYWORD => ElementKind::PathKeyword,
            DESCRIPTION => ElementKind::Description,
            _ => ElementKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_case_sensitive() {
        assert_eq!(ElementKind::of("NAME"), ElementKind::Name);
        assert_eq!(ElementKind::of("name"), ElementKind::Unknown);
        assert_eq!(ElementKind::of("INTERESTING_FILE_SET"), ElementKind::InterestingFileSet);
        assert_eq!(ElementKind::of("INTERESTING_FILE"), ElementKind::InterestingFile);
    }
}
