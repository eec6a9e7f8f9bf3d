//! SQL condition rendering for catalog tables shaped like
//! `files(file_id, name, full_path, meta_type)`.

use sift_core::{escape_wildcards, MatchKind, Predicate, TypeFilter, WildcardSyntax};

use super::PredicateRenderer;

/// `meta_type` value for regular files.
pub const META_TYPE_REG: u8 = 1;
/// `meta_type` value for directories.
pub const META_TYPE_DIR: u8 = 2;

/// Renders a predicate as a `WHERE ... ORDER BY ...` clause.
///
/// Values are quoted with doubled single quotes; `LIKE` operands are
/// escaped with the configured wildcard syntax and carry an explicit
/// `ESCAPE` clause.
#[derive(Debug, Clone)]
pub struct SqlRenderer {
    pub syntax: WildcardSyntax,
    pub id_column: String,
    pub name_column: String,
    pub path_column: String,
    pub type_column: String,
}

impl Default for SqlRenderer {
    fn default() -> Self {
        Self {
            syntax: WildcardSyntax::SQL_LIKE,
            id_column: "file_id".to_string(),
            name_column: "name".to_string(),
            path_column: "full_path".to_string(),
            type_column: "meta_type".to_string(),
        }
    }
}

impl SqlRenderer {
    /// Single-quoted SQL string literal.
    pub fn quote(value: &str) -> String {
        format!("'{}'", value.replace('\'', "''"))
    }

    fn like(&self, column: &str, pattern: &str) -> String {
        format!(
            "UPPER({}) LIKE UPPER({}) ESCAPE {}",
            column,
            Self::quote(pattern),
            Self::quote(&self.syntax.escape.to_string())
        )
    }
}

impl PredicateRenderer for SqlRenderer {
    type Output = String;

    fn render(&self, predicate: &Predicate) -> String {
        let any = self.syntax.any_sequence;
        let mut conditions = Vec::with_capacity(3);

        conditions.push(match predicate.match_kind {
            MatchKind::ExactName => format!(
                "UPPER({}) = UPPER({})",
                self.name_column,
                Self::quote(&predicate.match_value)
            ),
            MatchKind::ExtensionSuffix => {
                let pattern = format!("{}{}", any, escape_wildcards(&predicate.match_value, &self.syntax));
                self.like(&self.name_column, &pattern)
            }
        });

        if let Some(path) = &predicate.path_filter {
            let pattern = format!("{any}{}{any}", escape_wildcards(path, &self.syntax));
            conditions.push(self.like(&self.path_column, &pattern));
        }

        match predicate.type_filter {
            TypeFilter::None => {}
            TypeFilter::RegularFileOnly => {
                conditions.push(format!("{} = {}", self.type_column, META_TYPE_REG))
            }
            TypeFilter::DirectoryOnly => {
                conditions.push(format!("{} = {}", self.type_column, META_TYPE_DIR))
            }
        }

        format!("WHERE {} ORDER BY {}", conditions.join(" AND "), self.id_column)
    }
}
