use serde::Serialize;
use sift_core::Predicate;

/// A named, described collection of predicates. Immutable once compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSet {
    name: String,
    description: String,
    predicates: Vec<Predicate>,
}

impl RuleSet {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        predicates: Vec<Predicate>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            predicates,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }
}
