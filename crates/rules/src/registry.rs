//! Ordered store of the rule sets accepted during one run.

use crate::schema::RuleSet;

#[derive(Debug, Default)]
pub struct RuleSetRegistry {
    sets: Vec<RuleSet>,
}

impl RuleSetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, set: RuleSet) {
        self.sets.push(set);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleSet> {
        self.sets.iter()
    }

    pub fn as_slice(&self) -> &[RuleSet] {
        &self.sets
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&RuleSet> {
        self.sets.iter().find(|s| s.name() == name)
    }

    /// Total predicates across all registered sets.
    pub fn predicate_count(&self) -> usize {
        self.sets.iter().map(|s| s.predicates().len()).sum()
    }

    pub fn clear(&mut self) {
        self.sets.clear();
    }
}

impl<'a> IntoIterator for &'a RuleSetRegistry {
    type Item = &'a RuleSet;
    type IntoIter = std::slice::Iter<'a, RuleSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
