//! Rule document vocabulary and the compiled rule-set model.

mod rule_set;
mod tags;

pub use rule_set::RuleSet;
pub use tags::*;
