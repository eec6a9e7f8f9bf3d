//! Predicate renderers.
//!
//! A renderer turns a store-independent [`Predicate`] into whatever a
//! particular backing store executes. Every renderer must preserve the
//! semantics documented on [`Predicate`]: case-insensitive comparison,
//! literal (escaped) substrings, ascending id order.

mod matcher;
mod sql;

use sift_core::Predicate;

pub use matcher::{EntryMatcher, MatcherRenderer};
pub use sql::SqlRenderer;

pub trait PredicateRenderer {
    type Output;

    fn render(&self, predicate: &Predicate) -> Self::Output;
}
