//! Ordered literal and pattern replacement rules.
//!
//! A [`RuleBook`] is a list of [`RuleSet`]s, each an ordered list of
//! [`Rule`]s optionally scoped to particular files or directories. Applying a
//! book to a document runs every applicable rule in declared order and counts
//! replacements per category. Later rules see the output of earlier ones.

pub mod book;
pub mod engine;
pub mod error;
pub mod rule;

pub use book::{RuleBook, RuleBookSpec, RuleSet, RuleSetSpec};
pub use engine::{Rewrite, apply_rules};
pub use error::{Error, Result};
pub use rule::{Matcher, Rule, RuleSpec};
