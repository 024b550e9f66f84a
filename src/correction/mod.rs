//! Correction module for scribefix
//!
//! Regex substitution followed by fuzzy matching against known terms.

mod fuzzy;
mod pattern;
mod pipeline;
mod rules;
pub mod similarity;

pub use fuzzy::{FuzzyCorrector, TermMatch};
pub use pattern::{check_rule, PatternCorrector};
pub use pipeline::{correct_text, correct_text_with, Corrector};
pub use rules::{default_rules, default_terms, CorrectionRule, FUZZY_THRESHOLD};
