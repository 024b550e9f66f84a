//! Correction pipeline orchestration

use std::path::Path;

use crate::config::{resolve_path, UserVocabulary};
use crate::correction::{
    default_rules, default_terms, CorrectionRule, FuzzyCorrector, PatternCorrector,
};

/// Pattern stage followed by fuzzy stage
#[derive(Debug, Clone)]
pub struct Corrector {
    pattern: PatternCorrector,
    fuzzy: FuzzyCorrector,
}

impl Corrector {
    /// Build a corrector from explicit rules and terms, in the given order
    pub fn new<I, S>(rules: &[CorrectionRule], terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            pattern: PatternCorrector::new(rules),
            fuzzy: FuzzyCorrector::new(terms),
        }
    }

    /// Built-in rules and terms only
    pub fn builtin() -> Self {
        Self::from_vocabulary(&UserVocabulary::default())
    }

    /// Built-in rules and terms followed by the user's additions
    pub fn from_vocabulary(vocabulary: &UserVocabulary) -> Self {
        let mut rules = default_rules();
        rules.extend(vocabulary.rules());

        let terms = default_terms()
            .into_iter()
            .chain(vocabulary.known_terms.iter().cloned());

        Self::new(&rules, terms)
    }

    /// Built-ins plus the vocabulary at `path`, or at the resolved default
    /// location when `path` is `None`. Falls back to built-ins only when no
    /// location can be determined.
    pub fn from_path(path: Option<&Path>) -> Self {
        match resolve_path(path) {
            Ok(path) => Self::from_vocabulary(&UserVocabulary::load(&path).vocabulary),
            Err(e) => {
                tracing::warn!("Could not locate vocabulary file: {}", e);
                Self::builtin()
            }
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.fuzzy = self.fuzzy.with_threshold(threshold);
        self
    }

    /// Correct `text`. Empty input is returned as-is.
    pub fn correct(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let substituted = self.pattern.apply(text);
        self.fuzzy.apply(&substituted)
    }
}

/// Correct `text` using the vocabulary at the default location.
///
/// A vocabulary that is missing, unreadable or malformed is treated as empty.
pub fn correct_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    Corrector::from_path(None).correct(text)
}

/// Correct `text` using the vocabulary at `path`
pub fn correct_text_with(text: &str, path: &Path) -> String {
    if text.is_empty() {
        return String::new();
    }

    Corrector::from_path(Some(path)).correct(text)
}
