//! Fuzzy replacement of single words against known terms

use crate::correction::similarity::ratio;
use crate::correction::FUZZY_THRESHOLD;

/// Best known term for a word
#[derive(Debug, Clone, PartialEq)]
pub struct TermMatch<'a> {
    /// The term in its canonical casing
    pub term: &'a str,
    /// Similarity in `[0, 1]`; `1.0` means a case-insensitive exact match
    pub score: f64,
}

impl TermMatch<'_> {
    pub fn is_exact(&self) -> bool {
        self.score >= 1.0
    }
}

#[derive(Debug, Clone)]
struct KnownTerm {
    canonical: String,
    lowered: String,
}

/// Replaces near-miss words with the known term they most resemble
#[derive(Debug, Clone)]
pub struct FuzzyCorrector {
    terms: Vec<KnownTerm>,
    threshold: f64,
}

impl FuzzyCorrector {
    /// Terms are matched in the given order; earlier terms win ties.
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let terms = terms
            .into_iter()
            .map(|term| {
                let canonical = term.into();
                let lowered = canonical.to_lowercase();
                KnownTerm { canonical, lowered }
            })
            .collect();

        Self {
            terms,
            threshold: FUZZY_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Find the best term for `word`.
    ///
    /// An exact case-insensitive match returns immediately with score `1.0`.
    /// Otherwise the highest-scoring term at or above the threshold wins, the
    /// first one in term order on a tie.
    pub fn best_match(&self, word: &str) -> Option<TermMatch<'_>> {
        let word = word.to_lowercase();
        let mut best: Option<TermMatch<'_>> = None;

        for term in &self.terms {
            if term.lowered == word {
                return Some(TermMatch {
                    term: &term.canonical,
                    score: 1.0,
                });
            }

            let score = ratio(&word, &term.lowered);
            let best_score = best.as_ref().map_or(0.0, |m| m.score);
            if score > best_score && score >= self.threshold {
                best = Some(TermMatch {
                    term: &term.canonical,
                    score,
                });
            }
        }

        best
    }

    /// Correct each whitespace-separated token. Tokens are rejoined with
    /// single spaces.
    pub fn apply(&self, text: &str) -> String {
        text.split_whitespace()
            .map(|token| self.correct_token(token))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn correct_token(&self, token: &str) -> String {
        let (prefix, core, suffix) = split_token(token);
        if core.is_empty() {
            return token.to_string();
        }

        match self.best_match(core) {
            Some(m) if !m.is_exact() => {
                tracing::debug!(
                    "Fuzzy corrected {:?} -> {:?} ({:.3} >= {:.2})",
                    core,
                    m.term,
                    m.score,
                    self.threshold()
                );
                format!("{}{}{}", prefix, m.term, suffix)
            }
            _ => token.to_string(),
        }
    }
}

/// Split a token into leading punctuation, alphanumeric core and trailing punctuation
fn split_token(token: &str) -> (&str, &str, &str) {
    let rest = token.trim_start_matches(|c: char| !c.is_alphanumeric());
    let core = rest.trim_end_matches(|c: char| !c.is_alphanumeric());

    let prefix = &token[..token.len() - rest.len()];
    let suffix = &rest[core.len()..];
    (prefix, core, suffix)
}
