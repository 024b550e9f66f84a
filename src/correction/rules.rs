//! Correction rules and the built-in tables

/// Minimum similarity for a fuzzy replacement
pub const FUZZY_THRESHOLD: f64 = 0.75;

/// A case-insensitive regex pattern and the literal text that replaces it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectionRule {
    pub pattern: String,
    pub replacement: String,
}

impl CorrectionRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

// Most specific patterns first: later rules see the output of earlier ones.
const DEFAULT_CORRECTIONS: &[(&str, &str)] = &[
    // clawdbot
    (r"\bcloud\s*boot\b", "clawdbot"),
    (r"\bcloudboot\b", "clawdbot"),
    (r"\bclowdbot\b", "clawdbot"),
    (r"\bclawd\s*bot\b", "clawdbot"),
    (r"\bcloud\s*bot\b", "clawdbot"),
    // processed
    (r"\bpro\s*system\b", "processed"),
    (r"\bprocess\s*system\b", "processed"),
    (r"\bprocess\s*ed\b", "processed"),
    (r"\bprossed\b", "processed"),
    (r"\bprosess\b", "processed"),
    (r"\bprosed\b", "processed"),
    // anvz directory
    (r"\bAMVZ\b", "anvz"),
    (r"\bamvz\b", "anvz"),
    (r"\bAVZ\b", "anvz"),
    (r"\bavz\b", "anvz"),
    (r"\bAMZ\b", "anvz"),
    (r"\bamz\b", "anvz"),
    (r"\bANVZ\b", "anvz"),
    // Chinese
    ("帮你", "帮我"),
];

const DEFAULT_TERMS: &[&str] = &[
    "clawdbot",
    "processed",
    "anvz",
    "inbound",
    "outbound",
    "media",
];

/// Built-in correction rules in application order
pub fn default_rules() -> Vec<CorrectionRule> {
    DEFAULT_CORRECTIONS
        .iter()
        .map(|(pattern, replacement)| CorrectionRule::new(*pattern, *replacement))
        .collect()
}

/// Built-in known terms in match order
pub fn default_terms() -> Vec<String> {
    DEFAULT_TERMS.iter().map(|term| term.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::check_rule;

    #[test]
    fn builtin_rules_compile() {
        for rule in default_rules() {
            assert!(check_rule(&rule).is_ok(), "rule {:?} should compile", rule);
        }
    }

    #[test]
    fn builtin_terms_keep_declared_order() {
        assert_eq!(
            default_terms(),
            vec!["clawdbot", "processed", "anvz", "inbound", "outbound", "media"]
        );
    }
}
