//! Ordered regex substitution

use regex::{NoExpand, Regex, RegexBuilder};

use crate::correction::CorrectionRule;
use crate::{Result, ScribefixError};

#[derive(Debug, Clone)]
struct CompiledRule {
    regex: Regex,
    replacement: String,
}

impl CompiledRule {
    fn compile(rule: &CorrectionRule) -> Result<Self> {
        let regex = RegexBuilder::new(&rule.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| ScribefixError::InvalidPattern {
                pattern: rule.pattern.clone(),
                source,
            })?;

        Ok(Self {
            regex,
            replacement: rule.replacement.clone(),
        })
    }
}

/// Check that a rule's pattern compiles
pub fn check_rule(rule: &CorrectionRule) -> Result<()> {
    CompiledRule::compile(rule).map(|_| ())
}

/// Applies correction rules one after another to the running text
#[derive(Debug, Clone, Default)]
pub struct PatternCorrector {
    rules: Vec<CompiledRule>,
}

impl PatternCorrector {
    /// Compile `rules` in order. Rules whose pattern does not compile are
    /// skipped with a warning; the remaining rules keep their order.
    pub fn new(rules: &[CorrectionRule]) -> Self {
        let mut compiled = Vec::with_capacity(rules.len());

        for rule in rules {
            match CompiledRule::compile(rule) {
                Ok(rule) => compiled.push(rule),
                Err(e) => tracing::warn!("Skipping correction rule: {}", e),
            }
        }

        Self { rules: compiled }
    }

    /// Number of rules that compiled
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Replace every match of each rule, in rule order
    pub fn apply(&self, text: &str) -> String {
        let mut result = text.to_string();

        for rule in &self.rules {
            result = rule
                .regex
                .replace_all(&result, NoExpand(&rule.replacement))
                .into_owned();
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::default_rules;

    fn builtin() -> PatternCorrector {
        PatternCorrector::new(&default_rules())
    }

    #[test]
    fn clawdbot_variants_are_normalized() {
        let corrector = builtin();
        for input in [
            "cloud boot",
            "CLOUD BOOT",
            "cloudboot",
            "Clowdbot",
            "clawd bot",
            "cloud bot",
            "CloudBot",
            "clawdbot",
        ] {
            assert_eq!(corrector.apply(input), "clawdbot", "input {:?}", input);
        }
    }

    #[test]
    fn processed_variants_are_normalized() {
        let corrector = builtin();
        for input in [
            "pro system",
            "process system",
            "process ed",
            "processed",
            "PROSSED",
            "prosess",
            "prosed",
        ] {
            assert_eq!(corrector.apply(input), "processed", "input {:?}", input);
        }
    }

    #[test]
    fn directory_code_variants_are_lowercased() {
        let corrector = builtin();
        for input in ["AMVZ", "amvz", "AVZ", "avz", "Amz", "ANVZ", "anvz"] {
            assert_eq!(corrector.apply(input), "anvz", "input {:?}", input);
        }
    }

    #[test]
    fn patterns_respect_word_boundaries() {
        let corrector = builtin();
        assert_eq!(corrector.apply("avzone"), "avzone");
        assert_eq!(corrector.apply("procloudboot"), "procloudboot");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let corrector = builtin();
        assert_eq!(
            corrector.apply("cloud boot then CLOUDBOOT then cloud   bot"),
            "clawdbot then clawdbot then clawdbot"
        );
    }

    #[test]
    fn chinese_pronoun_is_swapped() {
        let corrector = builtin();
        assert_eq!(corrector.apply("请帮你看一下"), "请帮我看一下");
    }

    #[test]
    fn later_rules_see_earlier_output() {
        let mut rules = default_rules();
        rules.push(CorrectionRule::new("clawdbot", "ClawdBot"));
        let corrector = PatternCorrector::new(&rules);

        assert_eq!(corrector.apply("cloud boot"), "ClawdBot");
    }

    #[test]
    fn replacement_is_literal() {
        let corrector = PatternCorrector::new(&[CorrectionRule::new(r"(\w+)@", "$1 at")]);
        assert_eq!(corrector.apply("me@"), "$1 at");
    }

    #[test]
    fn invalid_rule_is_skipped() {
        let rules = vec![
            CorrectionRule::new("(unclosed", "x"),
            CorrectionRule::new(r"\bfoo\b", "bar"),
        ];
        let corrector = PatternCorrector::new(&rules);

        assert_eq!(corrector.len(), 1);
        assert_eq!(corrector.apply("foo (unclosed"), "bar (unclosed");
        assert!(matches!(
            check_rule(&rules[0]),
            Err(ScribefixError::InvalidPattern { .. })
        ));
    }
}
