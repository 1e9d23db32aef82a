//! Applying ordered rules to a document

use std::collections::BTreeMap;

use crate::rule::Rule;

/// The result of running rules over one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rewrite {
    pub text: String,
    /// Replacements per category, only for categories that fired
    pub counts: BTreeMap<String, usize>,
}

impl Rewrite {
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn merge_counts(&mut self, other: BTreeMap<String, usize>) {
        for (category, n) in other {
            *self.counts.entry(category).or_default() += n;
        }
    }
}

/// Run `rules` in order over `text`.
///
/// Each rule's count is taken against the text as it stands when that rule
/// runs, so cascades (a later rule matching an earlier rule's output) are
/// counted for both.
pub fn apply_rules<'r, I>(rules: I, text: &str) -> Rewrite
where
    I: IntoIterator<Item = &'r Rule>,
{
    let mut current = text.to_string();
    let mut counts = BTreeMap::new();

    for rule in rules {
        let (replaced, n) = rule.apply(&current);
        if n == 0 {
            continue;
        }
        let replaced = replaced.into_owned();
        tracing::trace!(category = rule.category(), count = n, "Rule fired");
        *counts.entry(rule.category().to_string()).or_default() += n;
        current = replaced;
    }

    Rewrite {
        text: current,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_rules_cascade_in_order() {
        let rules = [
            Rule::literal("both UCP and ACP protocols", "the UCP protocol", "acp_claim"),
            Rule::literal("UCP protocol", "UCP standard", "wording"),
        ];

        let rewrite = apply_rules(&rules, "We speak both UCP and ACP protocols.");

        assert_eq!(rewrite.text, "We speak the UCP standard.");
        assert_eq!(rewrite.counts.get("acp_claim"), Some(&1));
        assert_eq!(rewrite.counts.get("wording"), Some(&1));
        assert_eq!(rewrite.total(), 2);
    }

    #[test]
    fn test_broad_rule_first_shadows_narrow_rule() {
        let rules = [
            Rule::literal("multi-protocol support", "UCP product discovery", "acp_claim"),
            Rule::literal("multi-protocol", "UCP-based", "acp_claim"),
        ];

        let rewrite = apply_rules(&rules, "multi-protocol support, multi-protocol design");

        assert_eq!(rewrite.text, "UCP product discovery, UCP-based design");
        assert_eq!(rewrite.counts.get("acp_claim"), Some(&2));
    }

    #[test]
    fn test_no_rules_fire() {
        let rules = [Rule::literal("absent", "x", "c")];
        let rewrite = apply_rules(&rules, "text");
        assert_eq!(rewrite.text, "text");
        assert!(rewrite.counts.is_empty());
    }

    #[test]
    fn test_merge_counts() {
        let mut rewrite = Rewrite::default();
        rewrite.merge_counts(BTreeMap::from([("a".to_string(), 2)]));
        rewrite.merge_counts(BTreeMap::from([("a".to_string(), 1), ("b".to_string(), 4)]));
        assert_eq!(rewrite.counts.get("a"), Some(&3));
        assert_eq!(rewrite.total(), 7);
    }
}
