//! A single replacement rule

use std::borrow::Cow;

use regex::{NoExpand, Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// How a rule is written in a rule book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    pub find: String,
    pub replace: String,
    pub category: String,
    /// Treat `find` as a regex; `replace` may then use `$1`/`$name`
    #[serde(default)]
    pub regex: bool,
    #[serde(default)]
    pub case_insensitive: bool,
}

/// What a rule looks for.
#[derive(Debug, Clone)]
pub enum Matcher {
    Literal(String),
    /// Escaped literal matched ignoring case; the replacement is not expanded
    CaselessLiteral(Regex),
    Pattern(Regex),
}

/// A compiled replacement rule.
#[derive(Debug, Clone)]
pub struct Rule {
    matcher: Matcher,
    replacement: String,
    category: String,
}

impl Rule {
    pub fn literal(
        find: impl Into<String>,
        replace: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            matcher: Matcher::Literal(find.into()),
            replacement: replace.into(),
            category: category.into(),
        }
    }

    pub fn pattern(
        pattern: &str,
        replace: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            matcher: Matcher::Pattern(Regex::new(pattern)?),
            replacement: replace.into(),
            category: category.into(),
        })
    }

    /// Compile a rule from its book form.
    pub fn compile(spec: &RuleSpec) -> Result<Self, regex::Error> {
        let matcher = if spec.regex {
            Matcher::Pattern(
                RegexBuilder::new(&spec.find)
                    .case_insensitive(spec.case_insensitive)
                    .build()?,
            )
        } else if spec.case_insensitive {
            Matcher::CaselessLiteral(
                RegexBuilder::new(&regex::escape(&spec.find))
                    .case_insensitive(true)
                    .build()?,
            )
        } else {
            Matcher::Literal(spec.find.clone())
        };
        Ok(Self {
            matcher,
            replacement: spec.replace.clone(),
            category: spec.category.clone(),
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Count non-overlapping occurrences in `text`.
    pub fn count(&self, text: &str) -> usize {
        match &self.matcher {
            Matcher::Literal(find) => text.matches(find.as_str()).count(),
            Matcher::CaselessLiteral(re) | Matcher::Pattern(re) => re.find_iter(text).count(),
        }
    }

    /// Replace every occurrence, returning the new text and how many were replaced.
    pub fn apply<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let count = self.count(text);
        if count == 0 {
            return (Cow::Borrowed(text), 0);
        }
        let replaced = match &self.matcher {
            Matcher::Literal(find) => Cow::Owned(text.replace(find.as_str(), &self.replacement)),
            Matcher::CaselessLiteral(re) => re.replace_all(text, NoExpand(&self.replacement)),
            Matcher::Pattern(re) => re.replace_all(text, self.replacement.as_str()),
        };
        (replaced, count)
    }
}
