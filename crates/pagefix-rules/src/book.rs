//! Rule books: ordered, optionally scoped rule sets

use std::collections::BTreeSet;
use std::path::Path;

use pagefix_fs::ConfigStore;
use serde::{Deserialize, Serialize};

use crate::engine::{Rewrite, apply_rules};
use crate::rule::{Rule, RuleSpec};
use crate::{Error, Result};

const BUILTIN_CLAIMS: &str = include_str!("../rules/claims.toml");

/// On-disk form of a rule book.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleBookSpec {
    #[serde(default, rename = "set")]
    pub sets: Vec<RuleSetSpec>,
}

/// On-disk form of a rule set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetSpec {
    pub name: String,
    /// Only documents with one of these file names
    #[serde(default)]
    pub files: Option<BTreeSet<String>>,
    /// Only documents in one of these directories, relative to the base ("" = base)
    #[serde(default)]
    pub dirs: Option<BTreeSet<String>>,
    #[serde(default, rename = "rule")]
    pub rules: Vec<RuleSpec>,
}

/// A compiled rule set.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    files: Option<BTreeSet<String>>,
    dirs: Option<BTreeSet<String>>,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// An unscoped set.
    pub fn new(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            files: None,
            dirs: None,
            rules,
        }
    }

    pub fn compile(spec: &RuleSetSpec) -> Result<Self> {
        let rules = spec
            .rules
            .iter()
            .enumerate()
            .map(|(index, rule)| {
                if rule.find.is_empty() {
                    return Err(Error::EmptyFind {
                        set: spec.name.clone(),
                        index,
                    });
                }
                Rule::compile(rule).map_err(|source| Error::Pattern {
                    set: spec.name.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            name: spec.name.clone(),
            files: spec.files.clone(),
            dirs: spec.dirs.clone(),
            rules,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Does this set apply to a document with `file_name` found in `dir`?
    pub fn applies_to(&self, file_name: &str, dir: &str) -> bool {
        self.files.as_ref().is_none_or(|f| f.contains(file_name))
            && self.dirs.as_ref().is_none_or(|d| d.contains(dir))
    }

    /// Does this set list `file_name` explicitly (and allow `dir`)?
    pub fn names(&self, file_name: &str, dir: &str) -> bool {
        self.files.as_ref().is_some_and(|f| f.contains(file_name))
            && self.applies_to(file_name, dir)
    }
}

/// An ordered list of rule sets.
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    sets: Vec<RuleSet>,
}

impl RuleBook {
    pub fn new(sets: Vec<RuleSet>) -> Self {
        Self { sets }
    }

    /// Compile a book, validating every pattern up front.
    pub fn compile(spec: &RuleBookSpec) -> Result<Self> {
        let sets = spec
            .sets
            .iter()
            .map(RuleSet::compile)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { sets })
    }

    /// Load a book from a TOML, JSON or YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let spec: RuleBookSpec = ConfigStore::new().load(path)?;
        let book = Self::compile(&spec)?;
        tracing::debug!(path = %path.display(), rules = book.rule_count(), "Loaded rule book");
        Ok(book)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let spec: RuleBookSpec = toml::from_str(content)?;
        Self::compile(&spec)
    }

    /// The claim-correction book shipped with pagefix.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CLAIMS)
    }

    pub fn sets(&self) -> &[RuleSet] {
        &self.sets
    }

    pub fn rule_count(&self) -> usize {
        self.sets.iter().map(|s| s.rules.len()).sum()
    }

    /// Apply every set that applies to this document, in order.
    pub fn apply(&self, text: &str, file_name: &str, dir: &str) -> Rewrite {
        let rules = self
            .sets
            .iter()
            .filter(|set| set.applies_to(file_name, dir))
            .flat_map(|set| set.rules.iter());
        apply_rules(rules, text)
    }

    /// True when some set lists this document by name.
    pub fn names(&self, file_name: &str, dir: &str) -> bool {
        self.sets.iter().any(|set| set.names(file_name, dir))
    }

    /// Apply only the sets that list this document by name, in order.
    ///
    /// Used for pages the skip list keeps away from broad corrections.
    pub fn apply_named(&self, text: &str, file_name: &str, dir: &str) -> Rewrite {
        let rules = self
            .sets
            .iter()
            .filter(|set| set.names(file_name, dir))
            .flat_map(|set| set.rules.iter());
        apply_rules(rules, text)
    }
}
