//! The canonical block definition

use std::fmt;
use std::path::Path;

use pagefix_fs::ConfigStore;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::{Error, Result};

/// Single source of truth for the pitch block.
///
/// Loaded once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalBlock {
    /// Compared against `data-block-version` in documents to detect stale copies.
    /// Accepts a string or a number in the source file.
    #[serde(deserialize_with = "version_from_scalar")]
    pub version: String,
    pub content: BlockContent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockContent {
    pub heading: String,
    pub intro: String,
    pub features: Vec<Feature>,
    /// Markup fragments, rendered in order
    pub description_paragraphs: Vec<String>,
    pub cta_url: String,
    pub cta_text: String,
}

/// A feature card: title plus one-line description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

impl CanonicalBlock {
    /// Load and validate a block from a JSON, TOML or YAML file.
    ///
    /// Missing fields surface as a parse error naming the field.
    pub fn load(path: &Path) -> Result<Self> {
        let block: Self = ConfigStore::new().load(path)?;
        block.validate()?;
        tracing::debug!(path = %path.display(), version = %block.version, "Loaded canonical block");
        Ok(block)
    }

    /// Reject blocks that would render into something unusable.
    pub fn validate(&self) -> Result<()> {
        if self.version.trim().is_empty() {
            return Err(Error::invalid("version", "must not be empty"));
        }
        let content = &self.content;
        if content.heading.trim().is_empty() {
            return Err(Error::invalid("content.heading", "must not be empty"));
        }
        if content.cta_url.trim().is_empty() {
            return Err(Error::invalid("content.cta_url", "must not be empty"));
        }
        if content.cta_text.trim().is_empty() {
            return Err(Error::invalid("content.cta_text", "must not be empty"));
        }
        if let Some(i) = content
            .features
            .iter()
            .position(|f| f.title.trim().is_empty())
        {
            return Err(Error::invalid(
                "content.features",
                format!("entry {i} has an empty title"),
            ));
        }
        Ok(())
    }
}

/// Reads a version written as a string, an integer or a float.
///
/// Floats use their shortest round-trip form with a trailing `.0` kept, so
/// `1.0` stays `"1.0"` and matches markers already written into documents.
struct VersionVisitor;

impl Visitor<'_> for VersionVisitor {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a version string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_string<E: de::Error>(self, v: String) -> std::result::Result<String, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<String, E> {
        Ok(v.to_string())
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> std::result::Result<String, E> {
        if !v.is_finite() {
            return Err(E::invalid_value(de::Unexpected::Float(v), &self));
        }
        Ok(format!("{v:?}"))
    }
}

fn version_from_scalar<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(VersionVisitor)
}
