//! Locating where a block belongs in a document.
//!
//! Classification is a fixed priority list: marker guard, Type A fingerprint,
//! Type B anchor, nothing. The first hit wins.

use std::collections::HashSet;
use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::Result;
use crate::injector::StalePolicy;
use crate::scanner::{TagScanner, attribute, find_element_end};

/// Element type of the pitch wrapper; also the only element the depth scan counts.
pub const WRAPPER_ELEMENT: &str = "div";

/// Classes on the outermost element of a pitch section.
pub const FINGERPRINT_CLASSES: &[&str] = &[
    "py-20",
    "bg-gradient-to-br",
    "from-gray-50",
    "to-gray-100",
    "border-t-2",
    "border-primary",
];

pub const MARKER_ATTRIBUTE: &str = "data-block";
pub const VERSION_ATTRIBUTE: &str = "data-block-version";
pub const BLOCK_ID: &str = "solution-pitch";

/// Start of the FAQ section in basic-template articles.
pub const FAQ_ANCHOR_PATTERN: &str =
    r#"<section\s+class="section">\s*<div\s+class="container">\s*<div\s+class="faq">"#;

static FAQ_ANCHOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FAQ_ANCHOR_PATTERN).expect("Invalid FAQ anchor regex"));

/// Recognizes an existing instance of a block by the classes on its wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    element: String,
    classes: Vec<String>,
}

impl Fingerprint {
    pub fn new<I, S>(element: &str, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            element: element.to_string(),
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn element(&self) -> &str {
        &self.element
    }

    /// True if the start tag's `class` attribute holds every fingerprint class,
    /// in any order and alongside any others.
    pub fn matches(&self, tag: &str) -> bool {
        attribute(tag, "class").is_some_and(|classes| {
            let present: HashSet<&str> = classes.split_ascii_whitespace().collect();
            self.classes.iter().all(|c| present.contains(c.as_str()))
        })
    }

    /// Byte offset of the first matching start tag.
    pub fn find(&self, text: &str) -> Option<usize> {
        TagScanner::new(text, &self.element)
            .open_tags()
            .find(|tag| self.matches(tag.text(text)))
            .map(|tag| tag.span.start)
    }
}

impl Default for Fingerprint {
    fn default() -> Self {
        Self::new(WRAPPER_ELEMENT, FINGERPRINT_CLASSES.iter().copied())
    }
}

/// The machine-readable marker a rendered block carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMarker {
    pub element: String,
    pub id: String,
}

/// A marker found in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerMatch {
    /// Byte offset of the start tag carrying the marker
    pub start: usize,
    /// Value of `data-block-version`, if present
    pub version: Option<String>,
}

impl BlockMarker {
    pub fn new(element: &str, id: &str) -> Self {
        Self {
            element: element.to_string(),
            id: id.to_string(),
        }
    }

    pub fn find(&self, text: &str) -> Option<MarkerMatch> {
        TagScanner::new(text, &self.element)
            .open_tags()
            .find_map(|tag| {
                let tag_text = tag.text(text);
                (attribute(tag_text, MARKER_ATTRIBUTE) == Some(self.id.as_str())).then(|| {
                    MarkerMatch {
                        start: tag.span.start,
                        version: attribute(tag_text, VERSION_ATTRIBUTE).map(str::to_string),
                    }
                })
            })
    }
}

impl Default for BlockMarker {
    fn default() -> Self {
        Self::new(WRAPPER_ELEMENT, BLOCK_ID)
    }
}

/// Insertion point for documents that never had the block.
#[derive(Debug, Clone)]
pub struct Anchor {
    pattern: Regex,
}

impl Anchor {
    /// Build an anchor from a regex pattern.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn as_str(&self) -> &str {
        self.pattern.as_str()
    }

    /// Byte offset where the anchor's first element starts.
    pub fn find(&self, text: &str) -> Option<usize> {
        self.pattern.find(text).map(|m| m.start())
    }
}

impl Default for Anchor {
    fn default() -> Self {
        Self {
            pattern: FAQ_ANCHOR_REGEX.clone(),
        }
    }
}

/// Where (and whether) the block should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// The block is already present and current, or stale blocks are kept.
    Current { version: Option<String> },
    /// The block is present with another version; the span is its wrapper.
    Stale {
        span: Range<usize>,
        version: Option<String>,
    },
    /// An older pitch section to replace.
    ReplaceTypeA { span: Range<usize> },
    /// Insert before the anchor starting at this offset.
    InsertTypeB { anchor: usize },
    /// A wrapper starts here but its closing tag never comes.
    Unclosed { start: usize },
    /// Nothing to do.
    NoTarget,
}

/// Marker, fingerprint and anchor bundled for classification.
#[derive(Debug, Clone, Default)]
pub struct Locator {
    pub marker: BlockMarker,
    pub fingerprint: Fingerprint,
    pub anchor: Anchor,
}

impl Locator {
    /// Classify a document against the canonical `version`.
    pub fn classify(&self, text: &str, version: &str, stale: StalePolicy) -> Placement {
        if let Some(found) = self.marker.find(text) {
            if stale == StalePolicy::Keep || found.version.as_deref() == Some(version) {
                return Placement::Current {
                    version: found.version,
                };
            }
            return match find_element_end(text, found.start, &self.marker.element) {
                Some(span) => Placement::Stale {
                    span,
                    version: found.version,
                },
                None => Placement::Unclosed { start: found.start },
            };
        }

        if let Some(start) = self.fingerprint.find(text) {
            return match find_element_end(text, start, self.fingerprint.element()) {
                Some(span) => Placement::ReplaceTypeA { span },
                None => Placement::Unclosed { start },
            };
        }

        match self.anchor.find(text) {
            Some(anchor) => Placement::InsertTypeB { anchor },
            None => Placement::NoTarget,
        }
    }
}
