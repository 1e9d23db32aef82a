//! Applying a rendered block to a document.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::locator::{Locator, Placement};
use crate::render::RenderedBlock;

/// What to do with a marker whose version differs from the canonical one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Replace the stale block with the current rendering.
    #[default]
    Refresh,
    /// Treat any marker as current.
    Keep,
}

pub const TAILWIND_MARKER: &str = "cdn.tailwindcss.com";

pub const TAILWIND_SNIPPET: &str = r##"  <script src="https://cdn.tailwindcss.com"></script>
  <script>tailwind.config={theme:{extend:{colors:{primary:"#14B8A6","primary-dark":"#0D9488"}}}}</script>"##;

/// A `<head>` inclusion the block needs in order to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    /// Substring whose presence means the dependency is already loaded
    pub marker: String,
    /// Markup inserted before `</head>` when it is not
    pub snippet: String,
}

impl Default for Dependency {
    fn default() -> Self {
        Self {
            marker: TAILWIND_MARKER.to_string(),
            snippet: TAILWIND_SNIPPET.to_string(),
        }
    }
}

impl Dependency {
    /// Insert the snippet before the first `</head>`, once.
    ///
    /// Returns `None` when the dependency is already present or the document
    /// has no `</head>`.
    pub fn inject(&self, text: &str) -> Option<String> {
        if text.contains(&self.marker) {
            return None;
        }
        let Some(head_close) = text.find("</head>") else {
            tracing::warn!("No </head> found, cannot add block dependency");
            return None;
        };
        Some(format!(
            "{}{}\n{}",
            &text[..head_close],
            self.snippet.trim_end(),
            &text[head_close..]
        ))
    }
}

/// What happened to one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// The current block is already present.
    Current,
    /// No fingerprint and no anchor.
    Unchanged,
    /// An older pitch section in `span` was replaced.
    ReplacedTypeA { span: Range<usize> },
    /// Inserted before the anchor at `anchor` (offset in the final text).
    InsertedTypeB {
        anchor: usize,
        dependency_injected: bool,
    },
    /// A block with another version in `span` was replaced.
    RefreshedStale {
        span: Range<usize>,
        previous_version: Option<String>,
    },
    /// The wrapper never closes; the document was left alone.
    StructuralError { reason: String },
}

impl Outcome {
    /// Reporting category.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Current | Self::Unchanged => "unchanged",
            Self::ReplacedTypeA { .. } => "type_a",
            Self::InsertedTypeB { .. } => "type_b",
            Self::RefreshedStale { .. } => "refreshed",
            Self::StructuralError { .. } => "structural_error",
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(
            self,
            Self::ReplacedTypeA { .. } | Self::InsertedTypeB { .. } | Self::RefreshedStale { .. }
        )
    }
}

/// Result of applying the block to one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injection {
    pub outcome: Outcome,
    /// New document text, present only when the outcome is a change
    pub text: Option<String>,
}

impl Injection {
    fn unchanged(outcome: Outcome) -> Self {
        Self {
            outcome,
            text: None,
        }
    }

    fn changed(outcome: Outcome, text: String) -> Self {
        Self {
            outcome,
            text: Some(text),
        }
    }
}

/// Puts one rendered block into documents.
#[derive(Debug, Clone)]
pub struct Injector {
    block: RenderedBlock,
    locator: Locator,
    dependency: Dependency,
    stale: StalePolicy,
}

impl Injector {
    pub fn new(block: RenderedBlock) -> Self {
        Self {
            block,
            locator: Locator::default(),
            dependency: Dependency::default(),
            stale: StalePolicy::default(),
        }
    }

    pub fn with_locator(mut self, locator: Locator) -> Self {
        self.locator = locator;
        self
    }

    pub fn with_dependency(mut self, dependency: Dependency) -> Self {
        self.dependency = dependency;
        self
    }

    pub fn with_stale_policy(mut self, stale: StalePolicy) -> Self {
        self.stale = stale;
        self
    }

    pub fn block(&self) -> &RenderedBlock {
        &self.block
    }

    /// Apply the block to a document's text.
    pub fn apply(&self, text: &str) -> Injection {
        let placement = self
            .locator
            .classify(text, self.block.marker_version(), self.stale);
        tracing::debug!(?placement, "Classified document");

        match placement {
            Placement::Current { .. } => Injection::unchanged(Outcome::Current),
            Placement::NoTarget => Injection::unchanged(Outcome::Unchanged),
            Placement::Unclosed { start } => {
                Injection::unchanged(Outcome::StructuralError {
                    reason: format!(
                        "<{}> opened at byte {} is never closed",
                        self.locator.fingerprint.element(),
                        start
                    ),
                })
            }
            Placement::ReplaceTypeA { span } => {
                let text = splice(text, span.clone(), self.block.html());
                Injection::changed(Outcome::ReplacedTypeA { span }, text)
            }
            Placement::Stale { span, version } => {
                let text = splice(text, span.clone(), self.block.html());
                Injection::changed(
                    Outcome::RefreshedStale {
                        span,
                        previous_version: version,
                    },
                    text,
                )
            }
            Placement::InsertTypeB { anchor } => self.insert_before_anchor(text, anchor),
        }
    }

    fn insert_before_anchor(&self, text: &str, anchor: usize) -> Injection {
        let (text, anchor, dependency_injected) = match self.dependency.inject(text) {
            // Head precedes the anchor, so find it again in the new text
            Some(updated) => match self.locator.anchor.find(&updated) {
                Some(anchor) => (updated, anchor, true),
                None => (text.to_string(), anchor, false),
            },
            None => (text.to_string(), anchor, false),
        };

        let indent = line_indent(&text, anchor);
        let insertion = format!("\n{}\n\n{}", self.block.html(), indent);
        let mut out = String::with_capacity(text.len() + insertion.len());
        out.push_str(&text[..anchor]);
        out.push_str(&insertion);
        out.push_str(&text[anchor..]);

        Injection::changed(
            Outcome::InsertedTypeB {
                anchor: anchor + insertion.len(),
                dependency_injected,
            },
            out,
        )
    }
}

fn splice(text: &str, span: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len() - span.len() + replacement.len());
    out.push_str(&text[..span.start]);
    out.push_str(replacement);
    out.push_str(&text[span.end..]);
    out
}

/// Whitespace between the start of the line and `offset`, or "" if the
/// line has other content before it.
fn line_indent(text: &str, offset: usize) -> &str {
    let line_start = text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let prefix = &text[line_start..offset];
    if prefix.chars().all(|c| c == ' ' || c == '\t') {
        prefix
    } else {
        ""
    }
}
