//! The seam between the batch runner and the individual rewrites

use std::collections::BTreeMap;

use crate::document::Document;

/// One transformation applied to every document in a run.
pub trait DocumentPass {
    /// Short name used in logs and summaries.
    fn name(&self) -> &'static str;

    /// Compute what should happen to a document. Must not touch the filesystem.
    fn process(&self, document: &Document) -> PassResult;
}

/// What a pass decided for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassResult {
    /// Counts to add to the run's per-category totals
    pub counts: BTreeMap<String, usize>,
    /// Rewritten text, when the document should change
    pub text: Option<String>,
    /// Short human-readable description for the per-file report
    pub action: String,
    /// Structural problem that left the document untouched
    pub failure: Option<String>,
}

impl PassResult {
    pub fn unchanged(action: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            ..Self::default()
        }
    }

    pub fn with_count(mut self, category: impl Into<String>, n: usize) -> Self {
        *self.counts.entry(category.into()).or_default() += n;
        self
    }
}
