//! Rule-book corrections as a document pass

use pagefix_fs::{FileSet, SkipList};
use pagefix_rules::RuleBook;

use crate::document::Document;
use crate::pass::{DocumentPass, PassResult};

/// Applies a rule book to every document.
///
/// Pages on the skip list are left alone except by sets that list them by
/// file name; those pages get only those sets.
#[derive(Debug, Clone)]
pub struct ClaimsPass {
    book: RuleBook,
    skip: SkipList,
}

impl ClaimsPass {
    pub fn new(book: RuleBook) -> Self {
        Self {
            book,
            skip: SkipList::default(),
        }
    }

    /// The skip list the file set was enumerated with.
    pub fn with_skip_list(mut self, skip: SkipList) -> Self {
        self.skip = skip;
        self
    }

    pub fn book(&self) -> &RuleBook {
        &self.book
    }

    /// Bring back skipped pages that some set names explicitly.
    pub fn readmit_named(&self, files: &mut FileSet) -> usize {
        let moved = files.readmit(|entry| self.book.names(entry.file_name(), &entry.dir));
        if moved > 0 {
            tracing::debug!(moved, "Readmitted skip-listed pages named by rule sets");
        }
        moved
    }
}

impl DocumentPass for ClaimsPass {
    fn name(&self) -> &'static str {
        "claims"
    }

    fn process(&self, document: &Document) -> PassResult {
        let (file_name, dir) = (document.file_name(), document.dir());
        let rewrite = if self.skip.contains(file_name) {
            self.book.apply_named(document.text(), file_name, dir)
        } else {
            self.book.apply(document.text(), file_name, dir)
        };
        let total = rewrite.total();
        let changed = rewrite.text != document.text();

        PassResult {
            action: format!(
                "{} replacement{}",
                total,
                if total == 1 { "" } else { "s" }
            ),
            text: changed.then_some(rewrite.text),
            counts: rewrite.counts,
            failure: None,
        }
    }
}
