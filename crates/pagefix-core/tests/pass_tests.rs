//! Passes applied to in-memory documents.

use std::path::PathBuf;

use pagefix_blocks::{BlockContent, CanonicalBlock};
use pagefix_core::{ClaimsPass, Document, DocumentPass, PitchPass, PitchSettings};
use pagefix_fs::FileEntry;
use pagefix_rules::RuleBook;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn document(name: &str, dir: &str, text: &str) -> Document {
    let entry = FileEntry {
        path: PathBuf::from("/site").join(dir).join(name),
        dir: dir.to_string(),
    };
    Document::from_text(&entry, text)
}

fn pitch_pass(keep_stale: bool) -> PitchPass {
    let block = CanonicalBlock {
        version: "2".into(),
        content: BlockContent {
            heading: "Heading".into(),
            intro: "Intro".into(),
            features: vec![],
            description_paragraphs: vec![],
            cta_url: "/#signup".into(),
            cta_text: "Go".into(),
        },
    };
    let settings = PitchSettings {
        keep_stale,
        ..PitchSettings::default()
    };
    PitchPass::from_settings(&block, &settings).unwrap()
}

#[test]
fn test_keep_stale_leaves_old_versions() {
    let doc = document(
        "a.html",
        "",
        r#"<div data-block="solution-pitch" data-block-version="1"><p>old</p></div>"#,
    );

    let kept = pitch_pass(true).process(&doc);
    let refreshed = pitch_pass(false).process(&doc);

    assert_eq!(kept.text, None);
    assert_eq!(kept.action, "already current");
    assert_eq!(refreshed.action, "Refreshed from version 1");
    assert_eq!(refreshed.counts.get("refreshed"), Some(&1));
}

#[test]
fn test_invalid_anchor_pattern_is_rejected() {
    let block = CanonicalBlock {
        version: "1".into(),
        content: BlockContent {
            heading: "H".into(),
            intro: String::new(),
            features: vec![],
            description_paragraphs: vec![],
            cta_url: "/".into(),
            cta_text: "Go".into(),
        },
    };
    let settings = PitchSettings {
        anchor: Some("(".into()),
        ..PitchSettings::default()
    };

    assert!(PitchPass::from_settings(&block, &settings).is_err());
}

#[test]
fn test_claims_scoped_set_uses_document_name() {
    let book = RuleBook::from_toml_str(
        r#"
[[set]]
name = "only-guide"
files = ["guide.html"]

[[set.rule]]
find = "old"
replace = "new"
category = "scoped"
"#,
    )
    .unwrap();
    let pass = ClaimsPass::new(book);

    let hit = pass.process(&document("guide.html", "", "old text"));
    let miss = pass.process(&document("other.html", "", "old text"));

    assert_eq!(hit.text.as_deref(), Some("new text"));
    assert_eq!(hit.action, "1 replacement");
    assert_eq!(miss.text, None);
    assert_eq!(miss.action, "0 replacements");
}

proptest! {
    #[test]
    fn prop_pitch_without_markup_is_untouched(text in "[a-zA-Z0-9 .,\n]{0,300}") {
        let result = pitch_pass(false).process(&document("a.html", "", &text));
        prop_assert_eq!(result.text, None);
        prop_assert_eq!(result.failure, None);
        prop_assert_eq!(result.counts.get("unchanged"), Some(&1));
    }

    #[test]
    fn prop_claims_pass_reports_no_change_on_plain_text(text in "[a-z \n]{0,300}") {
        let pass = ClaimsPass::new(RuleBook::builtin().unwrap());
        let result = pass.process(&document("a.html", "", &text));
        prop_assert_eq!(result.text, None);
        prop_assert_eq!(result.counts.values().sum::<usize>(), 0);
    }
}
