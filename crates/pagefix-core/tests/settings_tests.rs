//! Loading `pagefix.toml`.

use std::fs;
use std::path::PathBuf;

use pagefix_core::{Error, PitchPass, Settings};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tempfile::TempDir;

const BLOCK: &str = r#"{
  "version": 5,
  "content": {
    "heading": "Get discovered",
    "intro": "Intro",
    "features": [{"title": "One", "description": "first"}],
    "description_paragraphs": ["<p>a</p>"],
    "cta_url": "/#signup",
    "cta_text": "Start now"
  }
}"#;

#[test]
fn test_discover_without_file_uses_defaults() {
    let temp = TempDir::new().unwrap();

    let settings = Settings::discover(temp.path()).unwrap();

    assert_eq!(settings, Settings::default());
}

#[test]
fn test_relative_paths_resolve_against_config_dir() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pagefix.toml"),
        r#"
public_dir = "server/public"
subdirs = []

[pitch]
block = "blocks/pitch.json"

[rules]
path = "rules/claims.toml"
"#,
    )
    .unwrap();

    let settings = Settings::discover(temp.path()).unwrap();

    assert_eq!(settings.public_dir, temp.path().join("server/public"));
    assert!(settings.subdirs.is_empty());
    assert_eq!(
        settings.pitch.block,
        Some(temp.path().join("blocks/pitch.json"))
    );
    assert_eq!(
        settings.rules.path,
        Some(temp.path().join("rules/claims.toml"))
    );
    assert!(settings.skip_list().contains("privacy.html"));
}

#[test]
fn test_custom_skip_list_replaces_defaults() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pagefix.toml");
    fs::write(&path, "skip_files = [\"draft.html\"]\n").unwrap();

    let settings = Settings::load(&path).unwrap();

    assert!(settings.skip_list().contains("draft.html"));
    assert!(!settings.skip_list().contains("landing.html"));
}

#[rstest]
#[case::toml("pagefix.toml", "[pitch]\nkeep_stale = true\n")]
#[case::json("pagefix.json", r#"{"pitch": {"keep_stale": true}}"#)]
#[case::yaml("pagefix.yaml", "pitch:\n  keep_stale: true\n")]
fn test_settings_in_any_format(#[case] name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();

    let settings = Settings::load(&path).unwrap();

    assert!(settings.pitch.keep_stale);
    assert_eq!(settings.subdirs, vec!["marketing".to_string()]);
}

#[test]
fn test_unknown_key_is_rejected() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("pagefix.toml");
    fs::write(&path, "public_directory = \"x\"\n").unwrap();

    let err = Settings::load(&path).unwrap_err();

    assert!(matches!(err, Error::Fs(pagefix_fs::Error::ConfigParse { .. })));
}

#[test]
fn test_configured_block_builds_pitch_pass() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("blocks")).unwrap();
    fs::write(temp.path().join("blocks/pitch.json"), BLOCK).unwrap();
    fs::write(
        temp.path().join("pagefix.toml"),
        "[pitch]\nblock = \"blocks/pitch.json\"\n",
    )
    .unwrap();

    let settings = Settings::discover(temp.path()).unwrap();
    let block = settings.load_block().unwrap();
    let pass = PitchPass::from_settings(&block, &settings.pitch).unwrap();

    assert_eq!(pass.version(), "5");
}

#[test]
fn test_missing_rule_book_file_is_an_error() {
    let settings = Settings {
        rules: pagefix_core::RulesSettings {
            path: Some(PathBuf::from("/nonexistent/rules.toml")),
        },
        ..Settings::default()
    };

    assert!(settings.load_rule_book().is_err());
}

#[test]
fn test_builtin_rule_book_by_default() {
    let book = Settings::default().load_rule_book().unwrap();
    assert!(book.rule_count() > 0);
}
