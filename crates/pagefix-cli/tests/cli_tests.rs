//! Integration tests that exercise the compiled `pagefix` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BLOCK: &str = r#"{
  "version": "3",
  "content": {
    "heading": "Make your products discoverable",
    "intro": "AI shopping agents are here.",
    "features": [{"title": "AI Shopping Discovery", "description": "UCP-compliant endpoints"}],
    "description_paragraphs": ["<p>Upload your catalog.</p>"],
    "cta_url": "/#signup",
    "cta_text": "Get Started"
  }
}"#;

const TYPE_B: &str = r#"<html>
<head>
  <title>Guide</title>
</head>
<body>
    <section class="section"><div class="container"><div class="faq">
      <h2>FAQ</h2>
    </div></div></section>
</body>
</html>"#;

const UNCLOSED: &str = r#"<html><head></head><body>
  <div class="py-20 bg-gradient-to-br from-gray-50 to-gray-100 border-t-2 border-primary"><div>
</body></html>"#;

/// Get a Command for the pagefix binary, running in `dir`
fn pagefix(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pagefix").expect("Failed to find pagefix binary");
    cmd.current_dir(dir).env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

fn site() -> TempDir {
    let temp = TempDir::new().unwrap();
    let public = temp.path().join("public");
    fs::create_dir_all(public.join("marketing")).unwrap();
    fs::write(public.join("guide.html"), TYPE_B).unwrap();
    fs::write(public.join("broken.html"), UNCLOSED).unwrap();
    fs::write(public.join("privacy.html"), TYPE_B).unwrap();
    fs::write(
        public.join("marketing/claims.html"),
        "<p>Easy UCP Hub at www.ucp-commerce.com</p>",
    )
    .unwrap();
    fs::write(temp.path().join("pitch.json"), BLOCK).unwrap();
    fs::write(
        temp.path().join("pagefix.toml"),
        "public_dir = \"public\"\n\n[pitch]\nblock = \"pitch.json\"\n",
    )
    .unwrap();
    temp
}

// ============================================================================
// General
// ============================================================================

#[test]
fn test_no_command_prints_hint() {
    let temp = TempDir::new().unwrap();
    pagefix(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("pagefix --help"));
}

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();
    pagefix(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pitch"))
        .stdout(predicate::str::contains("claims"))
        .stdout(predicate::str::contains("files"));
}

#[test]
fn test_missing_config_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    pagefix(temp.path())
        .args(["--config", "absent.toml", "files"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"))
        .stderr(predicate::str::contains("absent.toml"));
}

#[test]
fn test_malformed_config_exits_nonzero() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("pagefix.toml"), "public_dir = [").unwrap();
    pagefix(temp.path()).arg("files").assert().failure().code(1);
}

// ============================================================================
// files
// ============================================================================

#[test]
fn test_files_lists_documents_and_skips() {
    let temp = site();
    pagefix(temp.path())
        .arg("files")
        .assert()
        .success()
        .stdout(predicate::str::contains("guide.html"))
        .stdout(predicate::str::contains("marketing/claims.html"))
        .stdout(predicate::str::contains("Skipped"))
        .stdout(predicate::str::contains("privacy.html"))
        .stdout(predicate::str::contains("3 document(s), 1 skipped"));
}

#[test]
fn test_files_json() {
    let temp = site();
    let output = pagefix(temp.path())
        .args(["files", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["documents"].as_array().unwrap().len(), 3);
    assert_eq!(json["skipped"][0]["dir"], "");
}

// ============================================================================
// pitch
// ============================================================================

#[test]
fn test_pitch_reports_each_outcome() {
    let temp = site();
    pagefix(temp.path())
        .arg("pitch")
        .assert()
        .success()
        .stdout(predicate::str::contains("Type B (+stylesheet): guide.html"))
        .stdout(predicate::str::contains("ERROR broken.html"))
        .stdout(predicate::str::contains("block version 3"));

    let text = fs::read_to_string(temp.path().join("public/guide.html")).unwrap();
    assert!(text.contains(r#"data-block="solution-pitch""#));
    assert!(text.contains("cdn.tailwindcss.com"));
    assert_eq!(
        fs::read_to_string(temp.path().join("public/broken.html")).unwrap(),
        UNCLOSED
    );
}

#[test]
fn test_pitch_dry_run_leaves_files_untouched() {
    let temp = site();
    pagefix(temp.path())
        .args(["pitch", "--dry-run", "--diff"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[DRY] Would apply Type B"))
        .stdout(predicate::str::contains("+++ b/guide.html"));

    assert_eq!(
        fs::read_to_string(temp.path().join("public/guide.html")).unwrap(),
        TYPE_B
    );
}

#[test]
fn test_pitch_twice_is_idempotent() {
    let temp = site();
    pagefix(temp.path()).arg("pitch").assert().success();
    let first = fs::read_to_string(temp.path().join("public/guide.html")).unwrap();

    let output = pagefix(temp.path())
        .args(["pitch", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["files_changed"], 0);
    assert_eq!(
        fs::read_to_string(temp.path().join("public/guide.html")).unwrap(),
        first
    );
}

#[test]
fn test_pitch_without_block_source_fails_before_writing() {
    let temp = site();
    fs::write(temp.path().join("pagefix.toml"), "public_dir = \"public\"\n").unwrap();

    pagefix(temp.path())
        .arg("pitch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No canonical block configured"));

    assert_eq!(
        fs::read_to_string(temp.path().join("public/guide.html")).unwrap(),
        TYPE_B
    );
}

#[test]
fn test_pitch_block_flag_overrides_config() {
    let temp = site();
    fs::write(
        temp.path().join("v4.json"),
        BLOCK.replace(r#""version": "3""#, r#""version": "4""#),
    )
    .unwrap();

    pagefix(temp.path())
        .args(["pitch", "--block", "v4.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("block version 4"));
}

// ============================================================================
// claims
// ============================================================================

#[test]
fn test_claims_fixes_and_counts() {
    let temp = site();
    pagefix(temp.path())
        .arg("claims")
        .assert()
        .success()
        .stdout(predicate::str::contains("FIXED: marketing/claims.html"))
        .stdout(predicate::str::contains("branding"))
        .stdout(predicate::str::contains("url_fix"));

    assert_eq!(
        fs::read_to_string(temp.path().join("public/marketing/claims.html")).unwrap(),
        "<p>Easy UCP at easyucp.com</p>"
    );
}

#[test]
fn test_claims_json_summary() {
    let temp = site();
    let output = pagefix(temp.path())
        .args(["claims", "--dry-run", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["pass"], "claims");
    assert_eq!(json["dry_run"], true);
    assert_eq!(json["categories"]["branding"], 1);
    assert_eq!(json["files_skipped"], 1);
}

#[test]
fn test_claims_custom_rule_book() {
    let temp = site();
    fs::write(
        temp.path().join("rules.toml"),
        "[[set]]\nname = \"local\"\n\n[[set.rule]]\nfind = \"Guide\"\nreplace = \"Handbook\"\ncategory = \"title\"\n",
    )
    .unwrap();

    pagefix(temp.path())
        .args(["claims", "--rules", "rules.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FIXED: guide.html"));

    let text = fs::read_to_string(temp.path().join("public/guide.html")).unwrap();
    assert!(text.contains("<title>Handbook</title>"));
}

#[test]
fn test_claims_invalid_rule_book_exits_nonzero() {
    let temp = site();
    fs::write(
        temp.path().join("rules.toml"),
        "[[set]]\nname = \"bad\"\n\n[[set.rule]]\nfind = \"(\"\nreplace = \"x\"\ncategory = \"c\"\nregex = true\n",
    )
    .unwrap();

    pagefix(temp.path())
        .args(["claims", "--rules", "rules.toml"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_claims_fixes_named_skip_listed_page() {
    let temp = site();
    fs::write(
        temp.path().join("public/thank-you.html"),
        "<p>Thanks from Easy UCP Hub</p>",
    )
    .unwrap();

    pagefix(temp.path())
        .arg("claims")
        .assert()
        .success()
        .stdout(predicate::str::contains("FIXED: thank-you.html"));

    assert_eq!(
        fs::read_to_string(temp.path().join("public/thank-you.html")).unwrap(),
        "<p>Thanks from Easy UCP</p>"
    );
}
