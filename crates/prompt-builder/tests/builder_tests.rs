use std::fs;

use pretty_assertions::assert_eq;
use prompt_builder::{build_prompt, unified_diff, BuildError, BuildOptions, DiffInput, ReviewObjectives};
use tempfile::TempDir;

fn write_pair(dir: &TempDir, before: (&str, &str), after: (&str, &str)) -> (DiffInput, DiffInput) {
    let before_path = dir.path().join(before.0);
    let after_path = dir.path().join(after.0);
    fs::write(&before_path, before.1).unwrap();
    fs::write(&after_path, after.1).unwrap();

    (
        DiffInput::load(&before_path).unwrap(),
        DiffInput::load(&after_path).unwrap(),
    )
}

#[test]
fn test_load_keeps_text_and_name() {
    let dir = TempDir::new().unwrap();
    let (before, _) = write_pair(&dir, ("old.rs", "fn a() {}\n"), ("new.rs", ""));

    assert_eq!(before.text, "fn a() {}\n");
    assert_eq!(before.file_name(), Some("old.rs"));
}

#[test]
fn test_load_missing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.rs");

    let err = DiffInput::load(&missing).unwrap_err();
    assert!(matches!(err, BuildError::Io { ref path, .. } if path == &missing));
    assert!(err.to_string().starts_with("failed to read "));
}

#[test]
fn test_diff_is_labelled_with_file_names() {
    let dir = TempDir::new().unwrap();
    let (before, after) = write_pair(&dir, ("v1.py", "a\nb\nc\n"), ("v2.py", "a\nB\nc\n"));

    let diff = unified_diff(&BuildOptions::default(), &before, &after).unwrap();
    assert_eq!(diff, "--- v1.py\n+++ v2.py\n@@ -1,3 +1,3 @@\n a\n-b\n+B\n c\n");
}

#[test]
fn test_prompt_detects_language_from_files() {
    let dir = TempDir::new().unwrap();
    let (before, after) = write_pair(&dir, ("lib.txt", "x\n"), ("lib.rs", "y\n"));

    let prompt = build_prompt(&BuildOptions::default(), &before, &after).unwrap();
    assert!(prompt.starts_with("You are a strictly deterministic static analysis assistant for Rust code.\n"));
    assert!(prompt.contains("- Repository/Module: Internal-LLM-Inspection/Prototype\n"));
    assert!(prompt.contains("```diff\n--- lib.txt\n+++ lib.rs\n@@ -1,1 +1,1 @@\n-x\n+y\n```\n"));
}

#[test]
fn test_prompt_with_explicit_options() {
    let before = DiffInput::from_text("same\n");
    let after = DiffInput::from_text("same\n");
    let options = BuildOptions {
        language: Some("Kotlin".to_string()),
        repository: "acme/app".to_string(),
        objectives: ReviewObjectives {
            readability_first: false,
            performance_hints: true,
            style_consolidation: false,
        },
        context_lines: 0,
    };

    let prompt = build_prompt(&options, &before, &after).unwrap();
    assert!(prompt.contains("assistant for Kotlin code"));
    assert!(prompt.contains("- Repository/Module: acme/app\n"));
    assert!(prompt.contains("  [ ] Prefer readability"));
    assert!(prompt.contains("  [x] Surface potential performance pitfalls"));
    // Identical inputs leave only the headers inside the fence
    assert!(prompt.contains("```diff\n--- Before.txt\n+++ After.txt\n```\n"));
}

#[test]
fn test_prompt_is_deterministic() {
    let before = DiffInput::from_text("a\nb\n");
    let after = DiffInput::from_text("b\nc\n");
    let options = BuildOptions::default();

    assert_eq!(
        build_prompt(&options, &before, &after).unwrap(),
        build_prompt(&options, &before, &after).unwrap()
    );
}
