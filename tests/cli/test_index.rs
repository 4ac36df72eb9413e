//! Tests for the index command
//!
//! - JSON Lines written to --output
//! - Flag overrides reach the pipeline
//! - Error cases (invalid path)

use crate::cli::test_helpers::index_args;
use crate::common::{create_test_services, TestDocs};
use pagesplit::cli::commands::index::execute;
use pagesplit::cli::OutputFormat;
use pagesplit::core::config::Config;
use pagesplit::core::services::Services;
use pagesplit::Section;

fn read_sections(path: &std::path::Path) -> Vec<Section> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_index_writes_json_lines() {
    let docs = TestDocs::handbook();
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("sections.jsonl");
    let services = create_test_services();

    let mut args = index_args(docs.path());
    args.output = Some(out.clone());
    let result = execute(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "index should succeed: {:?}", result.err());

    let sections = read_sections(&out);
    assert!(!sections.is_empty());
    assert!(sections.iter().all(|s| s.category == "default"));
}

#[tokio::test]
async fn test_index_json_summary() {
    let docs = TestDocs::with_files(&[("notes.md", "Plain notes.")]);
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("sections.jsonl");
    let services = create_test_services();

    let mut args = index_args(docs.path());
    args.output = Some(out.clone());
    args.quiet = false;
    assert!(execute(args, &services, OutputFormat::Json).await.is_ok());

    let sections = read_sections(&out);
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].content, "Plain notes.");
}

#[tokio::test]
async fn test_index_overrides_apply_to_pipeline() {
    let docs = TestDocs::handbook();
    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("sections.jsonl");

    let mut args = index_args(docs.path());
    args.output = Some(out.clone());
    args.category = Some("handbook".to_string());
    args.include = vec!["*.md".to_string()];

    // Same order as run(): apply flags, then build services
    let mut config = Config::default();
    args.apply(&mut config);
    let services = Services::new(config).unwrap();
    execute(args, &services, OutputFormat::Human).await.unwrap();

    let sections = read_sections(&out);
    assert!(sections.iter().all(|s| s.sourcefile == "overview.md"));
    assert!(sections.iter().all(|s| s.category == "handbook"));
}

#[tokio::test]
async fn test_index_invalid_path() {
    let services = create_test_services();
    let args = index_args(std::path::Path::new("/nonexistent/documents"));

    let err = execute(args, &services, OutputFormat::Human).await.unwrap_err();
    assert!(err.to_string().contains("Invalid path"));
}
