//! Tests for the split command
//!
//! - Human and JSON output for text and page-list documents
//! - Directories and missing files are rejected

use crate::cli::test_helpers::split_args;
use crate::common::{create_test_services, prose, TestDocs};
use pagesplit::cli::commands::split::execute;
use pagesplit::cli::OutputFormat;

#[test]
fn test_split_text_human() {
    let text = prose(40, 0);
    let docs = TestDocs::with_files(&[("guide.txt", text.as_str())]);
    let services = create_test_services();

    let result = execute(split_args(&docs.files[0]), &services, OutputFormat::Human);
    assert!(result.is_ok(), "split should succeed: {:?}", result.err());
}

#[test]
fn test_split_pages_json_full_text() {
    let json = r#"[{"index": 0, "offset": 0, "text": "Cover."}, {"index": 1, "offset": 6, "text": " Body."}]"#;
    let docs = TestDocs::with_files(&[("deck.pdf.pages.json", json)]);
    let services = create_test_services();

    let mut args = split_args(&docs.files[0]);
    args.full = true;
    assert!(execute(args, &services, OutputFormat::Json).is_ok());
}

#[test]
fn test_split_rejects_directory() {
    let docs = TestDocs::with_files(&[("a.txt", "text")]);
    let services = create_test_services();

    let err = execute(split_args(docs.path()), &services, OutputFormat::Human).unwrap_err();
    assert!(err.to_string().contains("not a file"));
}

#[test]
fn test_split_rejects_bad_page_list() {
    let docs = TestDocs::with_files(&[("bad.pages.json", "{\"index\": 0}")]);
    let services = create_test_services();

    assert!(execute(split_args(&docs.files[0]), &services, OutputFormat::Json).is_err());
}
