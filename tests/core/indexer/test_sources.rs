// Page sources and document discovery

use crate::common::{prose, TestDocs};
use pagesplit::core::indexer::FileWalker;
use pagesplit::core::loader::{PageSource, TextPageSource};

#[test]
fn test_form_feed_pages_have_running_offsets() {
    let first = prose(3, 0);
    let second = prose(3, 1);
    let content = format!("{first}\u{0C}{second}");
    let docs = TestDocs::with_files(&[("report.txt", content.as_str())]);

    let document = TextPageSource.load(&docs.files[0]).unwrap();
    assert_eq!(document.pages.len(), 2);
    assert_eq!(document.pages[1].index, 1);
    assert_eq!(document.pages[1].offset, first.chars().count());
    assert!(document.paged);
}

#[test]
fn test_pdf_name_is_paged_even_with_one_page() {
    let docs = TestDocs::with_files(&[("single.pdf", "One page of extracted text.")]);
    let document = TextPageSource.load(&docs.files[0]).unwrap();
    assert!(document.paged);
}

#[test]
fn test_json_pages_keep_given_offsets() {
    let json = r#"[
        {"index": 3, "offset": 0, "text": "Chapter three."},
        {"index": 4, "offset": 14, "text": " Chapter four."}
    ]"#;
    let docs = TestDocs::with_files(&[("book.pdf.pages.json", json)]);

    let document = TextPageSource.load(&docs.files[0]).unwrap();
    assert_eq!(document.name, "book.pdf");
    assert_eq!(document.pages[0].index, 3);
    assert_eq!(document.pages[1].offset, 14);
}

#[test]
fn test_walker_orders_documents() {
    let docs = TestDocs::handbook();
    let walker = FileWalker::new(&["*.md".to_string(), "*.txt".to_string()], &[], 10).unwrap();

    let files = walker.collect_files(docs.path()).unwrap();
    let names: Vec<String> = files
        .iter()
        .map(|f| f.strip_prefix(docs.path()).unwrap().display().to_string())
        .collect();
    assert_eq!(names, vec!["benefits/summary.txt", "overview.md"]);
}
