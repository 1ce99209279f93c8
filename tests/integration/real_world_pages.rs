//! Integration tests for realistic pages
//!
//! Runs the pipeline over fixture pages laid out the way content sites
//! typically are: navigation, a main text block and a footer or sidebar.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use std::fs::File;
use std::io::BufReader;

use page_simplifier::{simplify, simplify_bytes, simplify_reader, simplify_with_options, Options};

/// Test fixture path helper
fn fixture_path(name: &str) -> String {
    format!(
        "{}/tests/integration/fixtures/{}",
        env!("CARGO_MANIFEST_DIR"),
        name
    )
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

#[test]
fn test_novel_chapter_text_block() {
    let html = read_fixture("novel_chapter.html");

    match simplify(&html) {
        Ok(page) => {
            assert_eq!(page.title, "Chapter 3: The Harbour \u{00B7} The Long Voyage");
            assert_eq!(
                page.content,
                vec![
                    "    The ship came into the harbour at dawn, its sails grey with salt.",
                    "    Nobody on the quay had expected it to return so soon.",
                    "    \u{201C}Three weeks early,\u{201D} said the harbour master.",
                ]
            );
            assert!(!page.truncated);
        }
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}

#[test]
fn test_novel_chapter_skips_navigation_and_footer() {
    let html = read_fixture("novel_chapter.html");

    match simplify(&html) {
        Ok(page) => {
            let text = page.content_text();
            assert!(!text.contains("Prev"), "Navigation should be skipped");
            assert!(!text.contains("Copyright"), "Footer should be skipped");
            assert!(!text.contains("framed"), "Script text should be skipped");
        }
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}

#[test]
fn test_novel_chapter_short_lines_only_with_low_threshold() {
    let html = read_fixture("novel_chapter.html");
    let options = Options {
        min_line_length: 4,
        ..Options::default()
    };

    match simplify_with_options(&html, &options) {
        Ok(page) => {
            assert_eq!(page.content.len(), 4);
            assert_eq!(page.content.last().map(String::as_str), Some("    Ok."));
        }
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}

#[test]
fn test_blog_post_paragraphs() {
    let html = read_fixture("blog_post.html");

    match simplify(&html) {
        Ok(page) => {
            assert_eq!(page.title, "Notes on Line-Oriented Parsing | A Small Blog");
            assert_eq!(
                page.content,
                vec![
                    "Notes on Line-Oriented Parsing",
                    "Most HTML on the web is written one block per line.",
                    "A parser that reads line by line can exploit that & stay small.",
                    "It only keeps tag names, nesting and text.",
                ]
            );
            assert!(
                !page.content_text().contains("Popular Posts"),
                "Sidebar content should be skipped"
            );
        }
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}

#[test]
fn test_fixture_from_reader_matches_string_input() {
    let file = File::open(fixture_path("blog_post.html")).expect("Failed to open fixture");
    let from_reader = simplify_reader(BufReader::new(file), &Options::default());
    let from_string = simplify(&read_fixture("blog_post.html"));

    match (from_reader, from_string) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (a, b) => panic!("expected both Ok(_), got {a:?} and {b:?}"),
    }
}

#[test]
fn test_fixture_from_bytes_matches_string_input() {
    let bytes = std::fs::read(fixture_path("novel_chapter.html")).expect("Failed to read fixture");
    let from_bytes = simplify_bytes(&bytes);
    let from_string = simplify(&read_fixture("novel_chapter.html"));

    match (from_bytes, from_string) {
        (Ok(a), Ok(b)) => assert_eq!(a, b),
        (a, b) => panic!("expected both Ok(_), got {a:?} and {b:?}"),
    }
}
