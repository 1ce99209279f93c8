//! Edge case integration tests
//!
//! Tests for unusual markup, boundary conditions and error handling.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use page_simplifier::{simplify, simplify_with_options, Error, Options};

#[test]
fn test_minimal_html() {
    let html = "<html><body><p>Minimal content.</p></body></html>";

    match simplify(html) {
        Ok(page) => assert_eq!(page.content, vec!["Minimal content."]),
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}

#[test]
fn test_empty_body() {
    let result = simplify("<html><body></body></html>");
    assert!(matches!(result, Err(Error::NoContent)), "got {result:?}");
}

#[test]
fn test_uppercase_markup() {
    let html = "<HTML><HEAD><TITLE>Shouting</TITLE></HEAD><BODY><P>Upper case markup works fine.</P></BODY></HTML>";

    match simplify(html) {
        Ok(page) => {
            assert_eq!(page.title, "Shouting");
            assert_eq!(page.content, vec!["Upper case markup works fine."]);
        }
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}

#[test]
fn test_tag_split_across_lines() {
    let html = "<html><body><div\n  class=\"story\"\n  id=\"main\">Text inside a split tag.</div></body></html>";

    match simplify(html) {
        Ok(page) => assert_eq!(page.content, vec!["Text inside a split tag."]),
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}

#[test]
fn test_preamble_and_trailing_junk_are_ignored() {
    let html = "garbage before\n<?xml version=\"1.0\"?>\n<!DOCTYPE html>\n<!-- hi -->\n<html><body>Real text here.</body></html>\n<p>after the end</p>";

    match simplify(html) {
        Ok(page) => assert_eq!(page.content, vec!["Real text here."]),
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}

#[test]
fn test_conditional_comment_content_is_hidden() {
    let html = "<html><body><div><!--[if IE]><p>Please upgrade your browser</p><![endif]--><p>Visible paragraph.</p></div></body></html>";

    match simplify(html) {
        Ok(page) => assert_eq!(page.content, vec!["Visible paragraph."]),
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}

#[test]
fn test_textless_only_child_yields_empty_content() {
    // The single-child shortcut descends into the image, which has no lines.
    let html = "<html><body><div><img src=\"cover.png\">Caption text.</div></body></html>";

    match simplify(html) {
        Ok(page) => assert!(page.content.is_empty()),
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}

#[test]
fn test_script_with_markup_inside() {
    let html = "<html><body><div><script>document.write('</div><p>fake</p>');</script><p>Real paragraph text.</p></div></body></html>";

    match simplify(html) {
        Ok(page) => assert_eq!(page.content, vec!["Real paragraph text."]),
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}

#[test]
fn test_mixed_case_raw_text_end_tag() {
    let html = "<html><body><div><SCRIPT>var x = 1;</Script><p>After the script.</p></div></body></html>";

    match simplify(html) {
        Ok(page) => assert_eq!(page.content, vec!["After the script."]),
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}

#[test]
fn test_self_closing_syntax() {
    let html = "<html><body><div><widget/><p>Text after widget.<br/>Second line here.</p></div></body></html>";

    match simplify(html) {
        Ok(page) => assert_eq!(page.content, vec!["Text after widget.", "Second line here."]),
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}

#[test]
fn test_html_nested_in_other_element_is_not_found() {
    let result = simplify("<div><html><body>text</body></html></div>");
    assert!(matches!(result, Err(Error::NoHtml)), "got {result:?}");
}

#[test]
fn test_not_html_root_message() {
    let err = Error::NotHtml("div".to_string());
    assert_eq!(err.to_string(), "Cannot find HTML tag: root element is <div>");
}

#[test]
fn test_result_serializes_to_json() {
    let options = Options {
        collect_diagnostics: true,
        ..Options::default()
    };
    let page = simplify_with_options(
        "<html><head><title>T</title></head><body></em>Body text</body></html>",
        &options,
    );

    match page {
        Ok(page) => {
            let json = serde_json::to_value(&page).expect("serializable");
            assert_eq!(json["title"], "T");
            assert_eq!(json["content"][0], "Body text");
            assert_eq!(json["truncated"], false);
            assert_eq!(json["diagnostics"][0]["kind"], "mismatched_closing_tag");
            assert_eq!(json["diagnostics"][0]["found"], "em");
        }
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}

#[test]
fn test_diagnostics_are_omitted_from_json_when_empty() {
    match simplify("<html><body>Body text</body></html>") {
        Ok(page) => {
            let json = serde_json::to_string(&page).unwrap_or_default();
            assert!(!json.contains("diagnostics"), "got {json}");
        }
        Err(err) => panic!("Simplification failed: {err:?}"),
    }
}
