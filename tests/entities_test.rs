use page_simplifier::entities::{decode, ENTITY_TABLE};
use page_simplifier::normalize::{clean_empty_lines, replace_entities};
use page_simplifier::Node;

fn with_text(tag: &str, text: &[&str]) -> Node {
    let mut node = Node::element(tag);
    node.text = text.iter().map(|s| (*s).to_string()).collect();
    node
}

#[test]
fn ampersand_is_decoded() {
    assert_eq!(decode("a &amp; b"), "a & b");
}

#[test]
fn entities_are_not_decoded_twice() {
    assert_eq!(decode("x&amp;amp;y"), "x&amp;y");
}

#[test]
fn non_entity_text_is_unchanged() {
    for text in ["", "plain", "a & b", "50% off; today", "&", ";&;", "&123;"] {
        assert_eq!(decode(text), text);
    }
}

#[test]
fn decoding_plain_output_again_changes_nothing() {
    let once = decode("&ldquo;Hi&rdquo; &middot; &lt;3");
    assert_eq!(once, "\u{201C}Hi\u{201D} \u{00B7} <3");
    assert_eq!(decode(&once), once);
}

#[test]
fn every_table_entry_is_total() {
    for (spelling, replacement) in ENTITY_TABLE {
        let text = format!("[{spelling}]");
        assert_eq!(decode(&text), format!("[{replacement}]"));
    }
}

#[test]
fn other_references_are_dropped() {
    assert_eq!(decode("&hellip;&mdash;&#8212;&#x2014;done"), "done");
}

#[test]
fn blank_line_cleanup() {
    let mut node = with_text("p", &["", "  ", "hello"]);
    clean_empty_lines(&mut node);
    assert_eq!(node.text, vec!["hello"]);
}

#[test]
fn cleanup_after_substitution_catches_entity_only_lines() {
    let mut root = with_text("div", &["&nbsp;", "text &amp; more", "&#160;"]);
    root.children.push(with_text("span", &["&nbsp; &nbsp;"]));

    replace_entities(&mut root);
    clean_empty_lines(&mut root);

    assert_eq!(root.text, vec!["text & more"]);
    assert!(root.children[0].text.is_empty());
}
