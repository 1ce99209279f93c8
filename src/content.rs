//! Main-content selection.
//!
//! The heuristic is deliberately shallow: starting at `<body>`, it skips
//! wrappers that have a single child, then keeps the child whose own text
//! is longest. Only a node's own text lines are weighed. Those already
//! hold the text the parser lifted out of inline descendants (see
//! [`crate::node`]); descendants are never summed on top.

use crate::error::{Error, Result};
use crate::node::Node;

/// Returns the text lines of the main content of an `<html>` tree.
///
/// When the selector has to choose between siblings, lines of the winner
/// that are `min_line_length` characters or shorter are dropped.
///
/// # Errors
///
/// - [`Error::NotHtml`] if `root` is not an `<html>` element
/// - [`Error::NoBody`] if `root` has no direct `<body>` child
/// - [`Error::NoContent`] if `<body>` has no text lines of its own
pub fn extract_content(root: &Node, min_line_length: usize) -> Result<Vec<String>> {
    if !root.is("html") {
        return Err(Error::NotHtml(root.tag_name.clone()));
    }
    let body = root.find_child("body").ok_or(Error::NoBody)?;
    if body.text.is_empty() {
        return Err(Error::NoContent);
    }

    let mut main = body;
    while let [only] = main.children.as_slice() {
        main = only;
    }

    let Some(densest) = densest_child(main) else {
        log::debug!("main content is the own text of <{}>", main.tag_name);
        return Ok(main.text.clone());
    };
    log::debug!(
        "main content is <{}> inside <{}> ({} chars)",
        densest.tag_name,
        main.tag_name,
        densest.text_len()
    );

    Ok(densest
        .text
        .iter()
        .filter(|line| line.chars().count() > min_line_length)
        .cloned()
        .collect())
}

/// First child with the strictly greatest own-text length.
fn densest_child(node: &Node) -> Option<&Node> {
    let mut best: Option<(&Node, usize)> = None;
    for child in &node.children {
        let weight = child.text_len();
        if best.is_none_or(|(_, max)| weight > max) {
            best = Some((child, weight));
        }
    }
    best.map(|(child, _)| child)
}
