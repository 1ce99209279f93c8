//! In-place text passes over a parsed tree.
//!
//! Both passes touch only the text lines of each node; the tree structure
//! is left alone. Run [`replace_entities`] first so that lines made up of
//! `&nbsp;` alone are caught by [`clean_empty_lines`].

use std::borrow::Cow;

use crate::entities;
use crate::node::Node;

/// Decodes the entity table in every text line of the tree.
pub fn replace_entities(root: &mut Node) {
    for_each_node(root, |node| {
        for line in &mut node.text {
            let decoded = match entities::decode(line) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(decoded) => decoded,
            };
            *line = decoded;
        }
    });
}

/// Removes every text line that is empty or whitespace-only from the tree.
pub fn clean_empty_lines(root: &mut Node) {
    for_each_node(root, |node| node.text.retain(|line| !line.trim().is_empty()));
}

fn for_each_node(root: &mut Node, mut visit: impl FnMut(&mut Node)) {
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        visit(node);
        stack.extend(node.children.iter_mut());
    }
}
