//! Tag catalogs used by the parser.
//!
//! Void tags come as an array (for iteration) and a `HashSet` (for O(1)
//! lookup). The two raw-text tags are a plain array.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Void elements: never closed, never have children or text.
pub static VOID_TAGS: [&str; 16] = [
    "area", "base", "br", "col", "command", "embed", "hr", "img", "input", "keygen", "link",
    "meta", "param", "source", "track", "wbr",
];

/// Elements whose raw content is skipped instead of parsed.
pub static RAW_TEXT_TAGS: [&str; 2] = ["style", "script"];

/// Element that splits the surrounding text into separate lines.
pub const LINE_BREAK_TAG: &str = "br";

/// Element whose text becomes the document title.
pub const TITLE_TAG: &str = "title";

/// `VOID_TAGS` as a `HashSet`
pub static VOID_TAG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| VOID_TAGS.into_iter().collect());

#[must_use]
pub fn is_void_tag(tag: &str) -> bool {
    VOID_TAG_SET.contains(tag)
}

#[must_use]
pub fn is_raw_text_tag(tag: &str) -> bool {
    RAW_TEXT_TAGS.contains(&tag)
}

/// Declarations (`<!doctype>`, comments) and processing instructions (`<?xml?>`).
#[must_use]
pub fn is_declaration(tag: &str) -> bool {
    tag.starts_with(['!', '?'])
}
