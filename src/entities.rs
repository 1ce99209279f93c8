//! Character entity table.
//!
//! Only a handful of entities that commonly survive into page text are
//! decoded; every other reference is dropped from the text.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Entities decoded to a literal replacement, in lookup order.
pub const ENTITY_TABLE: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&lsaquo;", "\u{2039}"),
    ("&rsaquo;", "\u{203A}"),
    ("&lsquo;", "\u{2018}"),
    ("&rsquo;", "\u{2019}"),
    ("&ldquo;", "\u{201C}"),
    ("&rdquo;", "\u{201D}"),
    ("&middot;", "\u{00B7}"),
];

/// Matches any named or numeric character reference.
#[allow(clippy::expect_used)]
static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);").expect("ENTITY_RE regex")
});

/// Looks up the replacement for a single entity spelling such as `&amp;`.
#[must_use]
pub fn lookup(entity: &str) -> Option<&'static str> {
    ENTITY_TABLE
        .iter()
        .find(|(spelling, _)| *spelling == entity)
        .map(|(_, replacement)| *replacement)
}

/// Decodes the entity table in `text` and strips every other reference.
///
/// Runs as one left-to-right pass, so the output of a replacement is never
/// decoded again: `x&amp;amp;y` becomes `x&amp;y`.
///
/// ```
/// use page_simplifier::entities::decode;
///
/// assert_eq!(decode("a &amp; b"), "a & b");
/// assert_eq!(decode("&copy; 2015"), " 2015");
/// ```
#[must_use]
pub fn decode(text: &str) -> Cow<'_, str> {
    if !text.contains('&') {
        return Cow::Borrowed(text);
    }
    ENTITY_RE.replace_all(text, |caps: &Captures<'_>| {
        lookup(&caps[0]).unwrap_or_default()
    })
}
