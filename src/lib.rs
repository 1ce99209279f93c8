//! # page-simplifier
//!
//! Extracts the title and main readable text of a web page.
//!
//! Instead of building a full DOM, a small tolerant parser reads the page one
//! line at a time and keeps only tag names, nesting and text. A shallow
//! heuristic then picks the densest block under `<body>` as the main content.
//!
//! ## Quick Start
//!
//! ```rust
//! use page_simplifier::simplify;
//!
//! let html = "<html><head><title>My Page</title></head>
//! <body><div>
//! <div><a href=\"/\">Home</a></div>
//! <div>The first paragraph of the page.<br>And another line of text.</div>
//! </div></body></html>";
//!
//! let page = simplify(html)?;
//! assert_eq!(page.title, "My Page");
//! assert_eq!(page.content, ["The first paragraph of the page.", "And another line of text."]);
//! # Ok::<(), page_simplifier::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! 1. [`parser::parse_document`] builds the node tree and captures the title
//! 2. [`normalize::replace_entities`] and [`normalize::clean_empty_lines`]
//!    tidy the text lines
//! 3. [`content::extract_content`] selects the main content

mod error;
mod options;
mod result;
mod simplify;

/// Recoverable parse anomalies.
pub mod diagnostic;

/// Node tree produced by the parser.
pub mod node;

/// Line-driven tolerant HTML parser.
pub mod parser;

/// Line sources feeding the parser.
pub mod source;

/// Tag catalogs (void and raw-text elements).
pub mod tags;

/// Character entity table.
pub mod entities;

/// In-place text passes over a parsed tree.
pub mod normalize;

/// Main-content selection heuristic.
pub mod content;

/// Character encoding detection and transcoding.
pub mod encoding;

use std::io::BufRead;

// Public API - re-exports
pub use diagnostic::Diagnostic;
pub use error::{Error, Result};
pub use node::Node;
pub use options::{Options, DEFAULT_MIN_LINE_LENGTH};
pub use result::Simplified;
pub use source::{IterLines, LineSource, ReaderLines, StrLines};

/// Simplifies an HTML document using default options.
///
/// # Errors
///
/// Returns [`Error::NoHtml`] if the input has no `<html>` element, and
/// [`Error::NoBody`] or [`Error::NoContent`] if no main content can be
/// selected.
pub fn simplify(html: &str) -> Result<Simplified> {
    simplify_with_options(html, &Options::default())
}

/// Simplifies an HTML document with custom options.
///
/// # Errors
///
/// See [`simplify`].
pub fn simplify_with_options(html: &str, options: &Options) -> Result<Simplified> {
    simplify_source(StrLines::new(html), options)
}

/// Simplifies raw HTML bytes, decoding them first.
///
/// The charset comes from `<meta>` declarations and defaults to UTF-8.
///
/// ```rust
/// use page_simplifier::simplify_bytes;
///
/// // windows-1252 page with an e-acute (0xE9)
/// let html = b"<html><head><meta charset=\"windows-1252\"><title>Caf\xE9</title></head>\n<body>x</body></html>";
/// let page = simplify_bytes(html)?;
/// assert_eq!(page.title, "Café");
/// # Ok::<(), page_simplifier::Error>(())
/// ```
///
/// # Errors
///
/// See [`simplify`].
pub fn simplify_bytes(html: &[u8]) -> Result<Simplified> {
    simplify_bytes_with_options(html, &Options::default())
}

/// Simplifies raw HTML bytes with custom options.
///
/// `options.encoding`, when set to a known label, overrides detection.
///
/// # Errors
///
/// See [`simplify`].
pub fn simplify_bytes_with_options(html: &[u8], options: &Options) -> Result<Simplified> {
    let text = encoding::transcode_to_utf8(html, options.encoding.as_deref());
    simplify_with_options(&text, options)
}

/// Simplifies a document read line by line from `reader`.
///
/// The reader must yield UTF-8.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, otherwise see [`simplify`].
pub fn simplify_reader<R: BufRead>(reader: R, options: &Options) -> Result<Simplified> {
    let mut lines = ReaderLines::new(reader);
    let result = simplify_source(&mut lines, options);
    match lines.take_error() {
        Some(err) => Err(err.into()),
        None => result,
    }
}

/// Simplifies a document pulled from any [`LineSource`].
///
/// # Errors
///
/// See [`simplify`].
pub fn simplify_source<S: LineSource>(source: S, options: &Options) -> Result<Simplified> {
    simplify::simplify_source(source, options)
}
