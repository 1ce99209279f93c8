//! Error types for page-simplifier.
//!
//! Parsing itself never fails on malformed markup; the variants here cover
//! the places where a caller has to be told that no result could be produced.

/// Error type for simplification operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input never formed an `<html>` element.
    #[error("No html element found in input")]
    NoHtml,

    /// Content selection was asked to run on a root other than `<html>`.
    #[error("Cannot find HTML tag: root element is <{0}>")]
    NotHtml(String),

    /// The `<html>` element has no direct `<body>` child.
    #[error("Cannot find body tag")]
    NoBody,

    /// The `<body>` element carries no text of its own.
    #[error("No content found in body")]
    NoContent,

    /// Reading lines from the underlying reader failed.
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for simplification operations.
pub type Result<T> = std::result::Result<T, Error>;
