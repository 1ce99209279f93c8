//! Recoverable parse anomalies.
//!
//! The parser never fails on bad markup. Whatever it had to repair is
//! reported here so callers and tests can see what happened.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A non-fatal event recorded while parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// A closing tag that does not close the innermost open element was dropped.
    MismatchedClosingTag {
        /// Innermost open element.
        open: String,
        /// Name of the discarded closing tag.
        found: String,
    },

    /// Input ended before the `>` (or `-->`) of a tag.
    UnterminatedTag { tag: String },

    /// Input ended inside a `<script>` or `<style>` element.
    UnterminatedRawText { tag: String },

    /// Input ended while this element was still open.
    Truncated { open: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MismatchedClosingTag { open, found } => {
                write!(f, "discarded mismatched closing tag </{found}> inside <{open}>")
            }
            Self::UnterminatedTag { tag } => write!(f, "input ended inside tag <{tag}"),
            Self::UnterminatedRawText { tag } => {
                write!(f, "input ended before </{tag}>")
            }
            Self::Truncated { open } => write!(f, "input ended with <{open}> still open"),
        }
    }
}
