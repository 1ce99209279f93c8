//! Result type of the simplification pipeline.

use serde::{Deserialize, Serialize};

use crate::diagnostic::Diagnostic;

/// The title and main content of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Simplified {
    /// Text of the page's `<title>`, entity-decoded. Empty if there was none.
    pub title: String,

    /// Lines of the main content, in document order.
    pub content: Vec<String>,

    /// The input ended before the document was closed; `content` may be partial.
    pub truncated: bool,

    /// Markup repairs made while parsing (only with `Options::collect_diagnostics`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<Diagnostic>,
}

impl Simplified {
    /// Main content joined with newlines.
    #[must_use]
    pub fn content_text(&self) -> String {
        self.content.join("\n")
    }
}
