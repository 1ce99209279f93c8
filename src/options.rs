//! Configuration options for page simplification.
//!
//! The `Options` struct controls the few tunables of the pipeline: the
//! short-line threshold used by the content selector, whether recovered
//! parse anomalies are collected, and how raw bytes are decoded.

/// Default threshold below which content lines are dropped as boilerplate.
pub const DEFAULT_MIN_LINE_LENGTH: usize = 10;

/// Configuration options for page simplification.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use page_simplifier::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     min_line_length: 20,
///     collect_diagnostics: true,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Lines of the selected content that are this many characters long or
    /// shorter are dropped as navigation and other boilerplate.
    ///
    /// Only applied when the selector had to choose between several
    /// sibling candidates.
    ///
    /// Default: `10`
    pub min_line_length: usize,

    /// Keep recovered parse anomalies (stray closing tags, unterminated
    /// tags, truncated containers) in the output.
    ///
    /// Anomalies are always logged at `debug` level; this only controls
    /// whether they are also returned to the caller.
    ///
    /// Default: `false`
    pub collect_diagnostics: bool,

    /// Character encoding label used to decode raw bytes (e.g. `"gbk"`).
    ///
    /// When `None`, the encoding is detected from `<meta>` declarations and
    /// falls back to UTF-8. Unknown labels are ignored in favour of detection.
    ///
    /// Default: `None`
    pub encoding: Option<String>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            min_line_length: DEFAULT_MIN_LINE_LENGTH,
            collect_diagnostics: false,
            encoding: None,
        }
    }
}
