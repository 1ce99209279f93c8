//! Character encoding detection and transcoding.
//!
//! Pages are often served in legacy encodings (GBK, windows-1252, ...). The
//! parser only ever sees decoded text, so raw bytes are converted to UTF-8
//! here first, either with an explicit label or by reading the charset
//! declared in the page's `<meta>` tags.

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Number of leading bytes searched for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// Match `<meta charset="...">` tag
#[allow(clippy::expect_used)]
static CHARSET_META_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s/>]+)"#).expect("valid regex")
});

/// Resolves an encoding label such as `"gbk"` or `"ISO-8859-1"`.
#[must_use]
pub fn for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Detect character encoding from HTML bytes.
///
/// Covers both `<meta charset="...">` and the older
/// `<meta http-equiv="Content-Type" content="text/html; charset=...">` form,
/// looking only at the first kilobyte. Defaults to UTF-8.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);

    CHARSET_META_RE
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| for_label(m.as_str()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// A recognised `label` wins over detection; an unknown one is logged and
/// ignored. Invalid sequences become U+FFFD instead of failing.
///
/// # Examples
///
/// ```
/// use page_simplifier::encoding::transcode_to_utf8;
///
/// // "中文" in GBK
/// let html = b"<html><body>\xD6\xD0\xCE\xC4</body></html>";
/// assert!(transcode_to_utf8(html, Some("gbk")).contains("中文"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8], label: Option<&str>) -> String {
    let encoding = match label {
        Some(label) => for_label(label).unwrap_or_else(|| {
            log::debug!("unknown encoding label {label:?}; detecting from markup");
            detect_encoding(html)
        }),
        None => detect_encoding(html),
    };

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, had_errors) = encoding.decode(html);
    if had_errors {
        log::debug!("replaced malformed {} sequences", encoding.name());
    }
    decoded.into_owned()
}
