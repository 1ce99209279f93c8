//! End-to-end pipeline: parse, normalize, select.

use crate::content;
use crate::error::Result;
use crate::normalize;
use crate::options::Options;
use crate::parser;
use crate::result::Simplified;
use crate::source::LineSource;

/// Runs the whole pipeline over a line source.
pub(crate) fn simplify_source<S: LineSource>(source: S, options: &Options) -> Result<Simplified> {
    let mut parsed = parser::parse_document(source, options)?;
    if parsed.truncated {
        log::warn!("document ended before </html>; content may be incomplete");
    }

    normalize::replace_entities(&mut parsed.root);
    normalize::clean_empty_lines(&mut parsed.root);

    let content = content::extract_content(&parsed.root, options.min_line_length)?;
    log::debug!(
        "selected {} content line(s), title {:?}",
        content.len(),
        parsed.title
    );

    Ok(Simplified {
        title: parsed.title,
        content,
        truncated: parsed.truncated,
        diagnostics: parsed.diagnostics,
    })
}
