//! Section parser — turns one raw `Label:` chunk into a rendered [`Section`].

use crate::error::{Error, Result};
use crate::model::Section;
use crate::parser::indent::dedent;
use crate::render::markdown::Markdown;

/// Parse a chunk produced by [`super::split::split`].
///
/// The label is the header line's text before its colon. Text after the
/// colon on the header line (`Returns: the value`) leads the body.
pub fn parse_section(chunk: &str, markdown: &dyn Markdown) -> Result<Section> {
    let malformed = || Error::MalformedSection {
        chunk: chunk.to_string(),
    };

    let (header, content) = chunk.split_once('\n').ok_or_else(malformed)?;
    let (label, inline) = header.split_once(':').ok_or_else(malformed)?;
    let label = label.trim();
    if label.is_empty() {
        return Err(malformed());
    }

    let mut body = dedent(content);
    let inline = inline.trim();
    if !inline.is_empty() {
        body = if body.is_empty() {
            inline.to_string()
        } else {
            format!("{}\n{}", inline, body)
        };
    }

    Ok(Section {
        label: label.to_string(),
        body: markdown.to_html(&body),
    })
}
