//! Docstring parser — splitter, section parser and indentation helpers.

pub mod indent;
pub mod section;
pub mod split;

pub use split::{HeaderMatch, HEADERS};

use crate::error::Result;
use crate::model::ParsedComment;
use crate::render::markdown::Markdown;

/// Parse a (possibly absent) docstring into title, rendered description and
/// rendered sections. The docstring is cleaned with [`indent::cleandoc`]
/// first.
pub fn parse_doc(doc: Option<&str>, mode: HeaderMatch, markdown: &dyn Markdown) -> Result<ParsedComment> {
    let Some(doc) = doc else {
        return Ok(ParsedComment::default());
    };

    let raw = split::split(&indent::cleandoc(doc), mode);
    let sections = raw
        .sections
        .iter()
        .map(|chunk| section::parse_section(chunk, markdown))
        .collect::<Result<Vec<_>>>()?;

    Ok(ParsedComment {
        title: raw.title,
        description: markdown.to_html(&raw.description),
        sections,
    })
}
