//! Section splitter — classifies a docstring into title, prose and raw
//! section chunks.
//!
//! A section starts at the first occurrence of one of the [`HEADERS`]
//! followed by a colon. With [`HeaderMatch::Anywhere`] the token may sit in
//! the middle of a sentence, so prose such as "see the Returns: field" ahead
//! of the real sections is split as a section. That ambiguity is part of the
//! grammar; [`HeaderMatch::LineStart`] is the opt-in stricter reading.

use regex::Regex;
use std::sync::LazyLock;

/// Recognized section headers. Exact, case-sensitive.
pub const HEADERS: [&str; 5] = ["Args", "Returns", "Yields", "Raises", "Attributes"];

static RE_LINE_START_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(Args|Returns|Yields|Raises|Attributes):").unwrap()
});

/// Where a header token may appear to be recognized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderMatch {
    /// Anywhere in the text, the first occurrence wins
    #[default]
    Anywhere,
    /// Only at the start of a line, after optional indentation
    LineStart,
}

/// Unrendered result of [`split`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RawSplit {
    pub title: String,
    pub description: String,
    /// Each chunk begins with `Label:` and always contains a line break
    pub sections: Vec<String>,
}

/// Split a docstring into its title line, description and section chunks.
pub fn split(doc: &str, mode: HeaderMatch) -> RawSplit {
    if doc.is_empty() {
        return RawSplit::default();
    }

    let (title, rest) = match doc.trim().split_once('\n') {
        Some((title, rest)) => (title.trim_end_matches('\r'), rest),
        None => {
            return RawSplit {
                title: doc.trim().to_string(),
                ..Default::default()
            }
        }
    };

    let mut indexes = header_indexes(rest, mode);
    if indexes.is_empty() {
        return RawSplit {
            title: title.to_string(),
            description: rest.to_string(),
            sections: Vec::new(),
        };
    }
    indexes.sort_unstable();

    let mut sections = Vec::with_capacity(indexes.len());
    let ends = indexes.iter().skip(1).copied().chain(std::iter::once(rest.len()));
    for (start, end) in indexes.iter().copied().zip(ends) {
        let mut chunk = rest[start..end].to_string();
        // `Returns: value` on the last line has no break after the header
        if !chunk.contains('\n') {
            chunk.push('\n');
        }
        sections.push(chunk);
    }

    RawSplit {
        title: title.to_string(),
        description: rest[..indexes[0]].to_string(),
        sections,
    }
}

/// Byte offset of the first occurrence of each header present in `text`.
fn header_indexes(text: &str, mode: HeaderMatch) -> Vec<usize> {
    match mode {
        HeaderMatch::Anywhere => HEADERS
            .iter()
            .filter_map(|header| text.find(&format!("{}:", header)))
            .collect(),
        HeaderMatch::LineStart => {
            let mut found: Vec<(&str, usize)> = Vec::new();
            for token in RE_LINE_START_HEADER
                .captures_iter(text)
                .filter_map(|caps| caps.get(1))
            {
                if !found.iter().any(|(name, _)| *name == token.as_str()) {
                    found.push((token.as_str(), token.start()));
                }
            }
            found.into_iter().map(|(_, index)| index).collect()
        }
    }
}
