//! Data model for parsed documentation — independent of the output format.

use serde::Serialize;

/// A docstring split into its summary line, prose and labeled sections.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedComment {
    pub title: String,
    /// Rendered HTML
    pub description: String,
    pub sections: Vec<Section>,
}

/// One labeled block of a docstring, e.g. `Args` or `Returns`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub label: String,
    /// Rendered HTML
    pub body: String,
}

/// Documentation record for a single module, class or routine.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolDoc {
    pub signature: String,
    pub title: String,
    pub description: String,
    pub sections: Vec<Section>,
    /// Public routines defined by a module or class; always empty for routines
    pub members: Vec<SymbolDoc>,
}

impl SymbolDoc {
    pub fn from_parts(signature: String, comment: ParsedComment, members: Vec<SymbolDoc>) -> Self {
        SymbolDoc {
            signature,
            title: comment.title,
            description: comment.description,
            sections: comment.sections,
            members,
        }
    }
}

/// Table-of-contents node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub title: String,
    /// e.g. "#0"
    pub anchor: String,
    pub active: bool,
    pub children: Vec<TocEntry>,
}

/// Everything a page renderer needs for one selection list.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub title: String,
    pub docs: Vec<SymbolDoc>,
    pub toc: Vec<TocEntry>,
}
