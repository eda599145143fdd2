//! Selection lists — which modules and classes go on a page.
//!
//! ```text
//! package.module              document the module and its public routines
//! package.module::ClassName   document only that class
//! ```
//!
//! Blank lines are skipped. Everything else is a selector.

use crate::document::Documenter;
use crate::error::{Error, Result};
use crate::loader::{Symbol, SymbolLoader};
use crate::model::{Page, SymbolDoc, TocEntry};
use crate::parser::HeaderMatch;
use crate::render::markdown::Markdown;
use crate::toc;
use tracing::info;

/// One line of a selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    Module(String),
    Class { module: String, class: String },
}

impl Selector {
    /// Parse one non-blank line. The last `::` separates the class name.
    pub fn parse(line: &str) -> Self {
        match line.rsplit_once("::") {
            Some((module, class)) => Selector::Class {
                module: module.to_string(),
                class: class.to_string(),
            },
            None => Selector::Module(line.to_string()),
        }
    }

    pub fn resolve(&self, loader: &dyn SymbolLoader) -> Result<Symbol> {
        match self {
            Selector::Module(module) => loader.import(module),
            Selector::Class { module, class } => {
                let module = loader.import(module)?;
                loader.attribute(&module, class)
            }
        }
    }
}

/// Per-run settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    pub header_match: HeaderMatch,
}

/// Non-blank lines of `text` in order, trimmed.
pub fn selection_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Resolve and document every selected symbol, in selection order, and
/// build the page TOC from their short names.
///
/// The first line that fails to resolve aborts the whole run.
pub fn parse_selected(
    text: &str,
    loader: &dyn SymbolLoader,
    markdown: &dyn Markdown,
    options: Options,
) -> Result<(Vec<SymbolDoc>, Vec<TocEntry>)> {
    let documenter = Documenter::new(loader, markdown, options.header_match);
    let mut titles = Vec::new();
    let mut docs = Vec::new();

    for line in selection_lines(text) {
        let symbol = Selector::parse(line)
            .resolve(loader)
            .map_err(|err| at_line(err, line))?;
        info!(selector = line, "documenting");
        docs.push(documenter.document(&symbol)?);
        titles.push(symbol.name);
    }

    Ok((docs, toc::create_toc(&titles)))
}

/// [`parse_selected`] packaged as a [`Page`].
pub fn build_page(
    title: &str,
    text: &str,
    loader: &dyn SymbolLoader,
    markdown: &dyn Markdown,
    options: Options,
) -> Result<Page> {
    let (docs, toc) = parse_selected(text, loader, markdown, options)?;
    Ok(Page {
        title: title.to_string(),
        docs,
        toc,
    })
}

fn at_line(err: Error, line: &str) -> Error {
    match err {
        Error::SymbolResolution { reason, .. } => Error::SymbolResolution {
            line: line.to_string(),
            reason,
        },
        other => other,
    }
}
