//! Symbol documenter — builds a [`SymbolDoc`] tree for one symbol.

use crate::error::Result;
use crate::loader::{Symbol, SymbolLoader};
use crate::model::SymbolDoc;
use crate::parser::{self, HeaderMatch};
use crate::render::markdown::Markdown;
use crate::signature::signature;
use tracing::debug;

/// Documents symbols through a loader and a markdown renderer.
pub struct Documenter<'a> {
    loader: &'a dyn SymbolLoader,
    markdown: &'a dyn Markdown,
    header_match: HeaderMatch,
}

impl<'a> Documenter<'a> {
    pub fn new(loader: &'a dyn SymbolLoader, markdown: &'a dyn Markdown, header_match: HeaderMatch) -> Self {
        Documenter {
            loader,
            markdown,
            header_match,
        }
    }

    /// Document `symbol` and, for modules and classes, its public routines.
    pub fn document(&self, symbol: &Symbol) -> Result<SymbolDoc> {
        let doc = self.loader.doc_of(symbol);
        let comment = parser::parse_doc(doc.as_deref(), self.header_match, self.markdown)?;
        let signature = signature(self.loader, symbol)?;

        let members = if symbol.is_routine() {
            Vec::new()
        } else {
            self.public_routines(symbol)
                .iter()
                .map(|member| self.document(member))
                .collect::<Result<Vec<_>>>()?
        };

        debug!(symbol = %symbol.path, members = members.len(), "documented symbol");
        Ok(SymbolDoc::from_parts(signature, comment, members))
    }

    /// Public routines defined by `owner`, sorted by name.
    ///
    /// Module members must also be declared in that module, which drops
    /// names imported from elsewhere.
    fn public_routines(&self, owner: &Symbol) -> Vec<Symbol> {
        let mut routines: Vec<Symbol> = self
            .loader
            .members_of(owner)
            .into_iter()
            .filter(|member| member.is_routine() && !member.is_private())
            .filter(|member| !owner.is_module() || member.module.as_deref() == Some(owner.path.as_str()))
            .collect();
        routines.sort_by(|a, b| a.name.cmp(&b.name));
        routines
    }
}
