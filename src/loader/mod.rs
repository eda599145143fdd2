//! Symbol loader interface — how the documenter reaches modules, classes and
//! routines without knowing where their metadata comes from.

pub mod manifest;

pub use manifest::ManifestLoader;

use crate::error::Result;
use serde::Deserialize;
use std::fmt;

/// What kind of object a [`Symbol`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Module,
    Class,
    /// A function or method. `bound` routines carry an implicit receiver as
    /// their first parameter.
    Routine { bound: bool },
}

/// Handle to a loaded symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// Short name, e.g. "Circle"
    pub name: String,
    /// Full dotted path, e.g. "pkg.shapes.Circle"
    pub path: String,
    /// Module that declares the symbol, if known
    pub module: Option<String>,
    pub kind: SymbolKind,
    /// Lookup key assigned by the loader. Unlike `path` it is unique: a
    /// class attribute and a submodule attribute can share a dotted path.
    pub key: String,
}

impl Symbol {
    pub fn is_module(&self) -> bool {
        self.kind == SymbolKind::Module
    }

    pub fn is_class(&self) -> bool {
        self.kind == SymbolKind::Class
    }

    pub fn is_routine(&self) -> bool {
        matches!(self.kind, SymbolKind::Routine { .. })
    }

    pub fn is_private(&self) -> bool {
        self.name.starts_with('_')
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamKind {
    #[default]
    Positional,
    /// `*args`
    VarPositional,
    /// `**kwargs`
    VarKeyword,
}

/// One parameter of a routine, as stringified by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Param {
    pub name: String,
    #[serde(default)]
    pub kind: ParamKind,
    /// Default value expression, rendered verbatim
    #[serde(default)]
    pub default: Option<String>,
}

impl Param {
    pub fn new(name: &str) -> Self {
        Param {
            name: name.to_string(),
            kind: ParamKind::Positional,
            default: None,
        }
    }

    pub fn with_default(name: &str, default: &str) -> Self {
        Param {
            default: Some(default.to_string()),
            ..Param::new(name)
        }
    }

    pub fn var_positional(name: &str) -> Self {
        Param {
            kind: ParamKind::VarPositional,
            ..Param::new(name)
        }
    }

    pub fn var_keyword(name: &str) -> Self {
        Param {
            kind: ParamKind::VarKeyword,
            ..Param::new(name)
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParamKind::Positional => write!(f, "{}", self.name)?,
            ParamKind::VarPositional => write!(f, "*{}", self.name)?,
            ParamKind::VarKeyword => write!(f, "**{}", self.name)?,
        }
        if let Some(ref default) = self.default {
            write!(f, "={}", default)?;
        }
        Ok(())
    }
}

/// Source of symbols and their metadata.
pub trait SymbolLoader {
    /// Load a module by dotted path.
    fn import(&self, module: &str) -> Result<Symbol>;

    /// Look up a named attribute of a loaded module.
    fn attribute(&self, module: &Symbol, name: &str) -> Result<Symbol>;

    /// Direct members of a module or class, in any order.
    fn members_of(&self, symbol: &Symbol) -> Vec<Symbol>;

    /// Parameters of a routine, receiver included for bound routines.
    fn parameters_of(&self, routine: &Symbol) -> Result<Vec<Param>>;

    /// Raw docstring, if the symbol has one.
    fn doc_of(&self, symbol: &Symbol) -> Option<String>;

    /// The class initializer, if the class defines one.
    fn initializer_of(&self, class: &Symbol) -> Option<Symbol> {
        self.members_of(class)
            .into_iter()
            .find(|member| member.is_routine() && member.name == "__init__")
    }
}
