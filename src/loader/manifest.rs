//! Symbol loader backed by a precomputed JSON metadata table.
//!
//! ```json
//! {
//!   "modules": [
//!     {
//!       "name": "shapes",
//!       "doc": "Geometry helpers.",
//!       "members": [
//!         { "kind": "class", "name": "Circle", "doc": "...", "members": [
//!           { "kind": "routine", "name": "__init__",
//!             "params": [{ "name": "self" }, { "name": "radius" }] }
//!         ] },
//!         { "kind": "routine", "name": "sqrt", "module": "math",
//!           "params": [{ "name": "x" }] }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! Routines nested in a class are bound unless they say `"bound": false`.
//! A routine without `params` is opaque and cannot be introspected. `module`
//! overrides the declaring module, which marks re-exported names.

use super::{Param, Symbol, SymbolKind, SymbolLoader};
use crate::error::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct ManifestDef {
    #[serde(default)]
    modules: Vec<ModuleDef>,
}

#[derive(Debug, Deserialize)]
struct ModuleDef {
    name: String,
    #[serde(default)]
    doc: Option<String>,
    #[serde(default)]
    members: Vec<MemberDef>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum MemberDef {
    Class {
        name: String,
        #[serde(default)]
        module: Option<String>,
        #[serde(default)]
        doc: Option<String>,
        #[serde(default)]
        members: Vec<MemberDef>,
    },
    Routine {
        name: String,
        #[serde(default)]
        module: Option<String>,
        #[serde(default)]
        doc: Option<String>,
        #[serde(default)]
        params: Option<Vec<Param>>,
        #[serde(default)]
        bound: Option<bool>,
    },
}

#[derive(Debug)]
struct Node {
    symbol: Symbol,
    doc: Option<String>,
    params: Option<Vec<Param>>,
    /// Keys into `ManifestLoader::nodes`
    members: Vec<String>,
}

/// Where a member is being declared.
struct Scope<'a> {
    key: &'a str,
    path: &'a str,
    module: &'a str,
    in_class: bool,
}

/// [`SymbolLoader`] over a JSON manifest.
///
/// Modules are keyed by their dotted name, members by `{parent key}::{name}`,
/// so `pkg::util::run` (method of class `util` in `pkg`) and `pkg.util::run`
/// (routine of module `pkg.util`) stay apart.
#[derive(Debug, Default)]
pub struct ManifestLoader {
    nodes: HashMap<String, Node>,
}

impl ManifestLoader {
    /// Read and index a manifest file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ManifestIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Index a manifest held in memory.
    pub fn from_json(json: &str) -> Result<Self> {
        let def: ManifestDef = serde_json::from_str(json)?;
        let mut loader = ManifestLoader::default();
        for module in def.modules {
            loader.add_module(module)?;
        }
        debug!(symbols = loader.nodes.len(), "indexed symbol manifest");
        Ok(loader)
    }

    fn add_module(&mut self, def: ModuleDef) -> Result<()> {
        let symbol = Symbol {
            name: def.name.rsplit('.').next().unwrap_or(&def.name).to_string(),
            path: def.name.clone(),
            module: Some(def.name.clone()),
            kind: SymbolKind::Module,
            key: def.name.clone(),
        };
        self.insert(symbol, def.doc, None)?;

        let scope = Scope {
            key: &def.name,
            path: &def.name,
            module: &def.name,
            in_class: false,
        };
        let members = def
            .members
            .into_iter()
            .map(|member| self.add_member(member, &scope))
            .collect::<Result<Vec<_>>>()?;
        self.set_members(&def.name, members);
        Ok(())
    }

    /// Index one member declared in `scope` and return its key.
    fn add_member(&mut self, def: MemberDef, scope: &Scope<'_>) -> Result<String> {
        match def {
            MemberDef::Class {
                name,
                module,
                doc,
                members,
            } => {
                let key = format!("{}::{}", scope.key, name);
                let path = format!("{}.{}", scope.path, name);
                let module = module.unwrap_or_else(|| scope.module.to_string());
                let symbol = Symbol {
                    name,
                    path: path.clone(),
                    module: Some(module.clone()),
                    kind: SymbolKind::Class,
                    key: key.clone(),
                };
                self.insert(symbol, doc, None)?;

                // Methods inherit the class's declaring module.
                let class_scope = Scope {
                    key: &key,
                    path: &path,
                    module: &module,
                    in_class: true,
                };
                let member_keys = members
                    .into_iter()
                    .map(|member| self.add_member(member, &class_scope))
                    .collect::<Result<Vec<_>>>()?;
                self.set_members(&key, member_keys);
                Ok(key)
            }
            MemberDef::Routine {
                name,
                module,
                doc,
                params,
                bound,
            } => {
                let key = format!("{}::{}", scope.key, name);
                let symbol = Symbol {
                    path: format!("{}.{}", scope.path, name),
                    name,
                    module: Some(module.unwrap_or_else(|| scope.module.to_string())),
                    kind: SymbolKind::Routine {
                        bound: bound.unwrap_or(scope.in_class),
                    },
                    key: key.clone(),
                };
                self.insert(symbol, doc, params)?;
                Ok(key)
            }
        }
    }

    fn insert(&mut self, symbol: Symbol, doc: Option<String>, params: Option<Vec<Param>>) -> Result<()> {
        if self.nodes.contains_key(&symbol.key) {
            return Err(Error::DuplicateSymbol { path: symbol.path });
        }
        self.nodes.insert(
            symbol.key.clone(),
            Node {
                symbol,
                doc,
                params,
                members: Vec::new(),
            },
        );
        Ok(())
    }

    fn set_members(&mut self, key: &str, members: Vec<String>) {
        if let Some(node) = self.nodes.get_mut(key) {
            node.members = members;
        }
    }

    fn node(&self, symbol: &Symbol) -> Option<&Node> {
        self.nodes.get(&symbol.key)
    }
}

impl SymbolLoader for ManifestLoader {
    fn import(&self, module: &str) -> Result<Symbol> {
        self.nodes
            .get(module)
            .filter(|node| node.symbol.is_module())
            .map(|node| node.symbol.clone())
            .ok_or_else(|| Error::SymbolResolution {
                line: module.to_string(),
                reason: format!("no module named `{}`", module),
            })
    }

    fn attribute(&self, module: &Symbol, name: &str) -> Result<Symbol> {
        self.nodes
            .get(&format!("{}::{}", module.key, name))
            .map(|node| node.symbol.clone())
            .ok_or_else(|| Error::SymbolResolution {
                line: format!("{}::{}", module.path, name),
                reason: format!("module `{}` has no attribute `{}`", module.path, name),
            })
    }

    fn members_of(&self, symbol: &Symbol) -> Vec<Symbol> {
        self.node(symbol)
            .map(|node| {
                node.members
                    .iter()
                    .filter_map(|key| self.nodes.get(key))
                    .map(|member| member.symbol.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn parameters_of(&self, routine: &Symbol) -> Result<Vec<Param>> {
        self.node(routine)
            .and_then(|node| node.params.clone())
            .ok_or_else(|| Error::Introspection {
                symbol: routine.path.clone(),
            })
    }

    fn doc_of(&self, symbol: &Symbol) -> Option<String> {
        self.node(symbol).and_then(|node| node.doc.clone())
    }
}
