//! Signature formatting for modules, classes and routines.

use crate::error::Result;
use crate::loader::{Param, Symbol, SymbolKind, SymbolLoader};

/// One-line invocation form of `symbol`.
///
/// - module: dotted `path`
/// - class with initializer: `class module.Name(params)` without the receiver
/// - class without initializer: `Name()`
/// - routine: `name(params)`, receiver dropped for bound routines
pub fn signature(loader: &dyn SymbolLoader, symbol: &Symbol) -> Result<String> {
    match symbol.kind {
        SymbolKind::Module => Ok(symbol.path.clone()),
        SymbolKind::Class => match loader.initializer_of(symbol) {
            Some(init) => {
                let params = loader.parameters_of(&init)?;
                Ok(format!(
                    "class {}({})",
                    qualified_name(symbol),
                    join_params(params.iter().skip(1))
                ))
            }
            None => Ok(format!("{}()", symbol.name)),
        },
        SymbolKind::Routine { bound } => {
            let params = loader.parameters_of(symbol)?;
            let skip = usize::from(bound);
            Ok(format!("{}({})", symbol.name, join_params(params.iter().skip(skip))))
        }
    }
}

/// `module.Name` when the declaring module is known, else `Name`.
fn qualified_name(class: &Symbol) -> String {
    match class.module.as_deref() {
        Some(module) if !module.is_empty() => format!("{}.{}", module, class.name),
        _ => class.name.clone(),
    }
}

fn join_params<'a>(params: impl Iterator<Item = &'a Param>) -> String {
    params.map(Param::to_string).collect::<Vec<_>>().join(", ")
}
