//! autodoc — documentation pages from structured docstrings.
//!
//! A selection list names modules and classes. Each one is resolved through a
//! [`loader::SymbolLoader`], its docstring is split into title, description
//! and `Args:`/`Returns:`/`Yields:`/`Raises:`/`Attributes:` sections, its
//! signature is derived from parameter metadata, and the results are
//! collected into a [`model::Page`] with a two-level table of contents.

pub mod document;
pub mod error;
pub mod loader;
pub mod model;
pub mod parser;
pub mod render;
pub mod selection;
pub mod signature;
pub mod toc;

pub use error::{Error, Result};
pub use selection::{build_page, parse_selected, Options};
