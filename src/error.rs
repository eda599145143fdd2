//! Error types for the documentation core.

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    /// A section chunk without a `Label:` header line. The splitter never
    /// produces one, so hitting this means the two disagree.
    #[error("malformed section (expected `Label:` followed by a line break): {chunk:?}")]
    MalformedSection { chunk: String },

    #[error("cannot resolve `{line}`: {reason}")]
    SymbolResolution { line: String, reason: String },

    #[error("cannot inspect parameters of `{symbol}`")]
    Introspection { symbol: String },

    #[error("failed to read symbol manifest {path}")]
    ManifestIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("symbol manifest declares `{path}` more than once")]
    DuplicateSymbol { path: String },

    #[error("invalid symbol manifest")]
    ManifestFormat(#[from] serde_json::Error),
}
