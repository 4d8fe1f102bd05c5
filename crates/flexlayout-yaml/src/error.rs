//! Error types for manifest loading and resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Error type for manifest parsing and block resolution.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file could not be read
    #[error("failed to read manifest {path}: {source}")]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Manifest declares no top-level blocks
    #[error("manifest has an empty root")]
    EmptyRoot,

    /// Block id names a type with no implementation
    #[error("unknown block type `{block_type}` in `{block}`")]
    UnknownBlockType {
        /// Block id as written
        block: String,
        /// Type part of the id
        block_type: String,
    },

    /// A referenced block is not declared
    #[error("block `{block}` is referenced by `{parent}` but not declared")]
    MissingBlock {
        /// Missing id
        block: String,
        /// Referencing block, or `root`
        parent: String,
    },

    /// A block contains itself
    #[error("cyclic block reference: {}", .path.join(" -> "))]
    CyclicReference {
        /// Chain of ids ending with the repeated one
        path: Vec<String>,
    },

    /// Props do not fit the block type
    #[error("invalid props for `{block}`: {source}")]
    InvalidProps {
        /// Block id
        block: String,
        /// Deserialization error
        source: serde_json::Error,
    },

    /// Leaf block declared with children
    #[error("block `{block}` does not accept children")]
    UnexpectedChildren {
        /// Block id
        block: String,
    },

    /// Blocks nest deeper than the resolver allows
    #[error("block `{block}` is nested deeper than {max} levels")]
    TooDeep {
        /// First block past the limit
        block: String,
        /// Maximum nesting depth
        max: usize,
    },

    /// Resolving the manifest would build too many block instances
    #[error("manifest expands to more than {max} blocks")]
    TooManyBlocks {
        /// Maximum number of instances
        max: usize,
    },
}
