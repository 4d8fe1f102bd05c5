//! Manifest types.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::Path;

use crate::error::ManifestError;

/// Page manifest loaded from YAML or JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Top-level block ids in render order
    #[serde(default)]
    pub root: Vec<String>,
    /// Block declarations by id
    #[serde(default)]
    pub blocks: BTreeMap<String, BlockDecl>,
}

/// Declaration of one block instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BlockDecl {
    /// Props, checked against the block type on resolution
    #[serde(default)]
    pub props: serde_json::Value,
    /// Child block ids in order
    #[serde(default)]
    pub children: Vec<String>,
}

/// A block id split into its type and optional instance name.
///
/// `flex-layout.col#left` has type `flex-layout.col` and name `left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockId<'a> {
    /// Block type
    pub block_type: &'a str,
    /// Instance name
    pub name: Option<&'a str>,
}

impl<'a> BlockId<'a> {
    /// Split an id at the first `#`.
    #[must_use]
    pub fn parse(id: &'a str) -> Self {
        match id.split_once('#') {
            Some((block_type, name)) => Self {
                block_type,
                name: Some(name),
            },
            None => Self {
                block_type: id,
                name: None,
            },
        }
    }
}

impl fmt::Display for BlockId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => write!(f, "{}#{name}", self.block_type),
            None => f.write_str(self.block_type),
        }
    }
}

impl Manifest {
    /// Parse a manifest from YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ManifestError> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a manifest from JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a manifest file. `.json` files are read as JSON, anything else
    /// as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loading manifest");
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json(&source)
        } else {
            Self::from_yaml(&source)
        }
    }

    /// Serialize manifest to YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ManifestError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Declared blocks that no root entry reaches.
    #[must_use]
    pub fn unreferenced(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        let mut stack: Vec<&str> = self.root.iter().map(String::as_str).collect();
        while let Some(id) = stack.pop() {
            if !seen.insert(id) {
                continue;
            }
            if let Some(decl) = self.blocks.get(id) {
                stack.extend(decl.children.iter().map(String::as_str));
            }
        }
        self.blocks
            .keys()
            .map(String::as_str)
            .filter(|id| !seen.contains(id))
            .collect()
    }
}
