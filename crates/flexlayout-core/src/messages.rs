//! Editor schema messages and locale catalogs.
//!
//! Each block exposes a [`BlockSchema`]: a title and description given as
//! message ids, resolved per locale by a [`MessageCatalog`]. Locale files
//! are flat JSON objects mapping message id to text, one file per locale
//! (`en.json`, `pt-BR.json`).

use crate::error::MessageError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

/// A translatable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageDescriptor {
    /// Message id
    pub id: String,
    /// Text used when no catalog entry exists
    #[serde(default)]
    pub default_message: String,
}

impl MessageDescriptor {
    /// Create a descriptor with an empty default message.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            default_message: String::new(),
        }
    }

    /// Set the default message.
    #[must_use]
    pub fn with_default(mut self, text: impl Into<String>) -> Self {
        self.default_message = text.into();
        self
    }
}

/// Editor-facing description of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSchema {
    /// Block title
    pub title: MessageDescriptor,
    /// Block description
    pub description: MessageDescriptor,
}

impl BlockSchema {
    /// Schema using `admin/editor.<key>.title` and `.description` ids.
    #[must_use]
    pub fn editor(key: &str) -> Self {
        Self {
            title: MessageDescriptor::new(format!("admin/editor.{key}.title")),
            description: MessageDescriptor::new(format!("admin/editor.{key}.description")),
        }
    }
}

/// A schema with its messages resolved for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedSchema {
    /// Resolved title
    pub title: String,
    /// Resolved description
    pub description: String,
}

/// Messages for every loaded locale.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    locales: HashMap<String, HashMap<String, String>>,
}

impl MessageCatalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or extend the messages of a locale.
    pub fn insert_locale<I, K, V>(&mut self, locale: &str, messages: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.locales
            .entry(locale.to_string())
            .or_default()
            .extend(messages.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// Add a locale from the contents of its JSON file.
    pub fn insert_json(&mut self, locale: &str, json: &str) -> Result<(), MessageError> {
        let messages: HashMap<String, String> =
            serde_json::from_str(json).map_err(|source| MessageError::Json {
                locale: locale.to_string(),
                source,
            })?;
        self.insert_locale(locale, messages);
        Ok(())
    }

    /// Load every `<locale>.json` file in a directory.
    pub fn load_dir(dir: &Path) -> Result<Self, MessageError> {
        let io_err = |source| MessageError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let mut catalog = Self::new();
        for entry in fs::read_dir(dir).map_err(io_err)? {
            let path = entry.map_err(io_err)?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let Some(locale) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let json = fs::read_to_string(&path).map_err(|source| MessageError::Io {
                path: path.clone(),
                source,
            })?;
            catalog.insert_json(locale, &json)?;
            tracing::debug!(locale, path = %path.display(), "loaded messages");
        }
        Ok(catalog)
    }

    /// Loaded locales, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Resolve a message.
    ///
    /// Looks up the exact locale, then its base language (`pt` for
    /// `pt-BR`), then falls back to the descriptor's default message.
    #[must_use]
    pub fn translate<'a>(&'a self, locale: &str, message: &'a MessageDescriptor) -> &'a str {
        let base = locale.split(['-', '_']).next().unwrap_or(locale);
        [locale, base]
            .into_iter()
            .filter_map(|l| self.locales.get(l))
            .find_map(|messages| messages.get(&message.id))
            .map_or(message.default_message.as_str(), String::as_str)
    }

    /// Resolve both messages of a schema.
    #[must_use]
    pub fn localize(&self, locale: &str, schema: &BlockSchema) -> LocalizedSchema {
        LocalizedSchema {
            title: self.translate(locale, &schema.title).to_string(),
            description: self.translate(locale, &schema.description).to_string(),
        }
    }

    /// Localize a set of named schemas, keyed by block type.
    #[must_use]
    pub fn localize_all<'a>(
        &self,
        locale: &str,
        schemas: impl IntoIterator<Item = (&'a str, &'a BlockSchema)>,
    ) -> BTreeMap<String, LocalizedSchema> {
        schemas
            .into_iter()
            .map(|(name, schema)| (name.to_string(), self.localize(locale, schema)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MessageCatalog {
        let mut catalog = MessageCatalog::new();
        catalog.insert_locale("en", [("admin/editor.column.title", "Column")]);
        catalog.insert_locale("pt", [("admin/editor.column.title", "Coluna")]);
        catalog.insert_locale("pt-BR", [("admin/editor.column.description", "Coluna vertical")]);
        catalog
    }

    #[test]
    fn test_editor_schema_ids() {
        let schema = BlockSchema::editor("column");
        assert_eq!(schema.title.id, "admin/editor.column.title");
        assert_eq!(schema.description.id, "admin/editor.column.description");
        assert!(schema.title.default_message.is_empty());
    }

    #[test]
    fn test_translate_exact_locale() {
        let catalog = catalog();
        let schema = BlockSchema::editor("column");
        assert_eq!(catalog.translate("en", &schema.title), "Column");
        assert_eq!(catalog.translate("pt-BR", &schema.description), "Coluna vertical");
    }

    #[test]
    fn test_translate_falls_back_to_language() {
        let catalog = catalog();
        let schema = BlockSchema::editor("column");
        assert_eq!(catalog.translate("pt-BR", &schema.title), "Coluna");
        assert_eq!(catalog.translate("en_US", &schema.title), "Column");
    }

    #[test]
    fn test_translate_falls_back_to_default() {
        let catalog = catalog();
        let message = MessageDescriptor::new("missing").with_default("Fallback");
        assert_eq!(catalog.translate("en", &message), "Fallback");
        assert_eq!(catalog.translate("fr", &message), "Fallback");
    }

    #[test]
    fn test_insert_json_rejects_non_strings() {
        let mut catalog = MessageCatalog::new();
        let err = catalog.insert_json("en", r#"{"a": 1}"#).unwrap_err();
        assert!(err.to_string().contains("`en`"));
    }

    #[test]
    fn test_load_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("es.json"),
            r#"{"admin/editor.row.title": "Fila"}"#,
        )
        .unwrap();
        fs::write(dir.path().join("README.md"), "ignored").unwrap();

        let catalog = MessageCatalog::load_dir(dir.path()).unwrap();
        assert_eq!(catalog.locales(), vec!["es"]);
        let schema = BlockSchema::editor("row");
        assert_eq!(catalog.localize("es", &schema).title, "Fila");
    }

    #[test]
    fn test_localize_all_sorted_by_name() {
        let catalog = catalog();
        let col = BlockSchema::editor("column");
        let row = BlockSchema::editor("row");
        let all = catalog.localize_all("en", [("flex-layout.row", &row), ("flex-layout.col", &col)]);
        let names: Vec<&String> = all.keys().collect();
        assert_eq!(names, ["flex-layout.col", "flex-layout.row"]);
        assert_eq!(all["flex-layout.col"].title, "Column");
        assert_eq!(all["flex-layout.row"].title, "");
    }
}
