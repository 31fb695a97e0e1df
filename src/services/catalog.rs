use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::models::Property;

/// Errors that can occur while loading the property catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Wire shape of the bundled catalog resource
#[derive(Debug, Deserialize)]
struct CatalogFile {
    properties: Vec<Property>,
}

/// In-memory property catalog.
///
/// Backed by a static JSON resource read once at startup; records are
/// immutable for the lifetime of the process. A failed load degrades to an
/// empty catalog, so callers see the same not-found outcome for a missing
/// record and an unreadable source.
#[derive(Debug, Clone, Default)]
pub struct PropertyCatalog {
    properties: Vec<Property>,
}

impl PropertyCatalog {
    /// Load the catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    /// Parse a catalog from JSON text of the form `{ "properties": [...] }`.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Ok(Self {
            properties: file.properties,
        })
    }

    /// The empty catalog used when no source could be loaded.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All records, in catalog order.
    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Look up a record by id.
    pub fn find(&self, id: u64) -> Option<&Property> {
        self.properties.iter().find(|property| property.id == id)
    }
}
