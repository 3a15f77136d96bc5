use crate::error::{EatoError, Result};
use crate::paths;
use crate::types::Layer;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// CatalogRecord
// ---------------------------------------------------------------------------

/// Descriptive metadata for one system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub slug: String,
    pub name: String,
    /// Layer tag as written in content, e.g. `SOIL`. Kept verbatim so that
    /// unrecognised tags still render (with the default style).
    pub layer: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
}

impl CatalogRecord {
    pub fn new(
        slug: impl Into<String>,
        name: impl Into<String>,
        layer: Layer,
        version: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            layer: layer.as_str().to_string(),
            version: version.into(),
            description: description.into(),
        }
    }

    /// The parsed layer, falling back to the default for unknown tags.
    pub fn resolved_layer(&self) -> Layer {
        Layer::resolve(&self.layer)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// Immutable slug → record lookup. Records keep their content order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog. When a slug repeats, the first record wins; use
    /// [`Catalog::duplicate_slugs`] to detect that case.
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        let mut index = HashMap::with_capacity(records.len());
        for (i, r) in records.iter().enumerate() {
            index.entry(r.slug.clone()).or_insert(i);
        }
        Self { records, index }
    }

    pub fn get(&self, slug: &str) -> Result<&CatalogRecord> {
        self.index
            .get(slug)
            .map(|&i| &self.records[i])
            .ok_or_else(|| EatoError::SystemNotFound(slug.to_string()))
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.index.contains_key(slug)
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Slugs that appear more than once, each reported once.
    pub fn duplicate_slugs(&self) -> Vec<String> {
        let mut seen = std::collections::HashSet::new();
        let mut dups = Vec::new();
        for r in &self.records {
            if !seen.insert(r.slug.as_str()) && !dups.contains(&r.slug) {
                dups.push(r.slug.clone());
            }
        }
        dups
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::catalog_path(root);
        if !path.exists() {
            return Err(EatoError::NotInitialized);
        }
        let records: Vec<CatalogRecord> = crate::io::read_yaml(&path)?;
        Ok(Self::new(records))
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        crate::io::write_yaml(&paths::catalog_path(root), &self.records)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
