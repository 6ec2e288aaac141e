//! Read-only business catalog and the providers that materialize it.
//!
//! A [`Catalog`] is built once and then shared; nothing mutates it after
//! construction. Loading and validation mirror the brands registry: parse the
//! file, normalize records, then reject duplicates.

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::business::{Business, BusinessId};
use crate::category::Category;
use crate::CatalogError;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    businesses: Arc<[Business]>,
}

#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    pub businesses: Vec<Business>,
}

impl Catalog {
    /// Build a catalog, clamping ratings and rejecting duplicate identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] or [`CatalogError::EmptyName`].
    pub fn new(mut businesses: Vec<Business>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(businesses.len());
        for business in &mut businesses {
            if business.name.trim().is_empty() {
                return Err(CatalogError::EmptyName(business.id));
            }
            if !seen.insert(business.id) {
                return Err(CatalogError::DuplicateId(business.id));
            }
            business.normalize();
        }

        Ok(Self {
            businesses: businesses.into(),
        })
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn businesses(&self) -> &[Business] {
        &self.businesses
    }

    #[must_use]
    pub fn get(&self, id: BusinessId) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.businesses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    /// Distinct locations, sorted.
    #[must_use]
    pub fn locations(&self) -> Vec<String> {
        self.businesses
            .iter()
            .map(|b| b.location.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct subcategory identifiers, sorted.
    #[must_use]
    pub fn subcategories(&self) -> Vec<String> {
        self.businesses
            .iter()
            .map(|b| b.subcategory.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Business count for every taxonomy entry, in taxonomy order.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let count = self
                    .businesses
                    .iter()
                    .filter(|b| b.category == category)
                    .count();
                (category, count)
            })
            .collect()
    }
}

/// Load and validate a catalog from a YAML or JSON file.
///
/// The format is chosen by extension: `.json` is parsed as JSON, anything else
/// as YAML.
///
/// # Errors
///
/// Returns [`CatalogError`] if the file cannot be read, parsed, or validated.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let file: CatalogFile = if is_json {
        serde_json::from_str(&content).map_err(|e| CatalogError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?
    } else {
        serde_yaml::from_str(&content).map_err(|e| CatalogError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?
    };

    Catalog::new(file.businesses)
}

/// Source of a fully materialized catalog.
pub trait CatalogProvider {
    /// # Errors
    ///
    /// Returns [`CatalogError`] when the catalog cannot be produced.
    fn load(&self) -> Result<Catalog, CatalogError>;
}

#[derive(Debug, Clone)]
pub struct FileCatalogProvider {
    path: PathBuf,
}

impl FileCatalogProvider {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogProvider for FileCatalogProvider {
    fn load(&self) -> Result<Catalog, CatalogError> {
        load_catalog(&self.path)
    }
}

/// Provider over an in-memory list, e.g. mock data.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalogProvider {
    businesses: Vec<Business>,
}

impl StaticCatalogProvider {
    #[must_use]
    pub fn new(businesses: Vec<Business>) -> Self {
        Self { businesses }
    }
}

impl CatalogProvider for StaticCatalogProvider {
    fn load(&self) -> Result<Catalog, CatalogError> {
        Catalog::new(self.businesses.clone())
    }
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
