//! Catalog snapshot loading.
//!
//! The engine assumes its catalog is well-formed; this is the seam where
//! that assumption is checked. A snapshot arrives as a JSON array of items
//! (today from bundled fixtures, later from an API response) and is
//! validated for the two structural rules the engine relies on: unique ids
//! and no reserved facet values.

use std::collections::HashSet;

use thiserror::Error;

use crate::item::{CatalogItem, FACET_WILDCARD};

/// Structural problems in a catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("duplicate item id: {0}")]
    DuplicateId(String),
    #[error("item {id}: facet \"{facet}\" uses the reserved value \"all\"")]
    ReservedFacetValue { id: String, facet: String },
}

/// Parse and validate a catalog snapshot.
pub fn load_catalog(json: &str) -> Result<Vec<CatalogItem>, CatalogError> {
    let items: Vec<CatalogItem> = serde_json::from_str(json)?;
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
    for item in &items {
        if !seen.insert(item.id.as_str()) {
            return Err(CatalogError::DuplicateId(item.id.clone()));
        }
        for (facet, value) in &item.facets {
            if value == FACET_WILDCARD {
                return Err(CatalogError::ReservedFacetValue {
                    id: item.id.clone(),
                    facet: facet.clone(),
                });
            }
        }
    }
    Ok(items)
}
