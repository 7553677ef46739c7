//! Catalog item model.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Reserved facet value meaning "no constraint". Only ever appears in
/// queries and chip rows, never as real item data.
pub const FACET_WILDCARD: &str = "all";

/// One catalog entry: a drill, exercise, gear product, academy session, or
/// scholarship. Items are immutable once loaded; a refresh replaces the
/// whole catalog rather than patching fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct CatalogItem {
    /// Unique, stable, opaque id. Marks are keyed by this.
    pub id: String,
    /// Searchable strings in display order: name first, then description,
    /// tags. Free-text search matches any of them.
    #[serde(default)]
    pub text_fields: Vec<String>,
    /// Facet name ("sport", "difficulty", "category") to a single
    /// categorical value.
    #[serde(default)]
    pub facets: HashMap<String, String>,
    /// Numeric field name ("price", "rating", "score", "popularity") to its
    /// value. Fields a given item lacks are simply absent.
    #[serde(default)]
    pub numeric_fields: HashMap<String, f64>,
}

impl CatalogItem {
    /// Display name: the first text field, or empty for a nameless item.
    pub fn name(&self) -> &str {
        self.text_fields.first().map(String::as_str).unwrap_or("")
    }

    /// A numeric field, if the item carries it.
    pub fn numeric(&self, field: &str) -> Option<f64> {
        self.numeric_fields.get(field).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item() -> CatalogItem {
        CatalogItem {
            id: "drill-1".to_string(),
            text_fields: vec!["Shooting Drill".to_string(), "Finish under pressure".to_string()],
            facets: HashMap::from([("sport".to_string(), "soccer".to_string())]),
            numeric_fields: HashMap::from([("score".to_string(), 92.0)]),
        }
    }

    #[test]
    fn name_is_first_text_field() {
        assert_eq!(item().name(), "Shooting Drill");
        let nameless = CatalogItem {
            id: "x".to_string(),
            text_fields: vec![],
            facets: HashMap::new(),
            numeric_fields: HashMap::new(),
        };
        assert_eq!(nameless.name(), "");
    }

    #[test]
    fn numeric_lookup() {
        assert_eq!(item().numeric("score"), Some(92.0));
        assert_eq!(item().numeric("price"), None);
    }

    #[test]
    fn item_serde_round_trip() {
        let i = item();
        let json = serde_json::to_string(&i).unwrap();
        let back: CatalogItem = serde_json::from_str(&json).unwrap();
        assert_eq!(i, back);
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let i: CatalogItem = serde_json::from_str(r#"{"id": "bare"}"#).unwrap();
        assert_eq!(i.id, "bare");
        assert!(i.text_fields.is_empty());
        assert!(i.facets.is_empty());
        assert!(i.numeric_fields.is_empty());
    }
}
