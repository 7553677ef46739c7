//! Query model: free text, facet selections, numeric ranges, sort key.
//!
//! A query is a plain value the caller rebuilds on every interaction. It
//! never mutates items or marks; [`crate::search`] is a deterministic
//! function of (catalog, query, marks).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::item::{CatalogItem, FACET_WILDCARD};

/// Inclusive numeric bounds for a range filter. An absent bound is open:
/// `at_least(4.0)` keeps everything rated 4.0 or better. Open bounds stay
/// absent in JSON too, so every range survives the interchange with the
/// host app (JSON has no representation for an infinite number).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct NumericRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    /// Lower bound only.
    pub fn at_least(min: f64) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Upper bound only.
    pub fn at_most(max: f64) -> Self {
        Self {
            min: None,
            max: Some(max),
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |m| m <= value) && self.max.map_or(true, |m| value <= m)
    }
}

/// Result ordering. Exactly one is active per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum SortKey {
    /// Descending by the externally supplied `score` field.
    #[default]
    Relevance,
    /// Ascending by display name, accent- and case-insensitive.
    Alphabetical,
    PriceAsc,
    PriceDesc,
    RatingDesc,
    PopularityDesc,
}

impl SortKey {
    /// Parse from a sort-option name. Forgiving: unknown names return
    /// `None` and leave the caller on the default sort.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "relevance" | "recommended" => Some(Self::Relevance),
            "alphabetical" | "a-z" | "name" => Some(Self::Alphabetical),
            "price-asc" | "price" => Some(Self::PriceAsc),
            "price-desc" => Some(Self::PriceDesc),
            "rating-desc" | "rating" => Some(Self::RatingDesc),
            "popularity-desc" | "popularity" | "popular" => Some(Self::PopularityDesc),
            _ => None,
        }
    }

    /// Canonical option name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Relevance => "relevance",
            Self::Alphabetical => "alphabetical",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::RatingDesc => "rating-desc",
            Self::PopularityDesc => "popularity-desc",
        }
    }
}

/// The active search/filter/sort specification for one screen.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct CatalogQuery {
    /// Case-insensitive substring matched against every text field.
    /// Empty matches everything.
    #[serde(default)]
    pub free_text: String,
    /// Facet name to selected value. A missing entry or the value `"all"`
    /// imposes no constraint; all present constraints must match (AND).
    #[serde(default)]
    pub facet_selections: HashMap<String, String>,
    /// Field name to inclusive bounds. Items missing the field fail the
    /// filter (no price means "not purchasable", not "free").
    #[serde(default)]
    pub numeric_ranges: HashMap<String, NumericRange>,
    #[serde(default)]
    pub sort_key: SortKey,
}

impl CatalogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.free_text = text.to_string();
        self
    }

    pub fn with_facet(mut self, name: &str, value: &str) -> Self {
        self.facet_selections
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_range(mut self, field: &str, range: NumericRange) -> Self {
        self.numeric_ranges.insert(field.to_string(), range);
        self
    }

    pub fn with_sort(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Whether the query filters nothing (the pristine "reset" state).
    pub fn is_unconstrained(&self) -> bool {
        self.free_text.is_empty()
            && self
                .facet_selections
                .values()
                .all(|v| v == FACET_WILDCARD)
            && self.numeric_ranges.is_empty()
    }

    /// Whether an item survives every filter in this query. Sorting is
    /// separate; see [`crate::sort`].
    pub fn matches(&self, item: &CatalogItem) -> bool {
        self.matches_text(item) && self.matches_facets(item) && self.matches_ranges(item)
    }

    fn matches_text(&self, item: &CatalogItem) -> bool {
        if self.free_text.is_empty() {
            return true;
        }
        let needle = self.free_text.to_lowercase();
        item.text_fields
            .iter()
            .any(|f| f.to_lowercase().contains(&needle))
    }

    fn matches_facets(&self, item: &CatalogItem) -> bool {
        self.facet_selections.iter().all(|(name, selected)| {
            if selected == FACET_WILDCARD {
                return true;
            }
            // An item without the facet fails a constraint on it.
            item.facets.get(name) == Some(selected)
        })
    }

    fn matches_ranges(&self, item: &CatalogItem) -> bool {
        self.numeric_ranges.iter().all(|(field, range)| {
            item.numeric(field).is_some_and(|v| range.contains(v))
        })
    }
}
