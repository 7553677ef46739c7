//! The search pipeline: filter, rank, annotate.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use pitchside_marks::{marks_for, MarkSet, Marks};

use crate::item::{CatalogItem, FACET_WILDCARD};
use crate::query::CatalogQuery;
use crate::sort;

/// One result row: a surviving item with its marks attached. Items without
/// a mark record carry the all-false default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct Ranked {
    pub item: CatalogItem,
    pub marks: Marks,
}

/// Derive the ordered, annotated result list for a screen.
///
/// Filters run first (free text, then facets, then numeric ranges, all
/// AND-ed), then a stable sort by the query's sort key, then mark
/// attachment. The output has no duplicate ids as long as the catalog has
/// none, and is fully deterministic for identical inputs, so re-running a
/// pristine query restores the pristine list. Unknown facet names or
/// numeric fields in the query exclude nothing they shouldn't: they behave
/// exactly as the missing-field rules dictate, never as errors.
pub fn search(catalog: &[CatalogItem], query: &CatalogQuery, marks: &MarkSet) -> Vec<Ranked> {
    let mut survivors: Vec<&CatalogItem> = catalog.iter().filter(|i| query.matches(i)).collect();
    // Stable: ties keep catalog order.
    survivors.sort_by(|a, b| sort::compare(a, b, query.sort_key));
    survivors
        .into_iter()
        .map(|item| Ranked {
            item: item.clone(),
            marks: marks_for(marks, &item.id),
        })
        .collect()
}

/// Distinct values of a facet across the catalog, sorted for display and
/// prefixed with the `"all"` wildcard. This is the input for a screen's
/// filter-chip row. Values that differ only in case or accents stay
/// separate chips (facet filtering is exact-match), but each exact value
/// appears once, wherever in the catalog its duplicates sit.
pub fn facet_values(catalog: &[CatalogItem], facet: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values: Vec<String> = catalog
        .iter()
        .filter_map(|i| i.facets.get(facet))
        .filter(|v| seen.insert((*v).clone()))
        .cloned()
        .collect();
    // Raw-value tiebreak keeps equal collation keys in a fixed order.
    values.sort_by(|a, b| {
        sort::collation_key(a)
            .cmp(&sort::collation_key(b))
            .then_with(|| a.cmp(b))
    });
    values.insert(0, FACET_WILDCARD.to_string());
    values
}

// ===== FFI-friendly wrappers =====
// The pure API borrows its inputs; UniFFI wants owned values.

/// Run a search over an owned snapshot (exposed for FFI).
#[cfg(feature = "native")]
#[uniffi::export]
pub fn search_catalog(
    catalog: Vec<CatalogItem>,
    query: CatalogQuery,
    marks: MarkSet,
) -> Vec<Ranked> {
    search(&catalog, &query, &marks)
}

/// Chip row values for a facet (exposed for FFI).
#[cfg(feature = "native")]
#[uniffi::export]
pub fn catalog_facet_values(catalog: Vec<CatalogItem>, facet: String) -> Vec<String> {
    facet_values(&catalog, &facet)
}
