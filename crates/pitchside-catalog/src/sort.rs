//! Sort comparators for ranked results.
//!
//! All comparisons are used with a stable sort, so items that compare equal
//! keep their original catalog order. Items missing the sort field compare
//! greater than any item that has it, regardless of direction: an item with
//! no price never outranks priced items, even under `PriceDesc`.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::item::CatalogItem;
use crate::query::SortKey;

/// Compare two items under a sort key.
pub(crate) fn compare(a: &CatalogItem, b: &CatalogItem, key: SortKey) -> Ordering {
    match key {
        SortKey::Relevance => numeric(a, b, "score", Direction::Desc),
        SortKey::Alphabetical => collation_key(a.name()).cmp(&collation_key(b.name())),
        SortKey::PriceAsc => numeric(a, b, "price", Direction::Asc),
        SortKey::PriceDesc => numeric(a, b, "price", Direction::Desc),
        SortKey::RatingDesc => numeric(a, b, "rating", Direction::Desc),
        SortKey::PopularityDesc => numeric(a, b, "popularity", Direction::Desc),
    }
}

#[derive(Clone, Copy)]
enum Direction {
    Asc,
    Desc,
}

fn numeric(a: &CatalogItem, b: &CatalogItem, field: &str, direction: Direction) -> Ordering {
    match (a.numeric(field), b.numeric(field)) {
        (Some(x), Some(y)) => {
            let cmp = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
            match direction {
                Direction::Asc => cmp,
                Direction::Desc => cmp.reverse(),
            }
        }
        // Missing values sort last in both directions.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Accent- and case-insensitive collation key: NFKD decomposition with
/// combining marks stripped, then lowercased. "Débutant" and "debutant"
/// compare equal; deterministic across platforms.
pub fn collation_key(s: &str) -> String {
    s.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}
