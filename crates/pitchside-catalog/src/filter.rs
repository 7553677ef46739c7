//! Search-box filter expressions.
//!
//! Parses the single string typed into a list screen's search box into a
//! [`CatalogQuery`].
//!
//! # Syntax
//!
//! ```text
//! shooting sport:soccer difficulty:Beginner price:0..50 sort:price-asc
//! "free kick" rating:4..
//! ```
//!
//! Tokens:
//! - `name:min..max` — numeric range; either bound may be omitted
//!   (`price:..50`, `rating:4..`)
//! - `sort:<key>` — sort key (`relevance`, `a-z`, `price-asc`, ...)
//! - `name:value` — facet selection (`sport:all` is the wildcard no-op)
//! - `"quoted phrase"` — a single free-text term
//! - Everything else — free text
//!
//! Malformed tokens degrade to free text; nothing here errors. Queries come
//! from a search box, and a typo should narrow the list, not crash it.

use crate::query::{CatalogQuery, NumericRange, SortKey};

/// Parse a filter expression into a query.
#[cfg_attr(feature = "native", uniffi::export)]
pub fn parse_query(input: &str) -> CatalogQuery {
    let mut query = CatalogQuery::default();
    let mut text_terms: Vec<String> = Vec::new();

    for token in tokenize(input) {
        if let Some((name, rest)) = token.split_once(':') {
            if !name.is_empty() && !rest.is_empty() {
                if name == "sort" {
                    if let Some(key) = SortKey::from_name(rest) {
                        query.sort_key = key;
                    }
                    // Unknown sort names fall through to the default.
                    continue;
                }
                if let Some(range) = parse_range(rest) {
                    query.numeric_ranges.insert(name.to_string(), range);
                    continue;
                }
                query
                    .facet_selections
                    .insert(name.to_string(), rest.to_string());
                continue;
            }
        }
        text_terms.push(token);
    }

    query.free_text = text_terms.join(" ");
    query
}

/// Tokenize a filter string, respecting quoted strings.
fn tokenize(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in input.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                if !in_quotes && !current.is_empty() {
                    tokens.push(current.clone());
                    current.clear();
                }
            }
            ' ' if !in_quotes => {
                if !current.is_empty() {
                    tokens.push(current.clone());
                    current.clear();
                }
            }
            _ => {
                current.push(c);
            }
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}

/// Parse `min..max`, `min..`, or `..max`. Returns `None` when the value has
/// no `..` or a bound fails to parse, in which case the token is not a
/// range at all.
fn parse_range(value: &str) -> Option<NumericRange> {
    let (lo, hi) = value.split_once("..")?;
    let min = if lo.is_empty() {
        None
    } else {
        Some(lo.parse::<f64>().ok()?)
    };
    let max = if hi.is_empty() {
        None
    } else {
        Some(hi.parse::<f64>().ok()?)
    };
    Some(NumericRange { min, max })
}
