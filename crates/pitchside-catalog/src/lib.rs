//! pitchside-catalog: faceted catalog filter/sort/rank engine.
//!
//! Every list screen in the pitchside apps (drill library, exercise plans,
//! gear shop, academy schedule, scholarship board) shows the same shape of
//! list: free-text search over a few fields, facet chips, a price or rating
//! range, one active sort order, and per-item marks. This crate holds that
//! logic once, as pure functions the presentation layer calls:
//!
//! - [`search`] — derive an ordered, annotated result list from
//!   (catalog, query, marks)
//! - [`parse_query`] — turn a raw search-box string into a [`CatalogQuery`]
//! - [`facet_values`] — derive a screen's chip row from the live catalog
//! - [`load_catalog`] — parse and validate a catalog JSON snapshot
//!
//! The engine is stateless between calls; the caller owns the catalog, the
//! query, and the mark set, and re-runs [`search`] on every interaction.
//! Marks live in [`pitchside_marks`] and are toggled there; the engine only
//! reads them.

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod engine;
pub mod filter;
pub mod item;
pub mod load;
pub mod query;
pub mod sort;

pub use engine::*;
pub use filter::*;
pub use item::*;
pub use load::*;
pub use query::*;
pub use sort::collation_key;

// Re-export the overlay types and operations so callers need a single
// dependency.
pub use pitchside_marks::{clear_mark_field, marks_for, toggle_mark, MarkField, MarkSet, Marks};
