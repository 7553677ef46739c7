//! pitchside-marks: per-item mark (overlay state) models and operations.
//!
//! Marks are the user's overlay on catalog items: favorited, completed,
//! booked. Screens use a subset (the gear shop only favorites, the academy
//! schedule only books), but the model carries all three as independent
//! booleans. Marks are keyed by item id and survive catalog reloads as long
//! as the id is unchanged; an absent entry is equivalent to an all-false
//! record, so mark sets start empty and grow lazily on first toggle.

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod mark;
pub mod ops;

pub use mark::*;
pub use ops::*;
