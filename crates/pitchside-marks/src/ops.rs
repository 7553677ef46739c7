//! Pure operations over mark sets.
//!
//! The caller owns the set; every operation takes it by reference and
//! returns a new value. Side effects on tap (haptics, alerts, re-running a
//! search) belong to the presentation layer.

use crate::mark::{MarkField, MarkSet, Marks};

/// Flip one field for one item, creating a default record if none existed.
/// Toggling the same field twice restores the original value.
pub fn toggle_mark(marks: &MarkSet, id: &str, field: MarkField) -> MarkSet {
    let mut next = marks.clone();
    let entry = next.entry(id.to_string()).or_default();
    let value = entry.get(field);
    entry.set(field, !value);
    next
}

/// Reset one field to false for every id, preserving the other fields.
/// Backs the "clear favorites" style of bulk action.
pub fn clear_mark_field(marks: &MarkSet, field: MarkField) -> MarkSet {
    let mut next = marks.clone();
    for entry in next.values_mut() {
        entry.set(field, false);
    }
    next
}

/// Marks for an id, or the all-false default when no record exists.
pub fn marks_for(marks: &MarkSet, id: &str) -> Marks {
    marks.get(id).copied().unwrap_or_default()
}

// ===== FFI-friendly wrappers =====
// The pure API passes maps by reference; UniFFI wants owned values.

/// Toggle one field for one item (exposed for FFI).
#[cfg(feature = "native")]
#[uniffi::export]
pub fn toggle_mark_set(marks: MarkSet, id: String, field: MarkField) -> MarkSet {
    toggle_mark(&marks, &id, field)
}

/// Clear one field across all items (exposed for FFI).
#[cfg(feature = "native")]
#[uniffi::export]
pub fn clear_mark_set_field(marks: MarkSet, field: MarkField) -> MarkSet {
    clear_mark_field(&marks, field)
}
