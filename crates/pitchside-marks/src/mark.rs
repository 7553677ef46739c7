//! Core mark types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-item overlay state. Fields are independent; the default is all-false,
/// which is indistinguishable from having no record at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct Marks {
    pub favorited: bool,
    pub completed: bool,
    pub booked: bool,
}

/// Selects one boolean field of [`Marks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum MarkField {
    Favorited,
    Completed,
    Booked,
}

impl MarkField {
    /// Parse from a field name. Forgiving: accepts common short forms,
    /// returns `None` for anything unknown.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "favorited" | "favorite" | "fav" => Some(Self::Favorited),
            "completed" | "complete" | "done" => Some(Self::Completed),
            "booked" | "book" => Some(Self::Booked),
            _ => None,
        }
    }

    /// Canonical field name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Favorited => "favorited",
            Self::Completed => "completed",
            Self::Booked => "booked",
        }
    }
}

impl Marks {
    /// Read one field.
    pub fn get(&self, field: MarkField) -> bool {
        match field {
            MarkField::Favorited => self.favorited,
            MarkField::Completed => self.completed,
            MarkField::Booked => self.booked,
        }
    }

    /// Write one field.
    pub fn set(&mut self, field: MarkField, value: bool) {
        match field {
            MarkField::Favorited => self.favorited = value,
            MarkField::Completed => self.completed = value,
            MarkField::Booked => self.booked = value,
        }
    }

    /// Whether every field is false (equivalent to no record).
    pub fn is_default(&self) -> bool {
        !self.favorited && !self.completed && !self.booked
    }
}

/// Mark records keyed by item id. Entries whose id no longer appears in the
/// catalog are harmless orphans; they simply never surface in results.
pub type MarkSet = HashMap<String, Marks>;
