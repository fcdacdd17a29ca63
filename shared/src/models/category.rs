//! Category Model

use serde::{Deserialize, Serialize};

/// Priority used when an outlet does not rank a category, or when an item's
/// category cannot be resolved
pub const DEFAULT_PRIORITY: i64 = 999;

/// Category entity
///
/// Global catalog entry. `priority` is only present once the category has been
/// scoped to an outlet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub name: String,
    /// Outlet-specific display priority (ascending)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            priority: None,
        }
    }

    /// Priority with the default applied
    pub fn effective_priority(&self) -> i64 {
        self.priority.unwrap_or(DEFAULT_PRIORITY)
    }
}
