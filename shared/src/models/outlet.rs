//! Outlet Model

use super::EntityRef;
use serde::{Deserialize, Serialize};

/// Icon shown when an outlet has none
pub const DEFAULT_OUTLET_ICON: &str = "1747734790831_html-5.png";

/// Outlet entity (one physical restaurant location)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outlet {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Categories shown at this outlet, with their outlet-specific priority
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub categories: Vec<OutletCategory>,
}

impl Outlet {
    /// Icon file name, falling back to [`DEFAULT_OUTLET_ICON`]
    pub fn icon_or_default(&self) -> &str {
        self.icon
            .as_deref()
            .filter(|icon| !icon.is_empty())
            .unwrap_or(DEFAULT_OUTLET_ICON)
    }
}

/// Category entry of an outlet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutletCategory {
    #[serde(rename = "categoryId", default)]
    pub category_id: Option<EntityRef>,
    #[serde(default)]
    pub priority: Option<i64>,
}

impl OutletCategory {
    pub fn new(category_id: impl Into<String>, priority: Option<i64>) -> Self {
        Self {
            category_id: Some(EntityRef::new(category_id)),
            priority,
        }
    }
}
