//! Feature Type Model

use serde::{Deserialize, Serialize};

/// Promotional label such as "Best Seller"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureType {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
}

impl FeatureType {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: Some(title.into()),
        }
    }

    /// Title if present and non-empty
    pub fn label(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }
}
