//! API Response types
//!
//! Every backend endpoint wraps its payload in a `data` key:
//! ```json
//! {
//!     "message": "Success",
//!     "data": { ... }
//! }
//! ```
//! A missing or `null` `data` is an empty result, not an error.

use crate::models::FeatureType;
use serde::{Deserialize, Serialize};

/// Unified response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataEnvelope<T> {
    /// Human-readable message (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Response data (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> DataEnvelope<T> {
    /// Wrap a payload
    pub fn ok(data: T) -> Self {
        Self {
            message: Some("Success".to_string()),
            data: Some(data),
        }
    }

    /// Envelope without payload
    pub fn empty() -> Self {
        Self {
            message: None,
            data: None,
        }
    }

    /// Unwrap the payload, treating absence as `T::default()`
    pub fn into_data_or_default(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

/// Payload of the feature-type endpoint (`data.featureTypes`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureTypesData {
    #[serde(rename = "featureTypes", default)]
    pub feature_types: Vec<FeatureType>,
}

/// Paged list payload (`data.data`), used by the outlet listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NestedList<T> {
    #[serde(default)]
    pub data: Vec<T>,
}

impl<T> Default for NestedList<T> {
    fn default() -> Self {
        Self { data: Vec::new() }
    }
}

/// One entry of the file-upload response (`data[0].imageNames[0]`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadedFile {
    #[serde(rename = "imageNames", default)]
    pub image_names: Vec<String>,
}
