//! Shared types for the menu workspace
//!
//! Wire models returned by the menu backend, the `data` response envelope,
//! and small presentation helpers used by both the engine and the client.

pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use models::*;
pub use response::{DataEnvelope, FeatureTypesData, NestedList, UploadedFile};
pub use serde::{Deserialize, Serialize};
