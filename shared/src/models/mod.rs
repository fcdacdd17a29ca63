//! Data models
//!
//! Snapshots of the backend documents. Ids are the backend's `_id` strings.
//! Foreign keys arrive either as a bare id or as a populated document and are
//! normalized through [`EntityRef`].

pub mod category;
pub mod customer;
pub mod feature_type;
pub mod feedback;
pub mod food_item;
pub mod offer;
pub mod outlet;
pub mod reference;
pub mod website;

// Re-exports
pub use category::*;
pub use customer::*;
pub use feature_type::*;
pub use feedback::*;
pub use food_item::*;
pub use offer::*;
pub use outlet::*;
pub use reference::*;
pub use website::*;
