//! Menu Engine - menu assembly and filtering
//!
//! Turns the raw outlet, category, food item and feature type snapshots into
//! the grouped, priority-ordered menu a customer browses, and evaluates the
//! diet/search/category/tab filters over it.

pub mod assembly;
pub mod badge;
pub mod error;
pub mod filter;
pub mod grouping;
pub mod loader;
pub mod view;

pub use assembly::{AssembledMenu, assemble};
pub use badge::{DEFAULT_BADGE_COLOR, badge_color};
pub use error::{MenuError, MenuResult};
pub use filter::{ActiveTab, FilterState, filter_item};
pub use grouping::{MenuGroup, OTHER_GROUP, group_items};
pub use loader::{MenuLoader, MenuSource};
pub use view::{ALL_ITEMS_LABEL, MenuView, ProductDetail, SidebarEntry};
