//! Menu Assembly
//!
//! Scopes the global catalog to one outlet:
//! 1. resolve the outlet's category references against the catalog
//! 2. attach the outlet priority (default 999) and sort ascending
//! 3. keep only food items priced for the outlet
//! 4. attach a badge from the item's feature type

use crate::badge::badge_color;
use shared::models::{Category, DEFAULT_PRIORITY, FeatureType, FoodItem, Outlet};
use tracing::debug;

/// Outlet-scoped categories and food items
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssembledMenu {
    /// Categories referenced by the outlet, ascending by priority
    pub categories: Vec<Category>,
    /// Items priced for the outlet, in catalog order, badges attached
    pub food_items: Vec<FoodItem>,
}

/// Assemble the outlet view of the catalog
///
/// Pure: identical inputs yield identical output. Dangling references are
/// dropped silently.
pub fn assemble(
    outlet: Option<&Outlet>,
    all_categories: &[Category],
    all_food_items: &[FoodItem],
    feature_types: &[FeatureType],
    outlet_id: &str,
) -> AssembledMenu {
    AssembledMenu {
        categories: outlet
            .map(|o| outlet_categories(o, all_categories))
            .unwrap_or_default(),
        food_items: outlet_food_items(all_food_items, feature_types, outlet_id),
    }
}

/// Resolve and rank the categories an outlet shows
pub fn outlet_categories(outlet: &Outlet, all_categories: &[Category]) -> Vec<Category> {
    let mut resolved: Vec<Category> = outlet
        .categories
        .iter()
        .filter_map(|entry| {
            let id = entry.category_id.as_ref()?.id();
            let Some(category) = all_categories.iter().find(|c| c.id == id) else {
                debug!(category_id = %id, outlet_id = %outlet.id, "Outlet references unknown category");
                return None;
            };
            Some(Category {
                priority: Some(entry.priority.unwrap_or(DEFAULT_PRIORITY)),
                ..category.clone()
            })
        })
        .collect();

    // stable: equal priorities keep outlet order
    resolved.sort_by_key(Category::effective_priority);
    resolved
}

/// Items priced for the outlet, with badges attached
pub fn outlet_food_items(
    all_food_items: &[FoodItem],
    feature_types: &[FeatureType],
    outlet_id: &str,
) -> Vec<FoodItem> {
    all_food_items
        .iter()
        .filter(|item| item.is_sold_at(outlet_id))
        .map(|item| with_badge(item.clone(), feature_types))
        .collect()
}

/// Attach badge and color from the first feature type matching the item
pub fn with_badge(mut item: FoodItem, feature_types: &[FeatureType]) -> FoodItem {
    let Some(feature_id) = item.featured_type_id.as_ref().map(|r| r.id()) else {
        return item;
    };
    match feature_types.iter().find(|ft| ft.id == feature_id) {
        Some(feature) => {
            if let Some(title) = feature.label() {
                item.badge_color = Some(badge_color(title).to_string());
                item.badge = Some(title.to_string());
            }
        }
        None => debug!(item_id = %item.id, feature_type_id = %feature_id, "Unknown feature type"),
    }
    item
}
