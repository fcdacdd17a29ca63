//! Menu view model
//!
//! Holds one outlet's assembled menu for the lifetime of a page and answers
//! the queries the presentation layer makes against it. Filtering and grouping
//! are recomputed on every call.

use crate::assembly::assemble;
use crate::filter::{ALL_TAB, FilterState, filter_item};
use crate::grouping::{MenuGroup, group_items};
use rust_decimal::Decimal;
use serde::Serialize;
use shared::models::{Category, FeatureType, FoodItem, Outlet};
use shared::util::{image_url, initials};

/// Label of the pseudo-category that lists every item
pub const ALL_ITEMS_LABEL: &str = "All Items";

/// Assembled menu of one outlet
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuView {
    pub outlet_id: String,
    pub outlet: Option<Outlet>,
    /// Outlet categories, ascending by priority
    pub categories: Vec<Category>,
    /// Items priced for the outlet, badges attached
    pub food_items: Vec<FoodItem>,
    pub feature_types: Vec<FeatureType>,
}

/// Sidebar row: a category and how many items it holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarEntry {
    /// `None` for "All Items"
    pub category_id: Option<String>,
    pub name: String,
    pub count: usize,
}

/// Detail presentation of one item at the current outlet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductDetail {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Outlet price, zero when the item has no entry for the outlet
    pub price: Decimal,
    pub is_veg: bool,
    pub food_type: String,
    pub image_url: Option<String>,
    /// Shown in place of a missing or broken image
    pub initials: String,
    pub video_url: Option<String>,
    pub category_id: Option<String>,
    pub badge: Option<String>,
    pub badge_color: Option<String>,
}

impl MenuView {
    /// Menu with nothing in it; the degraded result of a failed load
    pub fn empty(outlet_id: impl Into<String>) -> Self {
        Self {
            outlet_id: outlet_id.into(),
            ..Self::default()
        }
    }

    /// Assemble a view from raw snapshots
    pub fn build(
        outlet_id: impl Into<String>,
        outlet: Option<Outlet>,
        all_categories: &[Category],
        all_food_items: &[FoodItem],
        feature_types: Vec<FeatureType>,
    ) -> Self {
        let outlet_id = outlet_id.into();
        let assembled = assemble(
            outlet.as_ref(),
            all_categories,
            all_food_items,
            &feature_types,
            &outlet_id,
        );
        Self {
            outlet_id,
            outlet,
            categories: assembled.categories,
            food_items: assembled.food_items,
            feature_types,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.food_items.is_empty()
    }

    /// Item count of a category; `None` counts every item
    pub fn product_count(&self, category_id: Option<&str>) -> usize {
        match category_id {
            None => self.food_items.len(),
            Some(id) => self
                .food_items
                .iter()
                .filter(|item| item.category() == Some(id))
                .count(),
        }
    }

    /// "All Items" followed by each outlet category in priority order
    pub fn sidebar(&self) -> Vec<SidebarEntry> {
        std::iter::once(SidebarEntry {
            category_id: None,
            name: ALL_ITEMS_LABEL.to_string(),
            count: self.product_count(None),
        })
        .chain(self.categories.iter().map(|c| SidebarEntry {
            category_id: Some(c.id.clone()),
            name: c.name.clone(),
            count: self.product_count(Some(&c.id)),
        }))
        .collect()
    }

    /// Tab values: `"all"` then every feature type title
    pub fn tabs(&self) -> Vec<String> {
        std::iter::once(ALL_TAB.to_string())
            .chain(
                self.feature_types
                    .iter()
                    .filter_map(|ft| ft.label().map(str::to_string)),
            )
            .collect()
    }

    /// Items passing the filters, in menu order
    pub fn filtered(&self, state: &FilterState) -> Vec<&FoodItem> {
        self.food_items
            .iter()
            .filter(|item| filter_item(item, state))
            .collect()
    }

    /// Filtered items grouped by category, groups ascending by priority
    pub fn grouped(&self, state: &FilterState) -> Vec<MenuGroup<'_>> {
        group_items(self.filtered(state), &self.categories)
    }

    pub fn find_item(&self, item_id: &str) -> Option<&FoodItem> {
        self.food_items.iter().find(|item| item.id == item_id)
    }

    /// Detail presentation of an item, resolving its image under `image_base`
    pub fn product_detail(&self, item: &FoodItem, image_base: &str) -> ProductDetail {
        ProductDetail {
            id: item.id.clone(),
            title: item.name.clone(),
            description: item.description.clone(),
            price: item.price_at(&self.outlet_id).unwrap_or_default(),
            is_veg: item.is_veg(),
            food_type: item.food_type.clone(),
            image_url: item
                .image
                .as_deref()
                .filter(|name| !name.is_empty())
                .map(|name| image_url(image_base, name)),
            initials: initials(&item.name),
            video_url: item.video.clone(),
            category_id: item.category().map(str::to_string),
            badge: item.badge.clone(),
            badge_color: item.badge_color.clone(),
        }
    }
}
