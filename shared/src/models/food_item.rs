//! Food Item Model

use super::{EntityRef, ref_matches};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Diet type value for vegetarian items
pub const FOOD_TYPE_VEG: &str = "Veg-Only";

/// Marker contained in every egg-based diet type
pub const FOOD_TYPE_EGG_MARKER: &str = "Egg";

/// Food item entity
///
/// `badge`/`badge_color` are derived during menu assembly and never sent by
/// the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub video: Option<String>,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub food_type: String,
    #[serde(rename = "categoryId", default)]
    pub category_id: Option<EntityRef>,
    #[serde(rename = "featured_type_Id", default)]
    pub featured_type_id: Option<EntityRef>,
    /// Per-outlet prices; an item is visible only at outlets listed here
    #[serde(rename = "outletPrices", default, deserialize_with = "crate::util::null_as_default")]
    pub outlet_prices: Vec<OutletPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(rename = "badgeColor", default, skip_serializing_if = "Option::is_none")]
    pub badge_color: Option<String>,
}

impl FoodItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            image: None,
            video: None,
            food_type: String::new(),
            category_id: None,
            featured_type_id: None,
            outlet_prices: Vec::new(),
            badge: None,
            badge_color: None,
        }
    }

    pub fn with_food_type(mut self, food_type: impl Into<String>) -> Self {
        self.food_type = food_type.into();
        self
    }

    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(EntityRef::new(category_id));
        self
    }

    pub fn with_feature_type(mut self, feature_type_id: impl Into<String>) -> Self {
        self.featured_type_id = Some(EntityRef::new(feature_type_id));
        self
    }

    pub fn with_price(mut self, outlet_id: impl Into<String>, price: Decimal) -> Self {
        self.outlet_prices.push(OutletPrice {
            outlet: Some(EntityRef::new(outlet_id)),
            price,
        });
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category_id.as_ref().map(EntityRef::id)
    }

    pub fn is_veg(&self) -> bool {
        self.food_type == FOOD_TYPE_VEG
    }

    pub fn contains_egg(&self) -> bool {
        self.food_type.contains(FOOD_TYPE_EGG_MARKER)
    }

    /// Whether the item is priced for the given outlet
    pub fn is_sold_at(&self, outlet_id: &str) -> bool {
        self.outlet_prices
            .iter()
            .any(|p| ref_matches(p.outlet.as_ref(), outlet_id))
    }

    /// Price at the given outlet (first matching entry)
    pub fn price_at(&self, outlet_id: &str) -> Option<Decimal> {
        self.outlet_prices
            .iter()
            .find(|p| ref_matches(p.outlet.as_ref(), outlet_id))
            .map(|p| p.price)
    }
}

/// Outlet price entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutletPrice {
    #[serde(default)]
    pub outlet: Option<EntityRef>,
    #[serde(default, deserialize_with = "crate::util::null_as_default")]
    pub price: Decimal,
}
