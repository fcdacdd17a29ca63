//! Menu loading
//!
//! [`MenuSource`] is the seam to the remote data provider. [`MenuLoader`]
//! validates the route parameters, fetches the four snapshots concurrently and
//! assembles them. Any fetch failure collapses the whole menu to empty rather
//! than surfacing an error screen.

use crate::error::{MenuError, MenuResult};
use crate::view::MenuView;
use async_trait::async_trait;
use shared::models::{Category, FeatureType, FoodItem, Outlet};
use tracing::{info, warn};

/// Provider of the raw menu snapshots
#[async_trait]
pub trait MenuSource: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Outlet by id; `None` when the provider returns no document
    async fn outlet(&self, outlet_id: &str) -> Result<Option<Outlet>, Self::Error>;

    /// Global category catalog of a website
    async fn categories(&self, website_id: &str) -> Result<Vec<Category>, Self::Error>;

    /// Every food item of a website, across outlets
    async fn food_items(&self, website_id: &str) -> Result<Vec<FoodItem>, Self::Error>;

    /// Feature types of a website
    async fn feature_types(&self, website_id: &str) -> Result<Vec<FeatureType>, Self::Error>;
}

type Snapshots = (Option<Outlet>, Vec<Category>, Vec<FoodItem>, Vec<FeatureType>);

/// Loads and assembles outlet menus
#[derive(Debug, Clone)]
pub struct MenuLoader<S> {
    source: S,
}

impl<S: MenuSource> MenuLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Load the menu of `outlet_id` within `website_id`
    ///
    /// Only a missing parameter is an error. Fetch failures yield
    /// [`MenuView::empty`].
    pub async fn load(&self, website_id: &str, outlet_id: &str) -> MenuResult<MenuView> {
        let website_id = require("websiteId", website_id)?;
        let outlet_id = require("outletId", outlet_id)?;

        match self.fetch(website_id, outlet_id).await {
            Ok((outlet, categories, food_items, feature_types)) => {
                let view = MenuView::build(outlet_id, outlet, &categories, &food_items, feature_types);
                info!(
                    website_id,
                    outlet_id,
                    categories = view.categories.len(),
                    items = view.food_items.len(),
                    "Menu loaded"
                );
                Ok(view)
            }
            Err(e) => {
                warn!(website_id, outlet_id, error = %e, "Menu fetch failed, showing empty menu");
                Ok(MenuView::empty(outlet_id))
            }
        }
    }

    async fn fetch(&self, website_id: &str, outlet_id: &str) -> Result<Snapshots, S::Error> {
        tokio::try_join!(
            self.source.outlet(outlet_id),
            self.source.categories(website_id),
            self.source.food_items(website_id),
            self.source.feature_types(website_id),
        )
    }
}

fn require<'a>(name: &'static str, value: &'a str) -> MenuResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(MenuError::MissingParameter(name));
    }
    Ok(value)
}
