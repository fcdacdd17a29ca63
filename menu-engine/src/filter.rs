//! Filter state and item predicate

use shared::models::FoodItem;
use std::fmt;

/// Tab value selecting every item
pub const ALL_TAB: &str = "all";

/// Selected feature tab
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    All,
    /// Only items whose badge equals this title
    Feature(String),
}

impl ActiveTab {
    /// Parse a tab value; `"all"` selects everything
    pub fn from_value(value: &str) -> Self {
        if value == ALL_TAB {
            Self::All
        } else {
            Self::Feature(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL_TAB,
            Self::Feature(title) => title,
        }
    }
}

impl fmt::Display for ActiveTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer filter selection
///
/// The diet flags are meant to be exclusive. The toggle handlers keep them so;
/// [`filter_item`] itself AND-combines whatever is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub veg_only: bool,
    pub non_veg_only: bool,
    pub egg_only: bool,
    pub search_term: String,
    pub selected_category_id: Option<String>,
    pub active_tab: ActiveTab,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip "veg only"; switching it on clears the other diet flags
    pub fn toggle_veg(&mut self) {
        self.veg_only = !self.veg_only;
        if self.veg_only {
            self.non_veg_only = false;
            self.egg_only = false;
        }
    }

    /// Flip "non-veg only"; switching it on clears the other diet flags
    pub fn toggle_non_veg(&mut self) {
        self.non_veg_only = !self.non_veg_only;
        if self.non_veg_only {
            self.veg_only = false;
            self.egg_only = false;
        }
    }

    /// Flip "egg only"; switching it on clears the other diet flags
    pub fn toggle_egg(&mut self) {
        self.egg_only = !self.egg_only;
        if self.egg_only {
            self.veg_only = false;
            self.non_veg_only = false;
        }
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Select a category, or `None` for "All Items"
    pub fn select_category(&mut self, category_id: Option<String>) {
        self.selected_category_id = category_id;
    }

    pub fn set_active_tab(&mut self, tab: ActiveTab) {
        self.active_tab = tab;
    }

    /// Number of diet flags currently set
    pub fn active_diet_flags(&self) -> usize {
        [self.veg_only, self.non_veg_only, self.egg_only]
            .into_iter()
            .filter(|f| *f)
            .count()
    }
}

/// Whether an item passes every active filter
pub fn filter_item(item: &FoodItem, state: &FilterState) -> bool {
    if state.veg_only && !item.is_veg() {
        return false;
    }
    if state.non_veg_only && (item.is_veg() || item.contains_egg()) {
        return false;
    }
    if state.egg_only && !item.contains_egg() {
        return false;
    }

    if !state.search_term.is_empty()
        && !item
            .name
            .to_lowercase()
            .contains(&state.search_term.to_lowercase())
    {
        return false;
    }

    if let Some(category_id) = state.selected_category_id.as_deref()
        && item.category() != Some(category_id)
    {
        return false;
    }

    if let ActiveTab::Feature(title) = &state.active_tab
        && item.badge.as_deref() != Some(title.as_str())
    {
        return false;
    }

    true
}
