//! Badge colors for feature types

/// Color of a badge whose title has no entry in the table
pub const DEFAULT_BADGE_COLOR: &str = "#FF7A00";

const BADGE_COLORS: [(&str, &str); 20] = [
    ("New Arrivals", "#FF7A00"),
    ("Recommended", "#9C27B0"),
    ("Gluten Free", "#2196F3"),
    ("Jain Food", "#4CAF50"),
    ("Best Seller", "#F44336"),
    ("Chef's Special", "#009688"),
    ("Today's Pick", "#673AB7"),
    ("Spicy", "#3F51B5"),
    ("Low Calorie", "#00BCD4"),
    ("Organic", "#8BC34A"),
    ("Vegan", "#CDDC39"),
    ("Keto Friendly", "#FFC107"),
    ("High Protein", "#FF5722"),
    ("Sugar Free", "#795548"),
    ("Dairy Free", "#9E9E9E"),
    ("Nut Free", "#607D8B"),
    ("Low Carb", "#E91E63"),
    ("Seasonal", "#1E88E5"),
    ("House Special", "#43A047"),
    ("Popular", "#FB8C00"),
];

/// Color for a feature type title (exact, case-sensitive match)
pub fn badge_color(title: &str) -> &'static str {
    BADGE_COLORS
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_BADGE_COLOR)
}
