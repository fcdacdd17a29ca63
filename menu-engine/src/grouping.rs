//! Category grouping of filtered items

use serde::Serialize;
use shared::models::{Category, DEFAULT_PRIORITY, FoodItem};
use std::collections::HashMap;

/// Group name for items whose category is not shown at the outlet
pub const OTHER_GROUP: &str = "Other";

/// Items sharing a category name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuGroup<'a> {
    pub name: String,
    pub priority: i64,
    pub items: Vec<&'a FoodItem>,
}

/// Group items by resolved category name and order groups by priority
///
/// Groups are keyed by name, so two categories sharing a name merge and keep
/// the priority of the first item seen. Items keep their input order within a
/// group; groups with equal priority keep first-seen order.
pub fn group_items<'a, I>(items: I, categories: &[Category]) -> Vec<MenuGroup<'a>>
where
    I: IntoIterator<Item = &'a FoodItem>,
{
    let mut groups: Vec<MenuGroup<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let category = item
            .category()
            .and_then(|id| categories.iter().find(|c| c.id == id));
        let (name, priority) = match category {
            Some(c) => (c.name.as_str(), c.effective_priority()),
            None => (OTHER_GROUP, DEFAULT_PRIORITY),
        };

        let slot = *index.entry(name.to_string()).or_insert_with(|| {
            groups.push(MenuGroup {
                name: name.to_string(),
                priority,
                items: Vec::new(),
            });
            groups.len() - 1
        });
        groups[slot].items.push(item);
    }

    groups.sort_by_key(|g| g.priority);
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(id: &str, name: &str, priority: i64) -> Category {
        Category {
            priority: Some(priority),
            ..Category::new(id, name)
        }
    }

    fn names(groups: &[MenuGroup<'_>]) -> Vec<String> {
        groups.iter().map(|g| g.name.clone()).collect()
    }

    #[test]
    fn test_groups_sorted_by_priority() {
        let categories = vec![ranked("c2", "Mains", 1), ranked("c1", "Starters", 2)];
        let items = vec![
            FoodItem::new("f1", "Paneer Tikka").with_category("c1"),
            FoodItem::new("f2", "Dal Makhani").with_category("c2"),
        ];
        let groups = group_items(&items, &categories);
        assert_eq!(names(&groups), vec!["Mains", "Starters"]);
    }

    #[test]
    fn test_unresolved_items_go_to_other() {
        let categories = vec![ranked("c1", "Starters", 1000)];
        let items = vec![
            FoodItem::new("f1", "Mystery"),
            FoodItem::new("f2", "Ghost").with_category("gone"),
            FoodItem::new("f3", "Soup").with_category("c1"),
        ];
        let groups = group_items(&items, &categories);
        assert_eq!(groups[0].name, OTHER_GROUP);
        assert_eq!(groups[0].priority, DEFAULT_PRIORITY);
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[1].name, "Starters");
    }

    #[test]
    fn test_everything_is_other_without_categories() {
        let items = vec![
            FoodItem::new("f1", "A").with_category("c1"),
            FoodItem::new("f2", "B").with_category("c2"),
        ];
        let groups = group_items(&items, &[]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].name, OTHER_GROUP);
        assert_eq!(groups[0].priority, DEFAULT_PRIORITY);
    }

    #[test]
    fn test_item_order_preserved_within_group() {
        let categories = vec![ranked("c1", "Mains", 1)];
        let items = vec![
            FoodItem::new("f9", "Zucchini Curry").with_category("c1"),
            FoodItem::new("f1", "Aloo Gobi").with_category("c1"),
        ];
        let groups = group_items(&items, &categories);
        let ids: Vec<_> = groups[0].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["f9", "f1"]);
    }

    #[test]
    fn test_equal_priority_keeps_first_seen_order() {
        let categories = vec![ranked("c1", "Breads", 5), ranked("c2", "Rice", 5)];
        let items = vec![
            FoodItem::new("f1", "Jeera Rice").with_category("c2"),
            FoodItem::new("f2", "Naan").with_category("c1"),
        ];
        let groups = group_items(&items, &categories);
        assert_eq!(names(&groups), vec!["Rice", "Breads"]);
    }

    #[test]
    fn test_same_name_categories_merge() {
        let categories = vec![ranked("c1", "Specials", 3), ranked("c2", "Specials", 1)];
        let items = vec![
            FoodItem::new("f1", "A").with_category("c1"),
            FoodItem::new("f2", "B").with_category("c2"),
        ];
        let groups = group_items(&items, &categories);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].priority, 3);
        assert_eq!(groups[0].items.len(), 2);
    }
}
