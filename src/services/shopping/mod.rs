//! Shopping list transforms.
//!
//! Grouping for display plus the optimistic edits the list applies locally
//! before the backend confirms them.

use crate::models::shopping::{is_fixed_category_name, ShoppingItem, UNCATEGORIZED};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShoppingError {
    #[error("category '{0}' is built in and cannot be changed")]
    FixedCategory(String),
    #[error("category name cannot be empty")]
    EmptyName,
    #[error("no shopping item with id {0}")]
    ItemNotFound(String),
}

/// Items sharing a category, in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingGroup<'a> {
    pub name: String,
    pub items: Vec<&'a ShoppingItem>,
}

impl ShoppingGroup<'_> {
    pub fn is_uncategorized(&self) -> bool {
        self.name == UNCATEGORIZED
    }

    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|item| !item.done).count()
    }
}

/// Group items by category for display.
///
/// Done items are skipped unless `show_done`. Groups are ordered by name,
/// ignoring case, with the uncategorized group always last.
pub fn group_items(items: &[ShoppingItem], show_done: bool) -> Vec<ShoppingGroup<'_>> {
    let mut groups: Vec<ShoppingGroup<'_>> = Vec::new();

    for item in items.iter().filter(|item| show_done || !item.done) {
        let name = item.category_name().unwrap_or(UNCATEGORIZED);
        match groups.iter_mut().find(|group| group.name == name) {
            Some(group) => group.items.push(item),
            None => groups.push(ShoppingGroup {
                name: name.to_string(),
                items: vec![item],
            }),
        }
    }

    groups.sort_by(|a, b| {
        a.is_uncategorized()
            .cmp(&b.is_uncategorized())
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
            .then_with(|| a.name.cmp(&b.name))
    });
    groups
}

/// Move every item of category `old` to `new`.
pub fn rename_category(
    items: &[ShoppingItem],
    old: &str,
    new: &str,
) -> Result<Vec<ShoppingItem>, ShoppingError> {
    let old = old.trim();
    let new = new.trim();
    if new.is_empty() {
        return Err(ShoppingError::EmptyName);
    }
    if is_protected(old) {
        return Err(ShoppingError::FixedCategory(old.to_string()));
    }
    if new == UNCATEGORIZED {
        return Err(ShoppingError::FixedCategory(new.to_string()));
    }

    Ok(items
        .iter()
        .cloned()
        .map(|mut item| {
            if item.category_name() == Some(old) {
                item.category = Some(new.to_string());
            }
            item
        })
        .collect())
}

/// Drop category `name`, leaving its items uncategorized.
pub fn clear_category(items: &[ShoppingItem], name: &str) -> Result<Vec<ShoppingItem>, ShoppingError> {
    let name = name.trim();
    if is_protected(name) {
        return Err(ShoppingError::FixedCategory(name.to_string()));
    }

    Ok(items
        .iter()
        .cloned()
        .map(|mut item| {
            if item.category_name() == Some(name) {
                item.category = None;
            }
            item
        })
        .collect())
}

// Built-in categories and the uncategorized bucket cannot be edited
fn is_protected(name: &str) -> bool {
    name == UNCATEGORIZED || is_fixed_category_name(name)
}

/// Flip the done flag of item `id`.
pub fn toggle_done(items: &mut [ShoppingItem], id: &str) -> Result<bool, ShoppingError> {
    let item = items
        .iter_mut()
        .find(|item| item.id == id)
        .ok_or_else(|| ShoppingError::ItemNotFound(id.to_string()))?;
    item.done = !item.done;
    log::debug!("Shopping item {} done={}", id, item.done);
    Ok(item.done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_items() -> Vec<ShoppingItem> {
        let mut bought = ShoppingItem::new("4", "Detersivo").with_category("casa");
        bought.done = true;
        vec![
            ShoppingItem::new("1", "Latte").with_category("spesa"),
            ShoppingItem::new("2", "Valigia").with_category(" Viaggi"),
            ShoppingItem::new("3", "Regalo"),
            bought,
            ShoppingItem::new("5", "Pane").with_category("spesa"),
            ShoppingItem::new("6", "Lampadina").with_category("Casa"),
        ]
    }

    fn names(groups: &[ShoppingGroup<'_>]) -> Vec<String> {
        groups.iter().map(|g| g.name.clone()).collect()
    }

    #[test]
    fn test_group_items_hides_done_and_orders_groups() {
        let items = sample_items();
        let groups = group_items(&items, false);
        assert_eq!(names(&groups), vec!["Casa", "spesa", "Viaggi", UNCATEGORIZED]);

        let spesa = &groups[1];
        let labels: Vec<&str> = spesa.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Latte", "Pane"]);
        assert!(groups.last().unwrap().is_uncategorized());
    }

    #[test]
    fn test_group_items_with_done() {
        let items = sample_items();
        let groups = group_items(&items, true);
        assert_eq!(names(&groups), vec!["Casa", "casa", "spesa", "Viaggi", UNCATEGORIZED]);
        assert_eq!(groups[1].pending_count(), 0);
    }

    #[test]
    fn test_group_items_empty() {
        assert!(group_items(&[], true).is_empty());
    }

    #[test]
    fn test_rename_category() {
        let items = vec![
            ShoppingItem::new("1", "Rose").with_category("regali "),
            ShoppingItem::new("2", "Latte").with_category("spesa"),
        ];
        let renamed = rename_category(&items, "regali", " compleanno ").unwrap();
        assert_eq!(renamed[0].category.as_deref(), Some("compleanno"));
        assert_eq!(renamed[1].category.as_deref(), Some("spesa"));

        assert_eq!(
            rename_category(&items, "Spesa", "cibo"),
            Err(ShoppingError::FixedCategory("Spesa".to_string()))
        );
        assert_eq!(rename_category(&items, "regali", "  "), Err(ShoppingError::EmptyName));
    }

    #[test]
    fn test_rename_category_rejects_uncategorized_bucket() {
        let items = vec![
            ShoppingItem::new("1", "Rose").with_category(UNCATEGORIZED),
            ShoppingItem::new("2", "Torta").with_category("regali"),
        ];
        assert_eq!(
            rename_category(&items, UNCATEGORIZED, "cibo"),
            Err(ShoppingError::FixedCategory(UNCATEGORIZED.to_string()))
        );
        assert_eq!(
            rename_category(&items, "regali", UNCATEGORIZED),
            Err(ShoppingError::FixedCategory(UNCATEGORIZED.to_string()))
        );
    }

    #[test]
    fn test_clear_category() {
        let items = vec![ShoppingItem::new("1", "Rose").with_category("regali")];
        let cleared = clear_category(&items, "regali").unwrap();
        assert!(cleared[0].category.is_none());
        assert!(clear_category(&items, "altro").is_err());

        let items = vec![ShoppingItem::new("2", "Torta").with_category(UNCATEGORIZED)];
        assert_eq!(
            clear_category(&items, UNCATEGORIZED),
            Err(ShoppingError::FixedCategory(UNCATEGORIZED.to_string()))
        );
    }

    #[test]
    fn test_toggle_done() {
        let mut items = sample_items();
        assert_eq!(toggle_done(&mut items, "1"), Ok(true));
        assert_eq!(toggle_done(&mut items, "1"), Ok(false));
        assert_eq!(
            toggle_done(&mut items, "99"),
            Err(ShoppingError::ItemNotFound("99".to_string()))
        );
    }
}
