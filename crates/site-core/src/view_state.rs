//! Filter/Expand View-State
//!
//! Ephemeral per-view UI state for the content listings. Nothing derived is
//! stored: the visible subset is recomputed from the current collection on
//! every read.

use std::collections::{BTreeSet, HashSet};

use crate::domain::{Categorized, Entity};

/// Category id that disables filtering
pub const ALL_CATEGORIES: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    selected_category: String,
    expanded: BTreeSet<String>,
    /// Items per page; `None` shows everything
    page_size: Option<usize>,
    pages: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORIES.to_string(),
            expanded: BTreeSet::new(),
            page_size: None,
            pages: 1,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paged(page_size: usize) -> Self {
        Self { page_size: Some(page_size.max(1)), ..Self::default() }
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn is_selected(&self, category: &str) -> bool {
        self.selected_category == category
    }

    /// Replace the filter; paging starts over
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.selected_category = category.into();
        self.pages = 1;
    }

    /// Expand a collapsed item or collapse an expanded one
    pub fn toggle_expanded(&mut self, id: &str) {
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_string());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Items matching the selected category
    pub fn visible<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        if self.selected_category == ALL_CATEGORIES {
            return items.iter().collect();
        }
        items
            .iter()
            .filter(|item| item.category() == Some(self.selected_category.as_str()))
            .collect()
    }

    /// Visible items on the pages shown so far
    pub fn page<'a, T: Categorized>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut visible = self.visible(items);
        if let Some(size) = self.page_size {
            visible.truncate(size.saturating_mul(self.pages));
        }
        visible
    }

    pub fn has_more<T: Categorized>(&self, items: &[T]) -> bool {
        self.page(items).len() < self.visible(items).len()
    }

    pub fn show_more(&mut self) {
        self.pages += 1;
    }

    /// Forget expanded ids that are no longer in the collection
    pub fn retain_known<T: Entity>(&mut self, items: &[T]) {
        let known: HashSet<&str> = items.iter().map(Entity::id).collect();
        self.expanded.retain(|id| known.contains(id.as_str()));
    }
}

/// Filter options built from loaded data: `all` first, then each distinct
/// category in order of first appearance
pub fn categories_of<T: Categorized>(items: &[T]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORIES.to_string()];
    for category in items.iter().filter_map(Categorized::category) {
        if !categories.iter().any(|c| c == category) {
            categories.push(category.to_string());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        id: String,
        category: Option<String>,
    }

    impl Entity for Card {
        fn id(&self) -> &str {
            &self.id
        }
    }

    impl Categorized for Card {
        fn category(&self) -> Option<&str> {
            self.category.as_deref()
        }
    }

    fn card(id: &str, category: &str) -> Card {
        Card { id: id.to_string(), category: Some(category.to_string()) }
    }

    fn ids(cards: Vec<&Card>) -> Vec<&str> {
        cards.into_iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_category_scenario() {
        let items = vec![card("1", "consulting"), card("2", "finance")];
        let mut view = ViewState::new();

        view.set_category("finance");
        assert_eq!(ids(view.visible(&items)), vec!["2"]);

        view.set_category(ALL_CATEGORIES);
        assert_eq!(ids(view.visible(&items)), vec!["1", "2"]);
    }

    #[test]
    fn test_visible_depends_on_last_category_only() {
        let items = vec![card("1", "consulting"), card("2", "finance"), card("3", "finance")];
        let histories: [&[&str]; 3] = [
            &["finance"],
            &["consulting", "all", "finance"],
            &["operations", "finance", "consulting", "finance"],
        ];
        let mut fresh = ViewState::new();
        fresh.set_category("finance");
        let expected = ids(fresh.visible(&items));

        for history in histories {
            let mut view = ViewState::new();
            for category in history {
                view.set_category(*category);
            }
            assert_eq!(ids(view.visible(&items)), expected);
        }
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let items = vec![card("1", "consulting"), Card { id: "2".to_string(), category: None }];
        let mut view = ViewState::new();
        view.set_category("Consulting");
        assert!(view.visible(&items).is_empty());
    }

    #[test]
    fn test_toggle_expanded_is_an_involution() {
        let mut view = ViewState::new();
        view.toggle_expanded("a");
        let original = view.clone();

        view.toggle_expanded("b");
        view.toggle_expanded("b");
        assert_eq!(view, original);

        view.toggle_expanded("a");
        view.toggle_expanded("a");
        assert_eq!(view, original);
        assert!(view.is_expanded("a"));
    }

    #[test]
    fn test_retain_known_prunes_missing_ids() {
        let mut view = ViewState::new();
        view.toggle_expanded("1");
        view.toggle_expanded("gone");

        view.retain_known(&[card("1", "finance"), card("2", "finance")]);

        assert!(view.is_expanded("1"));
        assert!(!view.is_expanded("gone"));
    }

    #[test]
    fn test_paging_resets_on_category_change() {
        let items: Vec<Card> = (1..=5).map(|i| card(&i.to_string(), "finance")).collect();
        let mut view = ViewState::paged(2);
        assert_eq!(ids(view.page(&items)), vec!["1", "2"]);
        assert!(view.has_more(&items));

        view.show_more();
        view.show_more();
        assert_eq!(view.page(&items).len(), 5);
        assert!(!view.has_more(&items));

        view.set_category("finance");
        assert_eq!(view.page(&items).len(), 2);
    }

    #[test]
    fn test_categories_of_keeps_first_appearance_order() {
        let items = vec![card("1", "Strategy"), card("2", "Technology"), card("3", "Strategy")];
        assert_eq!(categories_of(&items), vec!["all", "Strategy", "Technology"]);
    }
}
