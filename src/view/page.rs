//! Topic page state: category tabs, mounted entries and keyboard focus.

use std::sync::Arc;

use tracing::debug;

use super::entry::TopicEntry;
use crate::content::{CategoryDescriptor, PageDescriptor};

/// A mounted topic page.
///
/// Only the active category's entries exist. Switching category drops them
/// and mounts the new category's entries with fresh state.
#[derive(Debug, Clone)]
pub struct TopicPage {
    descriptor: Arc<PageDescriptor>,
    active_category: usize,
    entries: Vec<TopicEntry>,
    focused: usize,
    /// First visible content line; maintained by the renderer.
    pub scroll: u16,
}

impl TopicPage {
    pub fn new(descriptor: Arc<PageDescriptor>) -> Self {
        let mut page = Self {
            descriptor,
            active_category: 0,
            entries: Vec::new(),
            focused: 0,
            scroll: 0,
        };
        page.mount_category(0);
        page
    }

    pub fn descriptor(&self) -> &PageDescriptor {
        &self.descriptor
    }

    pub fn categories(&self) -> &[CategoryDescriptor] {
        &self.descriptor.categories
    }

    pub fn active_category_index(&self) -> usize {
        self.active_category
    }

    pub fn active_category(&self) -> Option<&CategoryDescriptor> {
        self.descriptor.categories.get(self.active_category)
    }

    pub fn active_category_id(&self) -> &str {
        self.active_category().map_or("", |c| c.id.as_str())
    }

    /// Switch to the category with `id`. Unknown ids are ignored.
    ///
    /// Returns whether the id was found.
    pub fn select_category(&mut self, id: &str) -> bool {
        match self.descriptor.categories.iter().position(|c| c.id == id) {
            Some(index) => {
                self.mount_category(index);
                true
            }
            None => false,
        }
    }

    /// Switch by tab position. Out-of-range indices are ignored.
    pub fn select_category_index(&mut self, index: usize) -> bool {
        if index < self.descriptor.categories.len() {
            self.mount_category(index);
            true
        } else {
            false
        }
    }

    pub fn next_category(&mut self) {
        let count = self.descriptor.categories.len();
        if count > 0 {
            self.mount_category((self.active_category + 1) % count);
        }
    }

    pub fn prev_category(&mut self) {
        let count = self.descriptor.categories.len();
        if count > 0 {
            self.mount_category((self.active_category + count - 1) % count);
        }
    }

    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut [TopicEntry] {
        &mut self.entries
    }

    pub fn focused_index(&self) -> usize {
        self.focused
    }

    pub fn focused_entry(&self) -> Option<&TopicEntry> {
        self.entries.get(self.focused)
    }

    pub fn focused_entry_mut(&mut self) -> Option<&mut TopicEntry> {
        self.entries.get_mut(self.focused)
    }

    pub fn focus_next(&mut self) {
        let max = self.entries.len().saturating_sub(1);
        self.focused = (self.focused + 1).min(max);
    }

    pub fn focus_prev(&mut self) {
        self.focused = self.focused.saturating_sub(1);
    }

    pub fn focus_first(&mut self) {
        self.focused = 0;
    }

    pub fn focus_last(&mut self) {
        self.focused = self.entries.len().saturating_sub(1);
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll = (i32::from(self.scroll) + delta).clamp(0, i32::from(u16::MAX)) as u16;
    }

    fn mount_category(&mut self, index: usize) {
        self.active_category = index;
        self.entries = self
            .descriptor
            .categories
            .get(index)
            .map(|c| c.entries.iter().cloned().map(TopicEntry::new).collect())
            .unwrap_or_default();
        self.focused = 0;
        self.scroll = 0;
        debug!(
            page = %self.descriptor.id,
            category = %self.active_category_id(),
            entries = self.entries.len(),
            "Mounted category"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Difficulty, TopicEntryDescriptor, VariantSet};

    fn entry(title: &str) -> Arc<TopicEntryDescriptor> {
        Arc::new(TopicEntryDescriptor {
            title: title.into(),
            difficulty: Difficulty::Medium,
            description: String::new(),
            variants: VariantSet::from_pairs([("C", "int x;")]).unwrap(),
            default_variant: None,
            explanation: String::new(),
            approach: None,
        })
    }

    fn two_categories() -> Arc<PageDescriptor> {
        Arc::new(PageDescriptor {
            id: "bst".into(),
            title: "Binary Search Trees".into(),
            subtitle: None,
            categories: vec![
                CategoryDescriptor {
                    id: "Fundamentals".into(),
                    label: "Fundamentals".into(),
                    entries: vec![entry("What is a BST")],
                },
                CategoryDescriptor {
                    id: "Operations".into(),
                    label: "Operations".into(),
                    entries: vec![entry("Insert"), entry("Delete")],
                },
            ],
        })
    }

    fn titles(page: &TopicPage) -> Vec<&str> {
        page.entries().iter().map(|e| e.descriptor().title.as_str()).collect()
    }

    #[test]
    fn test_starts_on_first_category() {
        let page = TopicPage::new(two_categories());
        assert_eq!(page.active_category_id(), "Fundamentals");
        assert_eq!(titles(&page), vec!["What is a BST"]);
    }

    #[test]
    fn test_switching_category_resets_entry_state() {
        let mut page = TopicPage::new(two_categories());
        page.focused_entry_mut().unwrap().toggle_solution();
        assert!(page.entries()[0].is_solution_visible());

        assert!(page.select_category("Operations"));
        assert_eq!(titles(&page), vec!["Insert", "Delete"]);
        assert!(page.entries().iter().all(|e| !e.is_solution_visible()));

        assert!(page.select_category("Fundamentals"));
        assert!(!page.entries()[0].is_solution_visible());
    }

    #[test]
    fn test_unknown_category_is_ignored() {
        let mut page = TopicPage::new(two_categories());
        page.focused_entry_mut().unwrap().toggle_solution();

        assert!(!page.select_category("Balancing"));
        assert_eq!(page.active_category_id(), "Fundamentals");
        assert!(page.entries()[0].is_solution_visible());

        assert!(!page.select_category_index(5));
        assert_eq!(page.active_category_index(), 0);
    }

    #[test]
    fn test_entries_are_independent() {
        let mut page = TopicPage::new(two_categories());
        page.select_category("Operations");
        page.focus_next();
        page.focused_entry_mut().unwrap().toggle_solution();

        assert!(!page.entries()[0].is_solution_visible());
        assert!(page.entries()[1].is_solution_visible());
    }

    #[test]
    fn test_focus_is_clamped_and_reset() {
        let mut page = TopicPage::new(two_categories());
        page.next_category();
        page.focus_next();
        page.focus_next();
        assert_eq!(page.focused_index(), 1);
        page.focus_first();
        page.focus_prev();
        assert_eq!(page.focused_index(), 0);
        page.focus_last();
        assert_eq!(page.focused_index(), 1);

        page.scroll = 7;
        page.prev_category();
        assert_eq!(page.active_category_id(), "Fundamentals");
        assert_eq!(page.focused_index(), 0);
        assert_eq!(page.scroll, 0);
    }

    #[test]
    fn test_category_cycle_wraps() {
        let mut page = TopicPage::new(two_categories());
        page.prev_category();
        assert_eq!(page.active_category_id(), "Operations");
        page.next_category();
        assert_eq!(page.active_category_id(), "Fundamentals");
    }

    #[test]
    fn test_scroll_by_saturates() {
        let mut page = TopicPage::new(two_categories());
        page.scroll_by(-3);
        assert_eq!(page.scroll, 0);
        page.scroll_by(10);
        assert_eq!(page.scroll, 10);
    }
}
