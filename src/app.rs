//! Application state and navigation logic.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::content::{RawSite, Site};
use crate::source::ContentSource;
use crate::ui::Theme;
use crate::view::{SubTab, TopicPage};

/// How long a status message stays in the status bar.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// The current view in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// List of all topic pages.
    Index,
    /// One mounted topic page.
    Page,
}

impl View {
    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Index => "Index",
            View::Page => "Page",
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Content
    source: Box<dyn ContentSource>,
    pub site: Option<Site>,
    pub load_error: Option<String>,

    // Navigation state
    pub selected_page: usize,
    /// First index row on screen, kept from the last draw.
    pub index_offset: usize,
    pub page: Option<TopicPage>,
    pending_page: Option<String>,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App reading from `source`. Nothing is loaded until
    /// [`App::reload_content`] is called.
    pub fn new(source: Box<dyn ContentSource>, theme: Theme) -> Self {
        Self {
            running: true,
            show_help: false,
            source,
            site: None,
            load_error: None,
            selected_page: 0,
            index_offset: 0,
            page: None,
            pending_page: None,
            theme,
            status_message: None,
        }
    }

    /// Open `id` as soon as content is available.
    pub fn with_start_page(mut self, id: impl Into<String>) -> Self {
        let id = id.into();
        if self.site.is_some() {
            self.open_page(&id);
        } else {
            self.pending_page = Some(id);
        }
        self
    }

    /// Returns a description of the current content source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    pub fn current_view(&self) -> View {
        if self.page.is_some() {
            View::Page
        } else {
            View::Index
        }
    }

    /// Poll the content source.
    ///
    /// Returns true if new content was applied. A failed load keeps the
    /// previous content and records the error in `load_error`.
    pub fn reload_content(&mut self) -> bool {
        match self.source.poll() {
            Some(site) => {
                self.load_error = None;
                self.apply_site(site);
                true
            }
            None => {
                self.load_error = self.source.error().map(str::to_string);
                false
            }
        }
    }

    /// Swap in new content. An open page is remounted from the new
    /// descriptors on the same category; a page that disappeared drops the
    /// view back to the index.
    fn apply_site(&mut self, site: Site) {
        info!(
            pages = site.pages.len(),
            source = %self.source.description(),
            "Content loaded"
        );

        let open = self
            .page
            .take()
            .map(|p| (p.descriptor().id.clone(), p.active_category_id().to_string()));

        self.selected_page = self.selected_page.min(site.pages.len().saturating_sub(1));
        self.site = Some(site);

        if let Some((id, category)) = open {
            if self.open_page(&id) {
                if let Some(ref mut page) = self.page {
                    page.select_category(&category);
                }
            } else {
                self.set_status_message(format!("Page '{}' was removed", id));
            }
        }

        if let Some(id) = self.pending_page.take() {
            self.open_page(&id);
        }
    }

    /// Mount the page with `id`, replacing any open page.
    ///
    /// Unknown ids leave the view unchanged and show a status message.
    pub fn open_page(&mut self, id: &str) -> bool {
        let Some(ref site) = self.site else {
            self.pending_page = Some(id.to_string());
            return false;
        };

        let found = site
            .page_index(id)
            .and_then(|index| site.pages.get(index).cloned().map(|page| (index, page)));

        match found {
            Some((index, descriptor)) => {
                debug!(page = %id, "Opening page");
                self.selected_page = index;
                self.page = Some(TopicPage::new(descriptor));
                true
            }
            None => {
                warn!(page = %id, "Unknown page");
                self.set_status_message(format!("Unknown page: {}", id));
                false
            }
        }
    }

    /// Open the page highlighted in the index.
    pub fn open_selected_page(&mut self) -> bool {
        let id = self
            .site
            .as_ref()
            .and_then(|site| site.pages.get(self.selected_page))
            .map(|page| page.id.clone());
        match id {
            Some(id) => self.open_page(&id),
            None => false,
        }
    }

    /// Navigate back: close help first, then leave the page for the index.
    ///
    /// Leaving a page drops all of its entry state.
    pub fn go_back(&mut self) {
        if self.show_help {
            self.show_help = false;
            return;
        }
        if let Some(page) = self.page.take() {
            debug!(page = %page.descriptor().id, "Back to index");
        }
    }

    /// Get breadcrumb trail for current navigation.
    pub fn breadcrumb(&self) -> String {
        let mut parts = vec![View::Index.label()];
        if let Some(ref page) = self.page {
            parts.push(&page.descriptor().title);
            if let Some(category) = page.active_category() {
                parts.push(&category.label);
            }
        }
        parts.join(" > ")
    }

    fn page_count(&self) -> usize {
        self.site.as_ref().map_or(0, |site| site.pages.len())
    }

    /// Move selection down by one item.
    pub fn select_next(&mut self) {
        match self.page {
            Some(ref mut page) => page.focus_next(),
            None => {
                let max = self.page_count().saturating_sub(1);
                self.selected_page = (self.selected_page + 1).min(max);
            }
        }
    }

    /// Move selection up by one item.
    pub fn select_prev(&mut self) {
        match self.page {
            Some(ref mut page) => page.focus_prev(),
            None => self.selected_page = self.selected_page.saturating_sub(1),
        }
    }

    /// Jump to the first item in the list.
    pub fn select_first(&mut self) {
        match self.page {
            Some(ref mut page) => page.focus_first(),
            None => self.selected_page = 0,
        }
    }

    /// Jump to the last item in the list.
    pub fn select_last(&mut self) {
        match self.page {
            Some(ref mut page) => page.focus_last(),
            None => self.selected_page = self.page_count().saturating_sub(1),
        }
    }

    pub fn next_category(&mut self) {
        if let Some(ref mut page) = self.page {
            page.next_category();
        }
    }

    pub fn prev_category(&mut self) {
        if let Some(ref mut page) = self.page {
            page.prev_category();
        }
    }

    /// Select a category tab by position.
    pub fn select_category_index(&mut self, index: usize) -> bool {
        self.page
            .as_mut()
            .is_some_and(|page| page.select_category_index(index))
    }

    /// Reveal or hide the focused entry's solution.
    pub fn toggle_solution(&mut self) {
        if let Some(entry) = self.page.as_mut().and_then(|p| p.focused_entry_mut()) {
            entry.toggle_solution();
        }
    }

    /// Switch the focused entry's sub-tab. Entries without an approach have
    /// no sub-tabs and are left alone.
    pub fn select_sub_tab(&mut self, tab: SubTab) -> bool {
        self.page
            .as_mut()
            .and_then(|p| p.focused_entry_mut())
            .is_some_and(|entry| entry.select_sub_tab(tab))
    }

    pub fn toggle_sub_tab(&mut self) -> bool {
        self.page
            .as_mut()
            .and_then(|p| p.focused_entry_mut())
            .is_some_and(|entry| entry.toggle_sub_tab())
    }

    /// Cycle the focused entry's code variant forward.
    pub fn next_variant(&mut self) {
        if let Some(code) = self
            .page
            .as_mut()
            .and_then(|p| p.focused_entry_mut())
            .and_then(|e| e.code_mut())
        {
            code.next_variant();
        }
    }

    /// Cycle the focused entry's code variant backward.
    pub fn prev_variant(&mut self) {
        if let Some(code) = self
            .page
            .as_mut()
            .and_then(|p| p.focused_entry_mut())
            .and_then(|e| e.code_mut())
        {
            code.prev_variant();
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        if let Some(ref mut page) = self.page {
            page.scroll_by(delta);
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the loaded content in the JSON authoring format.
    pub fn export_content(&self, path: &Path) -> Result<()> {
        let Some(ref site) = self.site else {
            anyhow::bail!("No content to export");
        };

        let json = RawSite::from(site).to_json_pretty()?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;

        info!(path = %path.display(), "Exported content");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::content::{builtin, compile, CompileOptions};
    use crate::source::BuiltinSource;

    /// Hands out queued sites one poll at a time.
    #[derive(Debug)]
    struct QueueSource(VecDeque<Site>);

    impl ContentSource for QueueSource {
        fn poll(&mut self) -> Option<Site> {
            self.0.pop_front()
        }

        fn description(&self) -> &str {
            "queue"
        }

        fn error(&self) -> Option<&str> {
            None
        }
    }

    fn builtin_site() -> Site {
        compile(&builtin::raw_site(), CompileOptions::default())
            .unwrap()
            .site
    }

    fn loaded_app() -> App {
        let mut app = App::new(Box::new(BuiltinSource::new()), Theme::dark());
        assert!(app.reload_content());
        app
    }

    #[test]
    fn test_starts_on_index() {
        let app = loaded_app();
        assert_eq!(app.current_view(), View::Index);
        assert_eq!(app.breadcrumb(), "Index");
        assert_eq!(app.source_description(), "built-in");
    }

    #[test]
    fn test_index_selection_is_clamped() {
        let mut app = loaded_app();
        app.select_prev();
        assert_eq!(app.selected_page, 0);
        app.select_last();
        assert_eq!(app.selected_page, 2);
        app.select_next();
        assert_eq!(app.selected_page, 2);
        app.select_first();
        assert_eq!(app.selected_page, 0);
    }

    #[test]
    fn test_open_and_leave_page() {
        let mut app = loaded_app();
        assert!(app.open_selected_page());
        assert_eq!(app.current_view(), View::Page);
        assert_eq!(app.breadcrumb(), "Index > Binary Search Trees > Fundamentals");

        app.toggle_solution();
        app.go_back();
        assert_eq!(app.current_view(), View::Index);

        assert!(app.open_page("bst"));
        let page = app.page.as_ref().unwrap();
        assert!(page.entries().iter().all(|e| !e.is_solution_visible()));
    }

    #[test]
    fn test_unknown_page_keeps_view() {
        let mut app = loaded_app();
        assert!(!app.open_page("graphs"));
        assert_eq!(app.current_view(), View::Index);
        assert_eq!(app.get_status_message(), Some("Unknown page: graphs"));
    }

    #[test]
    fn test_start_page_opens_after_first_load() {
        let mut app =
            App::new(Box::new(BuiltinSource::new()), Theme::dark()).with_start_page("searching");
        assert_eq!(app.current_view(), View::Index);
        app.reload_content();
        assert_eq!(app.page.as_ref().unwrap().descriptor().id, "searching");
        assert_eq!(app.selected_page, 2);
    }

    #[test]
    fn test_category_switch_resets_entries() {
        let mut app = loaded_app();
        app.open_page("bst");
        assert!(app.select_category_index(1));
        app.toggle_solution();
        assert!(app.page.as_ref().unwrap().entries()[0].is_solution_visible());

        app.prev_category();
        app.next_category();
        let page = app.page.as_ref().unwrap();
        assert_eq!(page.active_category().unwrap().label, "Operations");
        assert!(!page.entries()[0].is_solution_visible());
    }

    #[test]
    fn test_variant_keys_need_mounted_code() {
        let mut app = loaded_app();
        app.open_page("bst");
        // Hidden entry: nothing to cycle.
        app.next_variant();
        assert!(app.page.as_ref().unwrap().entries()[0].code().is_none());

        app.toggle_solution();
        let first = app.page.as_ref().unwrap().entries()[0]
            .code()
            .unwrap()
            .active_index();
        app.next_variant();
        app.prev_variant();
        let code = app.page.as_ref().unwrap().entries()[0].code().unwrap();
        assert_eq!(code.active_index(), first);
    }

    #[test]
    fn test_reload_remounts_open_page_on_same_category() {
        let site = builtin_site();
        let source = QueueSource(VecDeque::from([site.clone(), site]));
        let mut app = App::new(Box::new(source), Theme::dark());
        app.reload_content();
        app.open_page("bst");
        app.select_category_index(2);
        app.toggle_solution();

        assert!(app.reload_content());
        let page = app.page.as_ref().unwrap();
        assert_eq!(page.active_category_index(), 2);
        assert!(!page.entries()[0].is_solution_visible());
        assert!(!app.reload_content());
    }

    #[test]
    fn test_reload_drops_removed_page() {
        let mut raw = builtin::raw_site();
        let first = builtin_site();
        raw.pages.retain(|p| p.id != "bst");
        let second = compile(&raw, CompileOptions::default()).unwrap().site;

        let mut app = App::new(
            Box::new(QueueSource(VecDeque::from([first, second]))),
            Theme::dark(),
        );
        app.reload_content();
        app.open_page("bst");
        app.reload_content();

        assert_eq!(app.current_view(), View::Index);
        assert_eq!(app.get_status_message(), Some("Page 'bst' was removed"));
    }

    #[test]
    fn test_export_round_trips_through_compile() {
        let app = loaded_app();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.json");
        app.export_content(&path).unwrap();

        let json = std::fs::read_to_string(&path).unwrap();
        let raw = RawSite::from_json(&json).unwrap();
        let site = compile(&raw, CompileOptions { strict: true }).unwrap().site;
        assert_eq!(site.pages.len(), 3);
        assert_eq!(
            site.page("bst").unwrap().entry_count(),
            builtin_site().page("bst").unwrap().entry_count()
        );
    }

    #[test]
    fn test_export_without_content_fails() {
        let app = App::new(Box::new(QueueSource(VecDeque::new())), Theme::dark());
        let dir = tempfile::tempdir().unwrap();
        assert!(app.export_content(&dir.path().join("x.json")).is_err());
    }
}
