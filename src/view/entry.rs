//! Per-entry reveal and sub-tab state.

use std::sync::Arc;

use tracing::debug;

use super::code::CodePresenter;
use crate::content::{Approach, TopicEntryDescriptor};

/// Which half of a revealed entry is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubTab {
    #[default]
    Solution,
    Approach,
}

impl SubTab {
    pub fn label(&self) -> &'static str {
        match self {
            SubTab::Solution => "Solution",
            SubTab::Approach => "Approach",
        }
    }

    pub fn other(self) -> Self {
        match self {
            SubTab::Solution => SubTab::Approach,
            SubTab::Approach => SubTab::Solution,
        }
    }
}

/// What a revealed entry currently shows below its header.
#[derive(Debug)]
pub enum EntryBody<'a> {
    /// Solution not revealed; only the header is shown.
    Hidden,
    /// Code view. `sub_tabs` is true when the Solution/Approach switch is shown.
    Code {
        presenter: &'a CodePresenter,
        explanation: &'a str,
        sub_tabs: bool,
    },
    /// Approach breakdown; the switch is always shown.
    Approach(&'a Approach),
}

/// A mounted tutorial entry.
///
/// The code presenter only exists while the entry is revealed on the
/// Solution tab, so its variant selection resets whenever it is hidden or
/// swapped for the approach.
#[derive(Debug, Clone)]
pub struct TopicEntry {
    descriptor: Arc<TopicEntryDescriptor>,
    solution_visible: bool,
    active_sub_tab: SubTab,
    code: Option<CodePresenter>,
}

impl TopicEntry {
    pub fn new(descriptor: Arc<TopicEntryDescriptor>) -> Self {
        Self {
            descriptor,
            solution_visible: false,
            active_sub_tab: SubTab::Solution,
            code: None,
        }
    }

    pub fn descriptor(&self) -> &TopicEntryDescriptor {
        &self.descriptor
    }

    pub fn is_solution_visible(&self) -> bool {
        self.solution_visible
    }

    pub fn active_sub_tab(&self) -> SubTab {
        self.active_sub_tab
    }

    pub fn has_approach(&self) -> bool {
        self.descriptor.approach.is_some()
    }

    /// Whether the Solution/Approach switch is on screen.
    pub fn shows_sub_tabs(&self) -> bool {
        self.solution_visible && self.has_approach()
    }

    /// Reveal or hide the solution body. The sub-tab is left alone.
    pub fn toggle_solution(&mut self) {
        self.solution_visible = !self.solution_visible;
        debug!(
            entry = %self.descriptor.title,
            visible = self.solution_visible,
            "Toggled solution"
        );
        self.sync_mounts();
    }

    /// Switch sub-tab. Only entries with an approach have sub-tabs; for the
    /// rest this does nothing and returns false.
    pub fn select_sub_tab(&mut self, tab: SubTab) -> bool {
        if !self.has_approach() {
            return false;
        }
        self.active_sub_tab = tab;
        self.sync_mounts();
        true
    }

    pub fn toggle_sub_tab(&mut self) -> bool {
        self.select_sub_tab(self.active_sub_tab.other())
    }

    pub fn code(&self) -> Option<&CodePresenter> {
        self.code.as_ref()
    }

    pub fn code_mut(&mut self) -> Option<&mut CodePresenter> {
        self.code.as_mut()
    }

    pub fn body(&self) -> EntryBody<'_> {
        if !self.solution_visible {
            return EntryBody::Hidden;
        }
        match (&self.descriptor.approach, self.active_sub_tab) {
            (Some(approach), SubTab::Approach) => EntryBody::Approach(approach),
            (approach, _) => match &self.code {
                Some(presenter) => EntryBody::Code {
                    presenter,
                    explanation: &self.descriptor.explanation,
                    sub_tabs: approach.is_some(),
                },
                None => EntryBody::Hidden,
            },
        }
    }

    fn wants_code(&self) -> bool {
        self.solution_visible && (self.active_sub_tab == SubTab::Solution || !self.has_approach())
    }

    /// Mount or drop the code presenter to match the current state.
    fn sync_mounts(&mut self) {
        match (self.wants_code(), self.code.is_some()) {
            (true, false) => {
                self.code = Some(CodePresenter::new(
                    self.descriptor.variants.clone(),
                    self.descriptor.default_variant.as_deref(),
                ));
            }
            (false, true) => self.code = None,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ComplexityInfo, Difficulty, Step, VariantSet};

    fn descriptor(with_approach: bool) -> Arc<TopicEntryDescriptor> {
        Arc::new(TopicEntryDescriptor {
            title: "Reverse".into(),
            difficulty: Difficulty::Easy,
            description: "Reverse a list".into(),
            variants: VariantSet::from_pairs([("C++", "cpp"), ("Python", "py")]).unwrap(),
            default_variant: None,
            explanation: "Flip links".into(),
            approach: with_approach.then(|| Approach {
                steps: vec![Step {
                    title: "Walk".into(),
                    description: "Walk the list".into(),
                    details: vec![],
                    keywords: vec![],
                }],
                pattern: None,
                complexity: Some(ComplexityInfo {
                    time: "O(n)".into(),
                    space: "O(1)".into(),
                }),
            }),
        })
    }

    #[test]
    fn test_initial_state_hidden() {
        let entry = TopicEntry::new(descriptor(true));
        assert!(!entry.is_solution_visible());
        assert_eq!(entry.active_sub_tab(), SubTab::Solution);
        assert!(entry.code().is_none());
        assert!(matches!(entry.body(), EntryBody::Hidden));
    }

    #[test]
    fn test_double_toggle_round_trips() {
        let mut entry = TopicEntry::new(descriptor(true));
        entry.toggle_solution();
        entry.select_sub_tab(SubTab::Approach);

        let visible = entry.is_solution_visible();
        let tab = entry.active_sub_tab();
        entry.toggle_solution();
        entry.toggle_solution();
        assert_eq!(entry.is_solution_visible(), visible);
        assert_eq!(entry.active_sub_tab(), tab);
    }

    #[test]
    fn test_sub_tab_survives_hide_and_show() {
        let mut entry = TopicEntry::new(descriptor(true));
        entry.toggle_solution();
        assert!(entry.select_sub_tab(SubTab::Approach));
        entry.toggle_solution();
        entry.toggle_solution();

        assert_eq!(entry.active_sub_tab(), SubTab::Approach);
        assert!(matches!(entry.body(), EntryBody::Approach(_)));
    }

    #[test]
    fn test_no_sub_tabs_without_approach() {
        let mut entry = TopicEntry::new(descriptor(false));
        entry.toggle_solution();

        assert!(!entry.shows_sub_tabs());
        assert!(!entry.select_sub_tab(SubTab::Approach));
        assert!(!entry.toggle_sub_tab());
        assert_eq!(entry.active_sub_tab(), SubTab::Solution);
        match entry.body() {
            EntryBody::Code {
                presenter,
                explanation,
                sub_tabs,
            } => {
                assert!(!sub_tabs);
                assert_eq!(presenter.displayed_content(), "cpp");
                assert_eq!(explanation, "Flip links");
            }
            other => panic!("expected code body, got {:?}", other),
        }
    }

    #[test]
    fn test_code_presenter_remounts_fresh() {
        let mut entry = TopicEntry::new(descriptor(true));
        entry.toggle_solution();
        entry.code_mut().unwrap().select_variant("Python");
        assert_eq!(entry.code().unwrap().active_label(), "Python");

        // Switching to the approach unmounts the code view.
        entry.select_sub_tab(SubTab::Approach);
        assert!(entry.code().is_none());

        entry.select_sub_tab(SubTab::Solution);
        assert_eq!(entry.code().unwrap().active_label(), "C++");

        entry.code_mut().unwrap().select_variant("Python");
        entry.toggle_solution();
        assert!(entry.code().is_none());
        entry.toggle_solution();
        assert_eq!(entry.code().unwrap().active_label(), "C++");
    }

    #[test]
    fn test_sub_tab_selection_while_hidden_is_remembered() {
        let mut entry = TopicEntry::new(descriptor(true));
        entry.select_sub_tab(SubTab::Approach);
        assert!(entry.code().is_none());

        entry.toggle_solution();
        assert!(entry.shows_sub_tabs());
        assert!(matches!(entry.body(), EntryBody::Approach(_)));
    }
}
