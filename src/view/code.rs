//! Code variant switcher state.

use crate::content::{Variant, VariantSet};

/// Shows one variant of a [`VariantSet`] at a time.
///
/// Owns its selection; dropping the presenter forgets it.
#[derive(Debug, Clone)]
pub struct CodePresenter {
    variants: VariantSet,
    active: usize,
}

impl CodePresenter {
    /// Mount on `variants`, starting at `default_label` if it names a variant
    /// and at the first variant otherwise.
    pub fn new(variants: VariantSet, default_label: Option<&str>) -> Self {
        let active = default_label
            .and_then(|label| variants.position(label))
            .unwrap_or(0);
        Self { variants, active }
    }

    pub fn variants(&self) -> &VariantSet {
        &self.variants
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_variant(&self) -> &Variant {
        self.variants.get(self.active).unwrap_or_else(|| self.variants.first())
    }

    pub fn active_label(&self) -> &str {
        &self.active_variant().label
    }

    /// Text of the active variant, exactly as authored.
    pub fn displayed_content(&self) -> &str {
        &self.active_variant().content
    }

    /// Make `label` the active variant. Unknown labels leave the selection as is.
    ///
    /// Returns whether `label` was found.
    pub fn select_variant(&mut self, label: &str) -> bool {
        match self.variants.position(label) {
            Some(index) => {
                self.active = index;
                true
            }
            None => false,
        }
    }

    /// Cycle forward through the selector, wrapping at the end.
    pub fn next_variant(&mut self) {
        self.active = (self.active + 1) % self.variants.len();
    }

    /// Cycle backward through the selector, wrapping at the start.
    pub fn prev_variant(&mut self) {
        self.active = (self.active + self.variants.len() - 1) % self.variants.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_beta() -> VariantSet {
        VariantSet::from_pairs([("Alpha", "code-A"), ("Beta", "code-B")]).unwrap()
    }

    #[test]
    fn test_defaults_to_first_variant() {
        let presenter = CodePresenter::new(alpha_beta(), None);
        assert_eq!(presenter.active_label(), "Alpha");
        assert_eq!(presenter.displayed_content(), "code-A");
    }

    #[test]
    fn test_explicit_default() {
        let presenter = CodePresenter::new(alpha_beta(), Some("Beta"));
        assert_eq!(presenter.displayed_content(), "code-B");

        let presenter = CodePresenter::new(alpha_beta(), Some("Gamma"));
        assert_eq!(presenter.displayed_content(), "code-A");
    }

    #[test]
    fn test_select_switches_and_ignores_unknown() {
        let mut presenter = CodePresenter::new(alpha_beta(), None);

        assert!(presenter.select_variant("Beta"));
        assert_eq!(presenter.displayed_content(), "code-B");

        assert!(!presenter.select_variant("Gamma"));
        assert_eq!(presenter.displayed_content(), "code-B");
        assert_eq!(presenter.active_label(), "Beta");
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut presenter = CodePresenter::new(alpha_beta(), None);
        presenter.select_variant("Beta");
        let first = presenter.displayed_content().to_string();
        presenter.select_variant("Beta");
        assert_eq!(presenter.active_label(), "Beta");
        assert_eq!(presenter.displayed_content(), first);
    }

    #[test]
    fn test_content_is_verbatim() {
        let code = "fn main() {\n\tlet x = 1;  \n\n}\n";
        let set = VariantSet::from_pairs([("Rust", code)]).unwrap();
        let presenter = CodePresenter::new(set, None);
        assert_eq!(presenter.displayed_content(), code);
    }

    #[test]
    fn test_cycling_wraps() {
        let set = VariantSet::from_pairs([("A", "a"), ("B", "b"), ("C", "c")]).unwrap();
        let mut presenter = CodePresenter::new(set, None);

        presenter.prev_variant();
        assert_eq!(presenter.active_label(), "C");
        presenter.next_variant();
        assert_eq!(presenter.active_label(), "A");
        presenter.next_variant();
        assert_eq!(presenter.active_label(), "B");
    }
}
