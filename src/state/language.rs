//! Language picker input state.
//!
//! Holds the highlighted language and the type-to-filter buffer. Nothing here
//! is committed until the user confirms the highlighted entry.

use crate::catalog::LANGUAGES;
use crate::state::onboarding::DEFAULT_LANGUAGE;
use crate::ui_utils::auto_scroll;

/// Rows visible in the language list before it scrolls.
pub const WINDOW_SIZE: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct LanguagePickerState {
    /// Index into the filtered list.
    pub selected_index: usize,
    /// Scroll offset for the filtered list.
    pub scroll: usize,
    /// Case-insensitive substring filter.
    pub filter: String,
}

impl LanguagePickerState {
    /// Creates a picker highlighting `initial`, or the default language if
    /// `initial` is not offered.
    pub fn new(initial: &str) -> Self {
        let selected_index = LANGUAGES
            .iter()
            .position(|l| *l == initial)
            .or_else(|| LANGUAGES.iter().position(|l| *l == DEFAULT_LANGUAGE))
            .unwrap_or(0);
        let mut state = Self {
            selected_index,
            scroll: 0,
            filter: String::new(),
        };
        auto_scroll(state.selected_index, &mut state.scroll, WINDOW_SIZE);
        state
    }

    /// Languages matching the current filter, in catalog order.
    pub fn visible(&self) -> Vec<&'static str> {
        if self.filter.is_empty() {
            return LANGUAGES.to_vec();
        }
        let needle = self.filter.to_lowercase();
        LANGUAGES
            .iter()
            .copied()
            .filter(|l| l.to_lowercase().contains(&needle))
            .collect()
    }

    /// The language Enter would confirm, if any row is visible.
    pub fn highlighted(&self) -> Option<&'static str> {
        self.visible().get(self.selected_index).copied()
    }

    pub fn navigate_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            auto_scroll(self.selected_index, &mut self.scroll, WINDOW_SIZE);
            true
        } else {
            false
        }
    }

    pub fn navigate_down(&mut self) -> bool {
        let max_index = self.visible().len().saturating_sub(1);
        if self.selected_index < max_index {
            self.selected_index += 1;
            auto_scroll(self.selected_index, &mut self.scroll, WINDOW_SIZE);
            true
        } else {
            false
        }
    }

    pub fn push_filter_char(&mut self, c: char) {
        let keep = self.highlighted();
        self.filter.push(c);
        self.reselect(keep);
    }

    /// Returns `true` if a character was removed.
    pub fn pop_filter_char(&mut self) -> bool {
        let keep = self.highlighted();
        let popped = self.filter.pop().is_some();
        self.reselect(keep);
        popped
    }

    /// Keeps `keep` highlighted if the new filter still shows it.
    fn reselect(&mut self, keep: Option<&'static str>) {
        let visible = self.visible();
        self.selected_index = keep
            .and_then(|k| visible.iter().position(|l| *l == k))
            .unwrap_or(0);
        self.scroll = 0;
        auto_scroll(self.selected_index, &mut self.scroll, WINDOW_SIZE);
    }
}
