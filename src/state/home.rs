//! Home page browsing state.
//!
//! Everything here is read-only navigation over the static topic catalog:
//! grid cursor, search filter, the account sidebar and topic detail pages.
//! None of it feeds back into the committed onboarding state.

use crate::catalog::{filter_topics, ACCOUNT_LINKS, BRIDGE_TOPICS, LEARN_TOPICS, TOPIC_SECTIONS};
use crate::ui_utils::{grid_step, GridMove, GRID_COLUMNS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeSection {
    #[default]
    Bridging,
    Learning,
}

/// A topic page and, optionally, one of its opened sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDetailState {
    pub topic: &'static str,
    pub selected: usize,
    pub opened: Option<usize>,
}

impl TopicDetailState {
    pub fn opened_section(&self) -> Option<&'static str> {
        self.opened.and_then(|i| TOPIC_SECTIONS.get(i).copied())
    }
}

/// Account sidebar list and the link opened from it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub selected: usize,
    pub opened: Option<usize>,
}

impl SidebarState {
    /// Moving the cursor closes any opened placeholder.
    pub fn navigate_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.opened = None;
    }

    pub fn navigate_down(&mut self) {
        self.selected = (self.selected + 1).min(ACCOUNT_LINKS.len() - 1);
        self.opened = None;
    }

    /// Placeholder text for the opened link.
    pub fn opened_placeholder(&self) -> Option<&'static str> {
        self.opened
            .and_then(|i| ACCOUNT_LINKS.get(i))
            .map(|(_, placeholder)| *placeholder)
    }
}

#[derive(Debug, Clone, Default)]
pub struct HomeState {
    pub section: HomeSection,
    /// Index within the visible topics of `section`.
    pub selected: usize,
    pub search_active: bool,
    pub search_buffer: String,
    pub sidebar: Option<SidebarState>,
    pub detail: Option<TopicDetailState>,
}

impl HomeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bridging topics after applying the search filter.
    pub fn visible_bridge_topics(&self) -> Vec<&'static str> {
        filter_topics(&BRIDGE_TOPICS, &self.search_buffer)
    }

    /// Learning topics are never filtered.
    pub fn visible_learn_topics(&self) -> Vec<&'static str> {
        LEARN_TOPICS.to_vec()
    }

    fn section_len(&self, section: HomeSection) -> usize {
        match section {
            HomeSection::Bridging => self.visible_bridge_topics().len(),
            HomeSection::Learning => LEARN_TOPICS.len(),
        }
    }

    pub fn selected_topic(&self) -> Option<&'static str> {
        match self.section {
            HomeSection::Bridging => self.visible_bridge_topics().get(self.selected).copied(),
            HomeSection::Learning => LEARN_TOPICS.get(self.selected).copied(),
        }
    }

    /// Moves the grid cursor, crossing between the two sections vertically.
    pub fn navigate(&mut self, mv: GridMove) {
        let len = self.section_len(self.section);
        if let Some(next) = grid_step(self.selected, len, GRID_COLUMNS, mv) {
            self.selected = next;
            return;
        }

        match (self.section, mv) {
            (HomeSection::Bridging, GridMove::Down) => {
                let column = self.selected % GRID_COLUMNS;
                self.section = HomeSection::Learning;
                self.selected = column.min(LEARN_TOPICS.len() - 1);
            }
            (HomeSection::Learning, GridMove::Up) => {
                let bridge_len = self.section_len(HomeSection::Bridging);
                if bridge_len > 0 {
                    let column = self.selected % GRID_COLUMNS;
                    let last_row = (bridge_len - 1) / GRID_COLUMNS * GRID_COLUMNS;
                    self.section = HomeSection::Bridging;
                    self.selected = (last_row + column).min(bridge_len - 1);
                }
            }
            _ => {}
        }
    }

    pub fn toggle_search(&mut self) {
        self.search_active = !self.search_active;
        if !self.search_active {
            self.search_buffer.clear();
        }
        self.reset_bridging_cursor();
    }

    pub fn push_search_char(&mut self, c: char) {
        self.search_buffer.push(c);
        self.reset_bridging_cursor();
    }

    pub fn pop_search_char(&mut self) -> bool {
        let popped = self.search_buffer.pop().is_some();
        self.reset_bridging_cursor();
        popped
    }

    fn reset_bridging_cursor(&mut self) {
        if self.section == HomeSection::Bridging {
            self.selected = 0;
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar = match self.sidebar {
            Some(_) => None,
            None => Some(SidebarState::default()),
        };
    }

    /// Opens the highlighted topic. Returns its name.
    pub fn open_selected(&mut self) -> Option<&'static str> {
        let topic = self.selected_topic()?;
        self.detail = Some(TopicDetailState {
            topic,
            selected: 0,
            opened: None,
        });
        Some(topic)
    }

    /// Closes the innermost open layer. Returns `false` if nothing was open.
    pub fn back(&mut self) -> bool {
        if let Some(detail) = self.detail.as_mut() {
            if detail.opened.take().is_none() {
                self.detail = None;
            }
            return true;
        }
        if let Some(sidebar) = self.sidebar.as_mut() {
            if sidebar.opened.take().is_none() {
                self.sidebar = None;
            }
            return true;
        }
        if self.search_active {
            self.toggle_search();
            return true;
        }
        false
    }
}
