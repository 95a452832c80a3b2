//! Personalization list cursor.
//!
//! Category membership itself is committed state; this only tracks which row
//! is highlighted.

use crate::catalog::CATEGORIES;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalizationRow {
    Category(&'static str),
    Continue,
}

#[derive(Debug, Clone, Default)]
pub struct PersonalizationState {
    /// Rows are the categories followed by the Continue control.
    pub selected_index: usize,
}

impl PersonalizationState {
    pub const ROW_COUNT: usize = CATEGORIES.len() + 1;

    pub fn new() -> Self {
        Self { selected_index: 0 }
    }

    pub fn navigate_up(&mut self) -> bool {
        if self.selected_index > 0 {
            self.selected_index -= 1;
            true
        } else {
            false
        }
    }

    pub fn navigate_down(&mut self) -> bool {
        if self.selected_index < Self::ROW_COUNT - 1 {
            self.selected_index += 1;
            true
        } else {
            false
        }
    }

    pub fn current_row(&self) -> PersonalizationRow {
        CATEGORIES
            .get(self.selected_index)
            .map(|c| PersonalizationRow::Category(*c))
            .unwrap_or(PersonalizationRow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows() {
        let mut state = PersonalizationState::new();
        assert_eq!(
            state.current_row(),
            PersonalizationRow::Category("Medical documents")
        );
        assert!(!state.navigate_up());

        while state.navigate_down() {}
        assert_eq!(state.selected_index, CATEGORIES.len());
        assert_eq!(state.current_row(), PersonalizationRow::Continue);

        state.navigate_up();
        assert_eq!(state.current_row(), PersonalizationRow::Category("Healthcare"));
    }
}
