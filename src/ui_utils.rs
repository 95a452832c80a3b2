use ratatui::{
    style::{Style, Stylize},
    widgets::{Block, ListState},
};

/// Topics per row in the home grids.
pub const GRID_COLUMNS: usize = 2;

/// Creates a ListState with proper bounds checking and scrolling
pub fn create_list_state(selected: usize, scroll: usize, item_count: usize) -> ListState {
    ListState::default()
        .with_selected(Some(selected.min(item_count.saturating_sub(1))))
        .with_offset(scroll)
}

/// Creates a block with conditional focus styling (yellow border when focused)
pub fn focused_block(title: &str, is_focused: bool) -> Block<'_> {
    let block = Block::bordered().title(title);
    if is_focused {
        block.border_style(Style::new().yellow())
    } else {
        block
    }
}

/// Auto-scrolls a view to keep the selected item visible
/// Call this after changing selected index to adjust scroll position
pub fn auto_scroll(selected: usize, scroll: &mut usize, window_size: usize) {
    if selected < *scroll {
        *scroll = selected;
    } else if selected >= *scroll + window_size {
        *scroll = selected.saturating_sub(window_size - 1);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMove {
    Up,
    Down,
    Left,
    Right,
}

/// Moves a cursor inside a row-major grid of `len` cells.
///
/// Returns `None` when the move would leave the grid.
pub fn grid_step(selected: usize, len: usize, columns: usize, mv: GridMove) -> Option<usize> {
    if len == 0 || columns == 0 {
        return None;
    }
    match mv {
        GridMove::Up => selected.checked_sub(columns),
        GridMove::Down => Some(selected + columns).filter(|&i| i < len),
        GridMove::Left => (selected % columns > 0).then(|| selected - 1),
        GridMove::Right => {
            (selected % columns + 1 < columns && selected + 1 < len).then(|| selected + 1)
        }
    }
}

/// Status line prefix for a completed commit
pub fn success(msg: &str) -> String {
    format!("✓ {}", msg)
}

/// Status line prefix for a refused control
pub fn blocked(msg: &str) -> String {
    format!("✗ {}", msg)
}

pub fn info(msg: &str) -> String {
    format!("ℹ {}", msg)
}
