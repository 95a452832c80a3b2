use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::catalog::ACCOUNT_LINKS;
use crate::state::{OnboardingState, SidebarState};

pub const SIDEBAR_WIDTH: u16 = 34;

/// Account panel drawn over the left edge of the home page.
#[derive(Debug, Default)]
pub struct SidebarPage;

impl SidebarPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        sidebar: &SidebarState,
        onboarding: &OnboardingState,
    ) {
        let area = Rect {
            width: area.width.min(SIDEBAR_WIDTH),
            ..area
        };
        frame.render_widget(Clear, area);

        let block = Block::bordered().title(Line::from("Account").bold().cyan());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(4),
                Constraint::Length(ACCOUNT_LINKS.len() as u16 + 1),
                Constraint::Min(0),
            ],
        )
        .split(inner);

        let profile = onboarding.profile();
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(vec![Span::raw("👤 "), Span::raw(profile.name.as_str()).bold()]),
                Line::from(format!("Language: {}", onboarding.selected_language())),
                Line::from(format!("State: {}", profile.state.name())),
            ]),
            rows[0],
        );

        let items: Vec<ListItem> = ACCOUNT_LINKS
            .iter()
            .map(|(label, _)| ListItem::new(*label))
            .collect();
        let mut state = ListState::default().with_selected(Some(sidebar.selected));
        frame.render_stateful_widget(
            List::new(items)
                .highlight_style(Style::new().reversed())
                .highlight_symbol("> "),
            rows[1],
            &mut state,
        );

        let footer = match sidebar.opened_placeholder() {
            Some(placeholder) => Line::from(placeholder).yellow().bold(),
            None => Line::from("Enter: Open   a/Esc: Close").dark_gray(),
        };
        frame.render_widget(Paragraph::new(footer), rows[2]);
    }
}
