use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::state::Screen;

#[derive(Debug)]
pub struct HelpPage;

impl Default for HelpPage {
    fn default() -> Self {
        Self::new()
    }
}

fn key_line(key: &'static str, description: &'static str, color: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{key:<12}"), color.bold()),
        Span::raw(description),
    ])
}

impl HelpPage {
    pub fn new() -> Self {
        Self
    }

    /// Lines specific to `screen`.
    pub fn screen_lines(screen: Screen) -> Vec<Line<'static>> {
        let yellow = Style::new().yellow();
        match screen {
            Screen::LanguageSelect => vec![
                key_line("type", "Filter the language list", yellow),
                key_line("Backspace", "Remove the last filter character", yellow),
                key_line("Enter", "Continue in the highlighted language", yellow),
            ],
            Screen::ProfileAndPreferences => vec![
                key_line("type", "Edit your name (Name field)", yellow),
                key_line("← →", "Change time in U.S., state or an answer", yellow),
                key_line("Backspace", "Clear the focused answer", yellow),
                key_line("Enter", "Pick an answer; on Name or Next, continue", yellow),
                key_line("Space", "Toggle a category (up to 3)", yellow),
            ],
            Screen::Home => vec![
                key_line("← → ↑ ↓", "Move around the topic grids", yellow),
                key_line("/ or Ctrl+F", "Search bridging topics", yellow),
                key_line("a", "Open or close the account sidebar", yellow),
                key_line("Enter", "Open a topic or section", yellow),
            ],
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, screen: Screen) {
        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Length(7), Constraint::Min(0)])
            .split(area);

        // Fill the overlay to avoid a transparent background bleeding through
        frame.render_widget(Block::default().style(Style::new().bg(Color::Black)), area);

        let cyan = Style::new().cyan();
        let nav_help = vec![
            key_line("↑ ↓", "Move between items", cyan),
            key_line("Tab", "Next field", cyan),
            key_line("Esc", "Go back / close", cyan),
            key_line("F1 / ?", "Toggle this help", cyan),
            key_line("Ctrl+C", "Quit", cyan),
        ];
        frame.render_widget(
            Paragraph::new(nav_help).block(Block::bordered().title("Navigation")),
            sections[0],
        );

        frame.render_widget(
            Paragraph::new(Self::screen_lines(screen))
                .block(Block::bordered().title(screen.title())),
            sections[1],
        );

        let tips = vec![
            Line::from("💡 Choices are kept only for this session"),
            Line::from("💡 Onboarding only moves forward; there is no going back a step"),
        ];
        frame.render_widget(
            Paragraph::new(tips).block(Block::bordered().title("Tips")),
            sections[2],
        );
    }
}
