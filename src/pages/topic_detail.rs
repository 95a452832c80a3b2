use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::catalog::TOPIC_SECTIONS;
use crate::state::TopicDetailState;

/// A topic page: its section list, or the placeholder body of one section.
#[derive(Debug, Default)]
pub struct TopicDetailPage;

impl TopicDetailPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, detail: &TopicDetailState) {
        let block = Block::bordered().title(Line::from(detail.topic).bold().cyan());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if let Some(section) = detail.opened_section() {
            let body = vec![
                Line::from(section).bold(),
                Line::from(""),
                Line::from(format!("{section} content")),
                Line::from(""),
                Line::from("Esc: Back to sections").dark_gray(),
            ];
            frame.render_widget(Paragraph::new(body).wrap(Wrap { trim: true }), inner);
            return;
        }

        let rows = Layout::new(
            Direction::Vertical,
            [Constraint::Length(TOPIC_SECTIONS.len() as u16), Constraint::Min(0)],
        )
        .split(inner);

        let items: Vec<ListItem> = TOPIC_SECTIONS.iter().map(|s| ListItem::new(*s)).collect();
        let mut state = ListState::default().with_selected(Some(detail.selected));
        frame.render_stateful_widget(
            List::new(items)
                .highlight_style(Style::new().reversed())
                .highlight_symbol("> "),
            rows[0],
            &mut state,
        );
        frame.render_widget(
            Paragraph::new(Line::from("Enter: Open   Esc: Back to home").dark_gray()),
            rows[1],
        );
    }
}
