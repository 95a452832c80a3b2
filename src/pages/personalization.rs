use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::catalog::CATEGORIES;
use crate::state::{OnboardingState, PersonalizationState, MAX_CATEGORIES};

#[derive(Debug, Default)]
pub struct PersonalizationPage;

impl PersonalizationPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        cursor: &PersonalizationState,
        onboarding: &OnboardingState,
    ) {
        let rows = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(3),
                Constraint::Length(CATEGORIES.len() as u16 + 3),
                Constraint::Min(0),
            ],
        )
        .split(area);

        let count = onboarding.category_count();
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(format!(
                    "What would you like help with? Choose up to {MAX_CATEGORIES}."
                ))
                .bold(),
                Line::from("You can change these anytime.").dark_gray(),
                Line::from(format!("{count}/{MAX_CATEGORIES} selected")).cyan(),
            ]),
            rows[0],
        );

        let full = count >= MAX_CATEGORIES;
        let mut items: Vec<ListItem> = CATEGORIES
            .iter()
            .map(|category| {
                let selected = onboarding.is_category_selected(category);
                let (mark, style) = match (selected, full) {
                    (true, _) => ("[✓] ", Style::new().green().bold()),
                    // capped, so unselected rows can't be added
                    (false, true) => ("[ ] ", Style::new().dark_gray()),
                    (false, false) => ("[ ] ", Style::new()),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(mark, style),
                    Span::styled(*category, style),
                ]))
            })
            .collect();

        let continue_style = if onboarding.can_confirm_personalization() {
            Style::new().blue().bold()
        } else {
            Style::new().dark_gray()
        };
        items.push(ListItem::new(Line::from(Span::styled(
            "    Continue →",
            continue_style,
        ))));

        let mut state = ListState::default().with_selected(Some(cursor.selected_index));
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::bordered().title("Personalize"))
                .highlight_style(Style::new().reversed())
                .highlight_symbol("> "),
            rows[1],
            &mut state,
        );

        frame.render_widget(
            Paragraph::new(Line::from("Space/Enter: Toggle   ↑↓: Move").dark_gray().centered()),
            rows[2],
        );
    }
}
