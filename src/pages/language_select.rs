use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, List, ListItem, Paragraph},
    Frame,
};

use crate::catalog::LANGUAGES;
use crate::state::{LanguagePickerState, OnboardingState, WINDOW_SIZE};
use crate::ui_utils::create_list_state;

#[derive(Debug, Default)]
pub struct LanguageSelectPage;

impl LanguageSelectPage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        picker: &LanguagePickerState,
        onboarding: &OnboardingState,
    ) {
        let rows = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(3),
                Constraint::Length(2),
                Constraint::Length(3),
                Constraint::Length(WINDOW_SIZE as u16 + 2),
                Constraint::Min(0),
            ],
        )
        .split(area);

        frame.render_widget(
            Paragraph::new(vec![
                Line::from(""),
                Line::from("B R I D G I T").bold().cyan().centered(),
            ]),
            rows[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from("Please select your language:").centered()),
            rows[1],
        );

        let filter = if picker.filter.is_empty() {
            Line::from("Type to filter").gray()
        } else {
            Line::from(format!("> {}", picker.filter))
        };
        frame.render_widget(
            Paragraph::new(filter).block(Block::bordered().title("Filter")),
            rows[2],
        );

        let visible = picker.visible();
        let items: Vec<ListItem> = visible
            .iter()
            .map(|lang| {
                if *lang == onboarding.selected_language() {
                    ListItem::new(format!("{lang}  •"))
                } else {
                    ListItem::new(*lang)
                }
            })
            .collect();
        let title = format!("Languages ({}/{})", visible.len(), LANGUAGES.len());
        let mut state = create_list_state(picker.selected_index, picker.scroll, items.len());
        frame.render_stateful_widget(
            List::new(items)
                .block(Block::bordered().title(title))
                .highlight_style(Style::new().reversed())
                .highlight_symbol(">> ")
                .repeat_highlight_symbol(true),
            rows[3],
            &mut state,
        );

        let hint = match picker.highlighted() {
            Some(lang) => Line::from(format!("Enter: Continue in {lang}")).yellow(),
            None => Line::from("No language matches the filter").gray(),
        };
        frame.render_widget(Paragraph::new(hint.centered()), rows[4]);
    }
}
