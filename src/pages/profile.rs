use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::catalog::QUESTIONS;
use crate::state::{ProfileField, ProfileFormState};
use crate::ui_utils::focused_block;

#[derive(Debug, Default)]
pub struct ProfilePage;

impl ProfilePage {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, form: &ProfileFormState) {
        let rows = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(5),
                Constraint::Min(0),
                Constraint::Length(3),
            ],
        )
        .split(area);

        self.render_about_you(frame, rows[0], form);
        self.render_preferences(frame, rows[1], form);

        let can_continue = form.draft.can_advance();
        let next_style = match (can_continue, form.focus == ProfileField::Next) {
            (true, true) => Style::new().white().on_blue().bold(),
            (true, false) => Style::new().blue().bold(),
            (false, _) => Style::new().dark_gray(),
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled("  Next  ", next_style)).centered())
                .block(focused_block("", form.focus == ProfileField::Next)),
            rows[2],
        );
    }

    fn render_about_you(&self, frame: &mut Frame, area: Rect, form: &ProfileFormState) {
        let name = if form.draft.name.is_empty() {
            Span::raw("Your name").dark_gray()
        } else {
            Span::raw(form.draft.name.clone())
        };
        let lines = vec![
            field_line(
                "Name",
                vec![name, cursor(form.focus == ProfileField::Name)],
                form.focus == ProfileField::Name,
            ),
            field_line(
                "Time spent in the U.S.",
                picker(form.draft.years_in_us.label()),
                form.focus == ProfileField::YearsInUs,
            ),
            field_line(
                "Current State",
                picker(form.draft.state.name()),
                form.focus == ProfileField::State,
            ),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(Block::bordered().title("About You")),
            area,
        );
    }

    fn render_preferences(&self, frame: &mut Frame, area: Rect, form: &ProfileFormState) {
        let mut lines = Vec::new();
        for (i, question) in QUESTIONS.iter().enumerate() {
            let focused = form.focus == ProfileField::Question(i);
            let header = Span::raw(question.text).bold();
            lines.push(if focused {
                Line::from(vec![Span::raw("» ").yellow(), header.yellow()])
            } else {
                Line::from(vec![Span::raw("  "), header])
            });

            let answer = form.answer(i);
            let options: Vec<Span> = question
                .options
                .iter()
                .flat_map(|opt| {
                    let chosen = answer == Some(*opt);
                    let label = if chosen {
                        Span::raw(format!("✓ {opt}")).green().bold()
                    } else {
                        Span::raw(format!("  {opt}"))
                    };
                    [label, Span::raw("   ")]
                })
                .collect();
            let mut option_line = vec![Span::raw("    ")];
            option_line.extend(options);
            lines.push(Line::from(option_line));
            lines.push(Line::from(""));
        }
        frame.render_widget(
            Paragraph::new(lines).block(Block::bordered().title("Your Preferences")),
            area,
        );
    }
}

fn field_line<'a>(label: &'a str, value: Vec<Span<'a>>, focused: bool) -> Line<'a> {
    let mut spans = vec![if focused {
        Span::raw(format!("» {label}: ")).yellow()
    } else {
        Span::raw(format!("  {label}: "))
    }];
    spans.extend(value);
    Line::from(spans)
}

fn picker(value: &str) -> Vec<Span<'_>> {
    vec![
        Span::raw("‹ ").dark_gray(),
        Span::raw(value).bold(),
        Span::raw(" ›").dark_gray(),
    ]
}

fn cursor(focused: bool) -> Span<'static> {
    if focused {
        Span::raw("▏").yellow()
    } else {
        Span::raw("")
    }
}
