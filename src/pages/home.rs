use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::pages::sidebar::SidebarPage;
use crate::pages::topic_detail::TopicDetailPage;
use crate::state::{HomeSection, HomeState, OnboardingState};
use crate::ui_utils::{focused_block, GRID_COLUMNS};

#[derive(Debug, Default)]
pub struct HomePage {
    detail: TopicDetailPage,
    sidebar: SidebarPage,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            detail: TopicDetailPage::new(),
            sidebar: SidebarPage::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, home: &HomeState, onboarding: &OnboardingState) {
        let search_height = if home.search_active { 3 } else { 0 };
        let rows = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1),
                Constraint::Length(search_height),
                Constraint::Min(0),
            ],
        )
        .split(area);

        let greeting = if onboarding.profile().name.is_empty() {
            "Welcome".to_string()
        } else {
            format!("Welcome, {}", onboarding.profile().name)
        };
        frame.render_widget(
            Line::from(vec![
                Span::raw("👤 ").cyan(),
                Span::raw(greeting).bold(),
                Span::raw("    a: Account   /: Search").dark_gray(),
            ]),
            rows[0],
        );

        if home.search_active {
            frame.render_widget(
                Paragraph::new(format!("🔍 {}▏", home.search_buffer))
                    .block(Block::bordered().title("Search topics")),
                rows[1],
            );
        }

        match &home.detail {
            Some(detail) => self.detail.render(frame, rows[2], detail),
            None => self.render_grids(frame, rows[2], home),
        }

        if let Some(sidebar) = &home.sidebar {
            self.sidebar.render(frame, area, sidebar, onboarding);
        }
    }

    fn render_grids(&self, frame: &mut Frame, area: Rect, home: &HomeState) {
        let halves = Layout::new(
            Direction::Vertical,
            [Constraint::Percentage(50), Constraint::Percentage(50)],
        )
        .split(area);

        let bridging = home.visible_bridge_topics();
        let learning = home.visible_learn_topics();
        let cursor = |section: HomeSection| (home.section == section).then_some(home.selected);

        render_grid(
            frame,
            halves[0],
            "What Are We Bridging Today?",
            &bridging,
            cursor(HomeSection::Bridging),
        );
        render_grid(
            frame,
            halves[1],
            "What Are We Learning Today?",
            &learning,
            cursor(HomeSection::Learning),
        );
    }
}

fn render_grid(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    topics: &[&'static str],
    selected: Option<usize>,
) {
    let block = focused_block(title, selected.is_some());
    if topics.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from("No topics match your search").dark_gray()).block(block),
            area,
        );
        return;
    }

    let rows: Vec<Row> = topics
        .chunks(GRID_COLUMNS)
        .enumerate()
        .map(|(row, chunk)| {
            let cells = chunk.iter().enumerate().map(|(col, topic)| {
                let index = row * GRID_COLUMNS + col;
                let style = if selected == Some(index) {
                    Style::new().black().on_cyan().bold()
                } else {
                    Style::new()
                };
                Cell::from(format!(" {topic}")).style(style)
            });
            Row::new(cells).height(1)
        })
        .collect();

    let widths = [Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS];
    frame.render_widget(Table::new(rows, widths).column_spacing(2).block(block), area);
}
