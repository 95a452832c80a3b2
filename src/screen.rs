use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::Line,
    widgets::{Block, Clear},
    Frame,
};

use crate::pages::{HelpPage, HomePage, LanguageSelectPage, PersonalizationPage, ProfilePage};
use crate::render_context::RenderContext;
use crate::state::{ProfileStep, Screen};

/// Draws the frame chrome and whichever page the onboarding state resolves to.
#[derive(Debug, Default)]
pub struct ScreenRenderer {
    language: LanguageSelectPage,
    profile: ProfilePage,
    personalization: PersonalizationPage,
    home: HomePage,
    help: HelpPage,
}

impl ScreenRenderer {
    pub fn new() -> Self {
        Self {
            language: LanguageSelectPage::new(),
            profile: ProfilePage::new(),
            personalization: PersonalizationPage::new(),
            home: HomePage::new(),
            help: HelpPage::new(),
        }
    }

    pub fn render(&self, frame: &mut Frame, ctx: &RenderContext) {
        let area = frame.area();
        let screen = ctx.onboarding.resolve_screen();
        let title = Line::from(format!(
            "Bridgit - Step {} of 3: {}",
            screen.step(),
            screen.title()
        ))
        .bold()
        .blue()
        .left_aligned();
        let block = Block::bordered().title(title);
        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        // Split into main content and bottom status bar
        let vlayout = Layout::new(
            Direction::Vertical,
            [Constraint::Min(0), Constraint::Length(1)],
        )
        .split(inner_area);

        self.render_page(frame, vlayout[0], screen, ctx);

        let status_line = Line::from(format!("{}  |  {}", ctx.status, hints(screen, ctx)))
            .on_dark_gray()
            .white();
        frame.render_widget(status_line, vlayout[1]);

        if ctx.show_help {
            let overlay = centered(area, 70, 24);
            frame.render_widget(Clear, overlay);
            self.help.render(frame, overlay, screen);
        }
    }

    fn render_page(&self, frame: &mut Frame, area: Rect, screen: Screen, ctx: &RenderContext) {
        match screen {
            Screen::LanguageSelect => {
                if let Some(picker) = ctx.language {
                    self.language.render(frame, area, picker, ctx.onboarding);
                }
            }
            Screen::ProfileAndPreferences => match (ctx.profile, ctx.personalization) {
                (Some(form), Some(cursor)) if form.step == ProfileStep::Personalization => {
                    self.personalization.render(frame, area, cursor, ctx.onboarding)
                }
                (Some(form), _) => self.profile.render(frame, area, form),
                _ => {}
            },
            Screen::Home => {
                if let Some(home) = ctx.home {
                    self.home.render(frame, area, home, ctx.onboarding);
                }
            }
        }
    }
}

fn hints(screen: Screen, ctx: &RenderContext) -> &'static str {
    match screen {
        Screen::LanguageSelect => "↑↓: Move  Enter: Continue  F1: Help  Ctrl+C: Quit",
        Screen::ProfileAndPreferences => match ctx.profile.map(|p| p.step) {
            Some(ProfileStep::Personalization) => "↑↓: Move  Space: Toggle  F1: Help  Ctrl+C: Quit",
            _ => "Tab: Next field  ←→: Change  Enter: Choose/Next  F1: Help  Ctrl+C: Quit",
        },
        // '?' is search text while the search box is open
        Screen::Home if ctx.home.is_some_and(|h| h.search_active) => {
            "Enter: Open  type: Search  Esc: Close search  F1: Help  Ctrl+C: Quit"
        }
        Screen::Home => "Enter: Open  /: Search  a: Account  Esc: Back  ?: Help  Ctrl+C: Quit",
    }
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::state::{
        HomeState, LanguagePickerState, OnboardingState, PersonalizationState, ProfileFormState,
    };

    fn screen_text(ctx: &RenderContext) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 36)).unwrap();
        let renderer = ScreenRenderer::new();
        terminal.draw(|frame| renderer.render(frame, ctx)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_first_launch_shows_language_step() {
        let onboarding = OnboardingState::new();
        let picker = LanguagePickerState::new(onboarding.selected_language());
        let ctx = RenderContext::new(&onboarding, "Ready").with_language(&picker);
        let text = screen_text(&ctx);
        assert!(text.contains("Step 1 of 3: Choose Language"));
        assert!(text.contains("Ready"));
    }

    #[test]
    fn test_profile_step_switches_to_personalization() {
        let mut onboarding = OnboardingState::new();
        onboarding.confirm_language("English");
        let mut form = ProfileFormState::new();
        let cursor = PersonalizationState::new();

        let ctx = RenderContext::new(&onboarding, "").with_profile(&form, &cursor);
        assert!(screen_text(&ctx).contains("About You"));

        form.step = ProfileStep::Personalization;
        let ctx = RenderContext::new(&onboarding, "").with_profile(&form, &cursor);
        let text = screen_text(&ctx);
        assert!(text.contains("Step 2 of 3"));
        assert!(text.contains("0/3 selected"));
    }

    #[test]
    fn test_help_overlay() {
        let onboarding = OnboardingState::new();
        let picker = LanguagePickerState::new(onboarding.selected_language());
        let ctx = RenderContext::new(&onboarding, "")
            .with_language(&picker)
            .with_help(true);
        assert!(screen_text(&ctx).contains("Continue in the highlighted language"));
    }

    #[test]
    fn test_home_hint_while_searching() {
        let mut onboarding = OnboardingState::new();
        onboarding.confirm_language("English");
        onboarding.commit_profile(crate::state::Profile {
            name: "Ana".into(),
            ..Default::default()
        });
        onboarding.toggle_category("Banking");
        onboarding.confirm_personalization();

        let mut home = HomeState::new();
        let ctx = RenderContext::new(&onboarding, "").with_home(&home);
        assert!(screen_text(&ctx).contains("?: Help"));

        home.toggle_search();
        let ctx = RenderContext::new(&onboarding, "").with_home(&home);
        let text = screen_text(&ctx);
        assert!(text.contains("F1: Help"));
        assert!(!text.contains("?: Help"));
    }

    #[test]
    fn test_centered_clamps() {
        let area = Rect::new(0, 0, 40, 10);
        assert_eq!(centered(area, 70, 24), area);
        assert_eq!(centered(area, 20, 4), Rect::new(10, 3, 20, 4));
    }
}
