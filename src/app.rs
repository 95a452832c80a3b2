use color_eyre::eyre::WrapErr;
use log::{debug, info, warn};
use ratatui::{DefaultTerminal, Frame};

use crate::catalog::{LANGUAGES, TOPIC_SECTIONS};
use crate::config::Cli;
use crate::key_handler::{KeyAction, KeyHandler};
use crate::render_context::RenderContext;
use crate::screen::ScreenRenderer;
use crate::state::{
    CategoryToggle, HomeState, LanguagePickerState, OnboardingState, PersonalizationRow,
    PersonalizationState, ProfileField, ProfileFormState, ProfileStep, Screen, DEFAULT_LANGUAGE,
    MAX_CATEGORIES,
};
use crate::ui_utils::{blocked, info as info_status, success, GridMove};

pub struct App {
    running: bool,
    screen: ScreenRenderer,
    key_handler: KeyHandler,
    onboarding: OnboardingState,
    // Per-screen input
    language: LanguagePickerState,
    profile: ProfileFormState,
    personalization: PersonalizationState,
    home: HomeState,
    status_message: String,
    show_help: bool,
}

impl App {
    pub fn new(cli: &Cli) -> Self {
        let onboarding = OnboardingState::new();
        let initial = match cli.language.as_deref() {
            Some(name) if LANGUAGES.contains(&name) => name,
            Some(name) => {
                warn!("unknown language {name:?}, highlighting {DEFAULT_LANGUAGE} instead");
                DEFAULT_LANGUAGE
            }
            None => onboarding.selected_language(),
        };
        let language = LanguagePickerState::new(initial);

        Self {
            running: false,
            screen: ScreenRenderer::new(),
            key_handler: KeyHandler::new(),
            onboarding,
            language,
            profile: ProfileFormState::new(),
            personalization: PersonalizationState::new(),
            home: HomeState::new(),
            status_message: info_status("Ready | Press F1 for help"),
            show_help: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        self.running = true;
        while self.running {
            terminal
                .draw(|frame| self.render(frame))
                .wrap_err("failed to draw frame")?;
            let action = self.key_handler.handle_crossterm_events()?;
            if self.handle_action(action) {
                self.quit();
            }
        }
        Ok(())
    }

    pub fn onboarding(&self) -> &OnboardingState {
        &self.onboarding
    }

    pub fn status(&self) -> &str {
        &self.status_message
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn language_picker(&self) -> &LanguagePickerState {
        &self.language
    }

    pub fn profile_form(&self) -> &ProfileFormState {
        &self.profile
    }

    pub fn home(&self) -> &HomeState {
        &self.home
    }

    /// Committed session as pretty-printed JSON.
    pub fn summary_json(&self) -> color_eyre::Result<String> {
        serde_json::to_string_pretty(&self.onboarding).wrap_err("failed to serialize session")
    }

    fn render(&self, frame: &mut Frame) {
        let ctx = RenderContext::new(&self.onboarding, &self.status_message)
            .with_help(self.show_help);
        let ctx = match self.onboarding.resolve_screen() {
            Screen::LanguageSelect => ctx.with_language(&self.language),
            Screen::ProfileAndPreferences => ctx.with_profile(&self.profile, &self.personalization),
            Screen::Home => ctx.with_home(&self.home),
        };
        self.screen.render(frame, &ctx);
    }

    /// Applies one key action. Returns `true` when the app should quit.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        if action == KeyAction::Quit {
            return true;
        }

        if self.show_help {
            if matches!(action, KeyAction::Help | KeyAction::Back | KeyAction::InputChar('?')) {
                self.show_help = false;
            }
            return false;
        }
        if action == KeyAction::Help
            || (action == KeyAction::InputChar('?') && !self.text_entry_active())
        {
            self.show_help = true;
            return false;
        }

        let before = self.onboarding.resolve_screen();
        match before {
            Screen::LanguageSelect => self.handle_language(action),
            Screen::ProfileAndPreferences => match self.profile.step {
                ProfileStep::Questions => self.handle_profile(action),
                ProfileStep::Personalization => self.handle_personalization(action),
            },
            Screen::Home => self.handle_home(action),
        }

        let after = self.onboarding.resolve_screen();
        if before != after {
            info!("screen changed: {before:?} -> {after:?}");
        }
        false
    }

    /// Whether plain characters are currently typed into a field.
    fn text_entry_active(&self) -> bool {
        match self.onboarding.resolve_screen() {
            Screen::LanguageSelect => true,
            Screen::ProfileAndPreferences => {
                self.profile.step == ProfileStep::Questions && self.profile.focus.accepts_text()
            }
            Screen::Home => {
                self.home.search_active && self.home.detail.is_none() && self.home.sidebar.is_none()
            }
        }
    }

    fn handle_language(&mut self, action: KeyAction) {
        match action {
            KeyAction::NavigateUp => {
                self.language.navigate_up();
            }
            KeyAction::NavigateDown => {
                self.language.navigate_down();
            }
            KeyAction::InputChar(c) => self.language.push_filter_char(c),
            KeyAction::Backspace => {
                self.language.pop_filter_char();
            }
            KeyAction::Back => {
                while self.language.pop_filter_char() {}
            }
            KeyAction::Select => match self.language.highlighted() {
                Some(language) => {
                    self.onboarding.confirm_language(language);
                    self.language = LanguagePickerState::new(language);
                    self.status_message = success(&format!("Language set to {language}"));
                }
                None => self.status_message = blocked("No language matches the filter"),
            },
            _ => {}
        }
    }

    fn handle_profile(&mut self, action: KeyAction) {
        match action {
            KeyAction::NextField | KeyAction::NavigateDown => self.profile.focus_next(),
            KeyAction::PrevField | KeyAction::NavigateUp => self.profile.focus_prev(),
            KeyAction::NavigateLeft => self.profile.cycle_prev(),
            KeyAction::NavigateRight => self.profile.cycle_next(),
            KeyAction::InputChar(c) => {
                if !self.profile.push_char(c) && c == ' ' {
                    self.profile.cycle_next();
                }
            }
            KeyAction::Backspace => {
                self.profile.backspace();
            }
            KeyAction::Select => match self.profile.focus {
                ProfileField::Name | ProfileField::Next => self.commit_profile(),
                ProfileField::Question(_) => self.profile.cycle_next(),
                ProfileField::YearsInUs | ProfileField::State => self.profile.focus_next(),
            },
            KeyAction::Back => {
                self.status_message = info_status("Language is already chosen for this session");
            }
            _ => {}
        }
    }

    fn commit_profile(&mut self) {
        match self.profile.take_for_commit() {
            Some(profile) => {
                self.onboarding.commit_profile(profile);
                self.status_message = success("Profile saved");
            }
            None => self.status_message = blocked("Enter your name to continue"),
        }
    }

    fn handle_personalization(&mut self, action: KeyAction) {
        match action {
            KeyAction::NavigateUp | KeyAction::PrevField => {
                self.personalization.navigate_up();
            }
            KeyAction::NavigateDown | KeyAction::NextField => {
                self.personalization.navigate_down();
            }
            KeyAction::Select | KeyAction::InputChar(' ') => {
                match self.personalization.current_row() {
                    PersonalizationRow::Category(category) => self.toggle_category(category),
                    PersonalizationRow::Continue => self.finish_onboarding(),
                }
            }
            _ => {}
        }
    }

    fn toggle_category(&mut self, category: &'static str) {
        self.status_message = match self.onboarding.toggle_category(category) {
            CategoryToggle::Added => success(&format!("Added {category}")),
            CategoryToggle::Removed => info_status(&format!("Removed {category}")),
            CategoryToggle::Ignored => {
                blocked(&format!("You can choose up to {MAX_CATEGORIES} categories"))
            }
        };
    }

    fn finish_onboarding(&mut self) {
        if !self.onboarding.can_confirm_personalization() {
            self.status_message = blocked("Choose at least one category");
            return;
        }
        self.onboarding.confirm_personalization();
        self.profile = ProfileFormState::new();
        self.personalization = PersonalizationState::new();
        self.home = HomeState::new();
        self.status_message = success(&format!("Welcome, {}", self.onboarding.profile().name));
    }

    fn handle_home(&mut self, action: KeyAction) {
        if let Some(detail) = self.home.detail.as_mut() {
            match action {
                KeyAction::NavigateUp if detail.opened.is_none() => {
                    detail.selected = detail.selected.saturating_sub(1);
                }
                KeyAction::NavigateDown if detail.opened.is_none() => {
                    detail.selected = (detail.selected + 1).min(TOPIC_SECTIONS.len() - 1);
                }
                KeyAction::Select if detail.opened.is_none() => {
                    detail.opened = Some(detail.selected);
                    debug!("opened {} / {}", detail.topic, TOPIC_SECTIONS[detail.selected]);
                }
                KeyAction::Back => {
                    self.home.back();
                }
                _ => {}
            }
            return;
        }

        if let Some(sidebar) = self.home.sidebar.as_mut() {
            match action {
                KeyAction::NavigateUp => sidebar.navigate_up(),
                KeyAction::NavigateDown => sidebar.navigate_down(),
                KeyAction::Select => sidebar.opened = Some(sidebar.selected),
                KeyAction::InputChar('a') => self.home.toggle_sidebar(),
                KeyAction::Back => {
                    self.home.back();
                }
                _ => {}
            }
            return;
        }

        match action {
            KeyAction::NavigateUp => self.home.navigate(GridMove::Up),
            KeyAction::NavigateDown => self.home.navigate(GridMove::Down),
            KeyAction::NavigateLeft => self.home.navigate(GridMove::Left),
            KeyAction::NavigateRight => self.home.navigate(GridMove::Right),
            KeyAction::Search | KeyAction::InputChar('/') if !self.home.search_active => {
                self.home.toggle_search();
            }
            KeyAction::Search => self.home.toggle_search(),
            KeyAction::InputChar(c) if self.home.search_active => self.home.push_search_char(c),
            KeyAction::Backspace if self.home.search_active => {
                self.home.pop_search_char();
            }
            KeyAction::InputChar('a') => self.home.toggle_sidebar(),
            KeyAction::Select => match self.home.open_selected() {
                Some(topic) => self.status_message = info_status(&format!("Opened {topic}")),
                None => self.status_message = blocked("No topic selected"),
            },
            KeyAction::Back => {
                if !self.home.back() {
                    self.status_message = info_status("Press Ctrl+C to quit");
                }
            }
            _ => {}
        }
    }

    fn quit(&mut self) {
        self.running = false;
    }
}
