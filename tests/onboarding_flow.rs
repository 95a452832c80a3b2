use bridgit::catalog::CATEGORIES;
use bridgit::{App, CategoryToggle, Cli, KeyAction, OnboardingState, Profile, Screen};

fn with_name(name: &str) -> Profile {
    Profile {
        name: name.to_string(),
        ..Profile::default()
    }
}

fn selected(state: &OnboardingState) -> Vec<&'static str> {
    state.selected_categories().collect()
}

#[test]
fn fresh_session_starts_at_language_select() {
    let state = OnboardingState::new();
    assert_eq!(state.resolve_screen(), Screen::LanguageSelect);
    assert_eq!(state.selected_language(), "English");
    assert!(state.profile().name.is_empty());
    assert_eq!(state.category_count(), 0);
}

#[test]
fn confirming_spanish_moves_to_profile() {
    let mut state = OnboardingState::new();
    state.confirm_language("Spanish");
    assert_eq!(state.resolve_screen(), Screen::ProfileAndPreferences);
    assert_eq!(state.selected_language(), "Spanish");
}

#[test]
fn language_gate_wins_over_other_fields() {
    let mut state = OnboardingState::new();
    state.toggle_category("Banking");
    assert!(state.can_confirm_personalization());
    assert_eq!(state.resolve_screen(), Screen::LanguageSelect);
}

#[test]
fn name_alone_gates_the_profile() {
    let mut profile = Profile::default();
    assert!(!profile.can_advance());
    assert!(profile.preference_answers.select(
        bridgit::catalog::QuestionId::TechComfort,
        "Advanced"
    ));
    assert!(!profile.can_advance());
    profile.name = "Ana".into();
    assert!(profile.can_advance());
}

#[test]
fn named_profile_without_categories_cannot_finish() {
    let mut state = OnboardingState::new();
    state.confirm_language("English");
    state.commit_profile(with_name("Ana"));
    assert!(state.can_advance_from_profile());
    assert!(!state.can_confirm_personalization());
}

#[test]
#[should_panic(expected = "no categories")]
fn confirming_personalization_without_categories_panics() {
    let mut state = OnboardingState::new();
    state.confirm_language("English");
    state.commit_profile(with_name("Ana"));
    state.confirm_personalization();
}

#[test]
fn category_cap_scenario() {
    let mut state = OnboardingState::new();
    state.confirm_language("English");
    state.toggle_category("Banking");
    state.toggle_category("Housing");

    assert_eq!(state.toggle_category("Taxes & money"), CategoryToggle::Added);
    assert_eq!(state.category_count(), 3);

    let before = selected(&state);
    assert_eq!(state.toggle_category("Communication"), CategoryToggle::Ignored);
    assert_eq!(selected(&state), before);
}

#[test]
fn double_toggle_restores_every_category() {
    for category in CATEGORIES {
        let mut state = OnboardingState::new();
        state.toggle_category("Housing");
        let before = selected(&state);
        state.toggle_category(category);
        state.toggle_category(category);
        assert_eq!(selected(&state), before, "{category}");
    }
}

#[test]
fn completed_onboarding_resolves_home() {
    let mut state = OnboardingState::new();
    state.confirm_language("Spanish");
    state.commit_profile(with_name("Ana"));
    state.toggle_category("Banking");
    state.confirm_personalization();
    assert_eq!(state.resolve_screen(), Screen::Home);
}

#[test]
fn keyboard_walkthrough_reaches_home() {
    let mut app = App::new(&Cli::default());
    let script = [
        KeyAction::InputChar('s'),
        KeyAction::InputChar('p'),
        KeyAction::Select,
        KeyAction::InputChar('A'),
        KeyAction::InputChar('n'),
        KeyAction::InputChar('a'),
        KeyAction::Select,
        KeyAction::Select,
    ];
    for action in script {
        assert!(!app.handle_action(action));
    }
    assert_eq!(app.onboarding().selected_language(), "Spanish");
    assert_eq!(app.onboarding().profile().name, "Ana");
    assert_eq!(app.onboarding().category_count(), 1);

    for _ in 0..CATEGORIES.len() {
        app.handle_action(KeyAction::NavigateDown);
    }
    app.handle_action(KeyAction::Select);
    assert_eq!(app.onboarding().resolve_screen(), Screen::Home);
    assert!(app.handle_action(KeyAction::Quit));
}
