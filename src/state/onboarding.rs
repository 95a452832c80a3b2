//! Committed onboarding session state.
//!
//! [`OnboardingState`] is the single source of truth for which top-level
//! screen is visible. Its fields are private: screens read them through
//! accessors and change them only through the commit operations below, each
//! of which corresponds to one explicit confirmation by the user.

use std::collections::{BTreeMap, BTreeSet};

use log::{debug, info, warn};
use serde::{Serialize, Serializer};
use uuid::Uuid;

use crate::catalog::{self, QuestionId, CATEGORIES, US_STATES};

/// Language stored before the user confirms one.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Upper bound on personalization categories held at once.
pub const MAX_CATEGORIES: usize = 3;

/// Top-level screen chosen by [`OnboardingState::resolve_screen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Screen {
    LanguageSelect,
    ProfileAndPreferences,
    Home,
}

impl Screen {
    pub fn title(self) -> &'static str {
        match self {
            Screen::LanguageSelect => "Choose Language",
            Screen::ProfileAndPreferences => "Profile & Preferences",
            Screen::Home => "Home",
        }
    }

    /// 1-based position in the onboarding flow.
    pub fn step(self) -> usize {
        match self {
            Screen::LanguageSelect => 1,
            Screen::ProfileAndPreferences => 2,
            Screen::Home => 3,
        }
    }
}

/// Time spent in the U.S.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum YearsInUs {
    #[default]
    #[serde(rename = "Less than 1")]
    LessThanOne,
    #[serde(rename = "3+")]
    ThreePlus,
    #[serde(rename = "10+")]
    TenPlus,
}

impl YearsInUs {
    pub const ALL: [YearsInUs; 3] = [
        YearsInUs::LessThanOne,
        YearsInUs::ThreePlus,
        YearsInUs::TenPlus,
    ];

    /// Short value stored in the profile.
    pub fn tag(self) -> &'static str {
        match self {
            YearsInUs::LessThanOne => "Less than 1",
            YearsInUs::ThreePlus => "3+",
            YearsInUs::TenPlus => "10+",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            YearsInUs::LessThanOne => "Less than 1 year",
            YearsInUs::ThreePlus => "3 years or more",
            YearsInUs::TenPlus => "10 years or more",
        }
    }

    pub fn next(self) -> Self {
        match self {
            YearsInUs::LessThanOne => YearsInUs::ThreePlus,
            YearsInUs::ThreePlus => YearsInUs::TenPlus,
            YearsInUs::TenPlus => YearsInUs::LessThanOne,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            YearsInUs::LessThanOne => YearsInUs::TenPlus,
            YearsInUs::ThreePlus => YearsInUs::LessThanOne,
            YearsInUs::TenPlus => YearsInUs::ThreePlus,
        }
    }
}

/// One of the 50 U.S. states, always a valid index into [`US_STATES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UsState(usize);

impl UsState {
    pub fn from_name(name: &str) -> Option<Self> {
        US_STATES.iter().position(|s| *s == name).map(UsState)
    }

    pub fn name(self) -> &'static str {
        US_STATES[self.0]
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub fn next(self) -> Self {
        UsState((self.0 + 1) % US_STATES.len())
    }

    pub fn prev(self) -> Self {
        UsState((self.0 + US_STATES.len() - 1) % US_STATES.len())
    }
}

impl Serialize for UsState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Answers to the preference questions.
///
/// Holds at most one option per question, and only options that question
/// actually offers. Unanswered questions are simply absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreferenceAnswers(BTreeMap<QuestionId, usize>);

impl PreferenceAnswers {
    /// Selects `option` for `id`, replacing any earlier answer.
    ///
    /// Returns `false` and leaves the answers untouched if the question does
    /// not offer `option`.
    pub fn select(&mut self, id: QuestionId, option: &str) -> bool {
        match catalog::question(id).option_index(option) {
            Some(index) => {
                self.0.insert(id, index);
                true
            }
            None => false,
        }
    }

    /// Index-based variant of [`select`](Self::select).
    pub fn select_index(&mut self, id: QuestionId, index: usize) -> bool {
        if index < catalog::question(id).options.len() {
            self.0.insert(id, index);
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self, id: QuestionId) {
        self.0.remove(&id);
    }

    pub fn get(&self, id: QuestionId) -> Option<&'static str> {
        self.0
            .get(&id)
            .map(|&index| catalog::question(id).options[index])
    }

    pub fn selected_index(&self, id: QuestionId) -> Option<usize> {
        self.0.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for PreferenceAnswers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.keys().filter_map(|&id| self.get(id).map(|a| (id, a))))
    }
}

/// "About you" answers plus preference answers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: String,
    pub years_in_us: YearsInUs,
    pub state: UsState,
    pub preference_answers: PreferenceAnswers,
}

impl Profile {
    /// Advancing past the profile form is gated on the name alone.
    pub fn can_advance(&self) -> bool {
        !self.name.is_empty()
    }
}

/// Outcome of [`OnboardingState::toggle_category`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryToggle {
    Added,
    Removed,
    /// The set was already full, or the category is not in the catalog.
    Ignored,
}

/// Session-wide onboarding state. Created once with defaults and discarded
/// when the process exits.
#[derive(Debug, Clone, Serialize)]
pub struct OnboardingState {
    session_id: Uuid,
    selected_language: String,
    has_selected_language: bool,
    is_profile_complete: bool,
    profile: Profile,
    selected_categories: BTreeSet<&'static str>,
}

impl Default for OnboardingState {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingState {
    pub fn new() -> Self {
        let state = Self {
            session_id: Uuid::new_v4(),
            selected_language: DEFAULT_LANGUAGE.to_string(),
            has_selected_language: false,
            is_profile_complete: false,
            profile: Profile::default(),
            selected_categories: BTreeSet::new(),
        };
        debug!("session {} started", state.session_id);
        state
    }

    /// Picks the visible top-level screen. First matching rule wins.
    pub fn resolve_screen(&self) -> Screen {
        if !self.has_selected_language {
            Screen::LanguageSelect
        } else if !self.is_profile_complete {
            Screen::ProfileAndPreferences
        } else {
            Screen::Home
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn selected_language(&self) -> &str {
        &self.selected_language
    }

    pub fn has_selected_language(&self) -> bool {
        self.has_selected_language
    }

    pub fn is_profile_complete(&self) -> bool {
        self.is_profile_complete
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Selected categories in alphabetical order.
    pub fn selected_categories(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.selected_categories.iter().copied()
    }

    pub fn category_count(&self) -> usize {
        self.selected_categories.len()
    }

    pub fn is_category_selected(&self, category: &str) -> bool {
        self.selected_categories.contains(category)
    }

    /// Stores `language` and marks the language step done.
    ///
    /// May be called again to change the language; the flag never reverts.
    ///
    /// # Panics
    /// If `language` is empty.
    pub fn confirm_language(&mut self, language: &str) {
        assert!(!language.is_empty(), "confirm_language called with an empty language");
        self.selected_language = language.to_string();
        self.has_selected_language = true;
        info!(
            "session {}: language confirmed as {}",
            self.session_id, self.selected_language
        );
    }

    pub fn can_advance_from_profile(&self) -> bool {
        self.profile.can_advance()
    }

    /// Commits the profile form when the user moves on to personalization.
    ///
    /// # Panics
    /// If the language step is not done or `profile.name` is empty.
    pub fn commit_profile(&mut self, profile: Profile) {
        assert!(
            self.has_selected_language,
            "profile committed before a language was confirmed"
        );
        assert!(profile.can_advance(), "commit_profile called with an empty name");
        info!(
            "session {}: profile committed ({} preference answers)",
            self.session_id,
            profile.preference_answers.len()
        );
        self.profile = profile;
    }

    /// Removes `category` if held, otherwise adds it while fewer than
    /// [`MAX_CATEGORIES`] are held. Anything else is a silent no-op.
    pub fn toggle_category(&mut self, category: &str) -> CategoryToggle {
        let Some(&known) = CATEGORIES.iter().find(|c| **c == category) else {
            warn!("ignoring unknown category {category:?}");
            return CategoryToggle::Ignored;
        };

        if self.selected_categories.remove(known) {
            debug!("category removed: {known}");
            CategoryToggle::Removed
        } else if self.selected_categories.len() < MAX_CATEGORIES {
            self.selected_categories.insert(known);
            debug!("category added: {known}");
            CategoryToggle::Added
        } else {
            CategoryToggle::Ignored
        }
    }

    pub fn can_confirm_personalization(&self) -> bool {
        !self.selected_categories.is_empty()
    }

    /// Finishes onboarding.
    ///
    /// # Panics
    /// If no category is selected or the language step is not done.
    pub fn confirm_personalization(&mut self) {
        assert!(
            self.has_selected_language,
            "personalization confirmed before a language was confirmed"
        );
        assert!(
            self.can_confirm_personalization(),
            "confirm_personalization called with no categories selected"
        );
        self.is_profile_complete = true;
        info!(
            "session {}: onboarding complete with {} categories",
            self.session_id,
            self.selected_categories.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_flags(has_selected_language: bool, is_profile_complete: bool) -> OnboardingState {
        OnboardingState {
            has_selected_language,
            is_profile_complete,
            ..OnboardingState::new()
        }
    }

    fn onboarded_language() -> OnboardingState {
        let mut state = OnboardingState::new();
        state.confirm_language("English");
        state
    }

    #[test]
    fn test_defaults() {
        let state = OnboardingState::new();
        assert_eq!(state.selected_language(), "English");
        assert!(!state.has_selected_language());
        assert!(!state.is_profile_complete());
        assert_eq!(state.category_count(), 0);
        assert_eq!(state.profile().state.name(), "Alabama");
        assert_eq!(state.profile().years_in_us, YearsInUs::LessThanOne);
        assert_eq!(state.resolve_screen(), Screen::LanguageSelect);
    }

    #[test]
    fn test_language_flag_dominates_resolution() {
        // profile completion without a language is unreachable, but resolution
        // must still pick the language screen
        assert_eq!(with_flags(false, false).resolve_screen(), Screen::LanguageSelect);
        assert_eq!(with_flags(false, true).resolve_screen(), Screen::LanguageSelect);

        let mut state = with_flags(false, false);
        state.profile.name = "Ana".into();
        state.selected_categories.insert("Banking");
        assert_eq!(state.resolve_screen(), Screen::LanguageSelect);
    }

    #[test]
    fn test_resolution_after_language() {
        assert_eq!(
            with_flags(true, false).resolve_screen(),
            Screen::ProfileAndPreferences
        );
        assert_eq!(with_flags(true, true).resolve_screen(), Screen::Home);
    }

    #[test]
    fn test_confirm_language_sets_language() {
        let mut state = OnboardingState::new();
        state.confirm_language("Spanish");
        assert_eq!(state.selected_language(), "Spanish");
        assert_eq!(state.resolve_screen(), Screen::ProfileAndPreferences);
    }

    #[test]
    fn test_confirm_language_is_idempotent() {
        let mut state = OnboardingState::new();
        state.confirm_language("Spanish");
        state.confirm_language("Spanish");
        assert!(state.has_selected_language());

        state.confirm_language("Korean");
        assert!(state.has_selected_language());
        assert_eq!(state.selected_language(), "Korean");
    }

    #[test]
    #[should_panic(expected = "empty language")]
    fn test_confirm_language_rejects_empty() {
        OnboardingState::new().confirm_language("");
    }

    #[test]
    fn test_can_advance_depends_only_on_name() {
        let mut state = onboarded_language();
        assert!(!state.can_advance_from_profile());

        state.profile.preference_answers.select(QuestionId::TechComfort, "Beginner");
        assert!(!state.can_advance_from_profile());

        state.profile.name = "A".into();
        assert!(state.can_advance_from_profile());

        state.profile.preference_answers = PreferenceAnswers::default();
        assert!(state.can_advance_from_profile());
    }

    #[test]
    fn test_commit_profile_stores_draft() {
        let mut state = onboarded_language();
        let mut draft = Profile {
            name: "Ana".into(),
            years_in_us: YearsInUs::TenPlus,
            state: UsState::from_name("Texas").unwrap(),
            ..Default::default()
        };
        draft.preference_answers.select(QuestionId::HelpFormat, "Visual guides");
        state.commit_profile(draft.clone());

        assert_eq!(state.profile(), &draft);
        // profile commit alone does not finish onboarding
        assert_eq!(state.resolve_screen(), Screen::ProfileAndPreferences);
    }

    #[test]
    #[should_panic(expected = "empty name")]
    fn test_commit_profile_requires_name() {
        onboarded_language().commit_profile(Profile::default());
    }

    #[test]
    fn test_toggle_category_adds_and_removes() {
        let mut state = onboarded_language();
        assert_eq!(state.toggle_category("Banking"), CategoryToggle::Added);
        assert!(state.is_category_selected("Banking"));
        assert_eq!(state.toggle_category("Banking"), CategoryToggle::Removed);
        assert_eq!(state.category_count(), 0);
    }

    #[test]
    fn test_toggle_category_twice_restores_set() {
        let mut state = onboarded_language();
        state.toggle_category("Housing");
        let before: Vec<_> = state.selected_categories().collect();

        state.toggle_category("Healthcare");
        state.toggle_category("Healthcare");
        assert_eq!(state.selected_categories().collect::<Vec<_>>(), before);
    }

    #[test]
    fn test_toggle_fourth_category_is_ignored() {
        let mut state = onboarded_language();
        state.toggle_category("Banking");
        state.toggle_category("Housing");
        assert_eq!(state.toggle_category("Taxes & money"), CategoryToggle::Added);
        assert_eq!(state.category_count(), 3);

        let before: Vec<_> = state.selected_categories().collect();
        assert_eq!(state.toggle_category("Communication"), CategoryToggle::Ignored);
        assert_eq!(state.selected_categories().collect::<Vec<_>>(), before);
        assert!(!state.is_category_selected("Communication"));
    }

    #[test]
    fn test_removal_allowed_when_full() {
        let mut state = onboarded_language();
        for c in ["Banking", "Housing", "Healthcare"] {
            state.toggle_category(c);
        }
        assert_eq!(state.toggle_category("Housing"), CategoryToggle::Removed);
        assert_eq!(state.toggle_category("Communication"), CategoryToggle::Added);
    }

    #[test]
    fn test_unknown_category_ignored() {
        let mut state = onboarded_language();
        assert_eq!(state.toggle_category("Gardening"), CategoryToggle::Ignored);
        assert_eq!(state.category_count(), 0);
    }

    #[test]
    fn test_confirm_personalization_completes_flow() {
        let mut state = onboarded_language();
        state.toggle_category("Banking");
        assert!(state.can_confirm_personalization());
        state.confirm_personalization();
        assert!(state.is_profile_complete());
        assert!(state.has_selected_language());
        assert_eq!(state.resolve_screen(), Screen::Home);
    }

    #[test]
    #[should_panic(expected = "no categories")]
    fn test_confirm_personalization_requires_category() {
        let mut state = onboarded_language();
        state.profile.name = "Ana".into();
        assert!(state.can_advance_from_profile());
        assert!(!state.can_confirm_personalization());
        state.confirm_personalization();
    }

    #[test]
    #[should_panic(expected = "before a language")]
    fn test_confirm_personalization_requires_language() {
        let mut state = OnboardingState::new();
        state.toggle_category("Banking");
        state.confirm_personalization();
    }

    #[test]
    fn test_answers_replace_and_reject_unknown() {
        let mut answers = PreferenceAnswers::default();
        assert!(answers.select(QuestionId::FormHelpFrequency, "Rarely"));
        assert!(answers.select(QuestionId::FormHelpFrequency, "Often"));
        assert_eq!(answers.get(QuestionId::FormHelpFrequency), Some("Often"));
        assert_eq!(answers.len(), 1);

        assert!(!answers.select(QuestionId::FormHelpFrequency, "Never"));
        assert_eq!(answers.get(QuestionId::FormHelpFrequency), Some("Often"));
        assert!(!answers.select_index(QuestionId::HelpFormat, 3));
        assert_eq!(answers.get(QuestionId::HelpFormat), None);

        answers.clear(QuestionId::FormHelpFrequency);
        assert!(answers.is_empty());
    }

    #[test]
    fn test_years_and_state_cycle() {
        assert_eq!(YearsInUs::TenPlus.next(), YearsInUs::LessThanOne);
        assert_eq!(YearsInUs::LessThanOne.prev(), YearsInUs::TenPlus);
        assert_eq!(YearsInUs::ThreePlus.tag(), "3+");

        let alabama = UsState::default();
        assert_eq!(alabama.prev().name(), "Wyoming");
        assert_eq!(alabama.next().name(), "Alaska");
        assert_eq!(UsState::from_name("Ohio").map(UsState::name), Some("Ohio"));
        assert_eq!(UsState::from_name("Ontario"), None);
    }

    #[test]
    fn test_serializes_summary_fields() {
        let mut state = onboarded_language();
        let mut draft = Profile {
            name: "Ana".into(),
            ..Default::default()
        };
        draft.preference_answers.select(QuestionId::TechComfort, "Advanced");
        state.commit_profile(draft);
        state.toggle_category("Banking");

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["selected_language"], "English");
        assert_eq!(json["profile"]["state"], "Alabama");
        assert_eq!(json["profile"]["years_in_us"], "Less than 1");
        assert_eq!(
            json["profile"]["preference_answers"]["tech_comfort"],
            "Advanced"
        );
        assert_eq!(json["selected_categories"][0], "Banking");
    }
}
