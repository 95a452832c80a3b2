use crate::state::{
    HomeState, LanguagePickerState, OnboardingState, PersonalizationState, ProfileFormState,
};

/// Borrowed view of everything a page may draw from.
///
/// Pages get read access to the committed [`OnboardingState`] plus the
/// transient input of their own screen; none of them can mutate either.
pub struct RenderContext<'a> {
    pub onboarding: &'a OnboardingState,
    pub status: &'a str,
    pub show_help: bool,

    // Per-screen input
    pub language: Option<&'a LanguagePickerState>,
    pub profile: Option<&'a ProfileFormState>,
    pub personalization: Option<&'a PersonalizationState>,
    pub home: Option<&'a HomeState>,
}

impl<'a> RenderContext<'a> {
    pub fn new(onboarding: &'a OnboardingState, status: &'a str) -> Self {
        Self {
            onboarding,
            status,
            show_help: false,
            language: None,
            profile: None,
            personalization: None,
            home: None,
        }
    }

    /// Builder method to set show_help
    pub fn with_help(mut self, show_help: bool) -> Self {
        self.show_help = show_help;
        self
    }

    /// Builder method to set language picker state
    pub fn with_language(mut self, language: &'a LanguagePickerState) -> Self {
        self.language = Some(language);
        self
    }

    /// Builder method to set profile and personalization state
    pub fn with_profile(
        mut self,
        profile: &'a ProfileFormState,
        personalization: &'a PersonalizationState,
    ) -> Self {
        self.profile = Some(profile);
        self.personalization = Some(personalization);
        self
    }

    /// Builder method to set home browsing state
    pub fn with_home(mut self, home: &'a HomeState) -> Self {
        self.home = Some(home);
        self
    }
}
