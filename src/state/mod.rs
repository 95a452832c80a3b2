//! State modules for the Bridgit TUI application.
//!
//! State is split into two tiers. [`OnboardingState`] is the committed session
//! state: it decides which top-level screen is visible and only changes on an
//! explicit confirmation. Every other struct here is transient input owned by
//! one screen and discarded once the user leaves it.
//!
//! # Architecture
//!
//! ```text
//! App
//! ├── OnboardingState       - Committed choices + screen resolution
//! ├── LanguagePickerState   - Highlighted language, type-to-filter
//! ├── ProfileFormState      - Draft profile, field focus, flow step
//! ├── PersonalizationState  - Category cursor
//! └── HomeState             - Topic grid, search, sidebar, topic detail
//! ```

mod home;
mod language;
mod onboarding;
mod personalization;
mod profile;

pub use home::{HomeSection, HomeState, SidebarState, TopicDetailState};
pub use language::{LanguagePickerState, WINDOW_SIZE};
pub use onboarding::{
    CategoryToggle, OnboardingState, PreferenceAnswers, Profile, Screen, UsState, YearsInUs,
    DEFAULT_LANGUAGE, MAX_CATEGORIES,
};
pub use personalization::{PersonalizationRow, PersonalizationState};
pub use profile::{ProfileField, ProfileFormState, ProfileStep};
