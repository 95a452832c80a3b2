//! Profile & preferences form state.
//!
//! The draft [`Profile`] lives here while the user edits it and is handed to
//! [`OnboardingState::commit_profile`](crate::state::OnboardingState::commit_profile)
//! only when Next is activated.

use crate::catalog::{QuestionId, QUESTIONS, QUESTION_COUNT};
use crate::state::onboarding::Profile;

/// Focusable controls of the form, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    Name,
    YearsInUs,
    State,
    /// Index into [`QUESTIONS`].
    Question(usize),
    Next,
}

impl ProfileField {
    pub const COUNT: usize = 3 + QUESTION_COUNT + 1;

    pub fn index(self) -> usize {
        match self {
            ProfileField::Name => 0,
            ProfileField::YearsInUs => 1,
            ProfileField::State => 2,
            ProfileField::Question(i) => 3 + i,
            ProfileField::Next => Self::COUNT - 1,
        }
    }

    pub fn from_index(index: usize) -> Self {
        match index % Self::COUNT {
            0 => ProfileField::Name,
            1 => ProfileField::YearsInUs,
            2 => ProfileField::State,
            i if i < Self::COUNT - 1 => ProfileField::Question(i - 3),
            _ => ProfileField::Next,
        }
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    pub fn prev(self) -> Self {
        Self::from_index(self.index() + Self::COUNT - 1)
    }

    /// Only the name field consumes typed characters.
    pub fn accepts_text(self) -> bool {
        self == ProfileField::Name
    }
}

/// Where the user is inside the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileStep {
    #[default]
    Questions,
    Personalization,
}

#[derive(Debug, Clone)]
pub struct ProfileFormState {
    pub focus: ProfileField,
    pub step: ProfileStep,
    pub draft: Profile,
}

impl Default for ProfileFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileFormState {
    pub fn new() -> Self {
        Self {
            focus: ProfileField::Name,
            step: ProfileStep::Questions,
            draft: Profile::default(),
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Appends to the name when it has focus. Returns `true` if consumed.
    pub fn push_char(&mut self, c: char) -> bool {
        if self.focus.accepts_text() {
            self.draft.name.push(c);
            true
        } else {
            false
        }
    }

    /// Backspace: edits the name or clears the focused question's answer.
    pub fn backspace(&mut self) -> bool {
        match self.focus {
            ProfileField::Name => self.draft.name.pop().is_some(),
            ProfileField::Question(i) => {
                let id = QUESTIONS[i].id;
                let had = self.draft.preference_answers.selected_index(id).is_some();
                self.draft.preference_answers.clear(id);
                had
            }
            _ => false,
        }
    }

    /// Moves the focused picker to its next value.
    pub fn cycle_next(&mut self) {
        match self.focus {
            ProfileField::YearsInUs => self.draft.years_in_us = self.draft.years_in_us.next(),
            ProfileField::State => self.draft.state = self.draft.state.next(),
            ProfileField::Question(i) => {
                let id = QUESTIONS[i].id;
                let len = QUESTIONS[i].options.len();
                let next = match self.draft.preference_answers.selected_index(id) {
                    Some(current) => (current + 1) % len,
                    None => 0,
                };
                self.draft.preference_answers.select_index(id, next);
            }
            ProfileField::Name | ProfileField::Next => {}
        }
    }

    /// Moves the focused picker to its previous value.
    pub fn cycle_prev(&mut self) {
        match self.focus {
            ProfileField::YearsInUs => self.draft.years_in_us = self.draft.years_in_us.prev(),
            ProfileField::State => self.draft.state = self.draft.state.prev(),
            ProfileField::Question(i) => {
                let id = QUESTIONS[i].id;
                let len = QUESTIONS[i].options.len();
                let prev = match self.draft.preference_answers.selected_index(id) {
                    Some(current) => (current + len - 1) % len,
                    None => len - 1,
                };
                self.draft.preference_answers.select_index(id, prev);
            }
            ProfileField::Name | ProfileField::Next => {}
        }
    }

    /// Answer currently chosen for question `index`.
    pub fn answer(&self, index: usize) -> Option<&'static str> {
        let id: QuestionId = QUESTIONS.get(index)?.id;
        self.draft.preference_answers.get(id)
    }

    /// Returns the draft to commit and moves on to personalization, or
    /// `None` while the name is still empty.
    pub fn take_for_commit(&mut self) -> Option<Profile> {
        if self.step != ProfileStep::Questions || !self.draft.can_advance() {
            return None;
        }
        self.step = ProfileStep::Personalization;
        Some(self.draft.clone())
    }
}
