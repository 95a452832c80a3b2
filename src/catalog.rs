//! Static reference data shown by the onboarding screens.
//!
//! Nothing here is computed or mutated; the state machine only ever stores
//! values picked from these tables.

/// Language display names offered by the picker, sorted and de-duplicated.
pub const LANGUAGES: &[&str] = &[
    "Amharic",
    "Arabic",
    "Armenian",
    "Bengali",
    "Burmese",
    "Chinese",
    "Dari",
    "English",
    "Farsi",
    "French",
    "German",
    "Greek",
    "Gujarati",
    "Haitian Creole",
    "Hebrew",
    "Hindi",
    "Hmong",
    "Italian",
    "Japanese",
    "Karen",
    "Khmer",
    "Korean",
    "Lao",
    "Nepali",
    "Pashto",
    "Polish",
    "Portuguese",
    "Punjabi",
    "Romanian",
    "Russian",
    "Somali",
    "Spanish",
    "Swahili",
    "Tagalog",
    "Thai",
    "Tigrinya",
    "Turkish",
    "Ukrainian",
    "Urdu",
    "Vietnamese",
    "Yoruba",
];

pub const US_STATES: [&str; 50] = [
    "Alabama",
    "Alaska",
    "Arizona",
    "Arkansas",
    "California",
    "Colorado",
    "Connecticut",
    "Delaware",
    "Florida",
    "Georgia",
    "Hawaii",
    "Idaho",
    "Illinois",
    "Indiana",
    "Iowa",
    "Kansas",
    "Kentucky",
    "Louisiana",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Montana",
    "Nebraska",
    "Nevada",
    "New Hampshire",
    "New Jersey",
    "New Mexico",
    "New York",
    "North Carolina",
    "North Dakota",
    "Ohio",
    "Oklahoma",
    "Oregon",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "South Dakota",
    "Tennessee",
    "Texas",
    "Utah",
    "Vermont",
    "Virginia",
    "Washington",
    "West Virginia",
    "Wisconsin",
    "Wyoming",
];

/// Stable identifier of a preference question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionId {
    HelpFormat,
    TechComfort,
    FormHelpFrequency,
}

#[derive(Debug)]
pub struct Question {
    pub id: QuestionId,
    pub text: &'static str,
    pub options: &'static [&'static str],
}

impl Question {
    /// Position of `option` in this question's option list.
    pub fn option_index(&self, option: &str) -> Option<usize> {
        self.options.iter().position(|o| *o == option)
    }
}

pub const QUESTION_COUNT: usize = 3;

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: QuestionId::HelpFormat,
        text: "How do you prefer to receive help?",
        options: &["Text explanations", "Visual guides", "One-on-one assistance"],
    },
    Question {
        id: QuestionId::TechComfort,
        text: "What is your comfort level with technology?",
        options: &["Beginner", "Intermediate", "Advanced"],
    },
    Question {
        id: QuestionId::FormHelpFrequency,
        text: "How often do you need help understanding forms?",
        options: &["Rarely", "Sometimes", "Often"],
    },
];

/// Looks up a question by id.
pub fn question(id: QuestionId) -> &'static Question {
    // every QuestionId variant has exactly one entry in QUESTIONS
    match id {
        QuestionId::HelpFormat => &QUESTIONS[0],
        QuestionId::TechComfort => &QUESTIONS[1],
        QuestionId::FormHelpFrequency => &QUESTIONS[2],
    }
}

pub const CATEGORIES: [&str; 8] = [
    "Medical documents",
    "Taxes & money",
    "Communication",
    "Job applications",
    "Transportation",
    "Banking",
    "Housing",
    "Healthcare",
];

pub const BRIDGE_TOPICS: [&str; 8] = [
    "Medical Docs",
    "Taxes & Money",
    "Communication",
    "Job Applications",
    "Transportation",
    "Banking",
    "Housing",
    "Healthcare",
];

pub const LEARN_TOPICS: [&str; 8] = [
    "Grammar",
    "Vocabulary",
    "U.S. History",
    "Civics",
    "Slang",
    "Pronunciation",
    "Culture",
    "Idioms",
];

/// Sub-pages listed under every topic.
pub const TOPIC_SECTIONS: [&str; 3] = ["Overview", "Step-by-Step", "FAQ"];

/// Sidebar links and the placeholder each one opens.
pub const ACCOUNT_LINKS: [(&str, &str); 4] = [
    ("Bridging History", "Bridging History"),
    ("Learning History", "Learning History"),
    ("Account Status", "Basic"),
    ("Upgrade to Premium", "Upgrade"),
];

/// Case-insensitive substring filter; an empty query keeps everything.
pub fn filter_topics<'a>(topics: &[&'a str], query: &str) -> Vec<&'a str> {
    if query.is_empty() {
        return topics.to_vec();
    }
    let query = query.to_lowercase();
    topics
        .iter()
        .copied()
        .filter(|t| t.to_lowercase().contains(&query))
        .collect()
}
