pub mod help;
pub mod home;
pub mod language_select;
pub mod personalization;
pub mod profile;
pub mod sidebar;
pub mod topic_detail;

pub use help::HelpPage;
pub use home::HomePage;
pub use language_select::LanguageSelectPage;
pub use personalization::PersonalizationPage;
pub use profile::ProfilePage;
pub use sidebar::SidebarPage;
pub use topic_detail::TopicDetailPage;
