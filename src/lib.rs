// Library for testable modules
pub mod app;
pub mod catalog;
pub mod config;
pub mod key_handler;
pub mod pages;
pub mod render_context;
pub mod screen;
pub mod state;
pub mod ui_utils;

// Re-export main types used in tests
pub use app::App;
pub use config::Cli;
pub use key_handler::{KeyAction, KeyHandler};
pub use state::{CategoryToggle, OnboardingState, Profile, Screen, UsState, YearsInUs};
