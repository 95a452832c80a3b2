use color_eyre::eyre::WrapErr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Back,
    NextField,
    PrevField,
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    Select,
    Help,
    Search,
    InputChar(char),
    Backspace,
    None,
}

/// Maps raw terminal events onto [`KeyAction`]s.
///
/// Plain characters always come through as [`KeyAction::InputChar`]; the
/// active screen decides whether a character is text or a shortcut, so that
/// names like "Quinn" can be typed.
#[derive(Debug, Default)]
pub struct KeyHandler;

impl KeyHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_crossterm_events(&mut self) -> color_eyre::Result<KeyAction> {
        match event::read().wrap_err("failed to read terminal event")? {
            // it's important to check KeyEventKind::Press to avoid handling key release events
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(self.on_key_event(key)),
            _ => Ok(KeyAction::None),
        }
    }

    pub fn on_key_event(&mut self, key: KeyEvent) -> KeyAction {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c' | 'C' | 'q' | 'Q')) => KeyAction::Quit,
            (KeyModifiers::CONTROL, KeyCode::Char('f' | 'F')) => KeyAction::Search,
            (_, KeyCode::Esc) => KeyAction::Back,
            (_, KeyCode::F(1)) => KeyAction::Help,
            (_, KeyCode::Tab) => KeyAction::NextField,
            (_, KeyCode::BackTab) => KeyAction::PrevField,
            (_, KeyCode::Up) => KeyAction::NavigateUp,
            (_, KeyCode::Down) => KeyAction::NavigateDown,
            (_, KeyCode::Left) => KeyAction::NavigateLeft,
            (_, KeyCode::Right) => KeyAction::NavigateRight,
            (_, KeyCode::Enter) => KeyAction::Select,
            (_, KeyCode::Backspace) => KeyAction::Backspace,
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(c)) => KeyAction::InputChar(c),
            _ => KeyAction::None,
        }
    }
}
