use crate::state::Field;
use crate::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ToggleTheme,
    FocusNext,
    FocusPrevious,
}

#[derive(Debug, Clone)]
pub struct StatusBarState {
    pub message: String,
}

impl Default for StatusBarState {
    fn default() -> Self {
        Self {
            message: "Ready".to_string(),
        }
    }
}

impl StatusBarState {
    pub fn set_message<S: Into<String>>(&mut self, message: S) {
        self.message = message.into();
    }
}

pub struct UIState {
    pub theme: Theme,
    pub focus: Field,
    pub status_bar: StatusBarState,
    pub should_quit: bool,
}

impl UIState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            focus: Field::Hex,
            status_bar: StatusBarState::default(),
            should_quit: false,
        }
    }

    pub fn set_status_message<S: Into<String>>(&mut self, message: S) {
        self.status_bar.set_message(message);
    }
}
