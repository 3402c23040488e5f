use crate::view::SessionSnapshot;
use typeahead_core::types::Item;

/// Inputs accepted by a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    TextChanged(String),
    FocusGained,
    NavigateDown,
    NavigateUp,
    /// Enter.
    Confirm,
    MouseSelect(Item),
    /// Escape or an outside interaction.
    Dismiss,
    ClearInput,
}

impl Input {
    /// Maps a DOM-style key name to its input, if the widget handles that key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(Input::NavigateDown),
            "ArrowUp" => Some(Input::NavigateUp),
            "Enter" => Some(Input::Confirm),
            "Escape" => Some(Input::Dismiss),
            _ => None,
        }
    }
}

/// Events delivered to the session listener.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// Fired once per confirmed selection, before the matching `StateChanged`.
    SelectionMade(Item),
    /// Fired after every handled input.
    StateChanged(SessionSnapshot),
}
