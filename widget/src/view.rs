//! Read-only view model handed to the rendering layer.

use crate::state::{Phase, SelectionState};
use typeahead_core::types::Item;
use typeahead_search::{CaseMatching, Matches, Span, spans};

/// Point-in-time copy of a session's state plus display settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub query: String,
    pub matches: Matches,
    pub is_open: bool,
    pub highlight_index: Option<usize>,
    pub placeholder: String,
    pub case_matching: CaseMatching,
}

/// What the dropdown below the input should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dropdown<'a> {
    Hidden,
    /// The "No data matched" message.
    NoMatches,
    Matches(Vec<DropdownRow<'a>>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownRow<'a> {
    pub item: &'a Item,
    pub spans: Vec<Span<'a>>,
    pub highlighted: bool,
}

impl SessionSnapshot {
    pub(crate) fn capture(
        state: &SelectionState,
        placeholder: &str,
        case_matching: CaseMatching,
    ) -> Self {
        Self {
            query: state.query().to_string(),
            matches: state.matches().clone(),
            is_open: state.is_open(),
            highlight_index: state.highlight_index(),
            placeholder: placeholder.to_string(),
            case_matching,
        }
    }

    pub fn phase(&self) -> Phase {
        Phase::of(self.is_open, self.matches.len(), self.highlight_index)
    }

    /// The clear button is offered whenever there is text to clear.
    pub fn show_clear_button(&self) -> bool {
        !self.query.is_empty()
    }

    pub fn dropdown(&self) -> Dropdown<'_> {
        match self.phase() {
            Phase::Closed => Dropdown::Hidden,
            Phase::OpenNoMatches => Dropdown::NoMatches,
            Phase::OpenWithMatches { highlight } => Dropdown::Matches(
                self.matches
                    .iter()
                    .enumerate()
                    .map(|(i, item)| DropdownRow {
                        item,
                        spans: spans(item.name(), &self.query, self.case_matching),
                        highlighted: highlight == Some(i),
                    })
                    .collect(),
            ),
        }
    }
}
