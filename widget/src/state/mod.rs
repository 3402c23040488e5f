use typeahead_core::types::Item;
use typeahead_search::Matches;

/// Coarse interaction state, derived from [`SelectionState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Closed,
    OpenNoMatches,
    OpenWithMatches { highlight: Option<usize> },
}

impl Phase {
    pub(crate) fn of(is_open: bool, match_count: usize, highlight: Option<usize>) -> Self {
        match (is_open, match_count) {
            (false, _) => Phase::Closed,
            (true, 0) => Phase::OpenNoMatches,
            (true, _) => Phase::OpenWithMatches { highlight },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    Down,
    Up,
}

/// Interaction state of one widget session.
///
/// `highlight` is either `None` or a valid index into `matches`.
#[derive(Debug, Clone)]
pub struct SelectionState {
    query: String,
    matches: Matches,
    is_open: bool,
    highlight: Option<usize>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            query: String::new(),
            matches: Vec::new().into(),
            is_open: false,
            highlight: None,
        }
    }
}

/// Read access.
impl SelectionState {
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matches(&self) -> &Matches {
        &self.matches
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn highlight_index(&self) -> Option<usize> {
        self.highlight
    }

    pub fn highlighted(&self) -> Option<&Item> {
        self.highlight.and_then(|i| self.matches.get(i))
    }

    pub fn phase(&self) -> Phase {
        Phase::of(self.is_open, self.matches.len(), self.highlight)
    }
}

/// Transitions. Callers are responsible for recomputing `matches`.
impl SelectionState {
    pub(crate) fn set_query(&mut self, query: String, matches: Matches) {
        self.query = query;
        self.matches = matches;
        self.is_open = true;
        self.highlight = None;
    }

    /// Swaps the match list without touching the query, e.g. after the catalog changed.
    pub(crate) fn refresh_matches(&mut self, matches: Matches) {
        self.matches = matches;
        self.highlight = None;
    }

    pub(crate) fn open(&mut self) {
        self.is_open = true;
    }

    pub(crate) fn close(&mut self) {
        self.is_open = false;
    }

    /// Moves the highlight one row, wrapping at both ends.
    ///
    /// Returns false when the dropdown is closed or empty. Moving up from no
    /// highlight lands on the last row, moving down lands on the first.
    pub(crate) fn navigate(&mut self, step: Step) -> bool {
        let len = self.matches.len();
        if !self.is_open || len == 0 {
            return false;
        }

        self.highlight = Some(match (step, self.highlight) {
            (Step::Down, None) => 0,
            (Step::Down, Some(i)) => (i + 1) % len,
            (Step::Up, None) => len - 1,
            (Step::Up, Some(i)) => (i + len - 1) % len,
        });
        true
    }

    pub(crate) fn select(&mut self, item: &Item) {
        self.query = item.name().to_string();
        self.matches = Vec::new().into();
        self.is_open = false;
        self.highlight = None;
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
