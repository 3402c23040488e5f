//! Typeahead session: the selection state machine wired to matching,
//! result caching, dismissal, and the listener that drives redraws.
//!
//! Every input is processed to completion before the next one; the session
//! is single-threaded and owns its cache exclusively.

use crate::dismiss::{DismissHub, DismissSubscription};
use crate::event::{Input, SessionEvent};
use crate::state::{SelectionState, Step};
use crate::view::SessionSnapshot;
use std::sync::Arc;
use typeahead_core::TypeaheadConfig;
use typeahead_core::types::{Catalog, Item};
use typeahead_search::{MatchCache, MatchEngine, SearchConfig};

/// Receives selection and state-change events.
pub type Listener = Arc<dyn Fn(&SessionEvent) + Send + Sync>;

pub struct TypeaheadSession {
    catalog: Catalog,
    engine: MatchEngine,
    cache: MatchCache,
    state: SelectionState,
    config: TypeaheadConfig,
    listener: Listener,
    dismiss: Option<DismissSubscription>,
}

/// Create operations.
impl TypeaheadSession {
    pub fn new(catalog: Catalog, config: TypeaheadConfig, listener: Listener) -> Self {
        Self {
            catalog,
            engine: MatchEngine::new(SearchConfig::from(&config)),
            cache: MatchCache::new(config.cache_capacity),
            state: SelectionState::default(),
            config,
            listener,
            dismiss: None,
        }
    }
}

/// Read operations.
impl TypeaheadSession {
    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(
            &self.state,
            &self.config.placeholder,
            self.engine.config().case_matching,
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cache(&self) -> &MatchCache {
        &self.cache
    }

    pub fn config(&self) -> &TypeaheadConfig {
        &self.config
    }
}

/// Input handling.
impl TypeaheadSession {
    /// Applies one input and notifies the listener.
    ///
    /// Returns the selected item when the input completed a selection.
    /// Pending outside-interaction dismissals are applied first.
    pub fn handle(&mut self, input: Input) -> Option<Item> {
        self.poll_dismiss();

        tracing::debug!(?input, phase = ?self.state.phase(), "typeahead input");
        let selected = match input {
            Input::TextChanged(text) => {
                let matches = self
                    .engine
                    .filter_cached(&text, self.catalog.items(), &mut self.cache);
                self.state.set_query(text, matches);
                None
            }
            Input::FocusGained => {
                self.state.open();
                None
            }
            Input::NavigateDown => {
                self.state.navigate(Step::Down);
                None
            }
            Input::NavigateUp => {
                self.state.navigate(Step::Up);
                None
            }
            Input::Confirm => match self.state.highlighted().cloned() {
                Some(item) if self.state.is_open() => Some(self.select(item)),
                _ => None,
            },
            Input::MouseSelect(item) => Some(self.select(item)),
            Input::Dismiss => {
                self.state.close();
                None
            }
            Input::ClearInput => {
                self.state.reset();
                None
            }
        };

        self.notify_state();
        selected
    }

    /// Applies a pending outside-interaction dismissal, if any.
    pub fn poll_dismiss(&mut self) -> bool {
        let pending = self
            .dismiss
            .as_ref()
            .is_some_and(DismissSubscription::take_pending);
        if pending {
            tracing::debug!("outside interaction, dismissing");
            self.state.close();
            self.notify_state();
        }
        pending
    }

    fn select(&mut self, item: Item) -> Item {
        tracing::debug!(id = %item.id, name = %item.name, "selection made");
        self.state.select(&item);
        (self.listener)(&SessionEvent::SelectionMade(item.clone()));
        item
    }

    fn notify_state(&self) {
        (self.listener)(&SessionEvent::StateChanged(self.snapshot()));
    }
}

/// Lifecycle operations.
impl TypeaheadSession {
    /// Swaps the candidate collection and invalidates cached results.
    ///
    /// The current query is refiltered against the new catalog whether or not
    /// the dropdown is open, so reopening never shows items from the old one.
    pub fn replace_catalog(&mut self, catalog: Catalog) {
        tracing::debug!(
            items = catalog.len(),
            cached = self.cache.len(),
            "catalog replaced, clearing match cache"
        );
        self.catalog = catalog;
        self.cache.clear();

        let query = self.state.query().to_string();
        let matches = self
            .engine
            .filter_cached(&query, self.catalog.items(), &mut self.cache);
        self.state.refresh_matches(matches);

        self.notify_state();
    }

    /// Starts listening for outside interactions on `hub`.
    ///
    /// Replaces any previous subscription.
    pub fn attach_dismiss(&mut self, hub: &DismissHub) {
        self.dismiss = Some(hub.subscribe());
    }

    pub fn detach_dismiss(&mut self) {
        self.dismiss = None;
    }

    pub fn is_dismiss_attached(&self) -> bool {
        self.dismiss.is_some()
    }
}
