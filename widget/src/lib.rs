//! Typeahead widget session.
//!
//! Input flow: an [`Input`] reaches [`TypeaheadSession::handle`], which
//! updates the [`SelectionState`], recomputing matches through the cached
//! match engine on text changes, and then reports to the [`Listener`]:
//! - [`SessionEvent::SelectionMade`] once per confirmed selection
//! - [`SessionEvent::StateChanged`] with a [`SessionSnapshot`] after every input
//!
//! Outside-interaction dismissal is a scoped [`DismissSubscription`] on a
//! platform-owned [`DismissHub`].

mod dismiss;
mod event;
mod session;
mod state;
mod view;

pub use dismiss::{DismissHub, DismissSubscription};
pub use event::{Input, SessionEvent};
pub use session::{Listener, TypeaheadSession};
pub use state::{Phase, SelectionState};
pub use view::{Dropdown, DropdownRow, SessionSnapshot};
