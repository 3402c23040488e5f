//! Typeahead matching.
//!
//! - [`MatchEngine::filter`]: case-insensitive (by default) substring filter
//!   that keeps the candidates' input order. A blank query matches nothing.
//! - [`MatchEngine::filter_cached`]: the same filter memoized in a
//!   [`MatchCache`] keyed by normalized query.
//! - [`highlight::spans`]: splits display text into matched/unmatched spans
//!   using the same case rule.

mod config;
mod engine;
pub mod highlight;
pub mod query;

pub use config::{CaseMatching, SearchConfig};
pub use engine::{MatchCache, MatchEngine, Matches};
pub use highlight::{Span, spans};
