//! Query normalization and the literal matcher shared by filtering and highlighting.

use crate::config::CaseMatching;
use regex::{Regex, RegexBuilder};

/// Returns true when the query should produce no matches at all.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-folds `query` according to `case_matching`.
///
/// The result is the cache key for the query. Folding is per char and only
/// uses one-to-one lowercase mappings, so two queries with the same key are
/// equal under the simple case folding the matcher applies. Chars whose
/// lowercase form expands (e.g. `İ`) are kept as they are.
pub fn normalize(query: &str, case_matching: CaseMatching) -> String {
    match case_matching {
        CaseMatching::Sensitive => query.to_string(),
        CaseMatching::Insensitive => query.chars().map(fold_char).collect(),
    }
}

fn fold_char(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Literal, escaped matcher for one query.
#[derive(Debug, Clone)]
pub struct Needle {
    key: String,
    regex: Regex,
}

impl Needle {
    /// Returns `None` for a blank query, or when the pattern exceeds the regex size limits.
    pub fn new(query: &str, case_matching: CaseMatching) -> Option<Self> {
        if is_blank(query) {
            return None;
        }

        let regex = match RegexBuilder::new(&regex::escape(query))
            .case_insensitive(case_matching == CaseMatching::Insensitive)
            .build()
        {
            Ok(regex) => regex,
            Err(err) => {
                tracing::warn!(%err, "query pattern rejected, treating as unmatched");
                return None;
            }
        };

        Some(Self {
            key: normalize(query, case_matching),
            regex,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// True when `text` contains the query as a contiguous substring.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// Non-overlapping occurrences, left to right, as byte ranges.
    pub fn find_ranges<'s>(&'s self, text: &'s str) -> impl Iterator<Item = (usize, usize)> + 's {
        self.regex.find_iter(text).map(|m| (m.start(), m.end()))
    }
}
