//! Splits display text into matched and unmatched spans for rendering.

use crate::config::CaseMatching;
use crate::query::Needle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

/// Splits `text` around every non-overlapping occurrence of `query`.
///
/// Concatenating the span texts reproduces `text`. Adjacent occurrences are
/// merged into one matched span, and empty spans are only produced for an
/// empty `text`. The query is matched literally.
pub fn spans<'a>(text: &'a str, query: &str, case_matching: CaseMatching) -> Vec<Span<'a>> {
    let whole = vec![Span {
        text,
        is_match: false,
    }];

    let Some(needle) = Needle::new(query, case_matching) else {
        return whole;
    };

    let mut ranges: Vec<(usize, usize, bool)> = Vec::new();
    let mut cursor = 0;
    for (start, end) in needle.find_ranges(text) {
        if start > cursor {
            ranges.push((cursor, start, false));
        }
        match ranges.last_mut() {
            Some((_, last_end, true)) if *last_end == start => *last_end = end,
            _ => ranges.push((start, end, true)),
        }
        cursor = end;
    }

    if ranges.is_empty() {
        return whole;
    }
    if cursor < text.len() {
        ranges.push((cursor, text.len(), false));
    }

    ranges
        .into_iter()
        .map(|(start, end, is_match)| Span {
            text: &text[start..end],
            is_match,
        })
        .collect()
}
