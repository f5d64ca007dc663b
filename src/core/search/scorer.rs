//! Keyword relevance scoring.
//!
//! A simple, explainable heuristic: every query term adds
//! fixed bonuses for where it appears in the document, and the bonuses
//! compound additively. Scores are unbounded and only meaningful
//! relative to other documents scored against the same query.
//!
//! | Condition (per term)                              | Points |
//! |---------------------------------------------------|--------|
//! | Title equals the whole query (case-insensitive)   | 1000   |
//! | Title contains the term                           | 100    |
//! | Search text contains the term at a word start     | 50     |
//! | Search text contains the term anywhere            | 10     |
//!
//! After the per-term pass, each term found anywhere in the search
//! text adds another 5. The search text is `title + " " + body`.
//!
//! The exact-title bonus is granted once per term rather than once per
//! query, so a three-word exact title earns 3000 from it.

use crate::core::search::snippet::fold_case;
use crate::core::types::Document;

pub const EXACT_TITLE_BONUS: u64 = 1000;
pub const TITLE_TERM_BONUS: u64 = 100;
pub const WORD_START_BONUS: u64 = 50;
pub const SUBSTRING_BONUS: u64 = 10;
pub const TERM_PRESENT_BONUS: u64 = 5;

/// Score `document` against `query`. Zero means not relevant.
///
/// Matching is case-insensitive. Surrounding whitespace in `query` is
/// ignored; interior runs of whitespace separate terms.
pub fn score(query: &str, document: &Document) -> u64 {
    let query = fold_case(query.trim());
    let title = fold_case(&document.title);
    let search_text = fold_case(&format!("{} {}", document.title, document.body));

    let exact_title = title == query;
    let mut total = 0;
    let mut present = 0;

    for term in query.split_whitespace() {
        if exact_title {
            total += EXACT_TITLE_BONUS;
        }
        if title.contains(term) {
            total += TITLE_TERM_BONUS;
        }
        if contains_at_word_start(&search_text, term) {
            total += WORD_START_BONUS;
        }
        if search_text.contains(term) {
            total += SUBSTRING_BONUS;
            present += 1;
        }
    }

    total + present * TERM_PRESENT_BONUS
}

/// True if `term` occurs in `text` at the start of the string or right
/// after a non-word character.
///
/// Word characters are alphanumerics and `_`. Every occurrence is
/// checked, including overlapping ones.
pub fn contains_at_word_start(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }

    let mut from = 0;
    while let Some(found) = text[from..].find(term) {
        let pos = from + found;
        let at_boundary = text[..pos]
            .chars()
            .next_back()
            .map_or(true, |prev| !is_word_char(prev));
        if at_boundary {
            return true;
        }
        // Step one char so overlapping occurrences are still seen
        from = pos + text[pos..].chars().next().map_or(1, char::len_utf8);
    }

    false
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
