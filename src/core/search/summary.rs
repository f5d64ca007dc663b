//! Templated one-sentence summary over the top results.

use crate::core::types::ScoredDocument;
use once_cell::sync::Lazy;
use regex::Regex;

/// Summary used in responses when nothing matched
pub const NO_MATCHES_SUMMARY: &str = "No matches found for your query.";

/// Most percentage figures quoted in a summary
const MAX_METRICS: usize = 2;

// ASCII digits only; `\d` would also accept other Unicode digits
static PERCENTAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+%").unwrap());

/// Summarize `results` in a single sentence.
///
/// Returns an empty string for no results. Otherwise the titles are
/// listed in result order, and the first two percentage figures found
/// in the bodies (scanning results in order) are quoted when present.
pub fn generate_summary(results: &[ScoredDocument<'_>]) -> String {
    if results.is_empty() {
        return String::new();
    }

    let titles = results
        .iter()
        .map(|r| r.document.title.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let metrics = results
        .iter()
        .flat_map(|r| PERCENTAGE.find_iter(&r.document.body).map(|m| m.as_str()))
        .take(MAX_METRICS)
        .collect::<Vec<_>>();

    if metrics.is_empty() {
        format!("Found information about: {titles}.")
    } else {
        format!(
            "Results highlight: {titles}. Key improvements: {}.",
            metrics.join(" and ")
        )
    }
}
