//! Snippet extraction.
//!
//! Snippets are phrase-level: the whole query is looked up in the body
//! as one case-insensitive substring. When it is found, a window around
//! it is returned; otherwise the snippet falls back to the start of the
//! body. Individual terms are never used to pick the window.
//!
//! All lengths and offsets are counted in chars, never bytes, so
//! multi-byte text is never split inside a character.

use crate::core::config::SearchConfig;

const ELLIPSIS: &str = "...";

/// Window sizes for snippet extraction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnippetOptions {
    /// Lead-in length when the phrase is not found
    pub max_length: usize,

    /// Chars kept before the match
    pub context_before: usize,

    /// Chars kept after the match
    pub context_after: usize,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            max_length: 120,
            context_before: 20,
            context_after: 100,
        }
    }
}

impl From<&SearchConfig> for SnippetOptions {
    fn from(config: &SearchConfig) -> Self {
        Self {
            max_length: config.snippet_length,
            context_before: config.context_before,
            context_after: config.context_after,
        }
    }
}

/// Extract a snippet using the default context window
pub fn extract_snippet(body: &str, query: &str, max_length: usize) -> String {
    let options = SnippetOptions {
        max_length,
        ..SnippetOptions::default()
    };
    extract_snippet_with(body, query, &options)
}

/// Extract a snippet of `body` centred on the first occurrence of
/// `query`.
///
/// On a match at char `i` the window spans
/// `[i - context_before, i + query_len + context_after)`, clamped to the
/// body, with `...` added on each side that was cut. Without a match the
/// first `max_length` chars are returned, followed by `...` if the body
/// is longer.
pub fn extract_snippet_with(body: &str, query: &str, options: &SnippetOptions) -> String {
    let chars: Vec<char> = body.chars().collect();
    let needle = fold_case(query);

    if let Some(index) = find_ignore_case(&chars, &needle) {
        let start = index.saturating_sub(options.context_before);
        let end = (index + needle.chars().count() + options.context_after).min(chars.len());

        let mut snippet = String::with_capacity(end - start + 2 * ELLIPSIS.len());
        if start > 0 {
            snippet.push_str(ELLIPSIS);
        }
        snippet.extend(&chars[start..end]);
        if end < chars.len() {
            snippet.push_str(ELLIPSIS);
        }
        return snippet;
    }

    if chars.len() > options.max_length {
        let mut snippet: String = chars[..options.max_length].iter().collect();
        snippet.push_str(ELLIPSIS);
        return snippet;
    }

    body.to_string()
}

/// Lowercase `text` one char at a time.
///
/// Unlike `str::to_lowercase` this ignores word position, so `Σ` always
/// folds to `σ` and a folded needle lines up with a folded body.
pub(crate) fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Find the char index in `chars` where the folded `needle` starts,
/// comparing against a lowercased copy of `chars`.
///
/// Lowercasing can expand one char into several, so every char of the
/// folded text remembers the index of the original char it came from.
fn find_ignore_case(chars: &[char], needle: &str) -> Option<usize> {
    let mut folded = String::with_capacity(chars.len());
    let mut origin = Vec::with_capacity(chars.len());
    for (i, c) in chars.iter().enumerate() {
        for lower in c.to_lowercase() {
            folded.push(lower);
            origin.push(i);
        }
    }

    let byte_pos = folded.find(needle)?;
    let folded_index = folded[..byte_pos].chars().count();
    Some(origin.get(folded_index).copied().unwrap_or(chars.len()))
}
