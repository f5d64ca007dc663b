//! Output formatting for CLI commands
//!
//! Provides utilities for formatting command output in human-readable
//! or JSON formats. Supports colored output (respects NO_COLOR env var).

/// Color scheme for CLI output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Style for labels/headers
    pub fn label(s: &str) -> ColoredString {
        s.bold()
    }

    /// Style for document IDs
    pub fn doc_id(s: &str) -> ColoredString {
        s.cyan()
    }

    /// Style for document titles
    pub fn title(s: &str) -> ColoredString {
        s.blue().bold()
    }

    /// Style for numbers/counts
    pub fn number(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for warning messages
    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    /// Style for error messages
    pub fn error(s: &str) -> ColoredString {
        s.red().bold()
    }

    /// Style for dim/secondary text
    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    /// Style for the summary sentence
    pub fn summary(s: &str) -> ColoredString {
        s.italic()
    }

    /// Style for rank numbers
    pub fn rank(s: &str) -> ColoredString {
        s.green().bold()
    }

    /// Style for the matched phrase inside a snippet
    pub fn matched(s: &str) -> ColoredString {
        s.black().on_yellow()
    }
}

/// Highlight case-insensitive occurrences of `phrase` in `text`
///
/// Text whose lowercase form has a different byte layout is returned
/// unchanged, since match offsets would not line up with the original.
pub fn highlight(text: &str, phrase: &str) -> String {
    let lower_text = text.to_lowercase();
    let lower_phrase = phrase.to_lowercase();
    if lower_phrase.is_empty() || lower_text.len() != text.len() {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for (pos, _) in lower_text.match_indices(&lower_phrase) {
        let end = pos + lower_phrase.len();
        if !text.is_char_boundary(pos) || !text.is_char_boundary(end) {
            continue;
        }
        out.push_str(&text[last..pos]);
        out.push_str(&colors::matched(&text[pos..end]).to_string());
        last = end;
    }
    out.push_str(&text[last..]);
    out
}

/// Print `data` as pretty JSON
pub fn print_json<T: serde::Serialize>(data: &T) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", colors::warning("Warning"), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{}: {}", colors::error("Error"), message);
}

/// Print a header/title
pub fn print_header(title: &str) {
    println!("{}", colors::label(title));
}
