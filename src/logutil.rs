//! Logging helpers for player-typed text, so every log record stays on one line.

/// Longest stretch of a player line worth keeping in a log record.
const MAX_PREVIEW: usize = 80;

/// Render a raw player line for logging.
///
/// The trailing line ending is dropped, anything unprintable left inside is
/// shown with Rust escapes (`\t`, `\n`, `\u{7}`), and the result is capped at
/// [`MAX_PREVIEW`] characters with a trailing ellipsis.
pub fn escape_input(raw: &str) -> String {
    let line = raw.trim_end_matches(|c: char| c == '\r' || c == '\n');
    let mut out: String = line
        .chars()
        .take(MAX_PREVIEW)
        .flat_map(char::escape_debug)
        .collect();
    if line.chars().nth(MAX_PREVIEW).is_some() {
        out.push('…');
    }
    out
}
