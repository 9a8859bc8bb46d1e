//! Message normalization — what reaches the machine.
//!
//! Uppercase (full Unicode case mapping), strip whitespace, drop anything
//! outside A–Z.
//! Dropped symbols are logged at `warn`; whitespace is dropped silently.

use tracing::warn;

/// Normalize free text into cipher input.
///
/// Uppercasing uses the full Unicode mapping, so `ß` becomes `SS` and the
/// dotless `ı` becomes `I`. Letters without an A–Z uppercase form (`é`)
/// are dropped, not transliterated.
pub fn normalize_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .filter(|&c| {
            let keep = c.is_ascii_uppercase();
            if !keep {
                warn!(symbol = ?c, "removing invalid character from message");
            }
            keep
        })
        .collect()
}

/// Split `text` into space-separated groups of `size` letters.
///
/// `size == 0` returns the text unchanged. The last group may be short.
pub fn group_letters(text: &str, size: usize) -> String {
    if size == 0 {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(size)
        .map(|group| group.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
