// src/core/sanitize.rs

/// Lookup key for a line of dialogue.
///
/// Lowercases, then keeps word characters only (Unicode letters and digits,
/// plus `_`), which drops punctuation and every kind of whitespace.
/// Lowercasing first matters: `İ` lowers to `i` + U+0307, and the combining
/// dot must be filtered too or the key would not be a fixed point.
/// Distinct lines may collapse to the same key; callers decide what wins.
pub fn normalize_key(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_lowercase)
        .filter(|&ch| is_word_char(ch))
        .collect()
}

#[inline]
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

/// Parse an occurrence count as printed by the site: `1,234` → `1234`.
/// Returns `None` for anything that isn't a plain non-negative integer
/// once thousands separators are gone.
pub fn parse_count(s: &str) -> Option<u64> {
    let digits: String = s.trim().chars().filter(|&c| c != ',').collect();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
