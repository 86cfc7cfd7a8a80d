// crates/bharat-core/src/text.rs

//! Small string helpers shared by the builder and the reader.

/// Convert a string into a folded key suitable for matching.
///
/// This performs:
/// 1) Transliterate Unicode → ASCII (e.g. `Śrīnagar` -> `Srinagar`)
/// 2) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use bharat_core::text::fold_key;
///
/// assert_eq!(fold_key("Śrīnagar"), "srinagar");
/// assert_eq!(fold_key("PUNE"), "pune");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after folding.
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

/// File name stem for a state shard.
///
/// Lowercases, collapses every whitespace run into one `-`, then drops
/// anything outside `[a-z0-9-]`. No transliteration happens here: the
/// browse UI derives the same name from the state name with the same rule.
///
/// ```rust
/// use bharat_core::text::slugify;
///
/// assert_eq!(slugify("Andaman & Nicobar Islands"), "andaman--nicobar-islands");
/// assert_eq!(slugify("Jammu  and\tKashmir"), "jammu-and-kashmir");
/// ```
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut dashed = String::with_capacity(lower.len());
    let mut in_ws = false;
    for ch in lower.chars() {
        if ch.is_whitespace() {
            if !in_ws {
                dashed.push('-');
            }
            in_ws = true;
        } else {
            dashed.push(ch);
            in_ws = false;
        }
    }
    dashed
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// Search bucket for a village name: its lowercased first character when
/// that is an ASCII letter, `None` otherwise.
///
/// ```rust
/// use bharat_core::text::index_letter;
///
/// assert_eq!(index_letter("Bandra"), Some('b'));
/// assert_eq!(index_letter("7 Mile Post"), None);
/// assert_eq!(index_letter(""), None);
/// ```
pub fn index_letter(name: &str) -> Option<char> {
    name.chars()
        .next()
        .and_then(|c| c.to_lowercase().next())
        .filter(char::is_ascii_lowercase)
}
