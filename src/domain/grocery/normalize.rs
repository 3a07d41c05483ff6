//! Ingredient name normalization.

/// Trims, lower-cases and collapses runs of whitespace to a single space.
///
/// U+FEFF counts as whitespace, so a name pasted with a byte order mark
/// keys the same as one without.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(name: &str) -> String {
    name.to_lowercase()
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}
