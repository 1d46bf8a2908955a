/// Accented characters seen in the course folder names, paired with their
/// ASCII replacements. Anything not listed here falls through to the
/// alphanumeric filter below and is dropped.
const ACCENT_TABLE: &[(char, &str)] = &[
    ('é', "e"),
    ('è', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('à', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('î', "i"),
    ('ï', "i"),
    ('ô', "o"),
    ('õ', "o"),
    ('û', "u"),
    ('ü', "u"),
    ('ç', "c"),
    ('°', ""),
];

/// Normalize arbitrary text into a lowercase hyphenated slug safe for use as
/// a storage key or course id fragment.
///
/// Total function: never fails, may return an empty string when the input
/// contains no retainable characters.
pub fn sanitize(text: &str) -> String {
    let mut transliterated = String::with_capacity(text.len());
    for ch in text.chars() {
        match ACCENT_TABLE.iter().find(|(accented, _)| *accented == ch) {
            Some((_, replacement)) => transliterated.push_str(replacement),
            None => transliterated.push(ch),
        }
    }

    let filtered: String = transliterated
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();

    filtered
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}

/// Truncate to at most `max_chars` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
