use regex::Regex;
use std::sync::OnceLock;

/// Placeholder substituted for characters that have no transliteration
pub const DEFAULT_PLACEHOLDER: &str = "_icr_";

/// Cyrillic letters and their closest ASCII approximation
pub const TRANSLITERATION: &[(char, &str)] = &[
    ('й', "iy"),
    ('ц', "c"),
    ('у', "y"),
    ('к', "k"),
    ('е', "e"),
    ('н', "n"),
    ('г', "g"),
    ('ш', "sh"),
    ('щ', "sch"),
    ('з', "e"),
    ('х', "h"),
    ('ї', "yi"),
    ('ф', "f"),
    ('і', "i"),
    ('в', "v"),
    ('а', "a"),
    ('п', "p"),
    ('р', "p"),
    ('о', "o"),
    ('л', "l"),
    ('д', "d"),
    ('ж', "j"),
    ('є', "e"),
    ('я', "ya"),
    ('ч', "ch"),
    ('с', "c"),
    ('м', "m"),
    ('и', "i"),
    ('т', "t"),
    ('ь', "b"),
    ('б', "b"),
    ('ю', "yu"),
    ('ъ', "_"),
    ('ы', "u"),
    ('ё', "yo"),
    ('э', "ue"),
];

static WORD_BOUNDARY: OnceLock<Regex> = OnceLock::new();

fn word_boundary() -> &'static Regex {
    // A match can never start on the upper-case letter of a previous match,
    // so non-overlapping replacement covers every boundary.
    WORD_BOUNDARY.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap())
}

/// Convert a base name to underscore case.
///
/// `fileName1Test` becomes `file_name1_test`, `My-Photo` becomes `my_photo`
/// and `Summer Trip` becomes `summer_trip`.
pub fn to_underscore(name: &str) -> String {
    let split = word_boundary().replace_all(name, "${1}_${2}");
    split.replace('-', "_").to_lowercase().replace(' ', "_")
}

/// ASCII letters, ASCII digits, `_` and `.`
pub fn is_valid_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

pub fn is_valid_name(name: &str) -> bool {
    name.chars().all(is_valid_char)
}

pub fn transliterate(c: char) -> Option<&'static str> {
    TRANSLITERATION
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

/// Replace every invalid character with its transliteration, or with
/// `placeholder` when the table has no entry for it.
pub fn force_replace_chars(name: &str, placeholder: &str) -> String {
    let mut result = String::with_capacity(name.len());
    for c in name.chars() {
        if is_valid_char(c) {
            result.push(c);
        } else if let Some(replacement) = transliterate(c) {
            result.push_str(replacement);
        } else {
            result.push_str(placeholder);
        }
    }
    result
}
