//! Built-in cleaning steps.
//!
//! Each function returns the rules for one stage of a chain. The patterns
//! are constants, so compiling them cannot fail.

use regex::Captures;

use super::rule::{Abbreviation, CleaningRule, Replacement};

fn builtin(name: &str, pattern: &str, replacement: Replacement) -> CleaningRule {
    CleaningRule::new(name, pattern, replacement).expect("built-in cleaning pattern is valid")
}

fn builtin_phrase(name: &str, phrases: &[&str], short: &str) -> CleaningRule {
    CleaningRule::phrase(name, phrases, short).expect("built-in phrase pattern is valid")
}

/// Keep what follows the last "to", drop what follows the first "via".
///
/// Neither cut happens when it would leave nothing behind.
pub fn keep_to_and_remove_via() -> Vec<CleaningRule> {
    vec![
        builtin(
            "keep to",
            r"(?is)^.*\bto\b\s*(\S.*)$",
            Replacement::Template("$1".into()),
        ),
        builtin(
            "remove via",
            r"(?is)^(.*?\S.*?)\s*\bvia\b.*$",
            Replacement::Template("$1".into()),
        ),
    ]
}

/// Any run of slashes, with the whitespace around it, becomes " / ".
pub fn clean_slashes() -> CleaningRule {
    builtin("slashes", r"\s*/[\s/]*", Replacement::Literal(" / ".into()))
}

/// Phrase abbreviations applied to trip headsigns, in order.
pub fn default_headsign_abbreviations() -> Vec<Abbreviation> {
    vec![
        Abbreviation::new(&["community college"], "CC"),
        Abbreviation::new(&["everett / everett boeing"], "Everett Boeing"),
        Abbreviation::new(
            &["park & ride", "park and ride", "park&ride", "park-and-ride"],
            "P&R",
        ),
        Abbreviation::new(
            &["transit center", "transit centre", "transit", "centre"],
            "TC",
        ),
        Abbreviation::new(&["swift station", "swift sta"], "Sta"),
        Abbreviation::new(&["university district"], "U District"),
    ]
}

/// "and" → "&", "at" → "@".
pub fn and_at() -> Vec<CleaningRule> {
    vec![
        builtin_phrase("and", &["and"], "&"),
        builtin_phrase("at", &["at"], "@"),
    ]
}

/// "Saint" → "St".
pub fn saint() -> CleaningRule {
    builtin_phrase("saint", &["saint"], "St")
}

/// Dotted initials lose their dots: "N.E." → "NE".
pub fn remove_points() -> CleaningRule {
    builtin(
        "points",
        r"\b(?:\p{L}\.){2,}",
        Replacement::Computed(strip_points),
    )
}

fn strip_points(caps: &Captures<'_>) -> String {
    caps[0].replace('.', "")
}

/// Ordinal words become numbers; numbers take their ordinal suffix directly.
pub fn clean_numbers() -> Vec<CleaningRule> {
    vec![
        builtin(
            "ordinal words",
            r"(?i)\b(first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth)\b",
            Replacement::Computed(ordinal_word),
        ),
        builtin(
            "ordinal suffix",
            r"(?i)\b([0-9]+)(\s*)(st|nd|rd|th)\b",
            Replacement::Computed(ordinal_suffix),
        ),
    ]
}

fn ordinal_word(caps: &Captures<'_>) -> String {
    let n = match caps[1].to_ascii_lowercase().as_str() {
        "first" => 1,
        "second" => 2,
        "third" => 3,
        "fourth" => 4,
        "fifth" => 5,
        "sixth" => 6,
        "seventh" => 7,
        "eighth" => 8,
        "ninth" => 9,
        "tenth" => 10,
        _ => return caps[0].to_string(),
    };
    format!("{n}{}", expected_suffix(&n.to_string()))
}

// A suffix that doesn't fit the number ("128 St") is a street, not an ordinal.
// Neither is a detached "St" or "Rd" spelled the way the street types write
// them, so "21 Street" stays "21 St" when the chain runs again.
fn ordinal_suffix(caps: &Captures<'_>) -> String {
    let digits = &caps[1];
    let detached = !caps[2].is_empty();
    let suffix = &caps[3];
    if detached && STREET_TYPES.iter().any(|&(_, short)| short == suffix) {
        return caps[0].to_string();
    }
    let suffix = suffix.to_ascii_lowercase();
    if expected_suffix(digits) == suffix {
        format!("{digits}{suffix}")
    } else {
        caps[0].to_string()
    }
}

fn expected_suffix(digits: &str) -> &'static str {
    let bytes = digits.as_bytes();
    let last = bytes.last().copied().unwrap_or(b'0');
    let tens = if bytes.len() >= 2 {
        bytes[bytes.len() - 2]
    } else {
        b'0'
    };
    if tens == b'1' {
        return "th";
    }
    match last {
        b'1' => "st",
        b'2' => "nd",
        b'3' => "rd",
        _ => "th",
    }
}

const STREET_TYPES: &[(&str, &str)] = &[
    ("avenue", "Ave"),
    ("boulevard", "Blvd"),
    ("circle", "Cir"),
    ("court", "Ct"),
    ("drive", "Dr"),
    ("highway", "Hwy"),
    ("lake", "Lk"),
    ("lane", "Ln"),
    ("park", "Pk"),
    ("parkway", "Pkwy"),
    ("place", "Pl"),
    ("road", "Rd"),
    ("square", "Sq"),
    ("station", "Sta"),
    ("street", "St"),
    ("terrace", "Ter"),
    ("village", "Vlg"),
];

/// Street and place types take one canonical short spelling each.
pub fn clean_street_types() -> Vec<CleaningRule> {
    STREET_TYPES
        .iter()
        .map(|&(long, short)| builtin_phrase(long, &[long], short))
        .collect()
}

const PARTICLES: &[&str] = &["of", "the", "on", "in", "de"];

/// Whitespace, punctuation spacing, trimming and word casing.
pub fn clean_label() -> Vec<CleaningRule> {
    vec![
        builtin("spaces", r"\s+", Replacement::Literal(" ".into())),
        builtin("open paren", r"\(\s+", Replacement::Literal("(".into())),
        builtin("close paren", r"\s+\)", Replacement::Literal(")".into())),
        builtin(
            "punctuation",
            r"\s+([,;])",
            Replacement::Template("$1".into()),
        ),
        builtin(
            "edges",
            r"^[\s,;/-]+|[\s,;/-]+$",
            Replacement::Literal(String::new()),
        ),
        builtin("casing", r"\b[A-Za-z]+\b", Replacement::Computed(word_case)),
    ]
}

fn word_case(caps: &Captures<'_>) -> String {
    let word = &caps[0];
    let leading = caps.get(0).is_some_and(|m| m.start() == 0);
    if word.bytes().all(|b| b.is_ascii_lowercase()) {
        if !leading && PARTICLES.contains(&word) {
            return word.to_string();
        }
        return capitalize(word);
    }
    if word.len() >= 4 && word.bytes().all(|b| b.is_ascii_uppercase()) {
        return capitalize(&word.to_ascii_lowercase());
    }
    word.to_string()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
