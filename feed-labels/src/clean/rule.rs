//! A single rewrite rule.

use std::borrow::Cow;
use std::fmt;

use regex::{Captures, NoExpand, Regex};
use serde::{Deserialize, Serialize};

/// Replacement computed from the match.
pub type ComputeFn = fn(&Captures<'_>) -> String;

/// What a rule writes in place of each match.
#[derive(Clone)]
pub enum Replacement {
    /// Inserted as-is; `$` has no meaning.
    Literal(String),
    /// Regex template, `$1` and `${name}` expand to capture groups.
    Template(String),
    /// Computed per match.
    Computed(ComputeFn),
}

/// A phrase and its short form, e.g. "Community College" → "CC".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abbreviation {
    /// Spellings that all abbreviate to `short`. Matched case-insensitively,
    /// any run of whitespace inside a phrase matches any other.
    pub phrases: Vec<String>,
    pub short: String,
}

impl Abbreviation {
    /// Abbreviate any of `phrases` to `short`.
    pub fn new(phrases: &[&str], short: &str) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
            short: short.to_string(),
        }
    }
}

/// A regex and its replacement, applied to every match in the text.
#[derive(Clone)]
pub struct CleaningRule {
    name: String,
    pattern: Regex,
    replacement: Replacement,
}

impl CleaningRule {
    /// Compile `pattern` into a named rule.
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        replacement: Replacement,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            pattern: Regex::new(pattern)?,
            replacement,
        })
    }

    /// Case-insensitive rule replacing any of `phrases` with `short`.
    ///
    /// Each phrase is anchored on word boundaries wherever its edge is a word
    /// character, so "Transit" never matches inside "Transitway" and the
    /// characters around a match are left untouched. Longer phrases are tried
    /// first.
    pub fn phrase(
        name: impl Into<String>,
        phrases: &[impl AsRef<str>],
        short: &str,
    ) -> Result<Self, regex::Error> {
        Self::new(
            name,
            &phrase_pattern(phrases, short),
            Replacement::Literal(short.to_string()),
        )
    }

    /// A [`phrase`](Self::phrase) rule named after its short form.
    pub fn from_abbreviation(abbreviation: &Abbreviation) -> Result<Self, regex::Error> {
        Self::phrase(
            format!("abbreviate {}", abbreviation.short),
            abbreviation.phrases.as_slice(),
            &abbreviation.short,
        )
    }

    /// Name used in logs.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The compiled pattern source.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Whether the rule would rewrite anything in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.pattern.is_match(text)
    }

    /// Rewrite every match in `text`.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        match &self.replacement {
            Replacement::Literal(s) => self.pattern.replace_all(text, NoExpand(s)),
            Replacement::Template(t) => self.pattern.replace_all(text, t.as_str()),
            Replacement::Computed(f) => self
                .pattern
                .replace_all(text, |caps: &Captures<'_>| f(caps)),
        }
    }
}

impl fmt::Debug for CleaningRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CleaningRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish()
    }
}

fn phrase_pattern(phrases: &[impl AsRef<str>], short: &str) -> String {
    let mut phrases: Vec<&str> = phrases
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|p| !p.is_empty())
        .collect();
    if phrases.is_empty() {
        // Never matches.
        return r"\b\B".to_string();
    }
    phrases.sort_by_key(|p| std::cmp::Reverse(p.len()));

    let prefixes = loop_prefixes(&phrases, short);
    let alternatives: Vec<String> = phrases
        .into_iter()
        .map(|phrase| phrase_alternative(phrase, &prefixes))
        .collect();
    format!("(?i)(?:{})", alternatives.join("|"))
}

/// Words that, put in front of `short`, spell one of the phrases again.
///
/// "swift sta" abbreviates to "Sta", so "Swift Swift Sta" would shrink by
/// one "Swift" per pass. Matching any run of these prefixes in front of a
/// phrase collapses the whole run at once.
fn loop_prefixes(phrases: &[&str], short: &str) -> Vec<Vec<String>> {
    let short: Vec<String> = short.split_whitespace().map(str::to_lowercase).collect();
    if short.is_empty() {
        return Vec::new();
    }
    let mut prefixes: Vec<Vec<String>> = phrases
        .iter()
        .filter_map(|phrase| {
            let words: Vec<String> = phrase.split_whitespace().map(str::to_lowercase).collect();
            let split = words.len().checked_sub(short.len())?;
            (split > 0 && words[split..] == short[..]).then(|| words[..split].to_vec())
        })
        .collect();
    prefixes.sort();
    prefixes.dedup();
    prefixes
}

fn words_pattern(words: impl IntoIterator<Item = impl AsRef<str>>) -> String {
    words
        .into_iter()
        .map(|w| regex::escape(w.as_ref()))
        .collect::<Vec<_>>()
        .join(r"\s+")
}

fn phrase_alternative(phrase: &str, prefixes: &[Vec<String>]) -> String {
    let starts_with_word = phrase.chars().next().is_some_and(is_word_char);
    let lead = if starts_with_word { r"\b" } else { "" };
    let trail = if phrase.chars().next_back().is_some_and(is_word_char) {
        r"\b"
    } else {
        ""
    };

    // A prefix only fits where it keeps the leading boundary valid.
    let repeats: Vec<String> = prefixes
        .iter()
        .filter(|words| {
            words
                .first()
                .and_then(|w| w.chars().next())
                .is_some_and(|c| is_word_char(c) == starts_with_word)
        })
        .map(|words| words_pattern(words))
        .collect();
    let repeat = if repeats.is_empty() {
        String::new()
    } else {
        format!(r"(?:(?:{})\s+)*", repeats.join("|"))
    };

    let body = words_pattern(phrase.split_whitespace());
    format!("{lead}{repeat}{body}{trail}")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
