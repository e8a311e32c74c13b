//! Rule-chain text cleaning.
//!
//! A [`TextCleaner`] is an ordered list of [`CleaningRule`]s folded over the
//! input. Order matters: slashes are spaced before the phrase rules see
//! them, and casing runs last so that it never hides a phrase from a rule.
//!
//! One fold is not always a fixed point (cutting at "via" can expose a phrase
//! that an earlier rule would have caught), so the chain is re-run until a
//! pass leaves the text alone. Phrase rules swallow runs of repeated
//! prefixes in one go, which keeps the number of passes small.

mod rule;
pub mod steps;

pub use rule::{Abbreviation, CleaningRule, ComputeFn, Replacement};

use tracing::warn;

/// Passes allowed on top of one per input word.
const MAX_PASSES: usize = 16;

/// An ordered chain of cleaning rules.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    rules: Vec<CleaningRule>,
}

impl TextCleaner {
    /// A chain of `rules`, applied in order.
    pub fn new(rules: Vec<CleaningRule>) -> Self {
        Self { rules }
    }

    /// The trip headsign chain.
    ///
    /// 1. keep after "to", drop after "via"
    /// 2. slashes
    /// 3. `abbreviations`, in the order given
    /// 4. "and"/"at"
    /// 5. ordinals and street types
    /// 6. label spacing and casing
    pub fn headsign(abbreviations: &[Abbreviation]) -> Result<Self, regex::Error> {
        let mut rules = steps::keep_to_and_remove_via();
        rules.push(steps::clean_slashes());
        for abbreviation in abbreviations {
            rules.push(CleaningRule::from_abbreviation(abbreviation)?);
        }
        rules.extend(steps::and_at());
        rules.extend(steps::clean_numbers());
        rules.extend(steps::clean_street_types());
        rules.extend(steps::clean_label());
        Ok(Self::new(rules))
    }

    /// The stop name chain.
    pub fn stop_name() -> Self {
        let mut rules = vec![steps::saint()];
        rules.extend(steps::and_at());
        rules.push(steps::clean_slashes());
        rules.push(steps::remove_points());
        rules.extend(steps::clean_street_types());
        rules.extend(steps::clean_label());
        Self::new(rules)
    }

    /// The rules, in application order.
    pub fn rules(&self) -> &[CleaningRule] {
        &self.rules
    }

    /// Clean `text` until the chain no longer changes it.
    ///
    /// The pass limit grows with the word count of `text`.
    pub fn clean(&self, text: &str) -> String {
        let max_passes = MAX_PASSES + text.split_whitespace().count();
        let mut current = self.pass(text);
        for _ in 1..max_passes {
            let next = self.pass(&current);
            if next == current {
                return current;
            }
            current = next;
        }
        warn!(
            input = text,
            output = %current,
            passes = max_passes,
            "Cleaning did not settle"
        );
        current
    }

    fn pass(&self, text: &str) -> String {
        self.rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(&acc).into_owned())
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::headsign(&steps::default_headsign_abbreviations())
            .expect("default abbreviations compile")
    }
}
