//! Heuristic syllable estimation.
//!
//! Counts vowel groups after dropping a silent trailing `e`, `es`, or `ed`.
//! This is an approximation, not phonetics: "chocolate" and "created" both
//! come out low. Readability scores built on it carry the same bias.

use std::sync::LazyLock;

use regex::Regex;

/// Regex for vowel groups of one or two characters.
static VOWEL_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").expect("valid regex"));

/// Words at or below this many characters always count as one syllable.
const SHORT_WORD_MAX_CHARS: usize = 3;

/// Syllables at which a word counts as a polysyllable.
pub const POLYSYLLABLE_MIN: usize = 3;

/// Estimate the syllable count of a single word. Never returns less than 1.
pub fn count_syllables(word: &str) -> usize {
    if word.chars().count() <= SHORT_WORD_MAX_CHARS {
        return 1;
    }

    let lower = word.to_lowercase();
    let stem = strip_silent_suffix(&lower);
    VOWEL_GROUP.find_iter(stem).count().max(1)
}

fn strip_silent_suffix(word: &str) -> &str {
    word.strip_suffix("es")
        .or_else(|| word.strip_suffix("ed"))
        .or_else(|| word.strip_suffix('e'))
        .unwrap_or(word)
}
