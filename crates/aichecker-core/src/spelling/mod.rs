//! Optional offline spell checking.
//!
//! The checker itself owns no dictionary. Callers build a
//! [`DictionaryLookup`] for the language they want (a [`WordListDictionary`],
//! or anything else that can answer `check`/`suggest`) and pass it in. Without
//! one, [`check_spelling`] returns a disabled report instead of failing.
//!
//! # Candidate selection
//!
//! Only tokens that look like ordinary lowercase words are checked: a run of
//! word characters with at least one letter and no uppercase letter at all.
//! Capitalized words, acronyms, and mixed-case identifiers are skipped as
//! likely proper nouns.

pub mod edits;
pub mod wordlist;

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use wordlist::WordListDictionary;

/// Regex for word-character runs.
static WORD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// A dictionary that can recognize words and propose corrections.
///
/// Implementations must be safe to share across threads; lookups take
/// `&self` and never block on I/O.
pub trait DictionaryLookup: Send + Sync {
    /// Language identifier the dictionary was built for (e.g., "en").
    fn language(&self) -> &str;

    /// Whether `word` (lowercase) is a known word.
    fn check(&self, word: &str) -> bool;

    /// Ordered candidate corrections for `word`, best first. May be empty.
    fn suggest(&self, word: &str) -> Vec<String>;
}

/// Result of spell checking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SpellingReport {
    /// Whether a dictionary was available.
    pub enabled: bool,
    /// Language that was checked (or requested, when disabled).
    pub language: String,
    /// Number of distinct unknown words.
    pub total_unknown: usize,
    /// Unknown words in alphabetical order.
    pub issues: Vec<SpellingIssue>,
    /// Why checking was skipped, when disabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl SpellingReport {
    /// A report for when no dictionary is available.
    pub fn disabled(language: &str) -> Self {
        Self {
            enabled: false,
            language: language.to_string(),
            total_unknown: 0,
            issues: Vec::new(),
            note: Some(format!(
                "spell checking disabled: no dictionary available for language '{language}'"
            )),
        }
    }
}

/// An unknown word and its best suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SpellingIssue {
    /// The unknown word, lowercased.
    pub word: String,
    /// First suggestion from the dictionary, if it had any.
    pub suggestion: Option<String>,
}

/// Check spelling of text against an optional dictionary.
#[tracing::instrument(skip(text, lookup), fields(text_len = text.len(), enabled = lookup.is_some()))]
pub fn check_spelling(
    text: &str,
    language: &str,
    lookup: Option<&dyn DictionaryLookup>,
) -> SpellingReport {
    let Some(lookup) = lookup else {
        tracing::debug!(language, "no dictionary, spelling disabled");
        return SpellingReport::disabled(language);
    };

    if lookup.language() != language {
        tracing::warn!(
            requested = language,
            dictionary = lookup.language(),
            "dictionary language differs from requested language"
        );
    }

    let issues: Vec<SpellingIssue> = spelling_candidates(text)
        .into_iter()
        .filter(|word| !lookup.check(word))
        .map(|word| {
            let suggestion = lookup.suggest(&word).into_iter().next();
            SpellingIssue { word, suggestion }
        })
        .collect();

    tracing::debug!(unknown = issues.len(), "spelling checked");
    SpellingReport {
        enabled: true,
        language: lookup.language().to_string(),
        total_unknown: issues.len(),
        issues,
        note: None,
    }
}

/// Distinct lowercase words worth checking, in alphabetical order.
pub fn spelling_candidates(text: &str) -> BTreeSet<String> {
    WORD_RUN
        .find_iter(text)
        .map(|m| m.as_str())
        .filter(|t| t.chars().any(char::is_alphabetic) && !t.chars().any(char::is_uppercase))
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> WordListDictionary {
        WordListDictionary::new(
            "en",
            [
                ("this", 10),
                ("is", 10),
                ("a", 10),
                ("simple", 5),
                ("sample", 5),
                ("text", 5),
            ],
        )
    }

    #[test]
    fn disabled_without_dictionary() {
        let report = check_spelling("Anything at all, even mispeled.", "en", None);
        assert!(!report.enabled);
        assert_eq!(report.total_unknown, 0);
        assert!(report.issues.is_empty());
        assert!(report.note.as_deref().is_some_and(|n| !n.is_empty()));
    }

    #[test]
    fn disabled_report_for_empty_text() {
        let report = check_spelling("", "fr", None);
        assert_eq!(report, SpellingReport::disabled("fr"));
    }

    #[test]
    fn unknown_words_with_suggestions() {
        let dict = english();
        let report = check_spelling("this is a simpel sampel text", "en", Some(&dict));
        assert!(report.enabled);
        assert_eq!(report.total_unknown, 2);
        assert_eq!(
            report.issues,
            vec![
                SpellingIssue {
                    word: "sampel".to_string(),
                    suggestion: Some("sample".to_string()),
                },
                SpellingIssue {
                    word: "simpel".to_string(),
                    suggestion: Some("simple".to_string()),
                },
            ]
        );
    }

    #[test]
    fn unknown_without_suggestion() {
        let dict = english();
        let report = check_spelling("qqqqqqqqqq", "en", Some(&dict));
        assert_eq!(report.total_unknown, 1);
        assert!(report.issues[0].suggestion.is_none());
    }

    #[test]
    fn skips_any_uppercase() {
        let candidates = spelling_candidates("Alice met NASA and iPhone users");
        let words: Vec<_> = candidates.iter().map(String::as_str).collect();
        assert_eq!(words, vec!["and", "met", "users"]);
    }

    #[test]
    fn requires_a_letter() {
        let candidates = spelling_candidates("42 _ __x__ abc123");
        let words: Vec<_> = candidates.iter().map(String::as_str).collect();
        assert_eq!(words, vec!["__x__", "abc123"]);
    }

    #[test]
    fn deduplicates_candidates() {
        let dict = english();
        let report = check_spelling("zorp zorp zorp", "en", Some(&dict));
        assert_eq!(report.total_unknown, 1);
    }

    #[test]
    fn disabled_note_is_omitted_when_enabled() {
        let dict = english();
        let report = check_spelling("this", "en", Some(&dict));
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("note").is_none());
        assert_eq!(json["total_unknown"], 0);
    }
}
