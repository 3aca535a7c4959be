//! In-memory dictionary backed by a plain word list.
//!
//! # Format
//!
//! One entry per line: a word, optionally followed by whitespace and a
//! frequency count. Blank lines and lines starting with `#` are ignored.
//!
//! ```text
//! # en word list
//! the 23135851162
//! of 13151942776
//! checker
//! ```
//!
//! Words without a count get frequency 1. Suggestions favour the closest
//! words first (edit distance 1, then 2), then frequent ones.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::{DictionaryError, DictionaryResult};

use super::DictionaryLookup;
use super::edits;

/// A word-list dictionary for one language.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: HashMap<String, u64>,
    alphabet: Vec<char>,
    /// Words with their frequency, keyed by length in characters.
    by_length: BTreeMap<usize, Vec<(String, u64)>>,
}

impl WordListDictionary {
    /// Build a dictionary from `(word, frequency)` pairs.
    ///
    /// Words are stored lowercase; repeated words keep the highest frequency.
    pub fn new<L, I, W>(language: L, entries: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = (W, u64)>,
        W: AsRef<str>,
    {
        let mut words: HashMap<String, u64> = HashMap::new();
        for (word, freq) in entries {
            let word = word.as_ref().to_lowercase();
            let slot = words.entry(word).or_insert(0);
            *slot = (*slot).max(freq);
        }

        let alphabet: BTreeSet<char> = words.keys().flat_map(|w| w.chars()).collect();
        let mut by_length: BTreeMap<usize, Vec<(String, u64)>> = BTreeMap::new();
        for (word, &freq) in &words {
            by_length
                .entry(word.chars().count())
                .or_default()
                .push((word.clone(), freq));
        }

        Self {
            language: language.into(),
            words,
            alphabet: alphabet.into_iter().collect(),
            by_length,
        }
    }

    /// Build a dictionary from bare words, each with frequency 1.
    pub fn from_words<L, I, W>(language: L, words: I) -> Self
    where
        L: Into<String>,
        I: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        Self::new(language, words.into_iter().map(|w| (w, 1)))
    }

    /// Parse word-list text.
    ///
    /// # Errors
    ///
    /// Returns [`DictionaryError::InvalidEntry`] for a line with a
    /// non-numeric count or extra fields, and [`DictionaryError::Empty`]
    /// when no words remain.
    #[tracing::instrument(skip(content), fields(content_len = content.len()))]
    pub fn parse(language: &str, content: &str) -> DictionaryResult<Self> {
        let mut entries = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut fields = line.split_whitespace();
            let invalid = || DictionaryError::InvalidEntry {
                line: idx + 1,
                content: line.to_string(),
            };

            let Some(word) = fields.next() else {
                continue;
            };
            let freq = match fields.next() {
                Some(count) => count.parse::<u64>().map_err(|_| invalid())?,
                None => 1,
            };
            if fields.next().is_some() {
                return Err(invalid());
            }
            entries.push((word, freq));
        }

        if entries.is_empty() {
            return Err(DictionaryError::Empty {
                language: language.to_string(),
            });
        }

        let dict = Self::new(language, entries);
        tracing::debug!(language, words = dict.len(), "word list parsed");
        Ok(dict)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Frequency of a word, if known.
    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.words.get(word).copied()
    }

    /// Known words exactly two edits away, found by comparing against words
    /// whose length differs by at most two.
    fn suggest_distance_two(&self, word: &str) -> Vec<String> {
        let target: Vec<char> = word.chars().collect();
        let len = target.len();
        let mut candidate = Vec::new();
        let mut known = Vec::new();

        for (_, bucket) in self.by_length.range(len.saturating_sub(2)..=len + 2) {
            for (entry, freq) in bucket {
                candidate.clear();
                candidate.extend(entry.chars());
                if edits::bounded_distance(&target, &candidate, 2) == Some(2) {
                    known.push((entry.as_str(), *freq));
                }
            }
        }
        edits::rank(known)
    }
}

impl DictionaryLookup for WordListDictionary {
    fn language(&self) -> &str {
        &self.language
    }

    fn check(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    fn suggest(&self, word: &str) -> Vec<String> {
        if self.check(word) {
            return vec![word.to_string()];
        }
        let nearest = edits::suggest_corrections(word, &self.alphabet, |w| self.frequency(w));
        if !nearest.is_empty() {
            return nearest;
        }
        self.suggest_distance_two(word)
    }
}
