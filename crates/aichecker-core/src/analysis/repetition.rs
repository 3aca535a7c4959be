//! Repetition detection: adjacent duplicate words and repeated sentences.

use std::collections::{HashMap, HashSet};

use crate::text::{self, Sentence};

use super::reports::{DuplicateSentence, DuplicateWord, RepetitionReport};

/// Analyze repetition in text.
///
/// A sentence is reported when its normalized form occurs more than
/// `max_duplicate_sentences` times.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_repetition(text: &str, max_duplicate_sentences: usize) -> RepetitionReport {
    let words = text::lowercase_tokens(text);
    let sentences = text::split_sentences(text);

    let report = RepetitionReport {
        duplicate_words: find_duplicate_words(&words),
        duplicate_sentences: find_duplicate_sentences(&sentences, max_duplicate_sentences),
    };

    tracing::debug!(
        duplicate_words = report.duplicate_words.len(),
        duplicate_sentences = report.duplicate_sentences.len(),
        "repetition analyzed"
    );
    report
}

/// Find words equal to the token right before them.
///
/// Each repeat records its token position; the first occurrence of a run is
/// not recorded, so "cat cat cat" at positions 2..=4 yields `[3, 4]`. Sorted
/// by number of repeats descending, then alphabetically.
pub fn find_duplicate_words(words: &[String]) -> Vec<DuplicateWord> {
    let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();

    for (i, pair) in words.windows(2).enumerate() {
        if pair[0] == pair[1] {
            positions.entry(pair[1].as_str()).or_default().push(i + 1);
        }
    }

    let mut duplicates: Vec<DuplicateWord> = positions
        .into_iter()
        .map(|(word, occurrences)| DuplicateWord {
            word: word.to_string(),
            occurrences,
        })
        .collect();
    duplicates.sort_by(|a, b| {
        b.occurrences
            .len()
            .cmp(&a.occurrences.len())
            .then_with(|| a.word.cmp(&b.word))
    });
    duplicates
}

/// Find sentences whose normalized form occurs more than `max_allowed` times.
///
/// Each normalized form is reported once, with the raw text of its first
/// occurrence, in order of first appearance. Sentences that normalize to
/// nothing (pure punctuation) are ignored.
pub fn find_duplicate_sentences(
    sentences: &[Sentence<'_>],
    max_allowed: usize,
) -> Vec<DuplicateSentence> {
    let normalized: Vec<String> = sentences
        .iter()
        .map(|s| text::normalize_sentence(s.text))
        .collect();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for n in normalized.iter().filter(|n| !n.is_empty()) {
        *counts.entry(n.as_str()).or_insert(0) += 1;
    }

    let mut seen: HashSet<&str> = HashSet::new();
    sentences
        .iter()
        .zip(&normalized)
        .filter_map(|(sentence, norm)| {
            let count = counts.get(norm.as_str()).copied()?;
            (count > max_allowed && seen.insert(norm.as_str())).then(|| DuplicateSentence {
                sentence: sentence.text.to_string(),
                count,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacent_duplicates_with_positions() {
        let report = analyze_repetition("the the cat cat cat", 1);
        assert_eq!(
            report.duplicate_words,
            vec![
                DuplicateWord {
                    word: "cat".to_string(),
                    occurrences: vec![3, 4],
                },
                DuplicateWord {
                    word: "the".to_string(),
                    occurrences: vec![1],
                },
            ]
        );
    }

    #[test]
    fn non_adjacent_repeats_ignored() {
        let report = analyze_repetition("the cat and the dog and the bird", 1);
        assert!(report.duplicate_words.is_empty());
    }

    #[test]
    fn duplicates_are_case_insensitive_and_cross_punctuation() {
        let report = analyze_repetition("Sometimes words, Words repeat. Repeat.", 5);
        let words: Vec<_> = report
            .duplicate_words
            .iter()
            .map(|d| (d.word.as_str(), d.occurrences.clone()))
            .collect();
        assert_eq!(words, vec![("repeat", vec![4]), ("words", vec![2])]);
    }

    #[test]
    fn ties_sorted_alphabetically() {
        let report = analyze_repetition("zed zed alpha alpha mid mid", 1);
        let words: Vec<_> = report
            .duplicate_words
            .iter()
            .map(|d| d.word.as_str())
            .collect();
        assert_eq!(words, vec!["alpha", "mid", "zed"]);
    }

    #[test]
    fn duplicate_sentence_flagged_above_limit() {
        let report = analyze_repetition("Stop. Stop.", 1);
        assert_eq!(
            report.duplicate_sentences,
            vec![DuplicateSentence {
                sentence: "Stop.".to_string(),
                count: 2,
            }]
        );

        let report = analyze_repetition("Stop. Stop.", 2);
        assert!(report.duplicate_sentences.is_empty());
    }

    #[test]
    fn normalized_forms_group_variants_once() {
        let text = "Hello, world! Something else. hello world. HELLO   WORLD?";
        let report = analyze_repetition(text, 1);
        assert_eq!(report.duplicate_sentences.len(), 1);
        assert_eq!(report.duplicate_sentences[0].sentence, "Hello, world!");
        assert_eq!(report.duplicate_sentences[0].count, 3);
    }

    #[test]
    fn groups_reported_in_first_appearance_order() {
        let text = "B one. A two. B one. A two. B one.";
        let report = analyze_repetition(text, 1);
        let sentences: Vec<_> = report
            .duplicate_sentences
            .iter()
            .map(|d| (d.sentence.as_str(), d.count))
            .collect();
        assert_eq!(sentences, vec![("B one.", 3), ("A two.", 2)]);
    }

    #[test]
    fn zero_limit_flags_every_sentence() {
        let report = analyze_repetition("One. Two.", 0);
        assert_eq!(report.duplicate_sentences.len(), 2);
    }

    #[test]
    fn punctuation_only_sentences_ignored() {
        let report = analyze_repetition("... ... ...", 0);
        assert!(report.duplicate_sentences.is_empty());
    }

    #[test]
    fn empty_text() {
        assert_eq!(analyze_repetition("", 1), RepetitionReport::default());
    }
}
