//! Style analysis: long sentences, passive voice, and -ly adverbs.

use std::collections::HashMap;

use crate::text::{self, Sentence};
use crate::word_lists::ADVERB_EXCLUSIONS;

use super::passive_voice::detect_passive_voice;
use super::reports::{AdverbCount, LongSentence, StyleReport};

/// Analyze style for text.
///
/// A sentence is long when its word count is strictly greater than
/// `long_sentence_threshold`. A threshold of 0 disables the check.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze_style(text: &str, long_sentence_threshold: usize) -> StyleReport {
    let sentences = text::split_sentences(text);
    let words = text::lowercase_tokens(text);

    let report = StyleReport {
        long_sentences: find_long_sentences(&sentences, long_sentence_threshold),
        passive_voice: detect_passive_voice(&sentences),
        adverbs: count_adverbs(&words),
    };

    tracing::debug!(
        long = report.long_sentences.len(),
        passive = report.passive_voice.len(),
        adverbs = report.adverbs.len(),
        "style analyzed"
    );
    report
}

/// Sentences whose word count exceeds `threshold`, in order.
pub fn find_long_sentences(sentences: &[Sentence<'_>], threshold: usize) -> Vec<LongSentence> {
    if threshold == 0 {
        return Vec::new();
    }

    sentences
        .iter()
        .filter_map(|s| {
            let word_count = text::tokenize(s.text).len();
            (word_count > threshold).then(|| LongSentence {
                index: s.index,
                word_count,
                text: s.text.to_string(),
            })
        })
        .collect()
}

/// Count -ly adverbs in lowercase word tokens.
///
/// A word qualifies when it is longer than three characters, ends in "ly",
/// and is not one of the known non-adverbs ("only", "family", ...). Sorted by
/// count descending, then alphabetically.
pub fn count_adverbs(words: &[String]) -> Vec<AdverbCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for w in words {
        if w.chars().count() > 3 && w.ends_with("ly") && !ADVERB_EXCLUSIONS.contains(w.as_str()) {
            *counts.entry(w.as_str()).or_insert(0) += 1;
        }
    }

    let mut adverbs: Vec<AdverbCount> = counts
        .into_iter()
        .map(|(word, count)| AdverbCount {
            word: word.to_string(),
            count,
        })
        .collect();
    adverbs.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    adverbs
}
