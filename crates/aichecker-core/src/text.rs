//! Text processing utilities.
//!
//! Provides sentence splitting, word tokenization, and sentence normalization
//! for use by the analysis modules. Every analyzer sees the same segmentation,
//! so counts agree across reports.

use std::sync::LazyLock;

use regex::Regex;

/// Regex for word tokens: letter runs joined by internal hyphens or apostrophes.
static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\p{L}+(?:[-']\p{L}+)*").expect("valid regex"));

/// Regex for runs of whitespace, non-word characters, and underscores.
static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\W_]+").expect("valid regex"));

/// A sentence borrowed from the analyzed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    /// Position in order of appearance (0-based).
    pub index: usize,
    /// Raw sentence text, terminal punctuation included.
    pub text: &'a str,
}

/// Split text into sentences.
///
/// A boundary is a `.`, `!`, or `?` immediately followed by whitespace; the
/// terminator stays with its sentence and the whitespace run is dropped.
/// Leading and trailing whitespace of the whole text is ignored, and
/// whitespace-only input yields no sentences.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<Sentence<'_>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = trimmed.char_indices().peekable();

    while let Some((pos, ch)) = chars.next() {
        if !is_sentence_terminator(ch) {
            continue;
        }
        let end = pos + ch.len_utf8();
        if !chars.peek().is_some_and(|&(_, next)| next.is_whitespace()) {
            continue;
        }

        push_sentence(&mut sentences, &trimmed[start..end]);
        while chars.next_if(|&(_, c)| c.is_whitespace()).is_some() {}
        start = chars.peek().map_or(trimmed.len(), |&(next_pos, _)| next_pos);
    }

    if start < trimmed.len() {
        push_sentence(&mut sentences, &trimmed[start..]);
    }

    sentences
}

fn push_sentence<'a>(sentences: &mut Vec<Sentence<'a>>, text: &'a str) {
    if text.trim().is_empty() {
        return;
    }
    sentences.push(Sentence {
        index: sentences.len(),
        text,
    });
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Extract word tokens in order of appearance.
///
/// Digits and punctuation never appear inside a token, so `"don't"` and
/// `"well-known"` are single tokens while `"abc123def"` yields two.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Lowercase word tokens, as consumed by the style and repetition checks.
pub fn lowercase_tokens(text: &str) -> Vec<String> {
    WORD_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Normalize a sentence for duplicate comparison.
///
/// Lowercases, collapses every run of whitespace, punctuation, and
/// underscores into one space, and trims the ends.
pub fn normalize_sentence(sentence: &str) -> String {
    let lower = sentence.to_lowercase();
    NON_WORD_RUN.replace_all(&lower, " ").trim().to_string()
}
