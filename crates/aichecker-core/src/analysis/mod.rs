//! Full text analysis.
//!
//! [`analyze`] runs every analyzer over one text and merges the results into
//! a single [`AnalysisReport`]. Readability, style, and repetition are
//! independent pure functions and run in parallel; spelling runs on the
//! calling thread against whatever dictionary the caller supplies.
//!
//! Each analyzer can also be called on its own.

pub mod passive_voice;
pub mod repetition;
pub mod reports;
pub mod style;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub use reports::{
    AdverbCount, AnalysisReport, DuplicateSentence, DuplicateWord, LongSentence,
    PassiveVoiceMatch, RepetitionReport, StyleReport, Summary,
};

use crate::readability;
use crate::spelling::{self, DictionaryLookup};
use crate::text;

/// Default word count above which a sentence is reported as long.
pub const DEFAULT_LONG_SENTENCE_THRESHOLD: usize = 30;

/// Default number of times a sentence may appear before it is reported.
pub const DEFAULT_MAX_DUPLICATE_SENTENCES: usize = 1;

/// Default spelling language.
pub const DEFAULT_LANG: &str = "en";

/// Options for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalysisOptions {
    /// Spelling language identifier.
    pub lang: String,
    /// Sentences with more words than this are long. 0 disables the check.
    pub long_sentence_threshold: usize,
    /// Sentences appearing more often than this are duplicates.
    pub max_duplicate_sentences: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            lang: DEFAULT_LANG.to_string(),
            long_sentence_threshold: DEFAULT_LONG_SENTENCE_THRESHOLD,
            max_duplicate_sentences: DEFAULT_MAX_DUPLICATE_SENTENCES,
        }
    }
}

/// Run every analyzer over `text`.
///
/// Never fails: empty or unusual input yields empty lists and `None`
/// readability scores. Without a dictionary the spelling section is
/// disabled rather than an error.
#[tracing::instrument(skip(text, options, lookup), fields(text_len = text.len(), lang = %options.lang))]
pub fn analyze(
    text: &str,
    options: &AnalysisOptions,
    lookup: Option<&dyn DictionaryLookup>,
) -> AnalysisReport {
    let (readability, (style, repetition)) = rayon::join(
        || readability::analyze_readability(text),
        || {
            rayon::join(
                || style::analyze_style(text, options.long_sentence_threshold),
                || repetition::analyze_repetition(text, options.max_duplicate_sentences),
            )
        },
    );
    let spelling = spelling::check_spelling(text, &options.lang, lookup);

    let summary = Summary {
        characters: text.chars().count(),
        words: text::tokenize(text).len(),
        sentences: text::split_sentences(text).len(),
    };

    tracing::info!(
        words = summary.words,
        sentences = summary.sentences,
        spelling_enabled = spelling.enabled,
        "analysis complete"
    );

    AnalysisReport {
        summary,
        readability,
        spelling,
        style,
        repetition,
        options: options.clone(),
    }
}
