//! Report structs for text analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! use in both CLI JSON output and MCP tool responses. List fields are
//! always present, possibly empty.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::readability::ReadabilityReport;
use crate::spelling::SpellingReport;

use super::AnalysisOptions;

/// Full analysis report for one text and one set of options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AnalysisReport {
    /// Character, word, and sentence counts.
    pub summary: Summary,
    /// Readability formulas.
    pub readability: ReadabilityReport,
    /// Unknown words and suggestions.
    pub spelling: SpellingReport,
    /// Long sentences, passive voice, adverbs.
    pub style: StyleReport,
    /// Adjacent duplicate words and repeated sentences.
    pub repetition: RepetitionReport,
    /// Options the analysis ran with.
    pub options: AnalysisOptions,
}

/// Basic size counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Summary {
    /// Number of characters (Unicode scalar values).
    pub characters: usize,
    /// Number of word tokens.
    pub words: usize,
    /// Number of sentences.
    pub sentences: usize,
}

// -- Style ------------------------------------------------------------------

/// Style heuristics report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StyleReport {
    /// Sentences with more words than the threshold, in order.
    pub long_sentences: Vec<LongSentence>,
    /// Possible passive constructions, in order.
    pub passive_voice: Vec<PassiveVoiceMatch>,
    /// Adverb frequencies, most frequent first.
    pub adverbs: Vec<AdverbCount>,
}

/// A sentence flagged as too long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LongSentence {
    /// Sentence index (0-based).
    pub index: usize,
    /// Word count.
    pub word_count: usize,
    /// Raw sentence text.
    pub text: String,
}

/// A detected "be-verb + participle" construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PassiveVoiceMatch {
    /// Sentence index (0-based).
    pub index: usize,
    /// The matched text as written (e.g., "was thrown").
    #[serde(rename = "match")]
    pub text: String,
    /// The auxiliary verb, lowercased (e.g., "was").
    pub auxiliary: String,
    /// The participle, lowercased (e.g., "thrown").
    pub participle: String,
    /// The full sentence.
    pub sentence: String,
}

/// An -ly adverb and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AdverbCount {
    /// The adverb, lowercased.
    pub word: String,
    /// Occurrences in the text.
    pub count: usize,
}

// -- Repetition -------------------------------------------------------------

/// Repetition report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RepetitionReport {
    /// Words repeated back to back, most repeated first.
    pub duplicate_words: Vec<DuplicateWord>,
    /// Sentences occurring more often than allowed, in order of first appearance.
    pub duplicate_sentences: Vec<DuplicateSentence>,
}

/// A word that immediately repeats itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DuplicateWord {
    /// The word, lowercased.
    pub word: String,
    /// Token positions (0-based) of each repeat, first occurrence excluded.
    pub occurrences: Vec<usize>,
}

/// A sentence that occurs more than the allowed number of times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DuplicateSentence {
    /// Raw text of the first occurrence.
    pub sentence: String,
    /// Total occurrences after normalization.
    pub count: usize,
}
