//! Passive voice detection.
//!
//! Flags a form of "to be" followed by whitespace and a participle-shaped
//! word: anything ending in `-ed`, or a known irregular participle. The
//! check is lexical and over-inclusive on purpose ("was red" is flagged).

use std::sync::LazyLock;

use regex::Regex;

use crate::dictionaries::irregular_verbs::is_irregular_past_participle;
use crate::text::Sentence;
use crate::word_lists::BE_VERBS;

use super::reports::PassiveVoiceMatch;

/// Regex for word-character runs.
static WORD_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));

/// Detect passive constructions in each sentence.
///
/// Matches within a sentence never overlap; scanning resumes after the
/// participle of the previous match.
#[tracing::instrument(skip_all, fields(sentences = sentences.len()))]
pub fn detect_passive_voice(sentences: &[Sentence<'_>]) -> Vec<PassiveVoiceMatch> {
    let mut matches = Vec::new();

    for sentence in sentences {
        let runs: Vec<_> = WORD_RUN.find_iter(sentence.text).collect();
        let mut i = 0;

        while i + 1 < runs.len() {
            let aux = runs[i];
            let next = runs[i + 1];
            let auxiliary = aux.as_str().to_lowercase();
            let gap = &sentence.text[aux.end()..next.start()];

            if !BE_VERBS.contains(auxiliary.as_str())
                || !gap.chars().all(char::is_whitespace)
                || !is_participle_shaped(next.as_str())
            {
                i += 1;
                continue;
            }

            matches.push(PassiveVoiceMatch {
                index: sentence.index,
                text: sentence.text[aux.start()..next.end()].to_string(),
                auxiliary,
                participle: next.as_str().to_lowercase(),
                sentence: sentence.text.to_string(),
            });
            i += 2;
        }
    }

    matches
}

/// Check if a word looks like a past participle.
fn is_participle_shaped(word: &str) -> bool {
    let lower = word.to_lowercase();
    (lower.ends_with("ed") && lower.chars().count() > 2) || is_irregular_past_participle(&lower)
}
