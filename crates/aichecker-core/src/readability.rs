//! Readability scoring with the standard grade-level formulas.
//!
//! With `wps` = words per sentence and `spw` = syllables per word:
//!
//! - Flesch Reading Ease: `206.835 - 1.015 * wps - 84.6 * spw`
//! - Flesch-Kincaid Grade: `0.39 * wps + 11.8 * spw - 15.59`
//! - Gunning Fog: `0.4 * (wps + 100 * polysyllables / words)`
//! - SMOG: `1.043 * sqrt(polysyllables * 30 / sentences) + 3.1291`
//! - Automated Readability Index: `4.71 * chars / words + 0.5 * wps - 21.43`
//! - Coleman-Liau: `0.0588 * L - 0.296 * S - 15.8` (letters and sentences per 100 words)
//!
//! Scores are unrounded. Text with no words or no sentences gets `None`
//! for every score.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::syllables;
use crate::text;

/// Result of readability analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReadabilityReport {
    /// Flesch Reading Ease (higher = easier).
    pub flesch_reading_ease: Option<f64>,
    /// Flesch-Kincaid Grade Level.
    pub flesch_kincaid_grade: Option<f64>,
    /// Gunning Fog Index.
    pub gunning_fog: Option<f64>,
    /// SMOG Index (0 when the text has no polysyllables).
    pub smog_index: Option<f64>,
    /// Automated Readability Index.
    pub automated_readability_index: Option<f64>,
    /// Coleman-Liau Index.
    pub coleman_liau_index: Option<f64>,
    /// Dale-Chall score. Needs a familiar-word list, so never computed.
    pub dale_chall: Option<f64>,
    /// Words outside the Dale-Chall list. Always 0.
    pub difficult_words: usize,
    /// Words with three or more estimated syllables.
    pub polysyllables: usize,
    /// Total estimated syllables.
    pub syllables: usize,
    /// Number of word tokens.
    pub lexicon_count: usize,
    /// Number of sentences.
    pub sentence_count: usize,
}

/// Compute readability scores for text.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn analyze_readability(text: &str) -> ReadabilityReport {
    let sentence_count = text::split_sentences(text).len();
    let words = text::tokenize(text);
    let lexicon_count = words.len();

    let syllable_counts: Vec<usize> = words
        .iter()
        .map(|w| syllables::count_syllables(w))
        .collect();
    let syllables: usize = syllable_counts.iter().sum();
    let polysyllables = syllable_counts
        .iter()
        .filter(|&&n| n >= syllables::POLYSYLLABLE_MIN)
        .count();

    let mut report = ReadabilityReport {
        flesch_reading_ease: None,
        flesch_kincaid_grade: None,
        gunning_fog: None,
        smog_index: None,
        automated_readability_index: None,
        coleman_liau_index: None,
        dale_chall: None,
        difficult_words: 0,
        polysyllables,
        syllables,
        lexicon_count,
        sentence_count,
    };

    if lexicon_count == 0 || sentence_count == 0 {
        tracing::debug!(
            words = lexicon_count,
            sentences = sentence_count,
            "no scorable text"
        );
        return report;
    }

    let letters = text.chars().filter(|c| c.is_alphabetic()).count();
    let alphanumerics = text.chars().filter(|c| c.is_alphanumeric()).count();

    let w = lexicon_count as f64;
    let s = sentence_count as f64;
    let poly = polysyllables as f64;
    let wps = w / s;
    let spw = syllables as f64 / w;

    report.flesch_reading_ease = Some(84.6f64.mul_add(-spw, 1.015f64.mul_add(-wps, 206.835)));
    report.flesch_kincaid_grade = Some(0.39f64.mul_add(wps, 11.8 * spw) - 15.59);
    report.gunning_fog = Some(0.4 * 100.0f64.mul_add(poly / w, wps));
    report.smog_index = Some(if polysyllables > 0 {
        1.043f64.mul_add((poly * 30.0 / s).sqrt(), 3.1291)
    } else {
        0.0
    });
    report.automated_readability_index =
        Some(4.71f64.mul_add(alphanumerics as f64 / w, 0.5 * wps) - 21.43);

    let letters_per_100 = letters as f64 / w * 100.0;
    let sentences_per_100 = s / w * 100.0;
    report.coleman_liau_index =
        Some(0.0588f64.mul_add(letters_per_100, -0.296 * sentences_per_100) - 15.8);

    tracing::debug!(
        words = lexicon_count,
        sentences = sentence_count,
        syllables,
        polysyllables,
        "readability computed"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(actual: Option<f64>, expected: f64) -> bool {
        actual.is_some_and(|v| (v - expected).abs() < 1e-9)
    }

    #[test]
    fn basic_readability() {
        // 6 + 4 words, 2 sentences, every word one syllable, no polysyllables.
        let report = analyze_readability("The cat sat on the mat. The dog ran fast.");
        assert_eq!(report.sentence_count, 2);
        assert_eq!(report.lexicon_count, 10);
        assert_eq!(report.syllables, 10);
        assert_eq!(report.polysyllables, 0);

        let wps = 5.0;
        let spw = 1.0;
        assert!(close(
            report.flesch_reading_ease,
            206.835 - 1.015 * wps - 84.6 * spw
        ));
        assert!(close(
            report.flesch_kincaid_grade,
            0.39 * wps + 11.8 * spw - 15.59
        ));
        assert!(close(report.gunning_fog, 0.4 * wps));
        assert!(close(report.smog_index, 0.0));
    }

    #[test]
    fn character_based_indices() {
        // Letters: 30, alphanumerics: 30, words: 10, sentences: 2.
        let report = analyze_readability("The cat sat on the mat. The dog ran fast.");
        let ari = 4.71 * (30.0 / 10.0) + 0.5 * 5.0 - 21.43;
        let cli = 0.0588 * 300.0 - 0.296 * 20.0 - 15.8;
        assert!(close(report.automated_readability_index, ari));
        assert!(close(report.coleman_liau_index, cli));
    }

    #[test]
    fn smog_uses_polysyllables() {
        let report = analyze_readability("Readability demonstrates complexity.");
        assert_eq!(report.sentence_count, 1);
        assert_eq!(report.polysyllables, 3);
        let expected = 1.043 * (3.0f64 * 30.0).sqrt() + 3.1291;
        assert!(close(report.smog_index, expected));
        assert!(close(report.gunning_fog, 0.4 * (3.0 + 100.0)));
    }

    #[test]
    fn digits_count_toward_ari_but_not_words() {
        let plain = analyze_readability("Call me now.");
        let digits = analyze_readability("Call 911 me now.");
        assert_eq!(plain.lexicon_count, digits.lexicon_count);
        assert!(
            digits.automated_readability_index.unwrap() > plain.automated_readability_index.unwrap()
        );
        assert_eq!(plain.coleman_liau_index, digits.coleman_liau_index);
    }

    #[test]
    fn empty_input_has_no_scores() {
        let report = analyze_readability("");
        assert!(report.flesch_reading_ease.is_none());
        assert!(report.flesch_kincaid_grade.is_none());
        assert!(report.gunning_fog.is_none());
        assert!(report.smog_index.is_none());
        assert!(report.automated_readability_index.is_none());
        assert!(report.coleman_liau_index.is_none());
        assert_eq!(report.lexicon_count, 0);
        assert_eq!(report.sentence_count, 0);
        assert_eq!(report.polysyllables, 0);
    }

    #[test]
    fn sentences_without_words_have_no_scores() {
        let report = analyze_readability("123. 456!");
        assert_eq!(report.sentence_count, 2);
        assert_eq!(report.lexicon_count, 0);
        assert!(report.flesch_reading_ease.is_none());
        assert!(report.coleman_liau_index.is_none());
    }

    #[test]
    fn scores_are_finite_for_real_text() {
        let report = analyze_readability(
            "It is intended to demonstrate the features of the checker. Words repeat.",
        );
        for score in [
            report.flesch_reading_ease,
            report.flesch_kincaid_grade,
            report.gunning_fog,
            report.smog_index,
            report.automated_readability_index,
            report.coleman_liau_index,
        ] {
            assert!(score.is_some_and(f64::is_finite));
        }
    }

    #[test]
    fn dale_chall_is_never_computed() {
        let report = analyze_readability("The cat sat on the mat.");
        assert!(report.dale_chall.is_none());
        assert_eq!(report.difficult_words, 0);
    }

    #[test]
    fn absent_scores_serialize_as_null() {
        let json = serde_json::to_value(analyze_readability("")).unwrap();
        assert!(json["flesch_reading_ease"].is_null());
        assert_eq!(json["lexicon_count"], 0);
    }
}
