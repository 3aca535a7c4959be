//! Human-readable report rendering.
//!
//! Every section has a fixed cap on listed items so a long document still
//! produces a screenful of output; `--json` always carries everything.

use std::fmt::{self, Write};

use aichecker_core::analysis::{AnalysisReport, RepetitionReport, StyleReport, Summary};
use aichecker_core::{ReadabilityReport, SpellingReport};
use owo_colors::{OwoColorize, Stream};

/// Spelling issues listed before "... and N more".
pub const MAX_SPELLING_ISSUES: usize = 20;
/// Long sentences listed.
pub const MAX_LONG_SENTENCES: usize = 10;
/// Passive voice matches listed.
pub const MAX_PASSIVE_MATCHES: usize = 10;
/// Adverbs listed.
pub const MAX_ADVERBS: usize = 10;
/// Duplicate words listed.
pub const MAX_DUPLICATE_WORDS: usize = 10;
/// Positions shown per duplicate word.
pub const MAX_POSITIONS: usize = 5;
/// Duplicate sentences listed.
pub const MAX_DUPLICATE_SENTENCES: usize = 5;

fn heading(out: &mut String, title: &str) -> fmt::Result {
    writeln!(
        out,
        "{}",
        title.if_supports_color(Stream::Stdout, |t| t.cyan())
    )
}

/// Render a full analysis report.
pub fn render_report(report: &AnalysisReport) -> Result<String, fmt::Error> {
    let mut out = String::new();
    render_summary(&mut out, &report.summary)?;
    render_readability(&mut out, &report.readability)?;
    render_spelling(&mut out, &report.spelling)?;
    render_style(&mut out, &report.style)?;
    render_repetition(&mut out, &report.repetition)?;
    Ok(out)
}

/// `Summary: N words, N sentences, N chars`.
pub fn render_summary(out: &mut String, summary: &Summary) -> fmt::Result {
    writeln!(
        out,
        "{} {} words, {} sentences, {} chars",
        "Summary:".if_supports_color(Stream::Stdout, |t| t.bold()),
        summary.words,
        summary.sentences,
        summary.characters,
    )
}

/// Readability scores with two decimals. Absent scores are skipped.
pub fn render_readability(out: &mut String, report: &ReadabilityReport) -> fmt::Result {
    heading(out, "Readability:")?;
    let scores = [
        ("Flesch Reading Ease", report.flesch_reading_ease),
        ("Flesch Kincaid Grade", report.flesch_kincaid_grade),
        ("Gunning Fog", report.gunning_fog),
        ("Smog Index", report.smog_index),
        (
            "Automated Readability Index",
            report.automated_readability_index,
        ),
        ("Coleman Liau Index", report.coleman_liau_index),
    ];

    let mut any = false;
    for (label, value) in scores {
        if let Some(v) = value {
            writeln!(out, "  - {label}: {v:.2}")?;
            any = true;
        }
    }
    if !any {
        writeln!(out, "  (not enough text to score)")?;
    }
    Ok(())
}

/// Spelling issues, or why spelling was skipped.
pub fn render_spelling(out: &mut String, report: &SpellingReport) -> fmt::Result {
    if !report.enabled {
        let note = report.note.as_deref().unwrap_or("no dictionary");
        return writeln!(
            out,
            "{} {}",
            "Spelling:".if_supports_color(Stream::Stdout, |t| t.cyan()),
            note.if_supports_color(Stream::Stdout, |t| t.dimmed())
        );
    }

    writeln!(
        out,
        "{} {} potential issue(s)",
        "Spelling:".if_supports_color(Stream::Stdout, |t| t.cyan()),
        report.total_unknown
    )?;
    for issue in report.issues.iter().take(MAX_SPELLING_ISSUES) {
        let suggestion = issue.suggestion.as_deref().unwrap_or("none");
        writeln!(out, "  - '{}' -> suggestion: {}", issue.word, suggestion)?;
    }
    if report.total_unknown > MAX_SPELLING_ISSUES {
        writeln!(
            out,
            "  ... and {} more",
            report.total_unknown - MAX_SPELLING_ISSUES
        )?;
    }
    Ok(())
}

/// Style findings. Empty lists print nothing.
pub fn render_style(out: &mut String, report: &StyleReport) -> fmt::Result {
    if !report.long_sentences.is_empty() {
        heading(out, "Style: Long sentences")?;
        for item in report.long_sentences.iter().take(MAX_LONG_SENTENCES) {
            writeln!(
                out,
                "  - #{} ({} words): {}",
                item.index, item.word_count, item.text
            )?;
        }
    }
    if !report.passive_voice.is_empty() {
        heading(out, "Style: Possible passive voice")?;
        for item in report.passive_voice.iter().take(MAX_PASSIVE_MATCHES) {
            writeln!(out, "  - #{}: {}", item.index, item.text)?;
        }
    }
    if !report.adverbs.is_empty() {
        heading(out, "Style: Adverbs (-ly)")?;
        for item in report.adverbs.iter().take(MAX_ADVERBS) {
            writeln!(out, "  - {} x{}", item.word, item.count)?;
        }
    }
    Ok(())
}

/// Repetition findings. Empty lists print nothing.
pub fn render_repetition(out: &mut String, report: &RepetitionReport) -> fmt::Result {
    if !report.duplicate_words.is_empty() {
        heading(out, "Repetition: Immediate duplicate words")?;
        for item in report.duplicate_words.iter().take(MAX_DUPLICATE_WORDS) {
            let shown = &item.occurrences[..item.occurrences.len().min(MAX_POSITIONS)];
            writeln!(out, "  - '{}' at positions {:?}", item.word, shown)?;
        }
    }
    if !report.duplicate_sentences.is_empty() {
        heading(out, "Repetition: Duplicate sentences")?;
        for item in report.duplicate_sentences.iter().take(MAX_DUPLICATE_SENTENCES) {
            writeln!(out, "  - x{}: {}", item.count, item.sentence)?;
        }
    }
    Ok(())
}
