//! Core library for aichecker.
//!
//! Pure, deterministic text metrics: readability formulas, style
//! heuristics, repetition detection, and optional offline spell checking.
//! The `aichecker` CLI is a thin layer over this crate.
//!
//! # Modules
//!
//! - [`text`] - Sentence splitting, tokenization, normalization
//! - [`syllables`] - Heuristic syllable counting
//! - [`readability`] - Grade-level formulas
//! - [`analysis`] - Style and repetition analyzers and the [`analyze`] orchestrator
//! - [`spelling`] - Dictionary capability and spell checking
//! - [`markdown`] - Markdown-to-prose conversion
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use aichecker_core::{AnalysisOptions, analyze};
//!
//! let report = analyze("Sometimes words words repeat.", &AnalysisOptions::default(), None);
//! assert_eq!(report.repetition.duplicate_words[0].word, "words");
//! assert!(!report.spelling.enabled);
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod dictionaries;
pub mod error;
pub mod markdown;
pub mod readability;
pub mod spelling;
pub mod syllables;
pub mod text;
pub mod word_lists;

pub use analysis::{AnalysisOptions, AnalysisReport, analyze};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, DictionaryError, DictionaryResult};
pub use readability::ReadabilityReport;
pub use spelling::{DictionaryLookup, SpellingReport, WordListDictionary};
