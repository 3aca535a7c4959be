//! Library interface for the `aichecker` CLI.
//!
//! This crate exposes the CLI's argument parser, dictionary loading, and
//! command structure as a library, primarily for documentation generation
//! and testing. The actual entry point is in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//! - [`dictionary`] - Resolving a spelling dictionary for a language

pub mod commands;
pub mod dictionary;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG                          Log filter (e.g., debug, aichecker=trace)
    AICHECKER_LOG_PATH                Explicit log file path
    AICHECKER_LOG_DIR                 Log directory
    AICHECKER_LANG                    Spelling language (e.g., en, de)
    AICHECKER_LONG_SENTENCE_THRESHOLD Words above which a sentence is long
    AICHECKER_MAX_DUPLICATE_SENTENCES Allowed repeats of one sentence
    AICHECKER_DICTIONARY_DIR          Directory with dictionaries
";

/// Command-line interface definition for aichecker.
#[derive(Parser)]
#[command(name = "aichecker")]
#[command(
    about = "Check text for readability, style, repetition, and spelling",
    long_about = None
)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// Run every check and print a full report
    Check(commands::check::CheckArgs),

    /// Score readability with the standard grade-level formulas
    Readability(commands::readability::ReadabilityArgs),

    /// Report long sentences, passive voice, and -ly adverbs
    Style(commands::style::StyleArgs),

    /// Report duplicate words and repeated sentences
    Repetition(commands::repetition::RepetitionArgs),

    /// Check spelling against an offline dictionary
    Spelling(commands::spelling::SpellingArgs),

    /// Show package information
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
