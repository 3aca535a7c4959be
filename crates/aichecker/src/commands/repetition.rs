//! Repetition command: adjacent duplicate words and repeated sentences.

use aichecker_core::analysis::repetition;
use aichecker_core::config::Config;
use clap::Args;
use tracing::{debug, instrument};

use super::{InputArgs, load_text, render};

/// Arguments for the `repetition` subcommand.
#[derive(Args, Debug, Default)]
pub struct RepetitionArgs {
    /// Input source.
    #[command(flatten)]
    pub input: InputArgs,

    /// How many times a sentence may appear before it is reported.
    #[arg(long = "max-duplicates", value_name = "N")]
    pub max_duplicate_sentences: Option<usize>,
}

/// Report repetition in a file or stdin.
#[instrument(name = "cmd_repetition", skip_all, fields(source = %args.input.source_name()))]
pub fn cmd_repetition(
    args: RepetitionArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let max_duplicates = args
        .max_duplicate_sentences
        .unwrap_or(config.max_duplicate_sentences);
    debug!(max_duplicates, "executing repetition command");

    let text = load_text(&args.input, max_input_bytes)?;
    let report = repetition::analyze_repetition(&text, max_duplicates);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut out = String::new();
    render::render_repetition(&mut out, &report)?;
    if out.is_empty() {
        println!("No repetition found.");
    } else {
        print!("{out}");
    }
    Ok(())
}
