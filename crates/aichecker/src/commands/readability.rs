//! Readability command: grade-level formulas only.

use aichecker_core::readability;
use clap::Args;
use tracing::{debug, instrument};

use super::{InputArgs, load_text, render};

/// Arguments for the `readability` subcommand.
#[derive(Args, Debug, Default)]
pub struct ReadabilityArgs {
    /// Input source.
    #[command(flatten)]
    pub input: InputArgs,
}

/// Score readability of a file or stdin.
#[instrument(name = "cmd_readability", skip_all, fields(source = %args.input.source_name()))]
pub fn cmd_readability(
    args: ReadabilityArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!("executing readability command");

    let text = load_text(&args.input, max_input_bytes)?;
    let report = readability::analyze_readability(&text);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let mut out = String::new();
        render::render_readability(&mut out, &report)?;
        print!("{out}");
        println!(
            "  ({} words, {} sentences, {} syllables, {} polysyllables)",
            report.lexicon_count, report.sentence_count, report.syllables, report.polysyllables
        );
    }
    Ok(())
}
