//! Style command: long sentences, passive voice, adverbs.

use aichecker_core::analysis::style;
use aichecker_core::config::Config;
use clap::Args;
use tracing::{debug, instrument};

use super::{InputArgs, load_text, render};

/// Arguments for the `style` subcommand.
#[derive(Args, Debug, Default)]
pub struct StyleArgs {
    /// Input source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Words above which a sentence is reported as long (0 disables).
    #[arg(long, value_name = "N")]
    pub long_sentence_threshold: Option<usize>,
}

/// Report style findings for a file or stdin.
#[instrument(name = "cmd_style", skip_all, fields(source = %args.input.source_name()))]
pub fn cmd_style(
    args: StyleArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let threshold = args
        .long_sentence_threshold
        .unwrap_or(config.long_sentence_threshold);
    debug!(threshold, "executing style command");

    let text = load_text(&args.input, max_input_bytes)?;
    let report = style::analyze_style(&text, threshold);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let mut out = String::new();
    render::render_style(&mut out, &report)?;
    if out.is_empty() {
        println!("No style issues found.");
    } else {
        print!("{out}");
    }
    Ok(())
}
