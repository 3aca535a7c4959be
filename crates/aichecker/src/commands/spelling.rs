//! Spelling command: unknown words and suggestions.

use aichecker_core::config::Config;
use aichecker_core::spelling;
use clap::Args;
use tracing::{debug, instrument};

use super::check::DictionaryArgs;
use super::{InputArgs, load_text, render};
use crate::dictionary;

/// Arguments for the `spelling` subcommand.
#[derive(Args, Debug, Default)]
pub struct SpellingArgs {
    /// Input source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Dictionary selection.
    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

/// Spell check a file or stdin.
///
/// A missing dictionary is not an error: the report says spelling was
/// disabled and the command still succeeds.
#[instrument(name = "cmd_spelling", skip_all, fields(source = %args.input.source_name()))]
pub fn cmd_spelling(
    args: SpellingArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let lang = args.dictionary.language(config);
    let dir = args.dictionary.directory(config);
    debug!(%lang, dir = ?dir, "executing spelling command");

    let text = load_text(&args.input, max_input_bytes)?;
    let lookup = dictionary::load_dictionary(dir.as_deref(), &lang);
    let report = spelling::check_spelling(&text, &lang, lookup.as_deref());

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let mut out = String::new();
        render::render_spelling(&mut out, &report)?;
        print!("{out}");
    }
    Ok(())
}
