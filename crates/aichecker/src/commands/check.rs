//! Check command: every analyzer, one report.

use aichecker_core::analysis::{self, AnalysisOptions};
use aichecker_core::config::Config;
use camino::Utf8PathBuf;
use clap::Args;
use tracing::{debug, instrument};

use super::{InputArgs, load_text, render};
use crate::dictionary;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Input source.
    #[command(flatten)]
    pub input: InputArgs,

    /// Dictionary selection.
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Words above which a sentence is reported as long (0 disables).
    #[arg(long, value_name = "N")]
    pub long_sentence_threshold: Option<usize>,

    /// How many times a sentence may appear before it is reported.
    #[arg(long = "max-duplicates", value_name = "N")]
    pub max_duplicate_sentences: Option<usize>,

    /// Skip spell checking even if a dictionary is available.
    #[arg(long)]
    pub no_spelling: bool,
}

/// Dictionary selection, shared by `check` and `spelling`.
#[derive(Args, Debug, Default, Clone)]
pub struct DictionaryArgs {
    /// Spelling language (default from config, else "en").
    #[arg(long, value_name = "LANG")]
    pub lang: Option<String>,

    /// Directory with `<lang>.aff`/`<lang>.dic` or `<lang>.txt` dictionaries.
    #[arg(long, value_name = "DIR")]
    pub dict_dir: Option<Utf8PathBuf>,
}

impl DictionaryArgs {
    /// The language to check, flag over config.
    pub fn language(&self, config: &Config) -> String {
        self.lang.clone().unwrap_or_else(|| config.lang.clone())
    }

    /// The dictionary directory, flag over config.
    pub fn directory(&self, config: &Config) -> Option<Utf8PathBuf> {
        self.dict_dir
            .clone()
            .or_else(|| config.resolved_dictionary_dir())
    }
}

impl CheckArgs {
    /// Analysis options with flags layered over config.
    pub fn options(&self, config: &Config) -> AnalysisOptions {
        let mut options = config.analysis_options();
        options.lang = self.dictionary.language(config);
        if let Some(n) = self.long_sentence_threshold {
            options.long_sentence_threshold = n;
        }
        if let Some(n) = self.max_duplicate_sentences {
            options.max_duplicate_sentences = n;
        }
        options
    }
}

/// Run the full analysis on a file or stdin.
#[instrument(name = "cmd_check", skip_all, fields(source = %args.input.source_name()))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    config: &Config,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let options = args.options(config);
    debug!(?options, no_spelling = args.no_spelling, "executing check command");

    let text = load_text(&args.input, max_input_bytes)?;

    let lookup = if args.no_spelling {
        None
    } else {
        dictionary::load_dictionary(args.dictionary.directory(config).as_deref(), &options.lang)
    };

    let report = analysis::analyze(&text, &options, lookup.as_deref());

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_report(&report)?);
    }
    Ok(())
}
