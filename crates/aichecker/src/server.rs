//! MCP (Model Context Protocol) server implementation.
//!
//! Exposes the text checks over stdio so an assistant can score a draft
//! without shelling out to the CLI. Tools take the text inline and return
//! the same JSON reports that `--json` prints.
//!
//! Every tool delegates to `aichecker-core`; nothing here computes a score.

use std::sync::Arc;

use aichecker_core::analysis::{AnalysisOptions, repetition, style};
use aichecker_core::config::{Config, DEFAULT_MAX_INPUT_BYTES};
use aichecker_core::spelling::DictionaryLookup;
use aichecker_core::{analyze, markdown, readability};
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo};
use rmcp::schemars;
use rmcp::{ErrorData as McpError, ServerHandler, tool, tool_handler, tool_router};
use serde::Serialize;

use crate::dictionary::DictionaryCache;

/// Parameters for the `get_info` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetInfoParams {
    /// Output format: "text" or "json"
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "text".to_string()
}

/// Text input shared by the single-check tools.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct TextParams {
    /// The text to analyze.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
}

/// Parameters for the `analyze_text` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct AnalyzeTextParams {
    /// The text to analyze.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Spelling language, e.g. "en". Defaults to the configured language.
    pub lang: Option<String>,
    /// Words above which a sentence is reported as long (0 disables).
    pub long_sentence_threshold: Option<usize>,
    /// How many times a sentence may appear before it is reported.
    pub max_duplicate_sentences: Option<usize>,
}

/// Parameters for the `check_style` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckStyleParams {
    /// The text to analyze.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
    /// Words above which a sentence is reported as long (0 disables).
    pub long_sentence_threshold: Option<usize>,
}

/// Parameters for the `check_repetition` tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CheckRepetitionParams {
    /// The text to analyze.
    pub text: String,
    /// Whether to strip markdown formatting before analysis.
    #[serde(default)]
    pub strip_markdown: bool,
    /// How many times a sentence may appear before it is reported.
    pub max_duplicate_sentences: Option<usize>,
}

/// MCP server exposing the text checks to AI assistants.
///
/// Each `#[tool]` method in the `#[tool_router]` impl block is automatically
/// registered and callable via the MCP protocol.
#[derive(Clone)]
pub struct ProjectServer {
    options: AnalysisOptions,
    max_input_bytes: Option<usize>,
    dictionaries: Arc<DictionaryCache>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<Self>,
}

impl Default for ProjectServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl ProjectServer {
    /// Create a server with default analysis options and no dictionary.
    pub fn new() -> Self {
        Self {
            options: AnalysisOptions::default(),
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
            dictionaries: Arc::new(DictionaryCache::new(None)),
            tool_router: Self::tool_router(),
        }
    }

    /// Create a server whose defaults come from loaded configuration.
    pub fn from_config(config: &Config, max_input_bytes: Option<usize>) -> Self {
        Self {
            options: config.analysis_options(),
            max_input_bytes,
            dictionaries: Arc::new(DictionaryCache::new(config.resolved_dictionary_dir())),
            tool_router: Self::tool_router(),
        }
    }

    /// Apply the input limit and optional markdown stripping.
    fn prepare(&self, text: &str, strip_markdown: bool) -> Result<String, McpError> {
        if let Some(max) = self.max_input_bytes
            && text.len() > max
        {
            return Err(McpError::invalid_params(
                format!("input is {} bytes, exceeding the {max}-byte limit", text.len()),
                None,
            ));
        }
        Ok(if strip_markdown {
            markdown::strip_to_prose(text)
        } else {
            text.to_string()
        })
    }

    fn lookup(&self, lang: &str) -> Option<Arc<dyn DictionaryLookup>> {
        self.dictionaries.get(lang)
    }

    /// Get project information.
    #[tool(description = "Get project name, version, and description")]
    #[tracing::instrument(skip(self), fields(otel.kind = "server"))]
    fn get_info(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<GetInfoParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(tool = "get_info", format = %params.format, "executing MCP tool");

        let info = serde_json::json!({
            "name": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "description": env!("CARGO_PKG_DESCRIPTION"),
            "lang": self.options.lang,
            "long_sentence_threshold": self.options.long_sentence_threshold,
            "max_duplicate_sentences": self.options.max_duplicate_sentences,
        });

        let text = if params.format == "json" {
            serde_json::to_string_pretty(&info)
                .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?
        } else {
            format!(
                "{} v{}\n{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_DESCRIPTION"),
            )
        };

        tracing::info!(tool = "get_info", "MCP tool completed");
        Ok(CallToolResult::success(vec![Content::text(text)]))
    }

    /// Run every check and return the full report.
    #[tool(
        description = "Analyze text for readability, spelling, style (long sentences, passive voice, adverbs), and repetition. Returns the full JSON report."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn analyze_text(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<AnalyzeTextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "analyze_text",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        let text = self.prepare(&params.text, params.strip_markdown)?;
        let options = AnalysisOptions {
            lang: params.lang.unwrap_or_else(|| self.options.lang.clone()),
            long_sentence_threshold: params
                .long_sentence_threshold
                .unwrap_or(self.options.long_sentence_threshold),
            max_duplicate_sentences: params
                .max_duplicate_sentences
                .unwrap_or(self.options.max_duplicate_sentences),
        };
        let lookup = self.lookup(&options.lang);
        let report = analyze(&text, &options, lookup.as_deref());

        tracing::info!(
            tool = "analyze_text",
            words = report.summary.words,
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Score readability with the grade-level formulas.
    #[tool(
        description = "Score readability: Flesch reading ease, Flesch-Kincaid grade, Gunning fog, SMOG, ARI, and Coleman-Liau, with word and sentence counts."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_readability(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<TextParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "check_readability",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        let text = self.prepare(&params.text, params.strip_markdown)?;
        let report = readability::analyze_readability(&text);

        tracing::info!(
            tool = "check_readability",
            grade = ?report.flesch_kincaid_grade,
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Report long sentences, passive voice, and adverbs.
    #[tool(
        description = "Check style: sentences over a word threshold, passive voice constructions, and -ly adverb counts."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_style(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<CheckStyleParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "check_style",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        let text = self.prepare(&params.text, params.strip_markdown)?;
        let threshold = params
            .long_sentence_threshold
            .unwrap_or(self.options.long_sentence_threshold);
        let report = style::analyze_style(&text, threshold);

        tracing::info!(
            tool = "check_style",
            long_sentences = report.long_sentences.len(),
            passive = report.passive_voice.len(),
            "MCP tool completed"
        );
        json_result(&report)
    }

    /// Report duplicate words and repeated sentences.
    #[tool(
        description = "Check repetition: adjacent duplicate words (\"the the\") and sentences repeated more often than allowed."
    )]
    #[tracing::instrument(skip(self, params), fields(otel.kind = "server"))]
    fn check_repetition(
        &self,
        #[allow(unused_variables)] Parameters(params): Parameters<CheckRepetitionParams>,
    ) -> Result<CallToolResult, McpError> {
        tracing::debug!(
            tool = "check_repetition",
            strip_md = params.strip_markdown,
            "executing MCP tool"
        );

        let text = self.prepare(&params.text, params.strip_markdown)?;
        let max = params
            .max_duplicate_sentences
            .unwrap_or(self.options.max_duplicate_sentences);
        let report = repetition::analyze_repetition(&text, max);

        tracing::info!(
            tool = "check_repetition",
            duplicate_words = report.duplicate_words.len(),
            duplicate_sentences = report.duplicate_sentences.len(),
            "MCP tool completed"
        );
        json_result(&report)
    }
}

fn json_result<T: Serialize>(report: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| McpError::internal_error(format!("serialization error: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_handler]
impl ServerHandler for ProjectServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: Default::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "{} MCP server. Use analyze_text for a full report, or the check_* tools \
                 for a single dimension of a draft.",
                env!("CARGO_PKG_NAME"),
            )),
        }
    }
}
