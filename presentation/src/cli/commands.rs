//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted cards for the terminal
    Text,
    /// The whole turn as JSON
    Json,
}

impl From<OutputFormat> for bggovai_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => bggovai_domain::OutputFormat::Text,
            OutputFormat::Json => bggovai_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for bggovai
#[derive(Parser, Debug)]
#[command(name = "bggovai")]
#[command(author, version, about = "Асистент за административни въпроси към централната администрация")]
#[command(long_about = r#"
BGGovAI answers questions about Bulgarian central-government procedures.

Each question is classified by topic, paired with a follow-up question when
details are missing, and routed to the official institutions to check.
With an OpenAI API key the answer is written by the model; without one the
routing still works and the AI module reports itself inactive.

Configuration files are loaded from (in priority order):
1. BGGOVAI_* environment variables (e.g. BGGOVAI_CACHE__ENABLED=false)
2. --config <path>       Explicit config file
3. ./bggovai.toml        Project-level config
4. ~/.config/bggovai/config.toml   Global config
5. OPENAI_MODEL          Model name

Example:
  bggovai "Как да сменя управител на ЕООД?"
  bggovai -m gpt-4o --debug "Загубих книжката си"
  bggovai --chat
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Chat model to use
    #[arg(short, long, value_name = "MODEL")]
    pub model: Option<String>,

    /// Hide the official sources under each answer
    #[arg(long)]
    pub no_sources: bool,

    /// Show technical details (topic, follow-up, model, sources)
    #[arg(long)]
    pub debug: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write diagnostic logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Append questions and answers to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,
}
