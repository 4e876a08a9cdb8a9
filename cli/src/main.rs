//! CLI entrypoint for BGGovAI
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use bggovai_application::{AskAdvisorInput, AskAdvisorUseCase, BehaviorConfig};
use bggovai_domain::{AdvisorSession, DisplayOptions, Model, OutputFormat, Question};
use bggovai_infrastructure::{
    ConfigLoader, FileConfig, JsonlConversationLogger, OpenAiLlmGateway, OpenAiSettings,
    TtlAnswerCache,
};
use bggovai_presentation::{
    ChatRepl, Cli, ConsoleFormatter, OutputConfig, ProgressReporter, ReplConfig,
};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting BGGovAI");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let model: Model = match &cli.model {
        Some(name) => name.parse()?,
        None => config.advisor.parse_model()?,
    };

    let display = DisplayOptions {
        show_sources: config.repl.show_sources && !cli.no_sources,
        show_debug: config.repl.show_debug || cli.debug,
    };

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let use_case = build_use_case(&config, &cli, model);

    // Chat mode
    if cli.chat {
        let repl_config = ReplConfig {
            show_progress: config.repl.show_progress && !cli.quiet,
            history_limit: config.repl.history_limit,
            transcript_limit: config.repl.transcript_limit,
            history_file: config.repl.history_file.as_deref().map(expand_home),
        };

        let mut repl = ChatRepl::new(use_case)
            .with_config(repl_config)
            .with_display(display)
            .with_output(OutputConfig {
                format,
                color: config.output.color,
            });

        repl.run().await?;
        return Ok(());
    }

    // Single question mode - question is required
    let Some(question) = cli.question.as_deref().and_then(Question::try_new) else {
        bail!("Question is required. Use --chat for interactive mode.");
    };

    let mut session = AdvisorSession::new();
    let input = AskAdvisorInput::new(question);

    let turn = if cli.quiet || !config.repl.show_progress {
        use_case.execute(&mut session, input).await
    } else {
        let progress = ProgressReporter::new();
        use_case
            .execute_with_progress(&mut session, input, &progress)
            .await
    };

    let output = match format {
        OutputFormat::Text => ConsoleFormatter::format_turn(&turn, &display),
        OutputFormat::Json => ConsoleFormatter::format_json(&turn),
    };

    println!("{}", output);

    Ok(())
}

/// Initialize logging based on verbosity level
///
/// Logs go to stderr, or to `log_file` when given. The returned guard must
/// stay alive for buffered file output to be flushed.
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Cannot open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            subscriber.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            subscriber.with_writer(std::io::stderr).init();
            Ok(None)
        }
    }
}

fn build_use_case(config: &FileConfig, cli: &Cli, model: Model) -> AskAdvisorUseCase {
    let openai = &config.providers.openai;
    let settings = OpenAiSettings {
        api_key: openai.resolve_api_key(),
        base_url: openai.base_url.clone(),
        temperature: openai.temperature,
    };
    let gateway = Arc::new(OpenAiLlmGateway::new(settings));

    let mut behavior = BehaviorConfig::default().with_model(model);
    if !config.cache.enabled {
        behavior = behavior.without_cache();
    }

    let mut use_case = AskAdvisorUseCase::new(gateway, behavior);

    if config.cache.enabled {
        use_case = use_case.with_cache(Arc::new(TtlAnswerCache::new(
            config.cache.capacity,
            config.cache.ttl(),
        )));
    }

    let conversation_log = cli
        .conversation_log
        .clone()
        .or_else(|| config.logging.conversation_log.as_deref().map(expand_home));

    if let Some(path) = conversation_log {
        match JsonlConversationLogger::open(&path) {
            Some(logger) => use_case = use_case.with_conversation_logger(Arc::new(logger)),
            None => warn!("Conversation log disabled"),
        }
    }

    use_case
}

/// Expand a leading `~/` to the home directory
fn expand_home(path: &str) -> PathBuf {
    match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    }
}
