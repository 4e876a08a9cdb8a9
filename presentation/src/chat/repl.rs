//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::chat::command::ReplCommand;
use crate::config::{OutputConfig, ReplConfig};
use crate::{ConsoleFormatter, ProgressReporter};
use bggovai_application::{AskAdvisorInput, AskAdvisorUseCase};
use bggovai_domain::answer::outcome::INACTIVE_MESSAGE;
use bggovai_domain::{AdvisorSession, DisplayOptions, OutputFormat, Question};
use colored::Colorize;
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::ops::ControlFlow;

const HISTORY_CAPACITY: usize = 1000;

/// Interactive chat REPL holding one advisor session
pub struct ChatRepl {
    use_case: AskAdvisorUseCase,
    session: AdvisorSession,
    display: DisplayOptions,
    config: ReplConfig,
    output: OutputConfig,
}

impl ChatRepl {
    pub fn new(use_case: AskAdvisorUseCase) -> Self {
        Self {
            use_case,
            session: AdvisorSession::new(),
            display: DisplayOptions::default(),
            config: ReplConfig::default(),
            output: OutputConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_display(mut self, display: DisplayOptions) -> Self {
        self.display = display;
        self
    }

    pub fn with_output(mut self, output: OutputConfig) -> Self {
        self.output = output;
        self
    }

    pub fn session(&self) -> &AdvisorSession {
        &self.session
    }

    pub fn display(&self) -> &DisplayOptions {
        &self.display
    }

    /// Run the interactive REPL until `/quit` or Ctrl-D
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut line_editor = Reedline::create();

        if let Some(path) = self.config.history_path() {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            if let Ok(history) = FileBackedHistory::with_file(HISTORY_CAPACITY, path) {
                line_editor = line_editor.with_history(Box::new(history));
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("bggovai".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match line_editor.read_line(&prompt)? {
                Signal::Success(line) => {
                    if let Some(command) = ReplCommand::parse(&line) {
                        match self.execute_command(&command) {
                            ControlFlow::Break(()) => {
                                println!("Довиждане!");
                                break;
                            }
                            ControlFlow::Continue(text) => println!("{}", text),
                        }
                        continue;
                    }

                    if let Some(rendered) = self.answer(&line).await {
                        println!();
                        println!("{}", rendered);
                    }
                }
                Signal::CtrlC => {
                    println!("^C");
                }
                // Ctrl-D
                _ => {
                    println!("Довиждане!");
                    break;
                }
            }
        }

        self.session.clear();
        Ok(())
    }

    /// Answer one submitted line; blank lines are ignored.
    pub async fn answer(&mut self, line: &str) -> Option<String> {
        let question = Question::try_new(line)?;
        let input = AskAdvisorInput::new(question);

        let turn = if self.config.show_progress {
            let progress = ProgressReporter::new();
            self.use_case
                .execute_with_progress(&mut self.session, input, &progress)
                .await
        } else {
            self.use_case.execute(&mut self.session, input).await
        };

        Some(match self.output.format {
            OutputFormat::Text => ConsoleFormatter::format_turn(&turn, &self.display),
            OutputFormat::Json => ConsoleFormatter::format_json(&turn),
        })
    }

    /// Apply a slash command. `Break` means leave the REPL.
    pub fn execute_command(&mut self, command: &ReplCommand) -> ControlFlow<(), String> {
        let text = match command {
            ReplCommand::Quit => return ControlFlow::Break(()),
            ReplCommand::Help => ReplCommand::help_text().to_string(),
            ReplCommand::History => {
                ConsoleFormatter::format_history(&self.session, self.config.history_limit)
            }
            ReplCommand::Transcript => {
                ConsoleFormatter::format_transcript(&self.session, self.config.transcript_limit)
            }
            ReplCommand::ToggleSources => {
                let on = self.display.toggle_sources();
                format!("Провери източници: {}", Self::on_off(on))
            }
            ReplCommand::ToggleDebug => {
                let on = self.display.toggle_debug();
                let mut text = format!("Технически детайли: {}", Self::on_off(on));
                if on && let Some(debug) = self.session.last_debug() {
                    text.push_str(&ConsoleFormatter::format_debug(debug));
                }
                text
            }
            ReplCommand::Clear => {
                self.session.clear();
                "Сесията е изчистена.".to_string()
            }
            ReplCommand::Unknown(name) => {
                format!("Непозната команда: {}\nНапиши /help за списък с команди", name)
            }
        };
        ControlFlow::Continue(text)
    }

    fn on_off(on: bool) -> &'static str {
        if on { "вкл." } else { "изкл." }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│      BGGovAI - държавна администрация       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Модел: {}", self.use_case.config().model);
        if !self.use_case.is_ai_active() {
            println!("{}", INACTIVE_MESSAGE.yellow());
        }
        println!();
        println!(
            "{}",
            "Можеш да питаш за административни процедури, закони, документи, услуги и компетентни институции в България."
                .dimmed()
        );
        println!();
        println!("{}", ReplCommand::help_text());
        println!();
    }
}
