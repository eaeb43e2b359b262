use crate::render;
use anyhow::Context;
use application::classifier_service::ClassifierService;
use application::session_service::{SessionService, Submission};
use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use domain::{normalize, ClassificationResult, ClassifyError, Label, NormalizationPolicy};
use infrastructure::artifact_loader::load_artifacts;
use infrastructure::config::Config;
use serde::Serialize;
use shared::confirmation::ask_confirmation;
use shared::types::Result;
use std::io::{self, BufRead, IsTerminal};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "spam_cli")]
#[command(about = "Classify SMS and email messages as spam or ham", long_about = None)]
pub struct Cli {
    /// Vectorizer artifact (.json or .bin); overrides SPAM_VECTORIZER_PATH
    #[arg(long, global = true)]
    pub vectorizer: Option<PathBuf>,

    /// Classifier artifact (.json or .bin); overrides SPAM_MODEL_PATH
    #[arg(long, global = true)]
    pub model: Option<PathBuf>,

    /// Feed raw text to the vectorizer, skipping normalization
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub raw: bool,

    /// Reject messages longer than this many characters
    #[arg(long, global = true)]
    pub max_chars: Option<usize>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify one message and exit
    Classify {
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
    /// Classify messages in a session with history and charts (default)
    Interactive,
    /// Classify every non-blank line of a file
    Batch {
        file: PathBuf,

        /// Emit one JSON object per line
        #[arg(long, action = ArgAction::SetTrue)]
        json: bool,
    },
    /// Print the normalized form of a message
    Normalize {
        #[arg(trailing_var_arg = true)]
        text: Vec<String>,
    },
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    pub fn config(&self, mut base: Config) -> Config {
        if let Some(path) = &self.vectorizer {
            base.vectorizer_path = path.clone();
        }
        if let Some(path) = &self.model {
            base.model_path = path.clone();
        }
        if self.raw {
            base.normalization = NormalizationPolicy::Never;
        }
        if let Some(max) = self.max_chars.filter(|m| *m > 0) {
            base.max_message_chars = max;
        }
        base
    }
}

#[derive(Serialize)]
struct BatchRecord<'a> {
    line: usize,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<Label>,
    #[serde(skip_serializing_if = "Option::is_none")]
    confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    probabilities: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> BatchRecord<'a> {
    fn new(
        line: usize,
        message: &'a str,
        outcome: &std::result::Result<ClassificationResult, ClassifyError>,
    ) -> Self {
        match outcome {
            Ok(result) => Self {
                line,
                message,
                label: Some(result.label()),
                confidence: Some(result.confidence()),
                probabilities: Some(result.probabilities().as_array()),
                error: None,
            },
            Err(err) => Self {
                line,
                message,
                label: None,
                confidence: None,
                probabilities: None,
                error: Some(err.to_string()),
            },
        }
    }
}

pub struct CliApp {
    config: Config,
}

impl CliApp {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub async fn run(&mut self, cli: Cli) -> Result<()> {
        self.config = cli.config(self.config.clone());
        match cli.command {
            Some(Command::Normalize { text }) => {
                println!("{}", normalize(&text.join(" ")));
                Ok(())
            }
            Some(Command::Classify { text }) => {
                let service = self.load_service().await?;
                self.handle_classify(&service, &text.join(" "))
            }
            Some(Command::Batch { file, json }) => {
                let service = self.load_service().await?;
                self.handle_batch(&service, &file, json)
            }
            Some(Command::Interactive) | None => {
                let service = self.load_service().await?;
                self.handle_interactive(service)
            }
        }
    }

    async fn load_service(&self) -> Result<ClassifierService> {
        let model = load_artifacts(&self.config.vectorizer_path, &self.config.model_path)
            .await
            .context("cannot start without model artifacts")?;
        info!(
            policy = ?self.config.normalization,
            max_message_chars = self.config.max_message_chars,
            "classifier ready"
        );
        Ok(ClassifierService::from_model(
            &model,
            self.config.normalization,
            self.config.max_message_chars,
        ))
    }

    fn handle_classify(&self, service: &ClassifierService, text: &str) -> Result<()> {
        println!("{}", classify_report(service, text));
        Ok(())
    }

    fn handle_batch(&self, service: &ClassifierService, file: &Path, json: bool) -> Result<()> {
        let content = std::fs::read_to_string(file)
            .with_context(|| format!("failed to read {}", file.display()))?;
        let lines: Vec<(usize, &str)> = content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| (i + 1, line))
            .collect();
        let texts: Vec<&str> = lines.iter().map(|(_, line)| *line).collect();
        let outcomes = service.classify_batch(&texts);

        let mut spam = 0;
        for ((line_no, text), outcome) in lines.iter().zip(&outcomes) {
            if matches!(outcome, Ok(r) if r.is_spam()) {
                spam += 1;
            }
            if json {
                let record = BatchRecord::new(*line_no, text, outcome);
                println!("{}", serde_json::to_string(&record)?);
                continue;
            }
            match outcome {
                Ok(result) => {
                    let label = match result.label() {
                        Label::Spam => "Spam".red().bold(),
                        Label::Ham => "Ham ".green().bold(),
                    };
                    println!(
                        "{:>5}  {}  {:>6.2}%  {}",
                        line_no,
                        label,
                        result.confidence_percent(),
                        text.trim()
                    );
                }
                Err(err) => println!("{:>5}  {}", line_no, render::failure(&err.to_string())),
            }
        }
        info!(total = outcomes.len(), spam, "batch classified");
        Ok(())
    }

    fn handle_interactive(&self, service: ClassifierService) -> Result<()> {
        let session_id = format!("session-{}", std::process::id());
        let mut session = SessionService::new(service, session_id);
        if !io::stdin().is_terminal() {
            return self.handle_piped(&mut session);
        }

        println!(
            "{}",
            "Spam / Ham classifier. Commands: :history, :clear, :quit".bold()
        );
        loop {
            let input: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Message")
                .allow_empty(true)
                .interact_text()?;
            let reply = respond(&mut session, &input, || {
                ask_confirmation("Clear the classification history?", false)
            })?;
            match reply {
                Reply::Quit => break,
                Reply::Output(text) => println!("{text}"),
                Reply::Nothing => {}
            }
        }
        Ok(())
    }

    /// Non-terminal stdin: one message per line, same commands, no prompts.
    fn handle_piped(&self, session: &mut SessionService) -> Result<()> {
        for line in io::stdin().lock().lines() {
            match respond(session, &line?, || Ok(true))? {
                Reply::Quit => break,
                Reply::Output(text) => println!("{text}"),
                Reply::Nothing => {}
            }
        }
        Ok(())
    }
}

/// Banner for a one-shot classification. Every outcome becomes a message;
/// none of them aborts the process.
fn classify_report(service: &ClassifierService, text: &str) -> String {
    match service.classify(text) {
        Ok(result) => render::result_banner(&result),
        Err(ClassifyError::EmptyInput) => render::warning("Please enter some text first!"),
        Err(err) if err.is_user_error() => render::warning(&err.to_string()),
        Err(err) => {
            warn!(error = %err, "classification failed");
            render::failure(&format!("Could not classify this message: {err}"))
        }
    }
}

#[derive(Debug, PartialEq)]
enum Reply {
    Quit,
    Output(String),
    Nothing,
}

/// Handle one line of session input. `confirm_clear` is only asked for `:clear`.
fn respond(
    session: &mut SessionService,
    input: &str,
    confirm_clear: impl FnOnce() -> Result<bool>,
) -> Result<Reply> {
    match input.trim() {
        ":quit" | ":q" | "exit" | "quit" => return Ok(Reply::Quit),
        ":history" => {
            return Ok(Reply::Output(render::history_cards(session.session().history())));
        }
        ":clear" => {
            if !confirm_clear()? {
                return Ok(Reply::Nothing);
            }
            session.clear_history();
            return Ok(Reply::Output("History cleared.".yellow().to_string()));
        }
        _ => {}
    }

    let reply = match session.submit(input) {
        Submission::Classified(result) => {
            let mut out = format!(
                "\n{}\n\n{}\n\n{}\n",
                render::result_banner(&result),
                "Classified messages".bold().underline(),
                render::history_cards(session.session().history())
            );
            if let Some(last) = session.session().last() {
                out.push_str(&format!(
                    "\n{}\n\n{}\n",
                    "Detailed analysis of last message".bold().underline(),
                    render::detailed_analysis(last, render::chart_width())
                ));
            }
            out
        }
        Submission::Rejected(reason) => render::warning(&reason),
        Submission::Failed(reason) => render::failure(&reason),
    };
    Ok(Reply::Output(reply))
}
