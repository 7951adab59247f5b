//! DebateCoach CLI - Debate practice feedback
//!
//! A command-line tool for getting heuristic feedback on debate speeches,
//! comparing two speeches, and asking an AI coach for a second opinion.

use clap::{Parser, Subcommand};
use colored::Colorize;
use debatecoach_core::{
    debate_format, report, AudioArtifact, CoachEndpoint, CoachError, CoachService, Config,
    FeedbackEngine, FormatId, OpenAICoach, SpeechSubmission,
};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "debatecoach",
    version,
    about = "Debate practice feedback - analyze and compare speeches",
    long_about = "A CLI tool that scores debate speeches against LD, PF, or Congress rubrics and compares two speeches head to head."
)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Get feedback on a single speech
    Analyze {
        /// Speech text, or "-" to read from stdin
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Read the speech text from a file
        #[arg(long, value_name = "PATH", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Recording of the speech
        #[arg(long, value_name = "PATH")]
        audio: Option<PathBuf>,

        /// Debate format (LD, PF, Congress)
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<String>,

        /// Print structured results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare two speeches
    Compare {
        /// Text of speech 1
        #[arg(long, value_name = "TEXT")]
        text1: Option<String>,

        /// Read speech 1 from a file
        #[arg(long, value_name = "PATH", conflicts_with = "text1")]
        file1: Option<PathBuf>,

        /// Recording of speech 1
        #[arg(long, value_name = "PATH")]
        audio1: Option<PathBuf>,

        /// Text of speech 2
        #[arg(long, value_name = "TEXT")]
        text2: Option<String>,

        /// Read speech 2 from a file
        #[arg(long, value_name = "PATH", conflicts_with = "text2")]
        file2: Option<PathBuf>,

        /// Recording of speech 2
        #[arg(long, value_name = "PATH")]
        audio2: Option<PathBuf>,

        /// Debate format (LD, PF, Congress)
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<String>,

        /// Print structured results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Ask an AI debate coach for feedback on a transcript
    Coach {
        /// Transcript text, or "-" to read from stdin
        #[arg(value_name = "TEXT")]
        text: Option<String>,

        /// Read the transcript from a file
        #[arg(long, value_name = "PATH", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Model to use instead of the configured one
        #[arg(short, long, value_name = "MODEL")]
        model: Option<String>,
    },

    /// List debate formats and their rubrics
    Formats,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => debatecoach_core::default_config(),
    };

    match cli.command {
        Command::Analyze {
            text,
            file,
            audio,
            format,
            json,
        } => {
            let format = resolve_format(format.as_deref(), &config);
            let text = read_text(text, file.as_deref())?;
            let audio = audio.as_deref().map(AudioArtifact::from_path).transpose()?;

            let mut engine = FeedbackEngine::new();
            let analysis = match engine.analyze_single(format, text.as_deref(), audio.as_ref()) {
                Err(CoachError::InsufficientInput) => {
                    exit_with_prompt("Please provide speech text or audio.")
                }
                result => result?,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&analysis)?);
            } else {
                print_header(&format!("Speech Feedback - {}", format.display_name()));
                println!(
                    "{}",
                    report::render_single(
                        &analysis.profile,
                        analysis.text_result.as_ref(),
                        analysis.audio_result.as_ref(),
                    )
                );
            }
        }

        Command::Compare {
            text1,
            file1,
            audio1,
            text2,
            file2,
            audio2,
            format,
            json,
        } => {
            let format = resolve_format(format.as_deref(), &config);
            let first = read_submission(text1, file1.as_deref(), audio1.as_deref())?;
            let second = read_submission(text2, file2.as_deref(), audio2.as_deref())?;

            let mut engine = FeedbackEngine::new();
            let comparison = match engine.compare(format, &first, &second) {
                Err(CoachError::InsufficientInput) => {
                    exit_with_prompt("Provide at least one speech or audio.")
                }
                result => result?,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                print_header(&format!("Speech Comparison - {}", format.display_name()));
                println!("{}", report::render_comparison(&comparison));
            }
        }

        Command::Coach { text, file, model } => {
            let transcript = read_text(text, file.as_deref())?.unwrap_or_default();
            if transcript.trim().is_empty() {
                exit_with_prompt("Please speak first before requesting feedback.");
            }

            // Get API configuration from environment
            let api_base = env::var("OPENAI_API_BASE")
                .or_else(|_| env::var("OPENAI_BASE_URL"))
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());

            let api_key = env::var("OPENAI_API_KEY").unwrap_or_else(|_| {
                eprintln!(
                    "{}",
                    "Warning: OPENAI_API_KEY not set. API calls may fail.".yellow()
                );
                String::new()
            });

            let mut settings = config.coach.clone();
            if let Some(model) = model {
                settings.model = model;
            }

            let coach = OpenAICoach::new(&CoachEndpoint::new(api_base, api_key), settings)?;
            print_header(&format!("Coach Feedback - {}", coach.model()));

            match coach.request_feedback(&transcript).await {
                Ok(reply) => println!("{}", reply),
                Err(e) => {
                    eprintln!("{} Error getting feedback: {}", "Error:".red().bold(), e);
                    std::process::exit(1);
                }
            }
        }

        Command::Formats => {
            for name in debate_format::available_formats() {
                println!("{}", debate_format::get_format(name).description().bright_white());
                println!();
            }
        }
    }

    Ok(())
}

/// Pick the requested format, or the configured default.
fn resolve_format(requested: Option<&str>, config: &Config) -> FormatId {
    match requested {
        Some(name) => {
            if !FormatId::is_known(name) {
                log::warn!(
                    "Unknown format '{}', using Congress. Available formats: {}",
                    name,
                    debate_format::available_formats().join(", ")
                );
            }
            FormatId::parse(name)
        }
        None => config.default_format(),
    }
}

/// Resolve speech text from an argument, a file, or stdin (`-`).
fn read_text(
    text: Option<String>,
    file: Option<&Path>,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    read_text_from(text, file, io::stdin())
}

/// Resolve speech text: a file wins over the argument, and `-` reads `stdin`.
fn read_text_from(
    text: Option<String>,
    file: Option<&Path>,
    mut stdin: impl Read,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    if let Some(path) = file {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
        return Ok(Some(content));
    }

    match text.as_deref() {
        Some("-") => {
            let mut content = String::new();
            stdin.read_to_string(&mut content)?;
            Ok(Some(content))
        }
        _ => Ok(text),
    }
}

fn read_submission(
    text: Option<String>,
    file: Option<&Path>,
    audio: Option<&Path>,
) -> Result<SpeechSubmission, Box<dyn std::error::Error>> {
    Ok(SpeechSubmission {
        text: read_text(text, file)?,
        audio: audio.map(AudioArtifact::from_path).transpose()?,
    })
}

fn print_header(title: &str) {
    println!();
    println!("{}", "═".repeat(70).bright_blue());
    println!("{}", format!("  {}", title).bright_blue().bold());
    println!("{}", "═".repeat(70).bright_blue());
}

fn exit_with_prompt(message: &str) -> ! {
    eprintln!("{}", message.yellow());
    std::process::exit(1);
}
