//! `word-ladder` command-line runner.
//!
//! Plays one game against an Ollama-style model and prints progress to
//! stdout, ending with a single `GAME_WON` / `GAME_LOST` status line.
//! Logs go to stderr, filtered by `RUST_LOG` (default `info`).

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use word_ladder::{
    Dictionary, LadderConfig, LadderOutcome, LadderSession, MoveLoop, OllamaOracle, Oracle, Verdict,
    Word,
};

/// Play a word ladder with a language model suggesting each move.
#[derive(Debug, Parser)]
#[command(name = "word-ladder", version, about)]
struct Cli {
    /// TOML config file; flags below override its values.
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Start word.
    #[arg(long)]
    start: Option<String>,

    /// Target word.
    #[arg(long)]
    target: Option<String>,

    /// Newline-delimited dictionary file.
    #[arg(long, short)]
    dictionary: Option<PathBuf>,

    /// Generate endpoint, e.g. http://localhost:11434/api/generate.
    #[arg(long, env = "WORD_LADDER_ENDPOINT")]
    endpoint: Option<String>,

    /// Model identifier.
    #[arg(long, short, env = "WORD_LADDER_MODEL")]
    model: Option<String>,

    /// Oracle calls allowed before the game is lost.
    #[arg(long)]
    max_attempts: Option<u32>,

    /// Maximum candidate hints per request.
    #[arg(long)]
    hint_limit: Option<usize>,

    /// Per-request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Seed for hint sampling.
    #[arg(long)]
    seed: Option<u64>,

    /// Do not offer candidate hints to the model.
    #[arg(long)]
    no_hints: bool,

    /// Do not strip markup noise from replies.
    #[arg(long)]
    no_strip: bool,

    /// Write a JSON report of the game to this path.
    #[arg(long)]
    report: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<(LadderConfig, Option<PathBuf>)> {
        let mut config = match &self.config {
            Some(path) => LadderConfig::load(path)?,
            None => LadderConfig::default(),
        };

        if let Some(start) = self.start {
            config.start = start;
        }
        if let Some(target) = self.target {
            config.target = target;
        }
        if let Some(path) = self.dictionary {
            config.dictionary_path = path;
        }
        if let Some(endpoint) = self.endpoint {
            config.oracle.endpoint = endpoint;
        }
        if let Some(model) = self.model {
            config.oracle.model = model;
        }
        if let Some(max) = self.max_attempts {
            config.max_attempts = max;
        }
        if let Some(limit) = self.hint_limit {
            config.hint_limit = limit;
        }
        if let Some(secs) = self.timeout_secs {
            config.oracle.timeout_secs = secs;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.no_hints {
            config.include_hints = false;
        }
        if self.no_strip {
            config.strip_noise = false;
        }

        Ok((config, self.report))
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let (config, report_path) = Cli::parse().into_config()?;

    let start = Word::parse(&config.start).context("invalid start word")?;
    println!("Starting word: {}", config.start);
    println!("Target word: {}", config.target);
    println!("Dictionary path: {}", config.dictionary_path.display());

    let dictionary = Dictionary::load(&config.dictionary_path, start.len())?;
    println!("Dictionary size: {} words of length {}", dictionary.len(), dictionary.word_len());

    let session = LadderSession::new(&dictionary, &config.start, &config.target)
        .context("Invalid starting or target word")?;
    let oracle = OllamaOracle::new(config.oracle.clone()).context("failed to build oracle client")?;
    println!("Model: {} at {}", config.oracle.model, config.oracle.endpoint);

    let mut game = MoveLoop::new(session, oracle, &config);
    tracing::info!(seed = game.seed(), max_attempts = config.max_attempts, "game started");

    while !game.state().is_terminal() {
        game.step();
        print_last_attempt(&game);
    }

    let report = game.into_report();
    match report.outcome {
        LadderOutcome::Won => println!("Congratulations! You've reached the target word."),
        LadderOutcome::Lost => println!("Max attempts reached. Game over."),
    }
    println!("{}", report.status_line());

    if let Some(path) = report_path {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(&path, json).with_context(|| format!("write report {}", path.display()))?;
        tracing::info!(path = %path.display(), "report written");
    }

    Ok(())
}

fn print_last_attempt<O: Oracle>(game: &MoveLoop<'_, O>) {
    let Some(record) = game.records().last() else {
        return;
    };
    match record.verdict {
        Verdict::Accepted => println!(
            "Attempt {}: suggested word: {}",
            record.attempt, record.suggestion
        ),
        Verdict::Rejected(reason) => println!(
            "Attempt {}: invalid suggestion: {:?} ({reason})",
            record.attempt, record.suggestion
        ),
    }
}
