use std::io::{self, stdin, stdout, IsTerminal, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use sweep_core::corpus::FileCorpus;
use sweep_core::keys::TerminalKeys;
use sweep_core::replace::FileReplacer;
use sweep_core::{
    logging, CandidateMatcher, ConfirmationStore, ReviewConfig, ReviewSession, SessionEnd, SweepResult,
};

/// Review near-duplicate spellings across a set of text files
#[derive(Parser, Debug)]
#[command(name = "typo-sweep")]
#[command(about = "Interactively confirm or replace suspiciously similar words", long_about = None)]
struct Args {
    /// JSON configuration file; flags given here override it
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum difference between two words to consider them related
    #[arg(short, long)]
    variance: Option<f64>,

    /// Directory that holds the project's cache
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Files to review; read from stdin when omitted and stdin is piped
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

impl Args {
    /// Layers the flags over the config file, or over the defaults.
    fn into_config(self) -> SweepResult<ReviewConfig> {
        let mut config = match &self.config {
            Some(path) => ReviewConfig::from_json_file(path)?,
            None => ReviewConfig::default(),
        };
        if let Some(variance) = self.variance {
            config.variance = variance;
        }
        if let Some(root) = self.root {
            config.root = root;
        }
        if !self.files.is_empty() {
            config.files = self.files;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let config = match Args::parse().into_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(config) {
        Ok(SessionEnd::Completed(summary)) => {
            println!(
                "Reviewed {} words: {} kept, {} replaced, {} already confirmed, {} unremarkable.",
                summary.total(),
                summary.confirmed,
                summary.replaced,
                summary.skipped,
                summary.no_candidates
            );
            ExitCode::SUCCESS
        }
        // No summary, no cleanup beyond leaving raw mode.
        Ok(SessionEnd::Interrupted) => std::process::exit(130),
        Err(e) => {
            eprintln!("[ERROR] {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(mut config: ReviewConfig) -> SweepResult<SessionEnd> {
    if config.files.is_empty() && !stdin().is_terminal() {
        config.files = read_file_list(stdin())?;
    }
    config.validate()?;
    config.ensure_cache_dir()?;
    logging::init(&config.log_file_path());
    tracing::info!(files = config.files.len(), variance = config.variance, "starting review");

    let store = ConfirmationStore::load(config.confirmed_log_path())?;
    let matcher = CandidateMatcher::new(config.variance, config.weights);
    let mut session = ReviewSession::new(store, matcher, FileReplacer::new(config.files.clone()));
    session.ingest(&FileCorpus::new(config.files.clone()))?;

    let end = {
        let mut keys = TerminalKeys::new()?;
        let mut out = stdout().lock();
        let end = session.run(&mut keys, &mut out)?;
        out.flush()?;
        end
    };

    if let SessionEnd::Completed(_) = end {
        if let Err(e) = session.store().compact() {
            tracing::warn!(error = %e, "could not compact confirmed log");
        }
    }
    Ok(end)
}

/// Whitespace-separated paths, as piped in from `find` or `ls`.
fn read_file_list<R: Read>(mut input: R) -> io::Result<Vec<PathBuf>> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    Ok(text.split_whitespace().map(PathBuf::from).collect())
}
