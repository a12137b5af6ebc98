// File: src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Conditions that stop a session before or during startup.
#[derive(Debug, Error)]
pub enum SweepError {
    #[error("could not read confirmed words from {path}: {source}")]
    ConfirmedLog {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Config(String),
    #[error("could not parse configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("terminal error: {0}")]
    Terminal(#[source] std::io::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A failed substitution. Reported to the operator, never fatal.
#[derive(Debug, Error)]
pub enum ReplaceError {
    #[error("failed to rewrite {path}: {source}")]
    Rewrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0}")]
    Other(String),
}

pub type SweepResult<T> = Result<T, SweepError>;
