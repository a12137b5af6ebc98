// src/lib.rs

pub mod config;
pub mod core;
pub mod corpus;
pub mod error;
pub mod fuzzy;
pub mod keys;
pub mod learning;
pub mod logging;
pub mod persistence;
pub mod replace;

pub use crate::config::ReviewConfig;
pub use crate::core::engine::{Advance, ReviewSession, SessionEnd, SessionSummary, WordOutcome};
pub use crate::core::matcher::CandidateMatcher;
pub use crate::error::{ReplaceError, SweepError, SweepResult};
pub use crate::learning::ConfirmationStore;
