// File: src/config.rs
use crate::core::matcher::DEFAULT_VARIANCE;
use crate::error::{SweepError, SweepResult};
use crate::fuzzy::distance::EditWeights;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CACHE_DIR: &str = ".typo-sweep";
const CONFIRMED_LOG: &str = "confirmed";
const LOG_FILE: &str = "typo-sweep.log";

/// Settings for one review session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewConfig {
    /// Files whose words are reviewed and rewritten.
    pub files: Vec<PathBuf>,
    /// Maximum similarity score for two words to be considered related.
    pub variance: f64,
    /// Base directory for the cache.
    pub root: PathBuf,
    pub weights: EditWeights,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            variance: DEFAULT_VARIANCE,
            root: PathBuf::from("./"),
            weights: EditWeights::default(),
        }
    }
}

impl ReviewConfig {
    pub fn from_json_file(path: &Path) -> SweepResult<Self> {
        let text = fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| SweepError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.root.join(CACHE_DIR)
    }

    pub fn confirmed_log_path(&self) -> PathBuf {
        self.cache_dir().join(CONFIRMED_LOG)
    }

    pub fn log_file_path(&self) -> PathBuf {
        self.cache_dir().join(LOG_FILE)
    }

    /// Creates the cache directory if it does not exist yet.
    pub fn ensure_cache_dir(&self) -> SweepResult<PathBuf> {
        let dir = self.cache_dir();
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }

    pub fn validate(&self) -> SweepResult<()> {
        if !self.variance.is_finite() || self.variance < 0.0 {
            return Err(SweepError::Config(format!(
                "variance must be a non-negative number, got {}",
                self.variance
            )));
        }
        if self.files.is_empty() {
            return Err(SweepError::Config("no target files given".to_string()));
        }
        Ok(())
    }
}
