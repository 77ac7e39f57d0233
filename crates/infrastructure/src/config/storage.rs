//! Upload/result directories and extraction limits.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk layout
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Staged uploads, removed after extraction
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,

    /// Synthesized artifacts served under `/results`
    #[serde(default = "default_results_dir")]
    pub results_dir: PathBuf,
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_results_dir() -> PathBuf {
    PathBuf::from("results")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            uploads_dir: default_uploads_dir(),
            results_dir: default_results_dir(),
        }
    }
}

/// Text extraction limits
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Upper bound for one document's extraction, in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// CSV rows past this index are ignored
    #[serde(default = "default_csv_max_rows")]
    pub csv_max_rows: usize,
}

const fn default_timeout_secs() -> u64 {
    60
}

const fn default_csv_max_rows() -> usize {
    5000
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            csv_max_rows: default_csv_max_rows(),
        }
    }
}
