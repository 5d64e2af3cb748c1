pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(name = "med-translate")]
#[command(about = "Translate medical question records from English to Thai and export as CSV")]
pub struct CliConfig {
    #[arg(long, default_value = "FreedomIntelligence/medical-o1-reasoning-SFT")]
    pub dataset: String,

    #[arg(long, default_value = "en")]
    pub dataset_config: String,

    #[arg(long, default_value = "train")]
    pub split: String,

    #[arg(long, default_value = "https://datasets-server.huggingface.co")]
    pub dataset_endpoint: String,

    #[arg(long, default_value = "10")]
    pub num_samples: usize,

    #[arg(long, default_value = "./output")]
    pub output_dir: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn dataset(&self) -> &str {
        &self.dataset
    }

    fn dataset_config(&self) -> &str {
        &self.dataset_config
    }

    fn split(&self) -> &str {
        &self.split
    }

    fn num_samples(&self) -> usize {
        self.num_samples
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("dataset", &self.dataset)?;
        validate_non_empty_string("dataset_config", &self.dataset_config)?;
        validate_non_empty_string("split", &self.split)?;
        validate_url("dataset_endpoint", &self.dataset_endpoint)?;
        validate_positive_number("num_samples", self.num_samples, 1)?;
        validate_path("output_dir", &self.output_dir)?;
        Ok(())
    }
}

/// Retry and pacing constants for the translation loop. Constructed once at
/// startup and passed down; never read from globals.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_retries: u32,
    /// Fixed wait between failed attempts (not exponential).
    pub retry_backoff: Duration,
    /// Wait after a successfully translated record.
    pub pacing_on_success: Duration,
    /// Wait after a record that exhausted all retries. Replaces the success
    /// pacing, it is not added on top of it.
    pub pacing_on_failure: Duration,
    /// Inputs longer than this many characters are truncated before
    /// translation.
    pub max_chars: usize,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 5,
            retry_backoff: Duration::from_secs(2),
            pacing_on_success: Duration::from_secs(1),
            pacing_on_failure: Duration::from_secs(5),
            max_chars: 5000,
        }
    }
}
