pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{GoogleTranslator, HfDatasetSource};
pub use config::{cli::LocalStorage, CliConfig, RetryPolicy};
pub use core::engine::TranslateEngine;
pub use core::pipeline::TranslatePipeline;
pub use core::translator::{RetryingTranslator, TokioDelay};
pub use utils::error::{Result, TranslateError};
