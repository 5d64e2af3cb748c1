pub mod engine;
pub mod pipeline;
pub mod translator;

pub use crate::domain::model::{OutputRow, Record, TransformResult, TranslationOutcome};
pub use crate::domain::ports::{
    ConfigProvider, DatasetSource, Delay, Pipeline, Storage, Translator,
};
pub use crate::utils::error::Result;
