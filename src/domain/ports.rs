use crate::domain::model::{Record, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Source of dataset records. A load failure is fatal for the whole run;
/// implementations must not retry.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Returns exactly `n` records in stable dataset order.
    async fn load(&self, n: usize) -> Result<Vec<Record>>;
}

/// Single translation attempt against some backend.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str)
        -> Result<String>;
}

/// Sleep strategy for retry backoff and rate-limit pacing. Injected so the
/// retry state machine can be tested without real elapsed time.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn dataset(&self) -> &str;
    fn dataset_config(&self) -> &str;
    fn split(&self) -> &str;
    fn num_samples(&self) -> usize;
    fn output_dir(&self) -> &str;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<Record>>;
    async fn transform(&self, records: Vec<Record>) -> Result<TransformResult>;
    async fn load(&self, result: TransformResult) -> Result<String>;
}
