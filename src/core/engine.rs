use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives a pipeline through its three stages exactly once.
pub struct TranslateEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> TranslateEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let records = self.pipeline.extract().await?;
        tracing::info!("Loaded {} records", records.len());

        tracing::info!("Translating texts...");
        let result = self.pipeline.transform(records).await?;
        if result.failed_rows > 0 {
            tracing::warn!(
                "{} of {} records degraded to error sentinels",
                result.failed_rows,
                result.rows.len()
            );
        }

        tracing::info!("Saving results...");
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
