use clap::Parser;
use med_translate::utils::{logger, validation::Validate};
use med_translate::{
    CliConfig, GoogleTranslator, HfDatasetSource, LocalStorage, RetryPolicy, RetryingTranslator,
    TokioDelay, TranslateEngine, TranslatePipeline,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting med-translate CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // Reserved for gated datasets; public datasets load without it.
    let hf_token = std::env::var("HUGGING_FACE_TOKEN").ok();
    if hf_token.is_none() {
        tracing::debug!("HUGGING_FACE_TOKEN not set, proceeding unauthenticated");
    }

    let source = HfDatasetSource::new(
        &config.dataset,
        &config.dataset_config,
        &config.split,
        hf_token,
    )
    .with_endpoint(&config.dataset_endpoint);
    let translator =
        RetryingTranslator::new(GoogleTranslator::new(), TokioDelay, RetryPolicy::default());
    let storage = LocalStorage::new(config.output_dir.clone());
    let pipeline = TranslatePipeline::new(source, translator, storage, config);

    let engine = TranslateEngine::new(pipeline);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Translation completed successfully!");
            println!("Translation complete. Results saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Translation run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                med_translate::utils::error::ErrorSeverity::Low => 0,
                med_translate::utils::error::ErrorSeverity::Medium => 2,
                med_translate::utils::error::ErrorSeverity::High => 1,
                med_translate::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
