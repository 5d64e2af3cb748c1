use crate::core::translator::RetryingTranslator;
use crate::core::{
    ConfigProvider, DatasetSource, Delay, OutputRow, Pipeline, Record, Storage, TransformResult,
    Translator,
};
use crate::utils::error::{Result, TranslateError};

pub const OUTPUT_FILE_NAME: &str = "translated_medical_o1_input_en_to_th.csv";

/// UTF-8 byte order mark, written ahead of the CSV payload so spreadsheet
/// tools render Thai script correctly.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct TranslatePipeline<D, T, L, S, C>
where
    D: DatasetSource,
    T: Translator,
    L: Delay,
    S: Storage,
    C: ConfigProvider,
{
    source: D,
    translator: RetryingTranslator<T, L>,
    storage: S,
    config: C,
}

impl<D, T, L, S, C> TranslatePipeline<D, T, L, S, C>
where
    D: DatasetSource,
    T: Translator,
    L: Delay,
    S: Storage,
    C: ConfigProvider,
{
    pub fn new(source: D, translator: RetryingTranslator<T, L>, storage: S, config: C) -> Self {
        Self {
            source,
            translator,
            storage,
            config,
        }
    }
}

#[async_trait::async_trait]
impl<D, T, L, S, C> Pipeline for TranslatePipeline<D, T, L, S, C>
where
    D: DatasetSource,
    T: Translator,
    L: Delay,
    S: Storage,
    C: ConfigProvider,
{
    async fn extract(&self) -> Result<Vec<Record>> {
        tracing::info!(
            "Loading first {} samples from {} ({}/{})",
            self.config.num_samples(),
            self.config.dataset(),
            self.config.dataset_config(),
            self.config.split()
        );
        self.source.load(self.config.num_samples()).await
    }

    /// Translates each record's question sequentially. Output rows stay
    /// aligned with the input: one row per record, in input order, even when
    /// a translation degrades to an error sentinel.
    async fn transform(&self, records: Vec<Record>) -> Result<TransformResult> {
        let total = records.len();
        let mut rows = Vec::with_capacity(total);
        let mut failed_rows = 0;

        for (i, record) in records.into_iter().enumerate() {
            tracing::debug!("Translating record {}/{}", i + 1, total);
            let outcome = self.translator.translate_with_retry(&record.question).await;

            if !outcome.succeeded {
                tracing::error!("Error translating text {}: giving up on this record", i);
                failed_rows += 1;
            }

            // The original column keeps the full question text even when the
            // translation was produced from a truncated version of it.
            rows.push(OutputRow {
                original_question_en: record.question,
                translated_question_th: outcome.translated_text,
                complex_cot: record.complex_cot,
                response: record.response,
            });
        }

        Ok(TransformResult { rows, failed_rows })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let mut buf = Vec::new();
        buf.extend_from_slice(UTF8_BOM);

        let mut writer = csv::Writer::from_writer(buf);
        for row in &result.rows {
            writer.serialize(row)?;
        }
        let buf = writer.into_inner().map_err(|e| {
            TranslateError::WriteError(std::io::Error::new(
                std::io::ErrorKind::Other,
                e.to_string(),
            ))
        })?;

        tracing::debug!("Writing CSV ({} bytes) to storage", buf.len());
        self.storage.write_file(OUTPUT_FILE_NAME, &buf).await?;

        Ok(format!("{}/{}", self.config.output_dir(), OUTPUT_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryPolicy;
    use crate::utils::error::TranslateError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct StaticSource {
        records: Vec<Record>,
    }

    #[async_trait]
    impl DatasetSource for StaticSource {
        async fn load(&self, n: usize) -> Result<Vec<Record>> {
            Ok(self.records.iter().take(n).cloned().collect())
        }
    }

    struct UppercaseTranslator;

    #[async_trait]
    impl Translator for UppercaseTranslator {
        async fn translate(
            &self,
            text: &str,
            _source_lang: &str,
            _target_lang: &str,
        ) -> Result<String> {
            Ok(text.to_uppercase())
        }
    }

    struct AlwaysFailingTranslator;

    #[async_trait]
    impl Translator for AlwaysFailingTranslator {
        async fn translate(
            &self,
            _text: &str,
            _source_lang: &str,
            _target_lang: &str,
        ) -> Result<String> {
            Err(TranslateError::TranslationError {
                message: "service down".to_string(),
            })
        }
    }

    struct NoDelay;

    #[async_trait]
    impl Delay for NoDelay {
        async fn wait(&self, _duration: Duration) {}
    }

    struct TestConfig {
        num_samples: usize,
    }

    impl ConfigProvider for TestConfig {
        fn dataset(&self) -> &str {
            "test/dataset"
        }

        fn dataset_config(&self) -> &str {
            "en"
        }

        fn split(&self) -> &str {
            "train"
        }

        fn num_samples(&self) -> usize {
            self.num_samples
        }

        fn output_dir(&self) -> &str {
            "test_output"
        }
    }

    fn sample_records() -> Vec<Record> {
        vec![
            Record {
                question: "A long question about symptoms".to_string(),
                complex_cot: "reasoning 1".to_string(),
                response: "answer 1".to_string(),
            },
            Record {
                question: "Short q".to_string(),
                complex_cot: "reasoning 2".to_string(),
                response: "answer 2".to_string(),
            },
            Record {
                question: "Another q".to_string(),
                complex_cot: "reasoning 3".to_string(),
                response: "answer 3".to_string(),
            },
        ]
    }

    fn pipeline_with<T: Translator>(
        translator: T,
        records: Vec<Record>,
        storage: MockStorage,
    ) -> TranslatePipeline<StaticSource, T, NoDelay, MockStorage, TestConfig> {
        let num_samples = records.len();
        TranslatePipeline::new(
            StaticSource { records },
            RetryingTranslator::new(translator, NoDelay, RetryPolicy::default()),
            storage,
            TestConfig { num_samples },
        )
    }

    #[tokio::test]
    async fn test_transform_translates_in_order() {
        let pipeline = pipeline_with(UppercaseTranslator, sample_records(), MockStorage::new());

        let records = pipeline.extract().await.unwrap();
        let result = pipeline.transform(records).await.unwrap();

        assert_eq!(result.rows.len(), 3);
        assert_eq!(result.failed_rows, 0);
        assert_eq!(
            result.rows[0].translated_question_th,
            "A LONG QUESTION ABOUT SYMPTOMS"
        );
        assert_eq!(result.rows[1].translated_question_th, "SHORT Q");
        assert_eq!(result.rows[2].translated_question_th, "ANOTHER Q");
        // Untranslated fields are copied through verbatim.
        assert_eq!(result.rows[0].original_question_en, "A long question about symptoms");
        assert_eq!(result.rows[2].complex_cot, "reasoning 3");
        assert_eq!(result.rows[2].response, "answer 3");
    }

    #[tokio::test]
    async fn test_transform_keeps_alignment_when_every_translation_fails() {
        let pipeline = pipeline_with(
            AlwaysFailingTranslator,
            sample_records(),
            MockStorage::new(),
        );

        let records = pipeline.extract().await.unwrap();
        let result = pipeline.transform(records).await.unwrap();

        // One row per record even on total failure, in input order.
        assert_eq!(result.rows.len(), 3);
        assert_eq!(result.failed_rows, 3);
        for (row, record) in result.rows.iter().zip(sample_records()) {
            assert!(row.translated_question_th.starts_with("[ERROR: "));
            assert_eq!(row.original_question_en, record.question);
        }
    }

    #[tokio::test]
    async fn test_original_column_keeps_full_text_past_truncation() {
        let long_question = "q".repeat(6000);
        let records = vec![Record {
            question: long_question.clone(),
            complex_cot: "cot".to_string(),
            response: "resp".to_string(),
        }];
        let pipeline = pipeline_with(UppercaseTranslator, records, MockStorage::new());

        let records = pipeline.extract().await.unwrap();
        let result = pipeline.transform(records).await.unwrap();

        // Translated column derives from the first 5000 chars only, but the
        // original column is untouched.
        assert_eq!(result.rows[0].original_question_en, long_question);
        assert_eq!(result.rows[0].translated_question_th.chars().count(), 5000);
    }

    #[tokio::test]
    async fn test_load_writes_bom_header_and_rows() {
        let storage = MockStorage::new();
        let pipeline = pipeline_with(UppercaseTranslator, sample_records(), storage.clone());

        let result = TransformResult {
            rows: vec![OutputRow {
                original_question_en: "Short q".to_string(),
                translated_question_th: "คำถามสั้น".to_string(),
                complex_cot: "cot".to_string(),
                response: "resp".to_string(),
            }],
            failed_rows: 0,
        };

        let output_path = pipeline.load(result).await.unwrap();
        assert_eq!(output_path, format!("test_output/{}", OUTPUT_FILE_NAME));

        let data = storage.get_file(OUTPUT_FILE_NAME).await.unwrap();
        assert_eq!(&data[..3], b"\xEF\xBB\xBF");

        let content = String::from_utf8(data[3..].to_vec()).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "original_question_en,translated_question_th,complex_cot,response"
        );
        assert_eq!(lines.next().unwrap(), "Short q,คำถามสั้น,cot,resp");
        assert!(lines.next().is_none());
    }

    #[tokio::test]
    async fn test_rerun_produces_identical_bytes() {
        let storage = MockStorage::new();
        let pipeline = pipeline_with(UppercaseTranslator, sample_records(), storage.clone());

        let records = pipeline.extract().await.unwrap();
        let result = pipeline.transform(records).await.unwrap();
        pipeline.load(result).await.unwrap();
        let first = storage.get_file(OUTPUT_FILE_NAME).await.unwrap();

        let records = pipeline.extract().await.unwrap();
        let result = pipeline.transform(records).await.unwrap();
        pipeline.load(result).await.unwrap();
        let second = storage.get_file(OUTPUT_FILE_NAME).await.unwrap();

        assert_eq!(first, second);
    }
}
