use crate::config::RetryPolicy;
use crate::core::{Delay, TranslationOutcome, Translator};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Real sleep backing the [`Delay`] port.
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Wraps a [`Translator`] with bounded fixed-delay retry, oversize-input
/// truncation and rate-limit pacing. One record exhausting its retries never
/// aborts the batch; it degrades to an `[ERROR: ...]` sentinel instead.
pub struct RetryingTranslator<T: Translator, L: Delay> {
    translator: T,
    delay: L,
    policy: RetryPolicy,
    source_lang: String,
    target_lang: String,
}

impl<T: Translator, L: Delay> RetryingTranslator<T, L> {
    pub fn new(translator: T, delay: L, policy: RetryPolicy) -> Self {
        Self {
            translator,
            delay,
            policy,
            source_lang: "en".to_string(),
            target_lang: "th".to_string(),
        }
    }

    pub fn with_languages(mut self, source_lang: &str, target_lang: &str) -> Self {
        self.source_lang = source_lang.to_string();
        self.target_lang = target_lang.to_string();
        self
    }

    /// Translate one text. Always returns an outcome; failures surface as a
    /// sentinel string, not an error. Applies the per-record pacing delay
    /// before returning (1 unit on success, 5 units on failure).
    pub async fn translate_with_retry(&self, text: &str) -> TranslationOutcome {
        let text = self.clamp(text);

        match self.attempt_all(text).await {
            Ok((translated_text, attempts_used)) => {
                self.delay.wait(self.policy.pacing_on_success).await;
                TranslationOutcome {
                    translated_text,
                    attempts_used,
                    succeeded: true,
                }
            }
            Err(e) => {
                tracing::error!(
                    "Translation failed after {} attempts: {}",
                    self.policy.max_retries,
                    e
                );
                self.delay.wait(self.policy.pacing_on_failure).await;
                TranslationOutcome {
                    translated_text: format!("[ERROR: {}]", e),
                    attempts_used: self.policy.max_retries,
                    succeeded: false,
                }
            }
        }
    }

    /// Bounded retry loop: up to `max_retries` attempts with a fixed backoff
    /// between them. The final failure propagates to the caller.
    async fn attempt_all(&self, text: &str) -> Result<(String, u32)> {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match self
                .translator
                .translate(text, &self.source_lang, &self.target_lang)
                .await
            {
                Ok(translated) => return Ok((translated, attempt)),
                Err(e) if attempt < self.policy.max_retries => {
                    tracing::warn!(
                        "Translation retry {}/{}: {}",
                        attempt,
                        self.policy.max_retries,
                        e
                    );
                    self.delay.wait(self.policy.retry_backoff).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Truncates oversize input to the first `max_chars` characters. The
    /// caller keeps the full original text; only the translated side derives
    /// from the truncated version.
    fn clamp<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.policy.max_chars) {
            Some((byte_index, _)) => {
                tracing::warn!(
                    "Text is too long ({} chars), truncating to {}",
                    text.chars().count(),
                    self.policy.max_chars
                );
                &text[..byte_index]
            }
            None => text,
        }
    }
}
