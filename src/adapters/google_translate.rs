use crate::core::Translator;
use crate::utils::error::{Result, TranslateError};
use async_trait::async_trait;
use reqwest::Client;

const DEFAULT_ENDPOINT: &str = "https://translate.googleapis.com";

/// Translator backed by the free `translate_a/single` web endpoint. The
/// response is an untyped nested array; the translation is the concatenation
/// of the first element of every segment in the first array.
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
}

impl GoogleTranslator {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    fn failed(message: String) -> TranslateError {
        TranslateError::TranslationError { message }
    }
}

impl Default for GoogleTranslator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(&self, text: &str, source_lang: &str, target_lang: &str)
        -> Result<String> {
        let url = format!("{}/translate_a/single", self.endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("client", "gtx"),
                ("sl", source_lang),
                ("tl", target_lang),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await
            .map_err(|e| Self::failed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::failed(format!("{} returned {}", url, status)));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| Self::failed(format!("unexpected response body: {}", e)))?;

        // Long inputs come back split into sentence segments.
        let segments = payload
            .get(0)
            .and_then(|v| v.as_array())
            .ok_or_else(|| Self::failed("response has no translation segments".to_string()))?;

        let mut translated = String::new();
        for segment in segments {
            if let Some(part) = segment.get(0).and_then(|v| v.as_str()) {
                translated.push_str(part);
            }
        }

        if translated.is_empty() {
            return Err(Self::failed(
                "response segments contained no translated text".to_string(),
            ));
        }

        Ok(translated)
    }
}
