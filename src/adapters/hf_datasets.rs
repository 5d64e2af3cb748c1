use crate::core::{DatasetSource, Record};
use crate::utils::error::{Result, TranslateError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

const DEFAULT_ENDPOINT: &str = "https://datasets-server.huggingface.co";

/// Dataset source backed by the Hugging Face datasets-server rows API.
/// Load failures are fatal and never retried here.
pub struct HfDatasetSource {
    client: Client,
    endpoint: String,
    dataset: String,
    config: String,
    split: String,
    /// Optional hosted-dataset token. Public datasets work without it.
    token: Option<String>,
}

impl HfDatasetSource {
    pub fn new(dataset: &str, config: &str, split: &str, token: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            dataset: dataset.to_string(),
            config: config.to_string(),
            split: split.to_string(),
            token,
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.trim_end_matches('/').to_string();
        self
    }

    fn unavailable(message: String) -> TranslateError {
        TranslateError::DatasetUnavailableError { message }
    }
}

#[derive(Debug, Deserialize)]
struct RowsResponse {
    rows: Vec<RowEntry>,
}

#[derive(Debug, Deserialize)]
struct RowEntry {
    row: DatasetRow,
}

#[derive(Debug, Deserialize)]
struct DatasetRow {
    #[serde(rename = "Question")]
    question: String,
    #[serde(rename = "Complex_CoT")]
    complex_cot: String,
    #[serde(rename = "Response")]
    response: String,
}

#[async_trait]
impl DatasetSource for HfDatasetSource {
    async fn load(&self, n: usize) -> Result<Vec<Record>> {
        let url = format!("{}/rows", self.endpoint);
        let length = n.to_string();

        tracing::debug!("Fetching {} rows from {}", n, url);
        let mut request = self.client.get(&url).query(&[
            ("dataset", self.dataset.as_str()),
            ("config", self.config.as_str()),
            ("split", self.split.as_str()),
            ("offset", "0"),
            ("length", length.as_str()),
        ]);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Self::unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::unavailable(format!(
                "{} returned {} for {}/{} split {}",
                url, status, self.dataset, self.config, self.split
            )));
        }

        let payload: RowsResponse = response
            .json()
            .await
            .map_err(|e| Self::unavailable(format!("unexpected rows payload: {}", e)))?;

        let records: Vec<Record> = payload
            .rows
            .into_iter()
            .map(|entry| Record {
                question: entry.row.question,
                complex_cot: entry.row.complex_cot,
                response: entry.row.response,
            })
            .collect();

        if records.len() != n {
            return Err(Self::unavailable(format!(
                "requested {} rows but got {}",
                n,
                records.len()
            )));
        }

        Ok(records)
    }
}
