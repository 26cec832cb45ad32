//! HTTP client for a running Coqui `tts-server`.

use std::time::Duration;

use tracing::debug;

use crate::config::EngineConfig;

use super::Backend;
use super::speakers::parse_speaker_options;
use super::types::{BackendError, SynthesisRequest};

/// HTTP-based backend client.
pub struct HttpBackend {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpBackend {
    /// Create a new HTTP backend client.
    pub fn new(config: &EngineConfig) -> Result<Self, BackendError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        Ok(Self {
            base_url: config.server_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Get the base URL for this backend.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the synthesis endpoint.
    pub fn tts_url(&self) -> String {
        format!("{}/api/tts", self.base_url)
    }

    fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<reqwest::blocking::Response, BackendError> {
        debug!(%url, "requesting");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .map_err(|e| BackendError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(BackendError::RequestFailed(format!(
                "Status: {status}: {}",
                body.trim()
            )));
        }

        Ok(response)
    }
}

impl Backend for HttpBackend {
    fn speakers(&self) -> Result<Vec<String>, BackendError> {
        let url = format!("{}/", self.base_url);

        let html = self
            .get(&url, &[])?
            .text()
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))?;

        Ok(parse_speaker_options(&html))
    }

    fn synthesize(&self, request: &SynthesisRequest) -> Result<Vec<u8>, BackendError> {
        let mut query = vec![("text", request.text.as_str())];
        if let Some(speaker) = &request.speaker {
            query.push(("speaker_id", speaker.as_str()));
        }

        self.get(&self.tts_url(), &query)?
            .bytes()
            .map(|b| b.to_vec())
            .map_err(|e| BackendError::InvalidResponse(e.to_string()))
    }
}
