//! HTTP backend for LibreTranslate-compatible services

use async_trait::async_trait;
use tracing::debug;

use crate::config::ServiceConfig;
use crate::error::{ClientError, Result};
use crate::types::{Language, TranslationRequest, TranslationResponse};

use super::TranslationBackend;

/// Typed client for a LibreTranslate-compatible HTTP service.
///
/// Stateless between calls; the only held resource is the connection pool
/// inside [`reqwest::Client`].
pub struct LibreBackend {
    http: reqwest::Client,
    base_url: String,
}

impl LibreBackend {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }
}

#[async_trait]
impl TranslationBackend for LibreBackend {
    async fn fetch_languages(&self) -> Result<Vec<Language>> {
        debug!("Fetching language list from {}", self.base_url);

        let response = self
            .http
            .get(self.endpoint("languages"))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()).into());
        }

        let languages: Vec<Language> = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        debug!("Service advertises {} languages", languages.len());
        Ok(languages)
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let request = TranslationRequest {
            text: text.to_string(),
            source_language: source.to_string(),
            target_language: target.to_string(),
        };

        debug!(source, target, "Requesting translation");

        let response = self
            .http
            .post(self.endpoint("translate"))
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()).into());
        }

        let body: TranslationResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        Ok(body.translated_text)
    }
}
