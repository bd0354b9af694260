//! Mock backend for testing
//!
//! A configurable stand-in for the HTTP backend. It can serve canned
//! language lists and translations, fail on demand, and delay its answers to
//! simulate network latency, so UI logic can be exercised without a real
//! service.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::error::{ClientError, Result};
use crate::types::Language;

use super::TranslationBackend;

/// Configuration for mock backend behavior
#[derive(Debug, Clone)]
pub struct MockConfig {
    /// Languages served by `fetch_languages`
    pub languages: Vec<Language>,

    /// Error to return from `fetch_languages` instead of the list
    pub languages_error: Option<ClientError>,

    /// Fixed translation to return; `None` echoes the input text back
    pub translation: Option<String>,

    /// Error to return from `translate` instead of a translation
    pub translate_error: Option<ClientError>,

    /// Delay before completing either operation (simulates network latency)
    pub delay: Duration,

    /// Number of times `fetch_languages` has been called
    pub fetch_call_count: Arc<Mutex<usize>>,

    /// Number of times `translate` has been called
    pub translate_call_count: Arc<Mutex<usize>>,

    /// (text, source, target) triples seen by `translate`, for verification
    pub translated_requests: Arc<Mutex<Vec<(String, String, String)>>>,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            languages: vec![
                Language {
                    code: "en".to_string(),
                    name: "English".to_string(),
                },
                Language {
                    code: "es".to_string(),
                    name: "Spanish".to_string(),
                },
                Language {
                    code: "fr".to_string(),
                    name: "French".to_string(),
                },
            ],
            languages_error: None,
            translation: None,
            translate_error: None,
            delay: Duration::from_millis(0),
            fetch_call_count: Arc::new(Mutex::new(0)),
            translate_call_count: Arc::new(Mutex::new(0)),
            translated_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Mock backend for testing
pub struct MockBackend {
    config: MockConfig,
}

impl MockBackend {
    /// Create a mock backend with the given configuration
    pub fn new(config: MockConfig) -> Self {
        Self { config }
    }

    /// Create a mock backend that serves the default language list and
    /// echoes translations back
    pub fn success() -> Self {
        Self::new(MockConfig::default())
    }

    /// Create a mock backend serving a specific language list
    pub fn with_languages(pairs: &[(&str, &str)]) -> Self {
        Self::new(MockConfig {
            languages: pairs
                .iter()
                .map(|(code, name)| Language {
                    code: code.to_string(),
                    name: name.to_string(),
                })
                .collect(),
            ..Default::default()
        })
    }

    /// Create a mock backend that returns a fixed translation for any input
    pub fn returning(translation: &str) -> Self {
        Self::new(MockConfig {
            translation: Some(translation.to_string()),
            ..Default::default()
        })
    }

    /// Create a mock backend whose language fetch fails
    pub fn languages_failure(error: ClientError) -> Self {
        Self::new(MockConfig {
            languages_error: Some(error),
            ..Default::default()
        })
    }

    /// Create a mock backend whose translate call fails
    pub fn translate_failure(error: ClientError) -> Self {
        Self::new(MockConfig {
            translate_error: Some(error),
            ..Default::default()
        })
    }

    /// Create a mock backend that answers after a delay
    pub fn with_delay(translation: &str, delay: Duration) -> Self {
        Self::new(MockConfig {
            translation: Some(translation.to_string()),
            delay,
            ..Default::default()
        })
    }

    /// Get the number of times `fetch_languages` was called
    pub fn fetch_call_count(&self) -> usize {
        *self.config.fetch_call_count.lock().unwrap()
    }

    /// Get the number of times `translate` was called
    pub fn translate_call_count(&self) -> usize {
        *self.config.translate_call_count.lock().unwrap()
    }

    /// Get all (text, source, target) triples that were translated
    pub fn translated_requests(&self) -> Vec<(String, String, String)> {
        self.config.translated_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationBackend for MockBackend {
    async fn fetch_languages(&self) -> Result<Vec<Language>> {
        *self.config.fetch_call_count.lock().unwrap() += 1;

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        match &self.config.languages_error {
            Some(error) => Err(error.clone().into()),
            None => Ok(self.config.languages.clone()),
        }
    }

    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        *self.config.translate_call_count.lock().unwrap() += 1;
        self.config.translated_requests.lock().unwrap().push((
            text.to_string(),
            source.to_string(),
            target.to_string(),
        ));

        if !self.config.delay.is_zero() {
            sleep(self.config.delay).await;
        }

        match &self.config.translate_error {
            Some(error) => Err(error.clone().into()),
            None => Ok(self
                .config
                .translation
                .clone()
                .unwrap_or_else(|| text.to_string())),
        }
    }
}
