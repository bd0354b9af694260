//! Service layer adapter for the TUI
//!
//! Bridges the async translation backend and the synchronous event loop.
//! A [`ServiceHandle`] owns a tokio runtime; each network operation is
//! spawned as an independent fire-and-forget task whose outcome is delivered
//! over a crossbeam channel that the event loop drains between frames. The
//! handle never blocks the caller.
//!
//! Nothing here cancels anything: superseded translate tasks run to
//! completion and their completions are discarded by the reducer's sequence
//! check.

use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, Sender};
use tracing::error;

use liblingo::backends::libre::LibreBackend;
use liblingo::backends::TranslationBackend;
use liblingo::config::Config;
use liblingo::types::Language;

use crate::error::Result;

/// Completion events delivered to the event loop
#[derive(Debug, Clone)]
pub enum ServiceEvent {
    /// Startup language fetch succeeded
    LanguagesLoaded(Vec<Language>),

    /// Startup language fetch failed
    LanguagesFailed(String),

    /// Translate request `seq` finished successfully
    TranslationCompleted { seq: u64, text: String },

    /// Translate request `seq` failed
    TranslationFailed { seq: u64, error: String },
}

/// Service handle for TUI operations
///
/// Wraps a [`TranslationBackend`] and a tokio runtime so the synchronous
/// event loop can issue async work without blocking.
pub struct ServiceHandle {
    backend: Arc<dyn TranslationBackend>,
    runtime: tokio::runtime::Runtime,
    event_tx: Sender<ServiceEvent>,
    event_rx: Receiver<ServiceEvent>,
}

impl ServiceHandle {
    /// Create a handle talking to the HTTP service named in `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_backend(Arc::new(LibreBackend::new(&config.service)))
    }

    /// Create a handle over an explicit backend (tests inject a mock here).
    pub fn with_backend(backend: Arc<dyn TranslationBackend>) -> Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (event_tx, event_rx) = unbounded();

        Ok(Self {
            backend,
            runtime,
            event_tx,
            event_rx,
        })
    }

    /// Receiver for completion events. The event loop polls this with
    /// `try_recv` once per frame.
    pub fn subscribe(&self) -> Receiver<ServiceEvent> {
        self.event_rx.clone()
    }

    /// Fetch the language list. Called once at startup; returns immediately.
    ///
    /// Failure is not an error to the caller: it is logged and reported as
    /// [`ServiceEvent::LanguagesFailed`], which leaves the list empty.
    pub fn load_languages(&self) {
        let backend = Arc::clone(&self.backend);
        let tx = self.event_tx.clone();

        self.runtime.spawn(async move {
            match backend.fetch_languages().await {
                Ok(languages) => {
                    let _ = tx.send(ServiceEvent::LanguagesLoaded(languages));
                }
                Err(e) => {
                    error!("Language fetch failed: {}", e);
                    let _ = tx.send(ServiceEvent::LanguagesFailed(e.to_string()));
                }
            }
        });
    }

    /// Issue translate request `seq`. Returns immediately; the outcome
    /// arrives later on the subscribed channel, tagged with `seq` so the
    /// reducer can discard superseded responses.
    pub fn translate(&self, seq: u64, text: String, source: String, target: String) {
        let backend = Arc::clone(&self.backend);
        let tx = self.event_tx.clone();

        self.runtime.spawn(async move {
            match backend.translate(&text, &source, &target).await {
                Ok(translated) => {
                    let _ = tx.send(ServiceEvent::TranslationCompleted {
                        seq,
                        text: translated,
                    });
                }
                Err(e) => {
                    error!(seq, "Translation failed: {}", e);
                    let _ = tx.send(ServiceEvent::TranslationFailed {
                        seq,
                        error: e.to_string(),
                    });
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liblingo::backends::mock::MockBackend;
    use std::time::Duration;

    #[test]
    fn test_load_languages_delivers_list() {
        let services =
            ServiceHandle::with_backend(Arc::new(MockBackend::with_languages(&[
                ("en", "English"),
                ("it", "Italian"),
            ])))
            .unwrap();
        let rx = services.subscribe();

        services.load_languages();

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            ServiceEvent::LanguagesLoaded(languages) => {
                assert_eq!(languages.len(), 2);
                assert_eq!(languages[1].code, "it");
            }
            other => panic!("Expected LanguagesLoaded, got {:?}", other),
        }
    }

    #[test]
    fn test_translate_delivers_tagged_completion() {
        let services =
            ServiceHandle::with_backend(Arc::new(MockBackend::returning("hallo"))).unwrap();
        let rx = services.subscribe();

        services.translate(7, "hello".to_string(), "en".to_string(), "de".to_string());

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            ServiceEvent::TranslationCompleted { seq, text } => {
                assert_eq!(seq, 7);
                assert_eq!(text, "hallo");
            }
            other => panic!("Expected TranslationCompleted, got {:?}", other),
        }
    }

    #[test]
    fn test_backend_failure_becomes_an_event_not_a_panic() {
        let services = ServiceHandle::with_backend(Arc::new(MockBackend::translate_failure(
            liblingo::ClientError::Status(502),
        )))
        .unwrap();
        let rx = services.subscribe();

        services.translate(1, "hello".to_string(), "en".to_string(), "es".to_string());

        match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            ServiceEvent::TranslationFailed { seq, error } => {
                assert_eq!(seq, 1);
                assert!(error.contains("502"));
            }
            other => panic!("Expected TranslationFailed, got {:?}", other),
        }
    }
}
