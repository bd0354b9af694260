//! Translation backend abstraction
//!
//! A backend gives typed access to the two remote operations the UI needs:
//! the language listing and the translate call. The HTTP implementation
//! lives in [`libre`]; [`mock`] provides a configurable in-process stand-in
//! for tests.
//!
//! # Examples
//!
//! ```no_run
//! use liblingo::backends::{TranslationBackend, libre::LibreBackend};
//! use liblingo::config::Config;
//!
//! # async fn example() -> liblingo::error::Result<()> {
//! let config = Config::default();
//! let backend = LibreBackend::new(&config.service);
//!
//! let languages = backend.fetch_languages().await?;
//! println!("service speaks {} languages", languages.len());
//!
//! let translated = backend.translate("hello", "en", "es").await?;
//! println!("{}", translated);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Language;

pub mod libre;

// Mock backend is available for all builds (not just tests) to support
// integration tests in dependent crates.
pub mod mock;

/// Typed access to a remote translation service.
///
/// Implementations hold no per-call state; both operations are independent
/// network round trips with no retry.
#[async_trait]
pub trait TranslationBackend: Send + Sync {
    /// Fetch the languages the service can translate into.
    ///
    /// The returned order is the service's order and is preserved; the UI
    /// presents the list exactly as received.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Transport`](crate::error::ClientError) when the
    /// service is unreachable, [`ClientError::Decode`](crate::error::ClientError)
    /// when the body does not match the expected shape, and
    /// [`ClientError::Status`](crate::error::ClientError) on a non-2xx reply.
    async fn fetch_languages(&self) -> Result<Vec<Language>>;

    /// Translate `text` from `source` to `target` and return the translation.
    ///
    /// `source` and `target` are language codes from the service's listing.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`fetch_languages`](Self::fetch_languages).
    async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}
