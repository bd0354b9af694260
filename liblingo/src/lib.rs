//! lingo service library
//!
//! Typed access to a LibreTranslate-compatible translation service, plus the
//! configuration, logging, and error plumbing shared by the lingo binaries.

pub mod backends;
pub mod config;
pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use backends::TranslationBackend;
pub use config::Config;
pub use error::{ClientError, LingoError, Result};
pub use types::Language;
