//! Core types for lingo

use serde::{Deserialize, Serialize};

/// A translatable language as advertised by the remote service.
///
/// Never constructed locally; the service's `/languages` listing is the
/// source of truth. `code` identifies the language (e.g. "en"), `name` is
/// display-only and not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub code: String,
    pub name: String,
}

/// Wire request for `POST /translate`.
#[derive(Debug, Clone, Serialize)]
pub struct TranslationRequest {
    #[serde(rename = "q")]
    pub text: String,
    #[serde(rename = "source")]
    pub source_language: String,
    #[serde(rename = "target")]
    pub target_language: String,
}

/// Wire response for a [`TranslationRequest`].
#[derive(Debug, Clone, Deserialize)]
pub struct TranslationResponse {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}
