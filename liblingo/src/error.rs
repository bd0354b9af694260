//! Error types for lingo

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LingoError>;

#[derive(Error, Debug)]
pub enum LingoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Translation service error: {0}")]
    Client(#[from] ClientError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Failures a translation backend can report.
///
/// The UI collapses all of these into one generic failure path; the variants
/// exist so logs can tell an unreachable service from a malformed payload.
#[derive(Error, Debug, Clone)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    Decode(String),

    #[error("Service returned status {0}")]
    Status(u16),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_formatting() {
        let error = ClientError::Transport("connection refused".to_string());
        assert_eq!(format!("{}", error), "Network error: connection refused");
    }

    #[test]
    fn test_decode_error_formatting() {
        let error = ClientError::Decode("missing field `translatedText`".to_string());
        assert_eq!(
            format!("{}", error),
            "Malformed response: missing field `translatedText`"
        );
    }

    #[test]
    fn test_status_error_formatting() {
        let error = ClientError::Status(503);
        assert_eq!(format!("{}", error), "Service returned status 503");
    }

    #[test]
    fn test_client_error_converts_to_lingo_error() {
        let client_error = ClientError::Transport("timed out".to_string());
        let error: LingoError = client_error.into();

        match error {
            LingoError::Client(_) => {}
            _ => panic!("Expected LingoError::Client"),
        }

        let message = format!("{}", LingoError::Client(ClientError::Status(500)));
        assert_eq!(
            message,
            "Translation service error: Service returned status 500"
        );
    }

    #[test]
    fn test_config_error_converts_to_lingo_error() {
        let config_error = ConfigError::MissingField("service.base_url".to_string());
        let error: LingoError = config_error.into();

        let message = format!("{}", error);
        assert!(message.contains("Configuration error"));
        assert!(message.contains("service.base_url"));
    }

    #[test]
    fn test_client_error_is_cloneable() {
        let original = ClientError::Decode("unexpected token".to_string());
        let cloned = original.clone();
        assert_eq!(format!("{}", original), format!("{}", cloned));
    }
}
