//! Error types for Duygu.

use std::path::PathBuf;
use thiserror::Error;

/// Prediction request failure.
///
/// The form controller treats every variant the same way (no result update);
/// the variants only exist so the log line and the CLI exit code are precise.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PredictionError {
    #[error("Request failed: {0}")]
    Transport(String),

    #[error("HTTP {status} from prediction service")]
    Status { status: u16 },

    #[error("Invalid response body: {0}")]
    InvalidBody(String),

    #[error("Invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },
}

impl PredictionError {
    /// True when the service could not be reached at all
    pub fn is_unreachable(&self) -> bool {
        matches!(self, PredictionError::Transport(_))
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid service endpoint '{url}': {reason}")]
    Endpoint { url: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unreachable_only_for_transport() {
        assert!(PredictionError::Transport("connection refused".into()).is_unreachable());
        assert!(!PredictionError::Status { status: 502 }.is_unreachable());
        assert!(!PredictionError::InvalidBody("eof".into()).is_unreachable());
    }

    #[test]
    fn test_status_message() {
        let err = PredictionError::Status { status: 500 };
        assert_eq!(err.to_string(), "HTTP 500 from prediction service");
    }
}
