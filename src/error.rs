use reqwest::StatusCode;
use std::{fmt, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "config file `{}` not found; a template was created, fill in your token and size, then run again",
        .0.display()
    )]
    Missing(PathBuf),

    #[error("config key `{0}` is missing")]
    MissingKey(&'static str),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum QueryError {
    #[error("service returned error code {code}: {message}")]
    Service { code: ResponseCode, message: String },

    #[error("transport error: malformed response (status {status}): {body}")]
    Transport {
        status: StatusCode,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("transport error: {0}")]
    Request(#[from] reqwest::Error),
}

/// Envelope status code; the service sends integers, and strings for some failures.
#[derive(serde::Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum ResponseCode {
    Number(i64),
    Text(String),
}

impl ResponseCode {
    pub fn is_success(&self) -> bool {
        match self {
            ResponseCode::Number(code) => *code == 0,
            ResponseCode::Text(code) => code.trim() == "0",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseCode::Number(code) => write!(f, "{}", code),
            ResponseCode::Text(code) => write!(f, "{}", code),
        }
    }
}
