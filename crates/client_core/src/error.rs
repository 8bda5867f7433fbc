use reqwest::StatusCode;
use thiserror::Error;

/// Failures talking to the `/usuario` API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid API base url '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded {status}: {message}")]
    Status { status: StatusCode, message: String },
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            Self::InvalidBaseUrl { .. } => None,
        }
    }
}

/// Caller errors rejected before any request is issued.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    #[error("page numbers start at 1")]
    InvalidPage,
    #[error(transparent)]
    InvalidFilter(#[from] shared::domain::UnknownFilter),
}
