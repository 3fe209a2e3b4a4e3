//! Error types for the action endpoints, the data-access client and config.
//!
//! `ActionError` implements `IntoResponse`, so handlers can return it
//! directly. Its `Display` text is the response body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("Invalid candidate")]
    InvalidCandidate,

    #[error("Invalid account")]
    InvalidAccount,

    #[error("Invalid request body")]
    InvalidBody,

    #[error("Failed to fetch latest blockhash: {0}")]
    Blockhash(String),

    #[error("Failed to serialize transaction: {0}")]
    Serialize(String),
}

impl ActionError {
    pub fn status(&self) -> StatusCode {
        match self {
            ActionError::InvalidCandidate | ActionError::InvalidAccount | ActionError::InvalidBody => {
                StatusCode::BAD_REQUEST
            }
            ActionError::Blockhash(_) => StatusCode::BAD_GATEWAY,
            ActionError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ActionError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{}", self);
        }
        (status, self.to_string()).into_response()
    }
}

/// A candidate name too long to be a PDA seed, so no account can exist for it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "Candidate name {0:?} is longer than {max} bytes",
    max = voting::constants::MAX_CANDIDATE_NAME_LEN
)]
pub struct CandidateNameError(pub String);

/// Failures of the data-access client.
///
/// Mutation variants carry the message shown to the user when the
/// transaction is rejected.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Failed to initialize poll: {0}")]
    InitializePoll(#[source] anchor_client::ClientError),

    #[error("Failed to initialize candidate: {0}")]
    InitializeCandidate(#[source] anchor_client::ClientError),

    #[error("Failed to cast vote: {0}")]
    Vote(#[source] anchor_client::ClientError),

    #[error("Failed to fetch {kind} accounts: {source}")]
    Fetch {
        kind: &'static str,
        #[source]
        source: anchor_client::ClientError,
    },

    #[error("Failed to connect to program: {0}")]
    Setup(#[source] anchor_client::ClientError),

    #[error(transparent)]
    CandidateName(#[from] CandidateNameError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}
