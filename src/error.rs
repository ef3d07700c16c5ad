use serde_json::Error as JsonError;
use std::io::Error as IoError;
use thiserror::Error;
use toml::de::Error as TomlError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the ambient layer: loading configuration and scenarios.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] IoError),
    #[error("Invalid JSON: {0}")]
    Json(#[from] JsonError),
    #[error("Invalid config: {0}")]
    Config(#[from] TomlError),
}

/// Reasons a vote can be refused. The `Display` text is the reason handed
/// to the caller's error handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VoteError {
    #[error("Voter not registered")]
    NotRegistered,
    #[error("Voter already voted")]
    AlreadyVoted,
    #[error("Invalid candidate")]
    InvalidCandidate,
}

/// Reasons a voter record can fail a validator built by
/// [`create_vote_validator`](crate::model::validator::create_vote_validator).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid voter object")]
    InvalidVoter,
    #[error("Missing field: {0}")]
    MissingField(String),
    #[error("Age must be at least {0}")]
    Underage(u32),
}
