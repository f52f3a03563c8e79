use std::time::Duration;

use rr_core::RrError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("routing request timed out after {0:?}")]
    Timeout(Duration),

    #[error("routing backend unreachable: {0}")]
    Unreachable(String),

    #[error("routing backend returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("malformed routing response: {0}")]
    Malformed(String),

    #[error("routing backend returned no routes")]
    EmptyResult,

    #[error("routing response has no {0} coordinates")]
    MissingEndpoint(&'static str),

    #[error("invalid coordinate in routing response: {0}")]
    InvalidCoordinate(#[from] RrError),

    #[error("client configuration error: {0}")]
    Config(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    /// The single message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Timeout(_) | ClientError::Unreachable(_) => {
                "Could not reach the routing service. Please make sure the backend server is running."
                    .to_string()
            }
            ClientError::Status { message, .. } if !message.is_empty() => message.clone(),
            ClientError::Status { status, .. } => {
                format!("The routing service returned an error (HTTP {status}). Please try again.")
            }
            ClientError::EmptyResult => {
                "No routes found. Please check your addresses and try again.".to_string()
            }
            ClientError::MissingEndpoint(_) | ClientError::InvalidCoordinate(_) => {
                "Invalid coordinates received from server. Please check your addresses and try again."
                    .to_string()
            }
            ClientError::Malformed(_) => {
                "The routing service sent a response that could not be read.".to_string()
            }
            ClientError::Config(msg) => format!("The route planner is misconfigured: {msg}"),
        }
    }
}
