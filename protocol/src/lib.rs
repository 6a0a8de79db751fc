use serde::Serialize;
use thiserror::Error;

pub mod request;
pub mod response;


pub use request::{MergeRequest, TurnRequest};
pub use response::{
    AttackSummary, MergePreview, MergedPokemon, MovementCount, SlotSummary, TurnResponse,
};

/// Movement type id that means "this request does not attack"
pub const NO_MOVEMENT: u32 = 0;

/// Request-level failure taxonomy shared by every arena operation
#[derive(Error, Debug)]
pub enum ArenaError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Invalid payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl ArenaError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn bad_request(why: impl Into<String>) -> Self {
        Self::BadRequest(why.into())
    }

    pub fn conflict(why: impl Into<String>) -> Self {
        Self::Conflict(why.into())
    }

    /// Wrap a broken invariant that is not the caller's fault
    pub fn internal(what: impl Into<String>) -> Self {
        Self::Internal(anyhow::Error::msg(what.into()))
    }

    /// HTTP status the transport layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::BadRequest(_) | Self::InvalidPayload(_) => 400,
            Self::Conflict(_) => 409,
            Self::Internal(_) => 500,
        }
    }

    /// Whether the request was rejected by a rule rather than failing
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }

    /// Body sent back to the caller. Internal details never leak.
    pub fn to_body(&self) -> ErrorBody {
        let message = match self {
            Self::Internal(_) => "Internal server error".to_string(),
            other => other.to_string(),
        };
        ErrorBody {
            status: self.status_code(),
            message,
        }
    }
}

/// JSON error body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub status: u16,
    pub message: String,
}
