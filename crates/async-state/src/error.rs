//! Error types for decoding async state records.
//!
//! Constructors never fail. These errors only come out of the wire decode path.

use thiserror::Error;

use crate::status::AsyncStatus;

#[derive(Error, Debug)]
pub enum AsyncStateError {
    #[error("Unknown status tag: {0:?}")]
    UnknownStatus(String),

    #[error("State '{status}' requires data")]
    MissingData { status: AsyncStatus },

    #[error("State 'error' requires an error value")]
    MissingError,

    #[error("State '{status}' cannot carry an error")]
    UnexpectedError { status: AsyncStatus },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AsyncStateError {
    pub fn code(&self) -> i32 {
        match self {
            AsyncStateError::UnknownStatus(_) => -32010,
            AsyncStateError::MissingData { .. } => -32011,
            AsyncStateError::MissingError => -32012,
            AsyncStateError::UnexpectedError { .. } => -32013,
            AsyncStateError::Json(_) => -32700,
        }
    }
}
