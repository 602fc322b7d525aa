use crate::error::TransferError;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum RejectionStatus {
    BadRequest,
    InternalError,
}

impl fmt::Display for RejectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => f.write_str("bad request"),
            Self::InternalError => f.write_str("internal error"),
        }
    }
}

/// Client-facing view of a failed request.
///
/// Validation failures surface their own message with a uniform bad-request
/// status. Anything else is a server-side fault and its details stay in the logs.
#[derive(Debug, Serialize, PartialEq, Eq, Clone)]
pub struct Rejection {
    pub status: RejectionStatus,
    pub message: String,
}

impl Rejection {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&TransferError> for Rejection {
    fn from(error: &TransferError) -> Self {
        if error.is_validation() {
            Self {
                status: RejectionStatus::BadRequest,
                message: error.to_string(),
            }
        } else {
            Self {
                status: RejectionStatus::InternalError,
                message: "Internal server error".to_string(),
            }
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}): {}", self.status, self.message)
    }
}
