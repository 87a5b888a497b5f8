//! Status tags for async state values.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::AsyncStateError;

pub const SUCCESS: &str = "success";
pub const ERROR: &str = "error";
pub const LOADING: &str = "loading";
pub const REFETCH: &str = "refetch";
pub const INITIAL: &str = "initial";

/// Discriminant of an [`AsyncState`](crate::AsyncState)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AsyncStatus {
    Success,
    Error,
    Loading,
    Refetch,
    Initial,
}

impl AsyncStatus {
    /// Every tag a state can carry, in declaration order.
    pub const ALL: [AsyncStatus; 5] = [
        AsyncStatus::Success,
        AsyncStatus::Error,
        AsyncStatus::Loading,
        AsyncStatus::Refetch,
        AsyncStatus::Initial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AsyncStatus::Success => SUCCESS,
            AsyncStatus::Error => ERROR,
            AsyncStatus::Loading => LOADING,
            AsyncStatus::Refetch => REFETCH,
            AsyncStatus::Initial => INITIAL,
        }
    }

    /// A request is in flight (first load or refetch)
    pub fn is_pending(&self) -> bool {
        matches!(self, AsyncStatus::Loading | AsyncStatus::Refetch)
    }

    /// The last request finished, successfully or not
    pub fn is_settled(&self) -> bool {
        matches!(self, AsyncStatus::Success | AsyncStatus::Error)
    }
}

impl std::fmt::Display for AsyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AsyncStatus {
    type Err = AsyncStateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SUCCESS => Ok(AsyncStatus::Success),
            ERROR => Ok(AsyncStatus::Error),
            LOADING => Ok(AsyncStatus::Loading),
            REFETCH => Ok(AsyncStatus::Refetch),
            INITIAL => Ok(AsyncStatus::Initial),
            other => Err(AsyncStateError::UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_every_tag() {
        for status in AsyncStatus::ALL {
            assert_eq!(status.as_str().parse::<AsyncStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_parse_rejects_unknown_tag() {
        let err = "done".parse::<AsyncStatus>().unwrap_err();
        assert!(matches!(err, AsyncStateError::UnknownStatus(ref tag) if tag == "done"));
        assert_eq!(err.code(), -32010);
    }

    #[test]
    fn test_tags_are_case_sensitive() {
        assert!("Success".parse::<AsyncStatus>().is_err());
    }

    #[test]
    fn test_pending_and_settled() {
        assert!(AsyncStatus::Loading.is_pending());
        assert!(AsyncStatus::Refetch.is_pending());
        assert!(!AsyncStatus::Initial.is_pending());
        assert!(AsyncStatus::Success.is_settled());
        assert!(AsyncStatus::Error.is_settled());
        assert!(!AsyncStatus::Initial.is_settled());
    }

    #[test]
    fn test_serde_matches_display() {
        let json = serde_json::to_string(&AsyncStatus::Refetch).unwrap();
        assert_eq!(json, "\"refetch\"");
        assert_eq!(AsyncStatus::Refetch.to_string(), "refetch");
    }
}
