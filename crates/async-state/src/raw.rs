//! Flat wire record and the decode path into [`AsyncState`].
//!
//! The record is a `status` tag with two optional fields. Decoding checks the
//! tag and the fields the tag requires; everything else passes through.
//!
//! A missing key is always absent. A `null` value is a present payload when the
//! payload type can be built from `null` (`()`, `Option<T>`, `serde_json::Value`)
//! and absent otherwise, so every encoded state decodes back to itself.

use serde::de::value::{Error as ValueError, UnitDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;

use crate::error::AsyncStateError;
use crate::state::{AsyncState, ErrorState, InitialState, LoadingState, RefetchState, SuccessState};
use crate::status::AsyncStatus;

/// Untyped `status`/`data`/`error` record as it appears on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "D: Deserialize<'de>, E: Deserialize<'de>"))]
pub struct RawAsyncState<D, E> {
    pub status: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub data: Option<D>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "nullable"
    )]
    pub error: Option<E>,
}

/// Reads a present field, keeping `null` when `T` accepts it
fn nullable<'de, T, De>(deserializer: De) -> Result<Option<T>, De::Error>
where
    T: Deserialize<'de>,
    De: Deserializer<'de>,
{
    match Option::<T>::deserialize(deserializer)? {
        Some(value) => Ok(Some(value)),
        None => {
            let unit: UnitDeserializer<ValueError> = ().into_deserializer();
            Ok(T::deserialize(unit).ok())
        }
    }
}

impl<D, E> From<AsyncState<D, E>> for RawAsyncState<D, E> {
    fn from(state: AsyncState<D, E>) -> Self {
        let (status, data, error) = state.into_parts();
        Self {
            status: status.as_str().to_string(),
            data,
            error,
        }
    }
}

impl<D, E> TryFrom<RawAsyncState<D, E>> for AsyncState<D, E> {
    type Error = AsyncStateError;

    fn try_from(raw: RawAsyncState<D, E>) -> Result<Self, AsyncStateError> {
        let raw_status = raw.status.clone();
        decode(raw).map_err(|err| {
            debug!(
                status = %raw_status,
                code = err.code(),
                "Rejected async state record: {}",
                err
            );
            err
        })
    }
}

fn decode<D, E>(raw: RawAsyncState<D, E>) -> Result<AsyncState<D, E>, AsyncStateError> {
    let status: AsyncStatus = raw.status.parse()?;
    let RawAsyncState { data, error, .. } = raw;

    let state = match status {
        AsyncStatus::Success => {
            if error.is_some() {
                return Err(AsyncStateError::UnexpectedError { status });
            }
            let data = data.ok_or(AsyncStateError::MissingData { status })?;
            AsyncState::Success(SuccessState { data })
        }
        AsyncStatus::Error => {
            let error = error.ok_or(AsyncStateError::MissingError)?;
            AsyncState::Error(ErrorState { error, data })
        }
        AsyncStatus::Loading => AsyncState::Loading(LoadingState { data, error }),
        AsyncStatus::Refetch => AsyncState::Refetch(RefetchState { data, error }),
        AsyncStatus::Initial => AsyncState::Initial(InitialState { data, error }),
    };
    Ok(state)
}

impl<'de, D, E> Deserialize<'de> for AsyncState<D, E>
where
    D: Deserialize<'de>,
    E: Deserialize<'de>,
{
    fn deserialize<De>(deserializer: De) -> Result<Self, De::Error>
    where
        De: Deserializer<'de>,
    {
        let raw = RawAsyncState::<D, E>::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl<D, E> AsyncState<D, E>
where
    D: DeserializeOwned,
    E: DeserializeOwned,
{
    pub fn from_json(json: &str) -> Result<Self, AsyncStateError> {
        let raw: RawAsyncState<D, E> = serde_json::from_str(json)?;
        Self::try_from(raw)
    }

    pub fn from_json_value(value: serde_json::Value) -> Result<Self, AsyncStateError> {
        let raw: RawAsyncState<D, E> = serde_json::from_value(value)?;
        Self::try_from(raw)
    }
}

impl<D, E> AsyncState<D, E>
where
    D: Serialize,
    E: Serialize,
{
    pub fn to_json(&self) -> Result<String, AsyncStateError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: &str, data: Option<u32>, error: Option<&str>) -> RawAsyncState<u32, String> {
        RawAsyncState {
            status: status.to_string(),
            data,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_decode_success_requires_data() {
        let err = AsyncState::<u32, String>::try_from(raw("success", None, None)).unwrap_err();
        assert!(matches!(
            err,
            AsyncStateError::MissingData {
                status: AsyncStatus::Success
            }
        ));
    }

    #[test]
    fn test_decode_success_rejects_error() {
        let err =
            AsyncState::<u32, String>::try_from(raw("success", Some(1), Some("x"))).unwrap_err();
        assert!(matches!(err, AsyncStateError::UnexpectedError { .. }));
        assert_eq!(err.code(), -32013);
    }

    #[test]
    fn test_decode_error_requires_error() {
        let err = AsyncState::<u32, String>::try_from(raw("error", Some(1), None)).unwrap_err();
        assert!(matches!(err, AsyncStateError::MissingError));
    }

    #[test]
    fn test_decode_passes_optional_fields_through() {
        let state =
            AsyncState::<u32, String>::try_from(raw("refetch", Some(3), Some("stale"))).unwrap();
        assert_eq!(state.data(), Some(&3));
        assert_eq!(state.error().map(String::as_str), Some("stale"));
    }

    #[test]
    fn test_null_decodes_as_unit_payload() {
        let raw: RawAsyncState<(), u32> =
            serde_json::from_str(r#"{"status":"success","data":null}"#).unwrap();
        assert_eq!(raw.data, Some(()));
        assert_eq!(raw.error, None);
    }

    #[test]
    fn test_null_is_absent_for_non_nullable_payload() {
        let raw: RawAsyncState<u32, String> =
            serde_json::from_str(r#"{"status":"loading","data":null,"error":null}"#).unwrap();
        assert_eq!(raw.data, None);
        assert_eq!(raw.error, None);
    }

    #[test]
    fn test_raw_from_state_keeps_tag() {
        let state: AsyncState<u32, String> = AsyncState::default();
        let raw = RawAsyncState::from(state);
        assert_eq!(raw.status, "initial");
        assert_eq!(raw.data, None);
        assert_eq!(raw.error, None);
    }
}
