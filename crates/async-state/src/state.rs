//! The async state union and its per-variant shapes.
//!
//! Each variant is a standalone struct so a constructor can hand back the
//! narrowed shape. All of them convert into [`AsyncState`] with `From`.

use serde::Serialize;

use crate::status::AsyncStatus;

/// Completed request. The payload is always present and no error exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuccessState<D> {
    pub data: D,
}

/// Failed request, optionally keeping the last known payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorState<D, E> {
    pub error: E,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<D>,
}

/// First request in flight
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadingState<D, E> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<E>,
}

/// Follow-up request in flight after an earlier one settled
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RefetchState<D, E> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<E>,
}

/// Nothing requested yet. Fields may hold seed values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InitialState<D, E> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<D>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<E>,
}

impl<D> SuccessState<D> {
    pub const STATUS: AsyncStatus = AsyncStatus::Success;
}

impl<D, E> ErrorState<D, E> {
    pub const STATUS: AsyncStatus = AsyncStatus::Error;
}

impl<D, E> LoadingState<D, E> {
    pub const STATUS: AsyncStatus = AsyncStatus::Loading;
}

impl<D, E> RefetchState<D, E> {
    pub const STATUS: AsyncStatus = AsyncStatus::Refetch;
}

impl<D, E> InitialState<D, E> {
    pub const STATUS: AsyncStatus = AsyncStatus::Initial;
}

impl<D, E> Default for InitialState<D, E> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
        }
    }
}

/// Lifecycle of an asynchronous value with payload `D` and error `E`.
///
/// Serialized as an object tagged by `status`; absent fields are omitted.
/// Deserialization is implemented in [`crate::raw`] so malformed records are
/// rejected with an [`AsyncStateError`](crate::AsyncStateError).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AsyncState<D, E> {
    Success(SuccessState<D>),
    Error(ErrorState<D, E>),
    Loading(LoadingState<D, E>),
    Refetch(RefetchState<D, E>),
    Initial(InitialState<D, E>),
}

impl<D, E> AsyncState<D, E> {
    pub fn status(&self) -> AsyncStatus {
        match self {
            AsyncState::Success(_) => AsyncStatus::Success,
            AsyncState::Error(_) => AsyncStatus::Error,
            AsyncState::Loading(_) => AsyncStatus::Loading,
            AsyncState::Refetch(_) => AsyncStatus::Refetch,
            AsyncState::Initial(_) => AsyncStatus::Initial,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, AsyncState::Success(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, AsyncState::Error(_))
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AsyncState::Loading(_))
    }

    pub fn is_refetch(&self) -> bool {
        matches!(self, AsyncState::Refetch(_))
    }

    pub fn is_initial(&self) -> bool {
        matches!(self, AsyncState::Initial(_))
    }

    /// Payload, authoritative for Success and stale otherwise
    pub fn data(&self) -> Option<&D> {
        match self {
            AsyncState::Success(s) => Some(&s.data),
            AsyncState::Error(s) => s.data.as_ref(),
            AsyncState::Loading(s) => s.data.as_ref(),
            AsyncState::Refetch(s) => s.data.as_ref(),
            AsyncState::Initial(s) => s.data.as_ref(),
        }
    }

    /// Error value. Always `None` for Success.
    pub fn error(&self) -> Option<&E> {
        match self {
            AsyncState::Success(_) => None,
            AsyncState::Error(s) => Some(&s.error),
            AsyncState::Loading(s) => s.error.as_ref(),
            AsyncState::Refetch(s) => s.error.as_ref(),
            AsyncState::Initial(s) => s.error.as_ref(),
        }
    }

    pub fn into_data(self) -> Option<D> {
        self.into_parts().1
    }

    pub fn into_error(self) -> Option<E> {
        self.into_parts().2
    }

    /// Flatten into the tag plus both optional fields
    pub fn into_parts(self) -> (AsyncStatus, Option<D>, Option<E>) {
        match self {
            AsyncState::Success(s) => (AsyncStatus::Success, Some(s.data), None),
            AsyncState::Error(s) => (AsyncStatus::Error, s.data, Some(s.error)),
            AsyncState::Loading(s) => (AsyncStatus::Loading, s.data, s.error),
            AsyncState::Refetch(s) => (AsyncStatus::Refetch, s.data, s.error),
            AsyncState::Initial(s) => (AsyncStatus::Initial, s.data, s.error),
        }
    }

    pub fn as_ref(&self) -> AsyncState<&D, &E> {
        match self {
            AsyncState::Success(s) => AsyncState::Success(SuccessState { data: &s.data }),
            AsyncState::Error(s) => AsyncState::Error(ErrorState {
                error: &s.error,
                data: s.data.as_ref(),
            }),
            AsyncState::Loading(s) => AsyncState::Loading(LoadingState {
                data: s.data.as_ref(),
                error: s.error.as_ref(),
            }),
            AsyncState::Refetch(s) => AsyncState::Refetch(RefetchState {
                data: s.data.as_ref(),
                error: s.error.as_ref(),
            }),
            AsyncState::Initial(s) => AsyncState::Initial(InitialState {
                data: s.data.as_ref(),
                error: s.error.as_ref(),
            }),
        }
    }

    /// Transform the payload, keeping the variant and error untouched
    pub fn map<U>(self, f: impl FnOnce(D) -> U) -> AsyncState<U, E> {
        match self {
            AsyncState::Success(s) => AsyncState::Success(SuccessState { data: f(s.data) }),
            AsyncState::Error(s) => AsyncState::Error(ErrorState {
                error: s.error,
                data: s.data.map(f),
            }),
            AsyncState::Loading(s) => AsyncState::Loading(LoadingState {
                data: s.data.map(f),
                error: s.error,
            }),
            AsyncState::Refetch(s) => AsyncState::Refetch(RefetchState {
                data: s.data.map(f),
                error: s.error,
            }),
            AsyncState::Initial(s) => AsyncState::Initial(InitialState {
                data: s.data.map(f),
                error: s.error,
            }),
        }
    }

    /// Transform the error, keeping the variant and payload untouched
    pub fn map_err<F>(self, f: impl FnOnce(E) -> F) -> AsyncState<D, F> {
        match self {
            AsyncState::Success(s) => AsyncState::Success(s),
            AsyncState::Error(s) => AsyncState::Error(ErrorState {
                error: f(s.error),
                data: s.data,
            }),
            AsyncState::Loading(s) => AsyncState::Loading(LoadingState {
                data: s.data,
                error: s.error.map(f),
            }),
            AsyncState::Refetch(s) => AsyncState::Refetch(RefetchState {
                data: s.data,
                error: s.error.map(f),
            }),
            AsyncState::Initial(s) => AsyncState::Initial(InitialState {
                data: s.data,
                error: s.error.map(f),
            }),
        }
    }
}

impl<D, E> Default for AsyncState<D, E> {
    fn default() -> Self {
        AsyncState::Initial(InitialState::default())
    }
}

impl<D, E> From<SuccessState<D>> for AsyncState<D, E> {
    fn from(state: SuccessState<D>) -> Self {
        AsyncState::Success(state)
    }
}

impl<D, E> From<ErrorState<D, E>> for AsyncState<D, E> {
    fn from(state: ErrorState<D, E>) -> Self {
        AsyncState::Error(state)
    }
}

impl<D, E> From<LoadingState<D, E>> for AsyncState<D, E> {
    fn from(state: LoadingState<D, E>) -> Self {
        AsyncState::Loading(state)
    }
}

impl<D, E> From<RefetchState<D, E>> for AsyncState<D, E> {
    fn from(state: RefetchState<D, E>) -> Self {
        AsyncState::Refetch(state)
    }
}

impl<D, E> From<InitialState<D, E>> for AsyncState<D, E> {
    fn from(state: InitialState<D, E>) -> Self {
        AsyncState::Initial(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_initial() {
        let state: AsyncState<u32, String> = AsyncState::default();
        assert_eq!(state.status(), AsyncStatus::Initial);
        assert!(state.data().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_struct_status_constants() {
        assert_eq!(SuccessState::<()>::STATUS, AsyncStatus::Success);
        assert_eq!(ErrorState::<(), ()>::STATUS, AsyncStatus::Error);
        assert_eq!(LoadingState::<(), ()>::STATUS, AsyncStatus::Loading);
        assert_eq!(RefetchState::<(), ()>::STATUS, AsyncStatus::Refetch);
        assert_eq!(InitialState::<(), ()>::STATUS, AsyncStatus::Initial);
    }

    #[test]
    fn test_success_has_no_error() {
        let state: AsyncState<u8, String> = SuccessState { data: 7 }.into();
        assert_eq!(state.error(), None);
        assert_eq!(state.into_parts(), (AsyncStatus::Success, Some(7), None));
    }
}
