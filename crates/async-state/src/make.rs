//! Constructors, one per variant.
//!
//! All of them are pure pass-throughs: arguments land in the returned shape
//! unchanged and nothing is validated or logged. Which constructor to call, and
//! in what order, is up to the caller.

use crate::state::{ErrorState, InitialState, LoadingState, RefetchState, SuccessState};

pub fn make_success_state<D>(data: D) -> SuccessState<D> {
    SuccessState { data }
}

/// Failed state. `data` keeps a previously loaded payload, if any.
pub fn make_error_state<D, E>(error: E, data: Option<D>) -> ErrorState<D, E> {
    ErrorState { error, data }
}

/// In-flight state. Stale `data` and `error` from a prior attempt are kept as given.
pub fn make_loading_state<D, E>(data: Option<D>, error: Option<E>) -> LoadingState<D, E> {
    LoadingState { data, error }
}

pub fn make_refetch_state<D, E>(data: Option<D>, error: Option<E>) -> RefetchState<D, E> {
    RefetchState { data, error }
}

pub fn make_initial_state<D, E>(data: Option<D>, error: Option<E>) -> InitialState<D, E> {
    InitialState { data, error }
}
