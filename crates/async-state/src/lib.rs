//! Lifecycle states for asynchronous values.
//!
//! An [`AsyncState`] is one of five mutually exclusive phases: `success`,
//! `error`, `loading`, `refetch` or `initial`. Each phase has a narrowed struct
//! and a `make_*` constructor; non-terminal phases may keep a stale payload and
//! a stale error so callers can keep showing the previous result while a new
//! request runs.
//!
//! The crate runs nothing itself. Callers build a new state on every change and
//! `match` on it to read the fields.

pub mod error;
pub mod make;
pub mod raw;
pub mod shape;
pub mod state;
pub mod status;

pub use error::AsyncStateError;
pub use make::{
    make_error_state, make_initial_state, make_loading_state, make_refetch_state,
    make_success_state,
};
pub use raw::RawAsyncState;
pub use shape::{ErrorOf, ErrorShape, SuccessData, SuccessShape};
pub use state::{AsyncState, ErrorState, InitialState, LoadingState, RefetchState, SuccessState};
pub use status::AsyncStatus;
