//! Type-level projections out of narrowed state shapes.
//!
//! Only the matching shape implements each trait, so projecting from any other
//! type is a compile error:
//!
//! ```
//! use async_state::{ErrorOf, ErrorState, SuccessData, SuccessState};
//!
//! let data: SuccessData<SuccessState<u32>> = 5;
//! let error: ErrorOf<ErrorState<u32, String>> = "boom".to_string();
//! # let _ = (data, error);
//! ```
//!
//! ```compile_fail
//! use async_state::{ErrorOf, SuccessState};
//!
//! let error: ErrorOf<SuccessState<u32>> = 5;
//! ```

use crate::state::{ErrorState, SuccessState};

pub trait SuccessShape {
    type Data;
}

impl<D> SuccessShape for SuccessState<D> {
    type Data = D;
}

pub trait ErrorShape {
    type Error;
}

impl<D, E> ErrorShape for ErrorState<D, E> {
    type Error = E;
}

/// Payload type of a Success shape
pub type SuccessData<S> = <S as SuccessShape>::Data;

/// Error type of an Error shape
pub type ErrorOf<S> = <S as ErrorShape>::Error;
