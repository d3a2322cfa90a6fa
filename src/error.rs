//! Error types raised by the engine itself.
//!
//! Errors produced by a source are opaque to the engine and flow through the
//! `Err` channel untouched. The types here cover the second kind: protocol
//! errors an operator originates on its own, plus faults caught while running
//! a user callback.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use thiserror::Error;

/// Errors originated by operators rather than by a source.
///
/// Operators that can produce one of these require `Err: From<RxError>`, so a
/// custom error type only needs a single `From` impl to participate in any
/// pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RxError {
  /// A value was required but the sequence completed without emitting one.
  #[error("sequence contains no elements")]
  NoElements,
  /// A user callback panicked while processing an event.
  #[error("callback panicked: {0}")]
  Fault(String),
}

/// Error returned to the synchronous caller of a blocking extraction.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BlockingError<Err> {
  /// The sequence completed without a qualifying value.
  #[error("sequence contains no elements")]
  NoElements,
  /// More than one qualifying value arrived before completion.
  #[error("sequence contains more than one element")]
  TooManyElements,
  /// The sequence terminated with an error of its own.
  #[error("source terminated with an error")]
  Source(Err),
}

/// Runs a user callback, converting a panic into an [`RxError::Fault`] so the
/// failure can be delivered as an `error` event instead of unwinding through
/// the subscribe call.
pub(crate) fn guarded<T>(f: impl FnOnce() -> T) -> Result<T, RxError> {
  catch_unwind(AssertUnwindSafe(f)).map_err(|payload| RxError::Fault(fault_message(&payload)))
}

fn fault_message(payload: &Box<dyn Any + Send>) -> String {
  if let Some(s) = payload.downcast_ref::<&'static str>() {
    (*s).to_owned()
  } else if let Some(s) = payload.downcast_ref::<String>() {
    s.clone()
  } else {
    "unknown panic payload".to_owned()
  }
}
