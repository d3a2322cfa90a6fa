//! Subscription handle returned by `Observable::subscribe` to allow
//! unsubscribing.

use std::mem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use smallvec::SmallVec;

type TearDown = Box<dyn FnOnce() + Send>;

/// Shared disposal handle for one subscription.
///
/// Cloning yields another handle to the same subscription; every stage of an
/// operator chain holds a clone, so unsubscribing from any of them stops the
/// whole chain. Unsubscribing is idempotent: teardown logic runs exactly once
/// no matter how many handles call it.
#[derive(Clone, Default)]
pub struct Subscription {
  inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
  closed: AtomicBool,
  teardown: Mutex<SmallVec<[TearDown; 1]>>,
}

impl Subscription {
  pub fn new() -> Self { Self::default() }

  /// Deregisters the stream before it has finished delivering all events.
  pub fn unsubscribe(&self) {
    if !self.inner.closed.swap(true, Ordering::AcqRel) {
      let teardown = {
        let mut list = self
          .inner
          .teardown
          .lock()
          .unwrap_or_else(PoisonError::into_inner);
        mem::take(&mut *list)
      };
      for f in teardown {
        f();
      }
    }
  }

  #[inline]
  pub fn is_closed(&self) -> bool { self.inner.closed.load(Ordering::Acquire) }

  /// Registers teardown logic to run on unsubscribe. If the subscription is
  /// already closed the teardown runs immediately.
  pub fn add<F: FnOnce() + Send + 'static>(&self, teardown: F) {
    if self.is_closed() {
      teardown();
    } else {
      let mut list = self
        .inner
        .teardown
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
      list.push(Box::new(teardown));
    }
  }
}
