//! The Observable core type.

use std::sync::Arc;

use crate::error::RxError;
use crate::observer::{FnMutObserver, FnObserver, Observer};
use crate::subscriber::Subscriber;
use crate::subscription::Subscription;

pub mod create;
pub mod from_iter;
pub mod of;
pub mod range;
pub mod trivial;

pub use create::create;
pub use from_iter::from_iter;
pub use of::of;
pub use range::range;
pub use trivial::{empty, never, throw};

/// A description of how to produce a stream of events.
///
/// An Observable is nothing but a subscribe function behind an [`Arc`]: it is
/// immutable, cheap to clone, and cold. Every subscription runs the function
/// afresh, so two subscribers to the same source each get their own run of
/// events. Operators wrap a source Observable in a new one; they never mutate
/// the original.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// let evens: Observable<i32> = observable::from_iter(0..10);
/// evens
///   .filter(|v| v % 2 == 0)
///   .map(|v| v * 2)
///   .subscribe(|v| println!("{}", v));
/// ```
pub struct Observable<Item, Err = RxError> {
  on_subscribe: Arc<dyn Fn(Subscriber<Item, Err>) + Send + Sync>,
}

impl<Item, Err> Clone for Observable<Item, Err> {
  fn clone(&self) -> Self { Self { on_subscribe: self.on_subscribe.clone() } }
}

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  pub(crate) fn new<F>(on_subscribe: F) -> Self
  where
    F: Fn(Subscriber<Item, Err>) + Send + Sync + 'static,
  {
    Self { on_subscribe: Arc::new(on_subscribe) }
  }

  /// Runs the subscribe function against an already-wrapped subscriber.
  /// Used by operators that re-attach an existing downstream (resume, defer).
  pub(crate) fn subscribe_subscriber(&self, subscriber: Subscriber<Item, Err>) {
    (self.on_subscribe)(subscriber);
  }

  /// Wraps `observer` in the terminal guard and subscribes it under the
  /// given subscription handle.
  pub(crate) fn actual_subscribe<O>(&self, observer: O, subscription: Subscription)
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    self.subscribe_subscriber(Subscriber::new(Box::new(observer), subscription));
  }

  /// Subscribes a full observer and returns the disposal handle.
  pub fn subscribe_observer<O>(self, observer: O) -> Subscription
  where
    O: Observer<Item, Err> + Send + 'static,
  {
    let subscription = Subscription::new();
    self.actual_subscribe(observer, subscription.clone());
    subscription
  }

  /// Subscribes with a `next` handler only. Errors and completion are
  /// discarded; use [`Observable::subscribe_all`] when they matter.
  pub fn subscribe<N>(self, next: N) -> Subscription
  where
    N: FnMut(Item) + Send + 'static,
  {
    self.subscribe_observer(FnMutObserver(next))
  }

  /// Subscribes with handlers for all three event kinds.
  pub fn subscribe_all<N, E, C>(self, next: N, error: E, complete: C) -> Subscription
  where
    N: FnMut(Item) + Send + 'static,
    E: FnMut(Err) + Send + 'static,
    C: FnMut() + Send + 'static,
  {
    self.subscribe_observer(FnObserver::new(next, error, complete))
  }
}
