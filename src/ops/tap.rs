use std::sync::Arc;

use crate::error::{guarded, RxError};
use crate::prelude::*;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: From<RxError> + Send + 'static,
{
  /// Runs a side effect for each value, forwarding every event unchanged.
  ///
  /// Handy for tracing what flows through the middle of a chain:
  ///
  /// ```
  /// use rxlite::prelude::*;
  ///
  /// let source: Observable<i32> = observable::range(1, 3);
  /// source
  ///   .tap(|v| println!("generated: {}", v))
  ///   .map(|v| v * 2)
  ///   .subscribe(|v| println!("received: {}", v));
  /// ```
  pub fn tap<F>(self, action: F) -> Observable<Item, Err>
  where
    F: Fn(&Item) + Send + Sync + 'static,
  {
    let action: Arc<dyn Fn(&Item) + Send + Sync> = Arc::new(action);
    Observable::new(move |subscriber: Subscriber<Item, Err>| {
      let subscription = subscriber.subscription().clone();
      self.actual_subscribe(TapObserver { observer: subscriber, action: action.clone() }, subscription);
    })
  }
}

struct TapObserver<Item, Err> {
  observer: Subscriber<Item, Err>,
  action: Arc<dyn Fn(&Item) + Send + Sync>,
}

impl<Item, Err> Observer<Item, Err> for TapObserver<Item, Err>
where
  Err: From<RxError>,
{
  fn next(&mut self, value: Item) {
    let outcome = guarded(|| (self.action)(&value));
    match outcome {
      Ok(()) => self.observer.next(value),
      Err(fault) => self.observer.error(fault.into()),
    }
  }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) { self.observer.complete() }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
