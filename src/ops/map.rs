use std::sync::Arc;

use crate::error::{guarded, RxError};
use crate::prelude::*;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: From<RxError> + Send + 'static,
{
  /// Creates a new stream which calls a closure on each value and emits its
  /// return value instead.
  ///
  /// Terminal events pass through unchanged. A panic raised by the closure
  /// terminates that subscription with an `error` in place of the value.
  ///
  /// # Examples
  ///
  /// ```
  /// use rxlite::prelude::*;
  ///
  /// let source: Observable<i32> = observable::from_iter(1..4);
  /// source.map(|v| v * 2).subscribe(|v| println!("{}", v));
  /// // print log:
  /// // 2
  /// // 4
  /// // 6
  /// ```
  pub fn map<Out, F>(self, f: F) -> Observable<Out, Err>
  where
    Out: Send + 'static,
    F: Fn(Item) -> Out + Send + Sync + 'static,
  {
    let func: Arc<dyn Fn(Item) -> Out + Send + Sync> = Arc::new(f);
    Observable::new(move |subscriber: Subscriber<Out, Err>| {
      let subscription = subscriber.subscription().clone();
      self.actual_subscribe(MapObserver { observer: subscriber, func: func.clone() }, subscription);
    })
  }
}

struct MapObserver<Item, Out, Err> {
  observer: Subscriber<Out, Err>,
  func: Arc<dyn Fn(Item) -> Out + Send + Sync>,
}

impl<Item, Out, Err> Observer<Item, Err> for MapObserver<Item, Out, Err>
where
  Err: From<RxError>,
{
  fn next(&mut self, value: Item) {
    match guarded(|| (self.func)(value)) {
      Ok(mapped) => self.observer.next(mapped),
      Err(fault) => self.observer.error(fault.into()),
    }
  }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) { self.observer.complete() }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
