use std::sync::Arc;

use crate::error::{guarded, RxError};
use crate::prelude::*;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: From<RxError> + Send + 'static,
{
  /// Emits only the values that satisfy the predicate; terminal events pass
  /// through unchanged.
  ///
  /// # Examples
  ///
  /// ```
  /// use rxlite::prelude::*;
  ///
  /// let source: Observable<i32> = observable::from_iter(0..10);
  /// source.filter(|v| v % 2 == 0).subscribe(|v| println!("{}", v));
  /// ```
  pub fn filter<P>(self, predicate: P) -> Observable<Item, Err>
  where
    P: Fn(&Item) -> bool + Send + Sync + 'static,
  {
    let predicate: Arc<dyn Fn(&Item) -> bool + Send + Sync> = Arc::new(predicate);
    Observable::new(move |subscriber: Subscriber<Item, Err>| {
      let subscription = subscriber.subscription().clone();
      self.actual_subscribe(
        FilterObserver { observer: subscriber, predicate: predicate.clone() },
        subscription,
      );
    })
  }
}

struct FilterObserver<Item, Err> {
  observer: Subscriber<Item, Err>,
  predicate: Arc<dyn Fn(&Item) -> bool + Send + Sync>,
}

impl<Item, Err> Observer<Item, Err> for FilterObserver<Item, Err>
where
  Err: From<RxError>,
{
  fn next(&mut self, value: Item) {
    let keep = guarded(|| (self.predicate)(&value));
    match keep {
      Ok(true) => self.observer.next(value),
      Ok(false) => {}
      Err(fault) => self.observer.error(fault.into()),
    }
  }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) { self.observer.complete() }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
