use std::sync::Arc;

use crate::error::{guarded, RxError};
use crate::prelude::*;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: From<RxError> + Send + 'static,
{
  /// Emits a single boolean telling whether every upstream value satisfied
  /// the predicate, then completes.
  ///
  /// The verdict is only delivered once the upstream completes; a failing
  /// value flips the accumulator but does not end the stream early. An
  /// upstream error propagates directly and suppresses the boolean.
  pub fn all<P>(self, predicate: P) -> Observable<bool, Err>
  where
    P: Fn(&Item) -> bool + Send + Sync + 'static,
  {
    let predicate: Arc<dyn Fn(&Item) -> bool + Send + Sync> = Arc::new(predicate);
    Observable::new(move |subscriber: Subscriber<bool, Err>| {
      let subscription = subscriber.subscription().clone();
      self.actual_subscribe(
        AllObserver { observer: subscriber, predicate: predicate.clone(), verdict: true },
        subscription,
      );
    })
  }
}

struct AllObserver<Item, Err> {
  observer: Subscriber<bool, Err>,
  predicate: Arc<dyn Fn(&Item) -> bool + Send + Sync>,
  verdict: bool,
}

impl<Item, Err> Observer<Item, Err> for AllObserver<Item, Err>
where
  Err: From<RxError>,
{
  fn next(&mut self, value: Item) {
    match guarded(|| (self.predicate)(&value)) {
      Ok(true) => {}
      Ok(false) => self.verdict = false,
      Err(fault) => self.observer.error(fault.into()),
    }
  }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) {
    let verdict = self.verdict;
    self.observer.next(verdict);
    self.observer.complete();
  }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  fn collect(source: Observable<i32>) -> Vec<bool> {
    let emitted = Arc::new(Mutex::new(vec![]));
    let e = emitted.clone();
    source.all(|v| v % 2 == 0).subscribe(move |v| e.lock().unwrap().push(v));
    let result = emitted.lock().unwrap().clone();
    result
  }

  #[test]
  fn true_when_every_value_matches() {
    assert_eq!(collect(observable::from_iter(vec![2, 4, 6, 8])), vec![true]);
  }

  #[test]
  fn false_when_any_value_fails() {
    assert_eq!(collect(observable::from_iter(vec![2, 4, 5, 8])), vec![false]);
  }

  #[test]
  fn verdict_waits_for_completion() {
    let emitted = Arc::new(Mutex::new(vec![]));
    let e = emitted.clone();

    let subject: PublishSubject<i32> = PublishSubject::create();
    subject.as_observable().all(|v| *v > 0).subscribe(move |v| e.lock().unwrap().push(v));

    subject.next(-1);
    assert!(emitted.lock().unwrap().is_empty());
    subject.complete();
    assert_eq!(*emitted.lock().unwrap(), vec![false]);
  }
}
