use crate::prelude::*;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Re-emits every event, including the terminal one, as a value-level
  /// [`Notification`].
  ///
  /// The materialized stream never delivers a raw `error` or `complete` from
  /// the source: both are turned into a final `next(Notification)` followed
  /// by the materialized stream's own `complete`.
  pub fn materialize(self) -> Observable<Notification<Item, Err>, Err> {
    Observable::new(move |subscriber: Subscriber<Notification<Item, Err>, Err>| {
      let subscription = subscriber.subscription().clone();
      self.actual_subscribe(MaterializeObserver { observer: subscriber }, subscription);
    })
  }
}

struct MaterializeObserver<Item, Err> {
  observer: Subscriber<Notification<Item, Err>, Err>,
}

impl<Item, Err> Observer<Item, Err> for MaterializeObserver<Item, Err> {
  fn next(&mut self, value: Item) { self.observer.next(Notification::Next(value)); }

  fn error(&mut self, err: Err) {
    self.observer.next(Notification::Error(err));
    self.observer.complete();
  }

  fn complete(&mut self) {
    self.observer.next(Notification::Complete);
    self.observer.complete();
  }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  #[test]
  fn wraps_values_and_completion() {
    let emitted = Arc::new(Mutex::new(vec![]));
    let e = emitted.clone();

    let source: Observable<i32> = observable::of(1);
    source.materialize().subscribe(move |n| e.lock().unwrap().push(n));

    assert_eq!(
      *emitted.lock().unwrap(),
      vec![Notification::Next(1), Notification::Complete]
    );
  }

  #[test]
  fn wraps_errors_as_values() {
    let emitted = Arc::new(Mutex::new(vec![]));
    let completed = Arc::new(Mutex::new(false));
    let (e, c) = (emitted.clone(), completed.clone());

    let source: Observable<i32, &'static str> = observable::throw("oops");
    source.materialize().subscribe_all(
      move |n| e.lock().unwrap().push(n),
      |_| {},
      move || *c.lock().unwrap() = true,
    );

    assert_eq!(*emitted.lock().unwrap(), vec![Notification::Error("oops")]);
    assert!(*completed.lock().unwrap());
  }
}
