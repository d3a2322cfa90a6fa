use crate::error::RxError;
use crate::prelude::*;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: From<RxError> + Send + 'static,
{
  /// Emits only the final value of the source, once the source completes.
  ///
  /// If the source completes without ever emitting, the stream terminates
  /// with [`RxError::NoElements`] instead of completing. An upstream error
  /// propagates directly.
  pub fn last(self) -> Observable<Item, Err> {
    Observable::new(move |subscriber: Subscriber<Item, Err>| {
      let subscription = subscriber.subscription().clone();
      self.actual_subscribe(LastObserver { observer: subscriber, last: None }, subscription);
    })
  }
}

struct LastObserver<Item, Err> {
  observer: Subscriber<Item, Err>,
  last: Option<Item>,
}

impl<Item, Err> Observer<Item, Err> for LastObserver<Item, Err>
where
  Err: From<RxError>,
{
  #[inline]
  fn next(&mut self, value: Item) { self.last = Some(value); }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) {
    match self.last.take() {
      Some(value) => {
        self.observer.next(value);
        self.observer.complete();
      }
      None => self.observer.error(RxError::NoElements.into()),
    }
  }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  #[test]
  fn emits_final_value() {
    let emitted = Arc::new(Mutex::new(vec![]));
    let completed = Arc::new(Mutex::new(0));
    let (e, c) = (emitted.clone(), completed.clone());

    let source: Observable<i32> = observable::from_iter(0..100);
    source.last().subscribe_all(
      move |v| e.lock().unwrap().push(v),
      |_| {},
      move || *c.lock().unwrap() += 1,
    );

    assert_eq!(*emitted.lock().unwrap(), vec![99]);
    assert_eq!(*completed.lock().unwrap(), 1);
  }

  #[test]
  fn empty_source_errors() {
    let observed = Arc::new(Mutex::new(None));
    let completed = Arc::new(Mutex::new(0));
    let (o, c) = (observed.clone(), completed.clone());

    let source: Observable<i32> = observable::empty();
    source.last().subscribe_all(
      |_| {},
      move |err| *o.lock().unwrap() = Some(err),
      move || *c.lock().unwrap() += 1,
    );

    assert_eq!(*observed.lock().unwrap(), Some(RxError::NoElements));
    assert_eq!(*completed.lock().unwrap(), 0);
  }
}
