use crate::prelude::*;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Swallows an upstream error and continues with the fallback observable
  /// in its place.
  ///
  /// All upstream values are forwarded as-is. On upstream `error` the error
  /// itself is never delivered downstream; the fallback is subscribed and
  /// its events, including its own terminal, flow from that point on. If the
  /// upstream completes normally the fallback is never subscribed.
  pub fn on_error_resume_next(self, fallback: Observable<Item, Err>) -> Observable<Item, Err> {
    Observable::new(move |subscriber: Subscriber<Item, Err>| {
      let subscription = subscriber.subscription().clone();
      self.actual_subscribe(
        ResumeNextObserver { downstream: subscriber, fallback: fallback.clone() },
        subscription,
      );
    })
  }
}

struct ResumeNextObserver<Item, Err> {
  downstream: Subscriber<Item, Err>,
  fallback: Observable<Item, Err>,
}

impl<Item, Err> Observer<Item, Err> for ResumeNextObserver<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  fn next(&mut self, value: Item) { self.downstream.next(value) }

  fn error(&mut self, _err: Err) {
    // The downstream subscriber is still live; the fallback picks it up
    // right where the failed upstream left off.
    self.fallback.subscribe_subscriber(self.downstream.clone());
  }

  fn complete(&mut self) { self.downstream.complete() }

  fn is_closed(&self) -> bool { self.downstream.is_closed() }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  #[test]
  fn fallback_unused_when_source_completes() {
    let emitted = Arc::new(Mutex::new(vec![]));
    let e = emitted.clone();

    let source: Observable<i32, &'static str> = observable::from_iter(vec![1, 2]);
    let fallback: Observable<i32, &'static str> = observable::from_iter(vec![3, 4]);
    source
      .on_error_resume_next(fallback)
      .subscribe(move |v| e.lock().unwrap().push(v));

    assert_eq!(*emitted.lock().unwrap(), vec![1, 2]);
  }

  #[test]
  fn fallback_takes_over_after_error() {
    let emitted = Arc::new(Mutex::new(vec![]));
    let errors = Arc::new(Mutex::new(0));
    let (e, f) = (emitted.clone(), errors.clone());

    let subject: PublishSubject<i32, &'static str> = PublishSubject::create();
    let fallback: Observable<i32, &'static str> = observable::from_iter(vec![3, 4]);
    subject.as_observable().on_error_resume_next(fallback).subscribe_all(
      move |v| e.lock().unwrap().push(v),
      move |_| *f.lock().unwrap() += 1,
      || {},
    );

    subject.next(1);
    subject.error("ignored");

    assert_eq!(*emitted.lock().unwrap(), vec![1, 3, 4]);
    assert_eq!(*errors.lock().unwrap(), 0);
  }

  #[test]
  fn fallback_error_still_propagates() {
    let observed = Arc::new(Mutex::new(None));
    let o = observed.clone();

    let source: Observable<i32, &'static str> = observable::throw("first");
    let fallback: Observable<i32, &'static str> = observable::throw("second");
    source
      .on_error_resume_next(fallback)
      .subscribe_all(|_| {}, move |err| *o.lock().unwrap() = Some(err), || {});

    assert_eq!(*observed.lock().unwrap(), Some("second"));
  }
}
