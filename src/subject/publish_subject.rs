use std::sync::Arc;

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subject::core::SubjectCore;

/// A hot multicast source that retains nothing.
///
/// Subscribers receive only the events pushed after they subscribed; anything
/// emitted earlier is lost to them. All subscribers see the same events in
/// the same order.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// let subject: PublishSubject<i32> = PublishSubject::create();
/// subject.next(1); // nobody is listening, dropped
/// subject.as_observable().subscribe(|v| println!("{}", v));
/// subject.next(2); // printed
/// subject.complete();
/// ```
pub struct PublishSubject<Item, Err = RxError> {
  core: Arc<SubjectCore<Item, Err>>,
}

impl<Item, Err> Clone for PublishSubject<Item, Err> {
  fn clone(&self) -> Self { Self { core: self.core.clone() } }
}

impl<Item, Err> PublishSubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  pub fn create() -> Self { Self { core: Arc::new(SubjectCore::bounded(0)) } }

  /// Pushes a value to every current subscriber. Dropped once terminated.
  pub fn next(&self, value: Item) { self.core.next(value) }

  /// Terminates the subject with an error.
  pub fn error(&self, err: Err) { self.core.error(err) }

  /// Terminates the subject with completion.
  pub fn complete(&self) { self.core.complete() }

  /// Whether any live subscriber is currently registered.
  pub fn has_observers(&self) -> bool { self.core.has_observers() }

  /// The source capability of this subject, ready for operator chaining.
  pub fn as_observable(&self) -> Observable<Item, Err> {
    let core = self.core.clone();
    Observable::new(move |subscriber| core.subscribe(subscriber))
  }
}

/// The sink capability: a subject can terminate any pipeline.
impl<Item, Err> Observer<Item, Err> for PublishSubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  fn next(&mut self, value: Item) { self.core.next(value) }

  fn error(&mut self, err: Err) { self.core.error(err) }

  fn complete(&mut self) { self.core.complete() }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  #[test]
  fn emits_only_new_items_after_subscribing() {
    let emitted = Arc::new(Mutex::new(vec![]));
    let completed = Arc::new(Mutex::new(false));
    let (e, c) = (emitted.clone(), completed.clone());

    let subject: PublishSubject<i32> = PublishSubject::create();
    subject.next(1);

    subject.as_observable().subscribe_all(
      move |v| e.lock().unwrap().push(v),
      |_| {},
      move || *c.lock().unwrap() = true,
    );
    subject.next(2);
    subject.complete();

    assert_eq!(*emitted.lock().unwrap(), vec![2]);
    assert!(*completed.lock().unwrap());
  }

  #[test]
  fn broadcast_reaches_every_subscriber_in_order() {
    let first = Arc::new(Mutex::new(vec![]));
    let second = Arc::new(Mutex::new(vec![]));
    let (a, b) = (first.clone(), second.clone());

    let subject: PublishSubject<i32> = PublishSubject::create();
    subject.as_observable().subscribe(move |v| a.lock().unwrap().push(v));
    subject.as_observable().subscribe(move |v| b.lock().unwrap().push(v));

    subject.next(1);
    subject.next(2);

    assert_eq!(*first.lock().unwrap(), vec![1, 2]);
    assert_eq!(*second.lock().unwrap(), vec![1, 2]);
  }

  #[test]
  fn unsubscribing_one_does_not_affect_others() {
    let kept = Arc::new(Mutex::new(vec![]));
    let dropped = Arc::new(Mutex::new(vec![]));
    let (k, d) = (kept.clone(), dropped.clone());

    let subject: PublishSubject<i32> = PublishSubject::create();
    let keep = subject.as_observable().subscribe(move |v| k.lock().unwrap().push(v));
    let drop_me = subject.as_observable().subscribe(move |v| d.lock().unwrap().push(v));

    subject.next(1);
    drop_me.unsubscribe();
    subject.next(2);
    keep.unsubscribe();

    assert_eq!(*kept.lock().unwrap(), vec![1, 2]);
    assert_eq!(*dropped.lock().unwrap(), vec![1]);
  }

  #[test]
  fn events_after_termination_are_dropped() {
    let emitted = Arc::new(Mutex::new(vec![]));
    let terminals = Arc::new(Mutex::new(0));
    let (e, t) = (emitted.clone(), terminals.clone());

    let subject: PublishSubject<i32> = PublishSubject::create();
    subject.as_observable().subscribe_all(
      move |v| e.lock().unwrap().push(v),
      {
        let t = t.clone();
        move |_| *t.lock().unwrap() += 1
      },
      move || *t.lock().unwrap() += 1,
    );

    subject.complete();
    subject.next(1);
    subject.complete();
    subject.error(RxError::NoElements);

    assert!(emitted.lock().unwrap().is_empty());
    assert_eq!(*terminals.lock().unwrap(), 1);
  }

  #[test]
  fn late_subscriber_sees_the_terminal_event() {
    let completed = Arc::new(Mutex::new(false));
    let c = completed.clone();

    let subject: PublishSubject<i32> = PublishSubject::create();
    subject.complete();
    subject.as_observable().subscribe_all(|_| {}, |_| {}, move || *c.lock().unwrap() = true);

    assert!(*completed.lock().unwrap());
  }
}
