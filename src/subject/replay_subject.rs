use std::sync::Arc;

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subject::core::SubjectCore;

/// A hot multicast source that replays retained history to new subscribers.
///
/// Created unbounded, it retains every value ever emitted; created with a
/// size, only the `n` most recent. A new subscriber first receives the
/// retained values oldest-first, then every subsequent emission. A
/// subscriber arriving after termination still receives the retained values
/// before the terminal event.
pub struct ReplaySubject<Item, Err = RxError> {
  core: Arc<SubjectCore<Item, Err>>,
}

impl<Item, Err> Clone for ReplaySubject<Item, Err> {
  fn clone(&self) -> Self { Self { core: self.core.clone() } }
}

impl<Item, Err> ReplaySubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  /// A replay subject retaining every emission.
  pub fn create() -> Self { Self { core: Arc::new(SubjectCore::unbounded()) } }

  /// A replay subject retaining only the `size` most recent emissions.
  pub fn create_with_size(size: usize) -> Self {
    Self { core: Arc::new(SubjectCore::bounded(size)) }
  }

  /// Pushes a value into the buffer and to every current subscriber.
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

impl<Item, Err> Observer<Item, Err> for ReplaySubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  fn next(&mut self, value: Item) { self.core.next(value) }

  fn error(&mut self, err: Err) { self.core.error(err) }

  fn complete(&mut self) { self.core.complete() }
}
