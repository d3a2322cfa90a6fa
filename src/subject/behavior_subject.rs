use std::sync::Arc;

use crate::error::RxError;
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subject::core::SubjectCore;

/// A hot multicast source that always holds its most recent value.
///
/// A new subscriber immediately receives the held value (the latest
/// emission, or the construction default if nothing has been emitted yet)
/// and then every subsequent emission. Created without a default, the
/// subject stays silent toward new subscribers until the first emission.
pub struct BehaviorSubject<Item, Err = RxError> {
  core: Arc<SubjectCore<Item, Err>>,
}

impl<Item, Err> Clone for BehaviorSubject<Item, Err> {
  fn clone(&self) -> Self { Self { core: self.core.clone() } }
}

impl<Item, Err> BehaviorSubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  /// A behavior subject with no default: subscribers see nothing until the
  /// first emission.
  pub fn create() -> Self { Self { core: Arc::new(SubjectCore::bounded(1)) } }

  /// A behavior subject holding `default` until the first emission replaces
  /// it.
  pub fn create_with_default(default: Item) -> Self {
    Self { core: Arc::new(SubjectCore::seeded(1, default)) }
  }

  /// Pushes a value, replacing the held one. Dropped once terminated.
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

impl<Item, Err> Observer<Item, Err> for BehaviorSubject<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: Clone + Send + 'static,
{
  fn next(&mut self, value: Item) { self.core.next(value) }

  fn error(&mut self, err: Err) { self.core.error(err) }

  fn complete(&mut self) { self.core.complete() }
}
