//! Synchronous extraction of a single value from a stream.

use std::mem;
use std::sync::{Arc, Condvar, Mutex, PoisonError};

use tracing::trace;

use crate::error::BlockingError;
use crate::observable::Observable;
use crate::observer::Observer;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Bridges this observable into blocking extraction calls.
  pub fn to_blocking(self) -> BlockingObservable<Item, Err> { BlockingObservable { source: self } }
}

/// Adapter that parks the calling thread until a stream makes up its mind.
///
/// Obtained through [`Observable::to_blocking`]. Each extraction call
/// subscribes afresh and waits on a condvar (no polling) for a terminal
/// event or for proof that the extraction cannot succeed.
pub struct BlockingObservable<Item, Err> {
  source: Observable<Item, Err>,
}

impl<Item, Err> BlockingObservable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Waits for the stream to complete with exactly one value and returns it.
  ///
  /// Fails with [`BlockingError::TooManyElements`] as soon as a second value
  /// arrives, without waiting for the terminal event, and with
  /// [`BlockingError::NoElements`] when the stream completes empty. A source
  /// error surfaces as [`BlockingError::Source`].
  pub fn single(&self) -> Result<Item, BlockingError<Err>> { self.extract(None, None) }

  /// Like [`BlockingObservable::single`], counting only values that satisfy
  /// the predicate.
  pub fn single_by<P>(&self, predicate: P) -> Result<Item, BlockingError<Err>>
  where
    P: Fn(&Item) -> bool + Send + Sync + 'static,
  {
    self.extract(Some(Arc::new(predicate)), None)
  }

  /// Like [`BlockingObservable::single`], but an empty stream yields
  /// `default` instead of failing. More than one value still fails.
  pub fn single_or_default(&self, default: Item) -> Result<Item, BlockingError<Err>> {
    self.extract(None, Some(default))
  }

  fn extract(
    &self,
    predicate: Option<Predicate<Item>>,
    default: Option<Item>,
  ) -> Result<Item, BlockingError<Err>> {
    let shared = Arc::new((
      Mutex::new(ExtractState { values: Vec::new(), outcome: None, overflow: false }),
      Condvar::new(),
    ));
    let observer = ExtractObserver { shared: shared.clone(), predicate };
    let subscription = self.source.clone().subscribe_observer(observer);

    let (state, signal) = &*shared;
    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
    trace!("parking caller until the stream settles");
    while state.outcome.is_none() && !state.overflow {
      state = signal.wait(state).unwrap_or_else(PoisonError::into_inner);
    }

    if state.overflow {
      subscription.unsubscribe();
      return Err(BlockingError::TooManyElements);
    }
    match state.outcome.take() {
      Some(Outcome::Failed(err)) => Err(BlockingError::Source(err)),
      _ => {
        let mut values = mem::take(&mut state.values);
        match values.len() {
          0 => default.ok_or(BlockingError::NoElements),
          1 => values.pop().ok_or(BlockingError::NoElements),
          _ => Err(BlockingError::TooManyElements),
        }
      }
    }
  }
}

type Predicate<Item> = Arc<dyn Fn(&Item) -> bool + Send + Sync>;

enum Outcome<Err> {
  Failed(Err),
  Completed,
}

struct ExtractState<Item, Err> {
  values: Vec<Item>,
  outcome: Option<Outcome<Err>>,
  overflow: bool,
}

struct ExtractObserver<Item, Err> {
  shared: Arc<(Mutex<ExtractState<Item, Err>>, Condvar)>,
  predicate: Option<Predicate<Item>>,
}

impl<Item, Err> ExtractObserver<Item, Err> {
  fn settle(&self, outcome: Outcome<Err>) {
    let (state, signal) = &*self.shared;
    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
    if state.outcome.is_none() {
      state.outcome = Some(outcome);
      signal.notify_all();
    }
  }
}

impl<Item, Err> Observer<Item, Err> for ExtractObserver<Item, Err> {
  fn next(&mut self, value: Item) {
    let (state, signal) = &*self.shared;
    let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
    if state.outcome.is_some() || state.overflow {
      return;
    }
    if self.predicate.as_ref().is_none_or(|p| p(&value)) {
      state.values.push(value);
      if state.values.len() > 1 {
        state.overflow = true;
        signal.notify_all();
      }
    }
  }

  fn error(&mut self, err: Err) { self.settle(Outcome::Failed(err)); }

  fn complete(&mut self) { self.settle(Outcome::Completed); }

  fn is_closed(&self) -> bool {
    let (state, _) = &*self.shared;
    let state = state.lock().unwrap_or_else(PoisonError::into_inner);
    state.outcome.is_some() || state.overflow
  }
}
