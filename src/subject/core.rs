//! The state machine shared by every subject variant.

use std::collections::VecDeque;
use std::mem;
use std::sync::{Mutex, MutexGuard, PoisonError};

use smallvec::SmallVec;
use tracing::trace;

use crate::observer::Observer;
use crate::subscriber::Subscriber;

/// How many already-delivered values a subject keeps for late subscribers.
#[derive(Clone, Copy)]
pub(crate) enum Capacity {
  Keep(usize),
  Unbounded,
}

pub(crate) enum Terminal<Err> {
  Failed(Err),
  Completed,
}

struct SubjectState<Item, Err> {
  buffer: VecDeque<Item>,
  capacity: Capacity,
  observers: SmallVec<[Subscriber<Item, Err>; 2]>,
  terminal: Option<Terminal<Err>>,
}

/// Shared sink-and-broadcast state.
///
/// Every mutation (buffer update, registry change, terminal transition)
/// and every delivery happens under one lock, so all subscribers observe
/// identical event order and a subscriber arriving mid-emission sees either
/// the state before the value or the state after it, never a mix. Once a
/// terminal event has been accepted the state is absorbing: later `next`,
/// `error` and `complete` calls are dropped.
pub(crate) struct SubjectCore<Item, Err> {
  state: Mutex<SubjectState<Item, Err>>,
}

impl<Item, Err> SubjectCore<Item, Err> {
  pub(crate) fn bounded(capacity: usize) -> Self { Self::with_capacity(Capacity::Keep(capacity)) }

  pub(crate) fn unbounded() -> Self { Self::with_capacity(Capacity::Unbounded) }

  /// A bounded core pre-loaded with one value (the behavior default).
  pub(crate) fn seeded(capacity: usize, value: Item) -> Self {
    let core = Self::bounded(capacity);
    core
      .lock()
      .buffer
      .push_back(value);
    core
  }

  fn with_capacity(capacity: Capacity) -> Self {
    Self {
      state: Mutex::new(SubjectState {
        buffer: VecDeque::new(),
        capacity,
        observers: SmallVec::new(),
        terminal: None,
      }),
    }
  }

  fn lock(&self) -> MutexGuard<'_, SubjectState<Item, Err>> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub(crate) fn has_observers(&self) -> bool {
    self.lock().observers.iter().any(|o| !o.is_closed())
  }
}

impl<Item, Err> SubjectCore<Item, Err>
where
  Item: Clone,
{
  pub(crate) fn next(&self, value: Item) {
    let mut state = self.lock();
    if state.terminal.is_some() {
      return;
    }
    match state.capacity {
      Capacity::Keep(0) => {}
      Capacity::Keep(capacity) => {
        state.buffer.push_back(value.clone());
        while state.buffer.len() > capacity {
          state.buffer.pop_front();
        }
      }
      Capacity::Unbounded => state.buffer.push_back(value.clone()),
    }
    state.observers.retain(|o| !o.is_closed());
    for observer in state.observers.iter_mut() {
      observer.next(value.clone());
    }
  }

  /// Registers a subscriber: replay whatever the buffering policy retained,
  /// then either deliver the terminal state or enroll it for live events.
  pub(crate) fn subscribe(&self, mut subscriber: Subscriber<Item, Err>)
  where
    Err: Clone,
  {
    let mut state = self.lock();
    for value in state.buffer.iter() {
      subscriber.next(value.clone());
    }
    match &state.terminal {
      Some(Terminal::Failed(err)) => subscriber.error(err.clone()),
      Some(Terminal::Completed) => subscriber.complete(),
      None => state.observers.push(subscriber),
    }
  }
}

impl<Item, Err> SubjectCore<Item, Err>
where
  Err: Clone,
{
  pub(crate) fn error(&self, err: Err) {
    let mut state = self.lock();
    if state.terminal.is_some() {
      return;
    }
    trace!("subject terminating with error");
    state.terminal = Some(Terminal::Failed(err.clone()));
    let mut observers = mem::take(&mut state.observers);
    for observer in observers.iter_mut() {
      observer.error(err.clone());
    }
  }

  pub(crate) fn complete(&self) {
    let mut state = self.lock();
    if state.terminal.is_some() {
      return;
    }
    trace!("subject completing");
    state.terminal = Some(Terminal::Completed);
    let mut observers = mem::take(&mut state.observers);
    for observer in observers.iter_mut() {
      observer.complete();
    }
  }
}
