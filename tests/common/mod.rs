#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::thread;

use rxlite::prelude::*;

/// Recording observer: keeps every received event as a [`Notification`] so
/// tests can assert on the exact delivered sequence.
pub struct Probe<Item, Err = RxError> {
  events: Arc<Mutex<Vec<Notification<Item, Err>>>>,
}

impl<Item, Err> Clone for Probe<Item, Err> {
  fn clone(&self) -> Self { Self { events: self.events.clone() } }
}

impl<Item, Err> Default for Probe<Item, Err> {
  fn default() -> Self { Self::new() }
}

impl<Item, Err> Probe<Item, Err> {
  pub fn new() -> Self { Self { events: Arc::new(Mutex::new(vec![])) } }

  pub fn events(&self) -> Vec<Notification<Item, Err>>
  where
    Item: Clone,
    Err: Clone,
  {
    self.events.lock().unwrap().clone()
  }

  pub fn values(&self) -> Vec<Item>
  where
    Item: Clone,
  {
    self
      .events
      .lock()
      .unwrap()
      .iter()
      .filter_map(|n| n.value().cloned())
      .collect()
  }

  pub fn completed(&self) -> bool {
    self.events.lock().unwrap().iter().any(|n| n.is_complete())
  }

  pub fn error(&self) -> Option<Err>
  where
    Err: Clone,
  {
    self
      .events
      .lock()
      .unwrap()
      .iter()
      .find_map(|n| match n {
        Notification::Error(err) => Some(err.clone()),
        _ => None,
      })
  }
}

impl<Item, Err> Observer<Item, Err> for Probe<Item, Err> {
  fn next(&mut self, value: Item) {
    self.events.lock().unwrap().push(Notification::Next(value));
  }

  fn error(&mut self, err: Err) {
    self.events.lock().unwrap().push(Notification::Error(err));
  }

  fn complete(&mut self) {
    self.events.lock().unwrap().push(Notification::Complete);
  }
}

/// Asserts the probe saw exactly `expected` values followed by completion,
/// with no error.
pub fn assert_sequence<Item, Err>(probe: &Probe<Item, Err>, expected: Vec<Item>)
where
  Item: Clone + PartialEq + std::fmt::Debug,
  Err: Clone + PartialEq + std::fmt::Debug,
{
  assert_eq!(probe.values(), expected);
  assert!(probe.completed(), "stream did not complete");
  assert_eq!(probe.error(), None);
}

/// Pushes values (then complete) into the subject from another thread, once
/// a subscriber has actually arrived. The hand-shake on `has_observers`
/// replaces timing-based sleeps.
pub fn emit_in_new_thread<Item>(
  subject: &PublishSubject<Item>,
  values: Vec<Item>,
) -> thread::JoinHandle<()>
where
  Item: Clone + Send + 'static,
{
  let subject = subject.clone();
  thread::spawn(move || {
    while !subject.has_observers() {
      thread::yield_now();
    }
    for value in values {
      subject.next(value);
    }
    subject.complete();
  })
}
