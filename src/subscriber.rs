//! Terminal-guard wrapper around a downstream observer.

use std::sync::{Arc, Mutex, PoisonError};

use crate::observer::Observer;
use crate::subscription::Subscription;

type Slot<Item, Err> = Arc<Mutex<Option<Box<dyn Observer<Item, Err> + Send>>>>;

/// The observer handed to subscribe functions.
///
/// `Subscriber` enforces the emission protocol on behalf of whatever sits
/// downstream: the wrapped observer is taken out of its slot on the first
/// terminal event, so any events arriving afterwards find the slot empty and
/// are dropped. Clones share the slot and the subscription, which is what
/// lets multiple producers (e.g. merged inner streams) feed one downstream
/// without double-terminating it.
pub struct Subscriber<Item, Err> {
  observer: Slot<Item, Err>,
  subscription: Subscription,
}

impl<Item, Err> Clone for Subscriber<Item, Err> {
  fn clone(&self) -> Self {
    Self { observer: self.observer.clone(), subscription: self.subscription.clone() }
  }
}

impl<Item, Err> Subscriber<Item, Err> {
  pub(crate) fn new(observer: Box<dyn Observer<Item, Err> + Send>, subscription: Subscription) -> Self {
    Self { observer: Arc::new(Mutex::new(Some(observer))), subscription }
  }

  /// The disposal handle this subscriber reports to.
  ///
  /// Generators use it to register teardown logic via
  /// [`Subscription::add`].
  pub fn subscription(&self) -> &Subscription { &self.subscription }
}

impl<Item, Err> Observer<Item, Err> for Subscriber<Item, Err> {
  fn next(&mut self, value: Item) {
    if self.subscription.is_closed() {
      return;
    }
    let mut slot = self.observer.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(observer) = slot.as_mut() {
      observer.next(value);
    }
  }

  fn error(&mut self, err: Err) {
    let taken = self
      .observer
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .take();
    if let Some(mut observer) = taken {
      if !self.subscription.is_closed() {
        observer.error(err);
      }
    }
  }

  fn complete(&mut self) {
    let taken = self
      .observer
      .lock()
      .unwrap_or_else(PoisonError::into_inner)
      .take();
    if let Some(mut observer) = taken {
      if !self.subscription.is_closed() {
        observer.complete();
      }
    }
  }

  fn is_closed(&self) -> bool {
    if self.subscription.is_closed() {
      return true;
    }
    let slot = self.observer.lock().unwrap_or_else(PoisonError::into_inner);
    match slot.as_ref() {
      Some(observer) => observer.is_closed(),
      None => true,
    }
  }
}
