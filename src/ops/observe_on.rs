use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use crate::prelude::*;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Re-dispatches every event onto the given scheduler before it reaches
  /// the downstream observer, decoupling the producing thread from the
  /// consuming one.
  ///
  /// Events of a single subscription go through a serial queue, so their
  /// order survives the hop even on a multi-threaded pool. Events still
  /// queued when the subscription is disposed are discarded.
  pub fn observe_on<S>(self, scheduler: S) -> Observable<Item, Err>
  where
    S: Scheduler + Clone + Send + Sync + 'static,
  {
    Observable::new(move |subscriber: Subscriber<Item, Err>| {
      let subscription = subscriber.subscription().clone();
      let observer = ObserveOnObserver {
        state: Arc::new(DispatchState {
          queue: Mutex::new(DispatchQueue { events: VecDeque::new(), draining: false }),
          downstream: subscriber,
        }),
        scheduler: scheduler.clone(),
      };
      self.actual_subscribe(observer, subscription);
    })
  }
}

struct DispatchQueue<Item, Err> {
  events: VecDeque<Notification<Item, Err>>,
  draining: bool,
}

struct DispatchState<Item, Err> {
  queue: Mutex<DispatchQueue<Item, Err>>,
  downstream: Subscriber<Item, Err>,
}

struct ObserveOnObserver<Item, Err, S> {
  state: Arc<DispatchState<Item, Err>>,
  scheduler: S,
}

impl<Item, Err, S> ObserveOnObserver<Item, Err, S>
where
  Item: Send + 'static,
  Err: Send + 'static,
  S: Scheduler,
{
  fn push(&self, event: Notification<Item, Err>) {
    let mut queue = self
      .state
      .queue
      .lock()
      .unwrap_or_else(PoisonError::into_inner);
    queue.events.push_back(event);
    if !queue.draining {
      queue.draining = true;
      drop(queue);
      let state = self.state.clone();
      self.scheduler.schedule(Box::new(move || drain(state)));
    }
  }
}

/// Delivers queued events one at a time. Only one drain task is live per
/// subscription (the `draining` flag hands the role over under the lock),
/// which is what preserves per-subscription ordering on a pool.
fn drain<Item, Err>(state: Arc<DispatchState<Item, Err>>) {
  loop {
    let event = {
      let mut queue = state.queue.lock().unwrap_or_else(PoisonError::into_inner);
      if state.downstream.subscription().is_closed() {
        queue.events.clear();
        queue.draining = false;
        return;
      }
      match queue.events.pop_front() {
        Some(event) => event,
        None => {
          queue.draining = false;
          return;
        }
      }
    };
    let mut downstream = state.downstream.clone();
    match event {
      Notification::Next(value) => downstream.next(value),
      Notification::Error(err) => downstream.error(err),
      Notification::Complete => downstream.complete(),
    }
  }
}

impl<Item, Err, S> Observer<Item, Err> for ObserveOnObserver<Item, Err, S>
where
  Item: Send + 'static,
  Err: Send + 'static,
  S: Scheduler + Send,
{
  fn next(&mut self, value: Item) { self.push(Notification::Next(value)); }

  fn error(&mut self, err: Err) { self.push(Notification::Error(err)); }

  fn complete(&mut self) { self.push(Notification::Complete); }

  fn is_closed(&self) -> bool { self.state.downstream.is_closed() }
}

#[cfg(test)]
mod test {
  use std::sync::mpsc::channel;
  use std::sync::{Arc, Mutex};
  use std::thread;

  use crate::prelude::*;

  #[test]
  fn inline_scheduler_behaves_synchronously() {
    let emitted = Arc::new(Mutex::new(vec![]));
    let e = emitted.clone();

    let source: Observable<i32> = observable::from_iter(1..=3);
    source
      .observe_on(InlineScheduler)
      .subscribe(move |v| e.lock().unwrap().push(v));

    assert_eq!(*emitted.lock().unwrap(), vec![1, 2, 3]);
  }

  #[test]
  fn delivery_moves_to_a_pool_thread() {
    let scheduler = ThreadPoolScheduler::with_pool_size(2).unwrap();
    let (tx, rx) = channel();

    let source: Observable<i32> = observable::from_iter(vec![7]);
    source.observe_on(scheduler).subscribe_all(
      {
        let tx = tx.clone();
        move |v| tx.send((thread::current().id(), Some(v))).unwrap()
      },
      |_| {},
      move || tx.send((thread::current().id(), None)).unwrap(),
    );

    let (value_thread, value) = rx.recv().unwrap();
    let (_, terminal) = rx.recv().unwrap();
    assert_eq!(value, Some(7));
    assert_eq!(terminal, None);
    assert_ne!(value_thread, thread::current().id());
  }

  #[test]
  fn order_survives_the_pool_hop() {
    let scheduler = ThreadPoolScheduler::with_pool_size(4).unwrap();
    let (tx, rx) = channel();

    let source: Observable<i32> = observable::from_iter(0..100);
    source.observe_on(scheduler).subscribe_all(
      {
        let tx = tx.clone();
        move |v| tx.send(Some(v)).unwrap()
      },
      |_| {},
      move || tx.send(None).unwrap(),
    );

    let mut received = vec![];
    while let Some(v) = rx.recv().unwrap() {
      received.push(v);
    }
    assert_eq!(received, (0..100).collect::<Vec<_>>());
  }
}
