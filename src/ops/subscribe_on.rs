use tracing::trace;

use crate::prelude::*;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Defers the act of subscribing, i.e. running the upstream's subscribe
  /// function, onto the given scheduler.
  ///
  /// Downstream observers still see events in the order the upstream
  /// produces them, just on whatever thread the scheduler chose. A
  /// subscription disposed before the scheduled task runs is skipped
  /// entirely.
  pub fn subscribe_on<S>(self, scheduler: S) -> Observable<Item, Err>
  where
    S: Scheduler + Send + Sync + 'static,
  {
    Observable::new(move |subscriber: Subscriber<Item, Err>| {
      let source = self.clone();
      trace!("deferring subscription to scheduler");
      scheduler.schedule(Box::new(move || {
        if subscriber.is_closed() {
          return;
        }
        source.subscribe_subscriber(subscriber);
      }));
    })
  }
}

#[cfg(test)]
mod test {
  use std::sync::mpsc::channel;
  use std::sync::{Arc, Mutex};
  use std::thread;

  use crate::prelude::*;
  use crate::scheduler::Task;

  #[test]
  fn generator_runs_on_the_scheduler_thread() {
    let scheduler = ThreadPoolScheduler::with_pool_size(2).unwrap();
    let (tx, rx) = channel();

    let source: Observable<i32> = observable::create(|mut subscriber| {
      subscriber.next(1);
      subscriber.complete();
    });
    source.subscribe_on(scheduler).subscribe_all(
      {
        let tx = tx.clone();
        move |v| tx.send(Some((thread::current().id(), v))).unwrap()
      },
      |_| {},
      move || tx.send(None).unwrap(),
    );

    let (generator_thread, value) = rx.recv().unwrap().unwrap();
    assert_eq!(rx.recv().unwrap(), None);
    assert_eq!(value, 1);
    assert_ne!(generator_thread, thread::current().id());
  }

  /// A scheduler that parks tasks until the test releases them.
  #[derive(Clone)]
  struct Deferred(Arc<Mutex<Vec<Task>>>);

  impl Scheduler for Deferred {
    fn schedule(&self, task: Task) { self.0.lock().unwrap().push(task); }
  }

  #[test]
  fn disposed_subscription_never_runs_the_generator() {
    let ran = Arc::new(Mutex::new(false));
    let r = ran.clone();

    let gate: Observable<i32> = observable::create(move |mut subscriber| {
      *r.lock().unwrap() = true;
      subscriber.complete();
    });

    let deferred = Deferred(Arc::new(Mutex::new(vec![])));
    let subscription = gate.subscribe_on(deferred.clone()).subscribe(|_| {});
    subscription.unsubscribe();
    let tasks: Vec<Task> = deferred.0.lock().unwrap().drain(..).collect();
    for task in tasks {
      task();
    }

    assert!(!*ran.lock().unwrap());
  }
}
