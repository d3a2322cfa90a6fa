use std::collections::VecDeque;

use crate::prelude::*;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Emits only the last `count` values of the source, in their original
  /// relative order, once the source completes.
  ///
  /// If the source emits fewer than `count` values, all of them are emitted.
  /// Nothing is delivered until the source completes.
  ///
  /// # Examples
  ///
  /// ```
  /// use rxlite::prelude::*;
  ///
  /// let source: Observable<i32> = observable::from_iter(0..10);
  /// source.take_last(5).subscribe(|v| println!("{}", v));
  /// // print log:
  /// // 5
  /// // 6
  /// // 7
  /// // 8
  /// // 9
  /// ```
  pub fn take_last(self, count: usize) -> Observable<Item, Err> {
    Observable::new(move |subscriber: Subscriber<Item, Err>| {
      let subscription = subscriber.subscription().clone();
      self.actual_subscribe(
        TakeLastObserver { observer: subscriber, count, window: VecDeque::new() },
        subscription,
      );
    })
  }
}

struct TakeLastObserver<Item, Err> {
  observer: Subscriber<Item, Err>,
  count: usize,
  window: VecDeque<Item>,
}

impl<Item, Err> Observer<Item, Err> for TakeLastObserver<Item, Err> {
  fn next(&mut self, value: Item) {
    if self.count == 0 {
      return;
    }
    self.window.push_back(value);
    if self.window.len() > self.count {
      self.window.pop_front();
    }
  }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) {
    while let Some(value) = self.window.pop_front() {
      self.observer.next(value);
    }
    self.observer.complete();
  }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
