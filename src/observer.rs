//! Observer trait and closure adapters.
//!
//! An Observer is the consumer side of a stream: values arrive through
//! `next`, and at most one of `error`/`complete` follows, after which the
//! stream is over.

/// The consumer of stream events.
///
/// `is_closed` lets sources (like `from_iter`) find out that nobody is
/// listening anymore and stop emitting early.
pub trait Observer<Item, Err> {
  /// Receive the next value.
  fn next(&mut self, value: Item);

  /// Receive the terminal error.
  fn error(&mut self, err: Err);

  /// Receive the completion signal.
  fn complete(&mut self);

  /// Whether this observer will accept further events.
  fn is_closed(&self) -> bool { false }
}

/// Closure adapter for `next`-only subscriptions.
///
/// Errors and completion are silently discarded; subscribe with
/// [`FnObserver`] when the terminal events matter.
#[derive(Clone)]
pub struct FnMutObserver<N>(pub N);

impl<N, Item, Err> Observer<Item, Err> for FnMutObserver<N>
where
  N: FnMut(Item),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.0)(value); }

  fn error(&mut self, _err: Err) {}

  fn complete(&mut self) {}
}

/// Closure adapter carrying all three handlers.
#[derive(Clone)]
pub struct FnObserver<N, E, C> {
  next: N,
  error: E,
  complete: C,
}

impl<N, E, C> FnObserver<N, E, C> {
  pub fn new(next: N, error: E, complete: C) -> Self { Self { next, error, complete } }
}

impl<N, E, C, Item, Err> Observer<Item, Err> for FnObserver<N, E, C>
where
  N: FnMut(Item),
  E: FnMut(Err),
  C: FnMut(),
{
  #[inline]
  fn next(&mut self, value: Item) { (self.next)(value); }

  #[inline]
  fn error(&mut self, err: Err) { (self.error)(err); }

  #[inline]
  fn complete(&mut self) { (self.complete)(); }
}

#[cfg(test)]
mod test {
  use super::*;

  fn feed(observer: &mut impl Observer<i32, ()>) {
    observer.next(10);
    observer.next(20);
    observer.complete();
  }

  #[test]
  fn closure_as_observer() {
    let mut count = 0;
    feed(&mut FnMutObserver(|v: i32| count += v));
    assert_eq!(count, 30);
  }

  #[test]
  fn full_observer_routes_every_event() {
    let mut values = vec![];
    let mut errors = 0;
    let mut completed = 0;
    {
      let mut observer =
        FnObserver::new(|v: i32| values.push(v), |_: &str| errors += 1, || completed += 1);
      Observer::<i32, &str>::next(&mut observer, 1);
      Observer::<i32, &str>::complete(&mut observer);
    }
    assert_eq!(values, vec![1]);
    assert_eq!(errors, 0);
    assert_eq!(completed, 1);
  }
}
