use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscriber::Subscriber;

/// Creates an observable that emits each value of an iterable in iteration
/// order, then completes.
///
/// An empty iterable yields an immediate `complete`. Emission stops early
/// when the downstream reports itself closed, so a long range feeding a
/// disposed subscription does not keep running.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// let source: Observable<i32> = observable::from_iter(0..3);
/// source.subscribe(|v| println!("{}", v));
/// // print log:
/// // 0
/// // 1
/// // 2
/// ```
pub fn from_iter<Item, Err, I>(iter: I) -> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
  I: IntoIterator<Item = Item> + Clone + Send + Sync + 'static,
{
  Observable::new(move |mut subscriber: Subscriber<Item, Err>| {
    for value in iter.clone() {
      if subscriber.is_closed() {
        return;
      }
      subscriber.next(value);
    }
    subscriber.complete();
  })
}
