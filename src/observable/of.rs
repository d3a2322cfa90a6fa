use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscriber::Subscriber;

/// Creates an observable producing a single value.
///
/// Completes immediately after emitting the value given. Never emits an
/// error. The value may itself be an absence marker such as `Option::None`;
/// it is emitted as-is.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// let source: Observable<i32> = observable::of(123);
/// source.subscribe(|v| println!("{}", v));
/// ```
pub fn of<Item, Err>(value: Item) -> Observable<Item, Err>
where
  Item: Clone + Send + Sync + 'static,
  Err: Send + 'static,
{
  Observable::new(move |mut subscriber: Subscriber<Item, Err>| {
    subscriber.next(value.clone());
    subscriber.complete();
  })
}
