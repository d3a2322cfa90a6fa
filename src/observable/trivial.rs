use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscriber::Subscriber;

/// Creates an observable that completes immediately without emitting any
/// value.
pub fn empty<Item, Err>() -> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  Observable::new(|mut subscriber: Subscriber<Item, Err>| subscriber.complete())
}

/// Creates an observable that never emits anything, including terminal
/// events.
pub fn never<Item, Err>() -> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  Observable::new(|_subscriber: Subscriber<Item, Err>| {})
}

/// Creates an observable that terminates with the given error immediately.
pub fn throw<Item, Err>(err: Err) -> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Clone + Send + Sync + 'static,
{
  Observable::new(move |mut subscriber: Subscriber<Item, Err>| subscriber.error(err.clone()))
}
