use crate::error::{guarded, RxError};
use crate::observable::Observable;
use crate::observer::Observer;
use crate::subscriber::Subscriber;

/// Creates an observable from an arbitrary generator function.
///
/// The generator receives the downstream [`Subscriber`] and may emit any
/// number of values, including none at all, before an optional terminal
/// event. Teardown logic can be registered through
/// `subscriber.subscription().add(..)`. A panic inside the generator is
/// caught and delivered as an `error` event rather than unwinding out of the
/// subscribe call.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// let source: Observable<i32> = observable::create(|mut subscriber| {
///   subscriber.next(1);
///   subscriber.next(2);
///   subscriber.complete();
/// });
/// source.subscribe(|v| println!("{}", v));
/// ```
pub fn create<Item, Err, F>(subscribe_fn: F) -> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: From<RxError> + Send + 'static,
  F: Fn(Subscriber<Item, Err>) + Send + Sync + 'static,
{
  Observable::new(move |mut subscriber: Subscriber<Item, Err>| {
    if let Err(fault) = guarded(|| subscribe_fn(subscriber.clone())) {
      subscriber.error(fault.into());
    }
  })
}
