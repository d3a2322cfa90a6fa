use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{guarded, RxError};
use crate::prelude::*;

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: Send + 'static,
{
  /// Maps each upstream value to an inner observable and merges the inner
  /// streams into one.
  ///
  /// Each inner observable is subscribed as soon as its source value
  /// arrives, so outputs of concurrently-active inner streams interleave in
  /// emission order. The merged stream completes once the upstream and every
  /// inner stream have completed; an error from the upstream or from any
  /// inner stream terminates the whole merge immediately.
  ///
  /// # Examples
  ///
  /// ```
  /// use rxlite::prelude::*;
  ///
  /// let source: Observable<i32> = observable::from_iter(vec![1, 3]);
  /// source
  ///   .merge_map(|v| observable::from_iter(vec![v, v * 2]))
  ///   .subscribe(|v| println!("{}", v));
  /// // print log:
  /// // 1
  /// // 2
  /// // 3
  /// // 6
  /// ```
  pub fn merge_map<Out, F>(self, selector: F) -> Observable<Out, Err>
  where
    Out: Send + 'static,
    Err: From<RxError>,
    F: Fn(Item) -> Observable<Out, Err> + Send + Sync + 'static,
  {
    let selector: Selector<Item, Out, Err> = Arc::new(selector);
    Observable::new(move |subscriber: Subscriber<Out, Err>| {
      let subscription = subscriber.subscription().clone();
      self.actual_subscribe(
        MergeMapObserver {
          downstream: subscriber,
          selector: selector.clone(),
          active: Arc::new(ActiveCount::new()),
        },
        subscription,
      );
    })
  }

  /// Like [`Observable::merge_map`], but with one selector per upstream
  /// event kind: values, the error signal, and the completion signal each
  /// produce their own inner observable. The error and completion selectors
  /// take no argument; the upstream error itself is swallowed, replaced by
  /// whatever its inner observable emits.
  pub fn merge_map_events<Out, FN, FE, FC>(
    self,
    on_next: FN,
    on_error: FE,
    on_complete: FC,
  ) -> Observable<Out, Err>
  where
    Out: Send + 'static,
    Err: From<RxError>,
    FN: Fn(Item) -> Observable<Out, Err> + Send + Sync + 'static,
    FE: Fn() -> Observable<Out, Err> + Send + Sync + 'static,
    FC: Fn() -> Observable<Out, Err> + Send + Sync + 'static,
  {
    let on_next: Selector<Item, Out, Err> = Arc::new(on_next);
    let on_error: SignalSelector<Out, Err> = Arc::new(on_error);
    let on_complete: SignalSelector<Out, Err> = Arc::new(on_complete);
    Observable::new(move |subscriber: Subscriber<Out, Err>| {
      let subscription = subscriber.subscription().clone();
      self.actual_subscribe(
        MergeMapEventsObserver {
          downstream: subscriber,
          on_next: on_next.clone(),
          on_error: on_error.clone(),
          on_complete: on_complete.clone(),
          active: Arc::new(ActiveCount::new()),
        },
        subscription,
      );
    })
  }
}

type Selector<Item, Out, Err> = Arc<dyn Fn(Item) -> Observable<Out, Err> + Send + Sync>;
type SignalSelector<Out, Err> = Arc<dyn Fn() -> Observable<Out, Err> + Send + Sync>;

/// Number of live contributors to the merged stream: the upstream counts as
/// one, every subscribed inner stream as one more. Whoever drops the count
/// to zero delivers the completion.
struct ActiveCount(AtomicUsize);

impl ActiveCount {
  fn new() -> Self { Self(AtomicUsize::new(1)) }

  fn enter(&self) { self.0.fetch_add(1, Ordering::SeqCst); }

  fn exit<Out, Err>(&self, downstream: &mut Subscriber<Out, Err>) {
    if self.0.fetch_sub(1, Ordering::SeqCst) == 1 {
      downstream.complete();
    }
  }
}

fn subscribe_inner<Out, Err>(
  inner: Observable<Out, Err>,
  downstream: &Subscriber<Out, Err>,
  active: &Arc<ActiveCount>,
) where
  Out: Send + 'static,
  Err: Send + 'static,
{
  active.enter();
  inner.actual_subscribe(
    MergeInnerObserver { downstream: downstream.clone(), active: active.clone() },
    downstream.subscription().clone(),
  );
}

struct MergeMapObserver<Item, Out, Err> {
  downstream: Subscriber<Out, Err>,
  selector: Selector<Item, Out, Err>,
  active: Arc<ActiveCount>,
}

impl<Item, Out, Err> Observer<Item, Err> for MergeMapObserver<Item, Out, Err>
where
  Out: Send + 'static,
  Err: From<RxError> + Send + 'static,
{
  fn next(&mut self, value: Item) {
    match guarded(|| (self.selector)(value)) {
      Ok(inner) => subscribe_inner(inner, &self.downstream, &self.active),
      Err(fault) => self.downstream.error(fault.into()),
    }
  }

  fn error(&mut self, err: Err) { self.downstream.error(err) }

  fn complete(&mut self) { self.active.exit(&mut self.downstream); }

  fn is_closed(&self) -> bool { self.downstream.is_closed() }
}

struct MergeMapEventsObserver<Item, Out, Err> {
  downstream: Subscriber<Out, Err>,
  on_next: Selector<Item, Out, Err>,
  on_error: SignalSelector<Out, Err>,
  on_complete: SignalSelector<Out, Err>,
  active: Arc<ActiveCount>,
}

impl<Item, Out, Err> MergeMapEventsObserver<Item, Out, Err>
where
  Out: Send + 'static,
  Err: From<RxError> + Send + 'static,
{
  /// Spawns the inner stream for a terminal upstream signal, then retires
  /// the upstream's own slot in the active count.
  fn spawn_terminal(&mut self, selector: &SignalSelector<Out, Err>) {
    match guarded(|| selector()) {
      Ok(inner) => subscribe_inner(inner, &self.downstream, &self.active),
      Err(fault) => self.downstream.error(fault.into()),
    }
    self.active.exit(&mut self.downstream);
  }
}

impl<Item, Out, Err> Observer<Item, Err> for MergeMapEventsObserver<Item, Out, Err>
where
  Out: Send + 'static,
  Err: From<RxError> + Send + 'static,
{
  fn next(&mut self, value: Item) {
    match guarded(|| (self.on_next)(value)) {
      Ok(inner) => subscribe_inner(inner, &self.downstream, &self.active),
      Err(fault) => self.downstream.error(fault.into()),
    }
  }

  fn error(&mut self, _err: Err) {
    let selector = self.on_error.clone();
    self.spawn_terminal(&selector);
  }

  fn complete(&mut self) {
    let selector = self.on_complete.clone();
    self.spawn_terminal(&selector);
  }

  fn is_closed(&self) -> bool { self.downstream.is_closed() }
}

struct MergeInnerObserver<Out, Err> {
  downstream: Subscriber<Out, Err>,
  active: Arc<ActiveCount>,
}

impl<Out, Err> Observer<Out, Err> for MergeInnerObserver<Out, Err> {
  fn next(&mut self, value: Out) { self.downstream.next(value) }

  fn error(&mut self, err: Err) { self.downstream.error(err) }

  fn complete(&mut self) { self.active.exit(&mut self.downstream); }

  fn is_closed(&self) -> bool { self.downstream.is_closed() }
}

#[cfg(test)]
mod test {
  use std::sync::{Arc, Mutex};

  use crate::prelude::*;

  #[test]
  fn merges_inner_streams_in_emission_order() {
    let emitted = Arc::new(Mutex::new(vec![]));
    let e = emitted.clone();

    let source: Observable<i32> = observable::from_iter(vec![1, 3]);
    source
      .merge_map(|v| observable::from_iter(vec![v, v * 2]))
      .subscribe(move |v| e.lock().unwrap().push(v));

    assert_eq!(*emitted.lock().unwrap(), vec![1, 2, 3, 6]);
  }

  #[test]
  fn completes_only_after_every_inner_completes() {
    let completed = Arc::new(Mutex::new(false));
    let c = completed.clone();

    let outer: PublishSubject<i32> = PublishSubject::create();
    let inner: PublishSubject<i32> = PublishSubject::create();
    let inner_for_selector = inner.clone();
    outer
      .as_observable()
      .merge_map(move |_| inner_for_selector.as_observable())
      .subscribe_all(|_| {}, |_| {}, move || *c.lock().unwrap() = true);

    outer.next(1);
    outer.complete();
    assert!(!*completed.lock().unwrap());

    inner.complete();
    assert!(*completed.lock().unwrap());
  }

  #[test]
  fn inner_error_terminates_the_merge() {
    let observed = Arc::new(Mutex::new(None));
    let o = observed.clone();

    let source: Observable<i32> = observable::from_iter(vec![1, 2]);
    source
      .merge_map(|v| {
        if v == 2 {
          observable::throw(RxError::NoElements)
        } else {
          observable::of(v)
        }
      })
      .subscribe_all(|_| {}, move |err| *o.lock().unwrap() = Some(err), || {});

    assert_eq!(*observed.lock().unwrap(), Some(RxError::NoElements));
  }
}
