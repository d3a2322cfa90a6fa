use std::sync::Arc;

use crate::error::{guarded, RxError};
use crate::prelude::*;

impl<Item, Err> Observable<Item, Err>
where
  Item: Clone + Send + 'static,
  Err: From<RxError> + Send + 'static,
{
  /// Applies a running fold over the stream, emitting every intermediate
  /// accumulator value.
  ///
  /// The first upstream value is forwarded as-is and becomes the initial
  /// accumulator; each later value is folded into it.
  ///
  /// # Examples
  ///
  /// ```
  /// use rxlite::prelude::*;
  ///
  /// let source: Observable<i32> = observable::from_iter(vec![1, 2, 3]);
  /// source.scan(|acc, v| acc + v).subscribe(|v| println!("{}", v));
  /// // print log:
  /// // 1
  /// // 3
  /// // 6
  /// ```
  pub fn scan<BinaryOp>(self, binary_op: BinaryOp) -> Observable<Item, Err>
  where
    BinaryOp: Fn(Item, Item) -> Item + Send + Sync + 'static,
  {
    let binary_op: Arc<dyn Fn(Item, Item) -> Item + Send + Sync> = Arc::new(binary_op);
    Observable::new(move |subscriber: Subscriber<Item, Err>| {
      let subscription = subscriber.subscription().clone();
      self.actual_subscribe(
        ScanObserver { observer: subscriber, binary_op: binary_op.clone(), acc: None },
        subscription,
      );
    })
  }
}

impl<Item, Err> Observable<Item, Err>
where
  Item: Send + 'static,
  Err: From<RxError> + Send + 'static,
{
  /// Like [`Observable::scan`], but seeded: the seed itself is emitted first,
  /// then each upstream value is folded into the running accumulator.
  ///
  /// # Examples
  ///
  /// ```
  /// use rxlite::prelude::*;
  ///
  /// let source: Observable<i32> = observable::from_iter(vec![1, 2, 3]);
  /// source
  ///   .scan_initial(10, |acc, v| acc + v)
  ///   .subscribe(|v| println!("{}", v));
  /// // print log:
  /// // 10
  /// // 11
  /// // 13
  /// // 16
  /// ```
  pub fn scan_initial<Out, BinaryOp>(self, initial_value: Out, binary_op: BinaryOp) -> Observable<Out, Err>
  where
    Out: Clone + Send + Sync + 'static,
    BinaryOp: Fn(Out, Item) -> Out + Send + Sync + 'static,
  {
    let binary_op: Arc<dyn Fn(Out, Item) -> Out + Send + Sync> = Arc::new(binary_op);
    Observable::new(move |mut subscriber: Subscriber<Out, Err>| {
      let subscription = subscriber.subscription().clone();
      subscriber.next(initial_value.clone());
      self.actual_subscribe(
        ScanInitialObserver {
          observer: subscriber,
          binary_op: binary_op.clone(),
          acc: initial_value.clone(),
        },
        subscription,
      );
    })
  }
}

struct ScanObserver<Item, Err> {
  observer: Subscriber<Item, Err>,
  binary_op: Arc<dyn Fn(Item, Item) -> Item + Send + Sync>,
  acc: Option<Item>,
}

impl<Item, Err> Observer<Item, Err> for ScanObserver<Item, Err>
where
  Item: Clone,
  Err: From<RxError>,
{
  fn next(&mut self, value: Item) {
    let folded = match self.acc.take() {
      None => value,
      Some(acc) => match guarded(|| (self.binary_op)(acc, value)) {
        Ok(folded) => folded,
        Err(fault) => {
          self.observer.error(fault.into());
          return;
        }
      },
    };
    self.acc = Some(folded.clone());
    self.observer.next(folded);
  }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) { self.observer.complete() }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}

struct ScanInitialObserver<Item, Out, Err> {
  observer: Subscriber<Out, Err>,
  binary_op: Arc<dyn Fn(Out, Item) -> Out + Send + Sync>,
  acc: Out,
}

impl<Item, Out, Err> Observer<Item, Err> for ScanInitialObserver<Item, Out, Err>
where
  Out: Clone,
  Err: From<RxError>,
{
  fn next(&mut self, value: Item) {
    let folded = guarded(|| (self.binary_op)(self.acc.clone(), value));
    match folded {
      Ok(folded) => {
        self.acc = folded.clone();
        self.observer.next(folded);
      }
      Err(fault) => self.observer.error(fault.into()),
    }
  }

  fn error(&mut self, err: Err) { self.observer.error(err) }

  fn complete(&mut self) { self.observer.complete() }

  fn is_closed(&self) -> bool { self.observer.is_closed() }
}
