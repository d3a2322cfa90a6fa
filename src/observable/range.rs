use crate::observable::{from_iter, Observable};

/// Creates an observable emitting `count` consecutive integers starting at
/// `start`, then completing. A non-positive `count` yields an immediate
/// `complete`.
///
/// # Examples
///
/// ```
/// use rxlite::prelude::*;
///
/// let source: Observable<i32> = observable::range(1, 3);
/// source.subscribe(|v| println!("{}", v));
/// // print log:
/// // 1
/// // 2
/// // 3
/// ```
pub fn range<Err>(start: i32, count: i32) -> Observable<i32, Err>
where
  Err: Send + 'static,
{
  from_iter(start..start.saturating_add(count.max(0)))
}
