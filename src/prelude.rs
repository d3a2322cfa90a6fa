//! Prelude module for convenient imports.
//!
//! Re-exports the types and traits nearly every user of the crate touches.

pub use crate::blocking::BlockingObservable;
pub use crate::error::{BlockingError, RxError};
pub use crate::notification::Notification;
// The creation functions live under `observable::` (`observable::of`,
// `observable::from_iter`, ...); re-exporting the module keeps call sites
// short.
pub use crate::observable::{self, Observable};
pub use crate::observer::{FnMutObserver, FnObserver, Observer};
pub use crate::scheduler::{InlineScheduler, Scheduler, ThreadPoolScheduler};
pub use crate::subject::{BehaviorSubject, PublishSubject, ReplaySubject};
pub use crate::subscriber::Subscriber;
pub use crate::subscription::Subscription;
