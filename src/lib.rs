//! # rxlite: a small Reactive Extensions core for Rust
//!
//! Push-based streams: values flow from an [`Observable`] to an [`Observer`]
//! through composable operators, with hot multicast [subjects], explicit
//! [schedulers] for moving work across threads, and a [blocking bridge] for
//! synchronous extraction.
//!
//! ## Quick Start
//!
//! ```rust
//! use rxlite::prelude::*;
//!
//! let numbers: Observable<i32> = observable::from_iter(0..10);
//! numbers
//!   .filter(|v| v % 2 == 0)
//!   .map(|v| v * 2)
//!   .subscribe(|v| println!("Value: {}", v));
//! ```
//!
//! ## Key Concepts
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Observable`] | A cold description of how to produce events |
//! | [`Observer`] | Consumes `next`, `error`, and `complete` events |
//! | [`Subscription`] | Handle to cancel an active subscription |
//! | [`PublishSubject`] / [`BehaviorSubject`] / [`ReplaySubject`] | Hot multicast sources with different replay policies |
//! | [`Scheduler`] | Picks the thread subscription and delivery run on |
//!
//! [`Observable`]: observable::Observable
//! [`Observer`]: observer::Observer
//! [`Subscription`]: subscription::Subscription
//! [`PublishSubject`]: subject::PublishSubject
//! [`BehaviorSubject`]: subject::BehaviorSubject
//! [`ReplaySubject`]: subject::ReplaySubject
//! [`Scheduler`]: scheduler::Scheduler
//! [subjects]: subject
//! [schedulers]: scheduler
//! [blocking bridge]: blocking::BlockingObservable

pub mod blocking;
pub mod error;
pub mod notification;
pub mod observable;
pub mod observer;
pub mod ops;
pub mod prelude;
pub mod scheduler;
pub mod subject;
pub mod subscriber;
pub mod subscription;

pub use prelude::*;
