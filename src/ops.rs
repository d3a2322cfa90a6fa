//! Operators: composable transformations over an [`Observable`].
//!
//! Every operator is a function from one Observable to another: it captures
//! its upstream, and on each downstream subscription subscribes an adapter
//! observer upstream under the same [`Subscription`] handle, so disposal
//! propagates through the whole chain.
//!
//! [`Observable`]: crate::observable::Observable
//! [`Subscription`]: crate::subscription::Subscription

pub mod all;
pub mod filter;
pub mod last;
pub mod map;
pub mod materialize;
pub mod merge_map;
pub mod observe_on;
pub mod on_error_resume_next;
pub mod scan;
pub mod subscribe_on;
pub mod take_last;
pub mod tap;
