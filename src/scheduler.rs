//! Execution-context control.
//!
//! A [`Scheduler`] decides on which thread a unit of work runs. The engine
//! ships two modes: [`InlineScheduler`] runs work synchronously on the
//! calling thread (the default behavior of every subscription that never
//! mentions a scheduler), and [`ThreadPoolScheduler`] hands work to a shared
//! computation pool. Schedulers are explicitly constructed values with a
//! lifecycle owned by the caller; there is no process-wide default pool.

use std::io;

use futures::executor::ThreadPool;
use tracing::trace;

/// A unit of work accepted by a scheduler.
pub type Task = Box<dyn FnOnce() + Send>;

/// An execution context for subscription and delivery work.
pub trait Scheduler {
  /// Runs the task, either synchronously or on another thread depending on
  /// the implementation.
  fn schedule(&self, task: Task);
}

/// Runs every task immediately on the calling thread.
///
/// Useful as a deterministic stand-in for a pool in tests: pipelines built
/// with it behave exactly like pipelines with no scheduler at all.
#[derive(Clone, Copy, Default)]
pub struct InlineScheduler;

impl Scheduler for InlineScheduler {
  #[inline]
  fn schedule(&self, task: Task) { task() }
}

/// Dispatches tasks onto a shared computation thread pool.
///
/// Construct one per process (or per test) and pass clones around; all
/// clones share the same worker threads. Workers shut down when the last
/// clone is dropped.
#[derive(Clone)]
pub struct ThreadPoolScheduler {
  pool: ThreadPool,
}

impl ThreadPoolScheduler {
  /// A pool with one worker per CPU.
  pub fn new() -> io::Result<Self> {
    Ok(Self { pool: ThreadPool::new()? })
  }

  /// A pool with exactly `size` workers.
  pub fn with_pool_size(size: usize) -> io::Result<Self> {
    Ok(Self { pool: ThreadPool::builder().pool_size(size).create()? })
  }
}

impl Scheduler for ThreadPoolScheduler {
  fn schedule(&self, task: Task) {
    trace!("dispatching task to computation pool");
    self.pool.spawn_ok(async move { task() });
  }
}

/// A raw `futures` thread pool is itself usable wherever a scheduler is
/// expected.
impl Scheduler for ThreadPool {
  fn schedule(&self, task: Task) { self.spawn_ok(async move { task() }) }
}
