#![deny(missing_docs)]

//! A fixed-size worker thread pool.
//!
//! Work is submitted as closures from any thread, queued in FIFO order and
//! run by a fixed set of background workers. Each submission returns a
//! [`TaskHandle`] that blocks on demand and yields the closure's value or
//! the panic it raised.
//!
//! ```no_run
//! use workpool::{SharedQueueThreadPool, ThreadPool};
//!
//! let pool = SharedQueueThreadPool::new(2)?;
//! let sum = pool.submit(|| 2 + 3)?;
//! assert_eq!(sum.get()?, 5);
//! # Ok::<(), workpool::PoolError>(())
//! ```

mod error;
mod promise;
mod task;
/// Thread pool implementations.
pub mod thread_pool;

pub use error::{PoolError, Result};
pub use promise::TaskHandle;
pub use task::Task;
pub use thread_pool::{SharedQueueThreadPool, ThreadPool, ThreadPoolBuilder};
