use super::SharedQueueThreadPool;
use crate::Result;

/// Default prefix for worker thread names.
const DEFAULT_THREAD_NAME: &str = "pool-worker";

/// Configuration for a [`SharedQueueThreadPool`].
///
/// ```no_run
/// use workpool::ThreadPoolBuilder;
///
/// let pool = ThreadPoolBuilder::new()
///     .num_threads(4)
///     .thread_name("prime-worker")
///     .build()?;
/// # Ok::<(), workpool::PoolError>(())
/// ```
#[derive(Debug, Default, Clone)]
pub struct ThreadPoolBuilder {
    num_threads: Option<u32>,
    thread_name: Option<String>,
}

impl ThreadPoolBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of worker threads. Defaults to the number of CPUs.
    pub fn num_threads(mut self, threads: u32) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Sets the name prefix of worker threads. Workers are named
    /// `{prefix}-{index}`.
    pub fn thread_name(mut self, name: impl Into<String>) -> Self {
        self.thread_name = Some(name.into());
        self
    }

    /// Starts the pool.
    ///
    /// # Errors
    ///
    /// Returns `ZeroThreads` for a thread count of zero, or `Io` if a
    /// worker thread could not be spawned.
    pub fn build(self) -> Result<SharedQueueThreadPool> {
        let threads = self
            .num_threads
            .unwrap_or_else(|| u32::try_from(num_cpus::get()).unwrap_or(u32::MAX));
        let name = self
            .thread_name
            .unwrap_or_else(|| DEFAULT_THREAD_NAME.to_owned());
        SharedQueueThreadPool::start(threads, &name)
    }
}
