use crate::task::Task;
use crate::{Result, TaskHandle};

/// A thread pool for executing jobs concurrently.
///
/// Implementors manage a pool of worker threads and distribute
/// incoming tasks across them. Only [`ThreadPool::execute`] is required;
/// `spawn` and `submit` are built on it.
pub trait ThreadPool {
    /// Creates a new thread pool with the given number of threads.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be created (e.g., zero threads).
    fn new(threads: u32) -> Result<Self>
    where
        Self: Sized;

    /// Queues an already built task.
    ///
    /// # Errors
    ///
    /// Returns `PoolStopped` if the pool no longer accepts work. The task
    /// is dropped in that case, breaking its handle.
    fn execute(&self, task: Task) -> Result<()>;

    /// Spawns a function into the thread pool, discarding its result.
    ///
    /// The function will be executed by one of the threads in the pool.
    fn spawn<F>(&self, job: F) -> Result<()>
    where
        F: FnOnce() + Send + 'static,
    {
        self.execute(Task::detached(job))
    }

    /// Submits a function and returns a handle to its eventual result.
    ///
    /// Does not wait for the function to run.
    fn submit<F, T>(&self, f: F) -> Result<TaskHandle<T>>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (task, handle) = Task::new(f);
        self.execute(task)?;
        Ok(handle)
    }
}

mod builder;
mod queue;
mod shared_queue;

pub use self::builder::ThreadPoolBuilder;
pub use self::shared_queue::SharedQueueThreadPool;
