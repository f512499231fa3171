use std::mem;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use log::{debug, error, info};

use super::queue::TaskQueue;
use super::{ThreadPool, ThreadPoolBuilder};
use crate::task::Task;
use crate::{PoolError, Result};

/// A fixed-size thread pool using a shared job queue.
///
/// Workers pull tasks from a single FIFO queue guarded by a mutex, so tasks
/// start in submission order. After [`stop`](Self::stop) the pool rejects
/// new tasks, but workers drain everything already queued before exiting.
/// Dropping the pool stops it and blocks until every worker has exited.
pub struct SharedQueueThreadPool {
    queue: Arc<TaskQueue>,
    workers: Vec<JoinHandle<()>>,
}

impl SharedQueueThreadPool {
    /// Returns a builder for a customized pool.
    pub fn builder() -> ThreadPoolBuilder {
        ThreadPoolBuilder::new()
    }

    pub(super) fn start(threads: u32, name: &str) -> Result<Self> {
        if threads == 0 {
            return Err(PoolError::ZeroThreads);
        }

        let queue = Arc::new(TaskQueue::new());
        let mut pool = SharedQueueThreadPool {
            queue,
            workers: Vec::with_capacity(threads as usize),
        };
        // On failure `pool` is dropped, which stops and joins the workers
        // started so far.
        for id in 0..threads {
            let worker = spawn_worker(format!("{name}-{id}"), Arc::clone(&pool.queue))?;
            pool.workers.push(worker);
        }
        debug!("Started thread pool with {} workers", threads);

        Ok(pool)
    }

    /// Stops accepting new tasks and wakes every worker.
    ///
    /// Tasks already queued still run. Does not wait for the workers;
    /// calling it again has no effect.
    pub fn stop(&self) {
        if self.queue.close() {
            info!("Thread pool stopping, {} tasks left to drain", self.queue.len());
        }
    }

    /// Returns `true` once [`stop`](Self::stop) has been called.
    pub fn is_stopped(&self) -> bool {
        !self.queue.is_active()
    }

    /// Number of worker threads.
    pub fn size(&self) -> usize {
        self.workers.len()
    }

    /// Number of tasks waiting for a worker.
    pub fn queued(&self) -> usize {
        self.queue.len()
    }

    /// Stops the pool and waits until all queued tasks have run and every
    /// worker has exited.
    pub fn join(self) {
        drop(self);
    }
}

impl ThreadPool for SharedQueueThreadPool {
    fn new(threads: u32) -> Result<Self> {
        ThreadPoolBuilder::new().num_threads(threads).build()
    }

    fn execute(&self, task: Task) -> Result<()> {
        self.queue.push(task)
    }
}

impl Drop for SharedQueueThreadPool {
    fn drop(&mut self) {
        self.stop();
        let current = thread::current().id();
        for worker in self.workers.drain(..) {
            let name = worker.thread().name().unwrap_or("<unnamed>").to_owned();
            // The last handle was dropped by a task on this worker; it exits
            // on its own once the queue is drained.
            if worker.thread().id() == current {
                debug!("Worker {name} dropped its own pool, not joining");
                continue;
            }
            if worker.join().is_err() {
                error!("Worker {name} terminated abnormally");
            }
        }
        debug!("Thread pool shut down");
    }
}

/// Spawns a single named worker thread running the worker loop.
fn spawn_worker(name: String, queue: Arc<TaskQueue>) -> Result<JoinHandle<()>> {
    let handle = thread::Builder::new()
        .name(name)
        .spawn(move || run_worker(&queue))?;
    Ok(handle)
}

/// Runs queued tasks until the queue is closed and empty.
///
/// Tasks run outside the queue lock. Panics that escape a task (e.g. from
/// dropping its outcome or panic payload) are caught here, so one failing
/// task never stops the worker.
fn run_worker(queue: &TaskQueue) {
    let name = thread::current().name().unwrap_or("<unnamed>").to_owned();
    debug!("Worker {name} started");
    while let Some(task) = queue.pop_blocking() {
        debug!("Worker {name} executing task");
        if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| task.invoke())) {
            error!("Worker {name}: panic escaped task, continuing");
            // Dropping the payload may panic again.
            mem::forget(payload);
        }
    }
    debug!("Worker {name}: queue closed and drained, shutting down");
}
