use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Condvar, Mutex, MutexGuard};

use crate::task::Task;
use crate::{PoolError, Result};

/// FIFO queue of pending tasks shared by all workers of one pool.
///
/// The deque is only touched with `tasks` locked. The active flag is an
/// atomic so it can be read without the lock, but it is only cleared while
/// the lock is held; a worker evaluating its wait predicate therefore
/// cannot miss the wake-up from `close`.
pub(crate) struct TaskQueue {
    tasks: Mutex<VecDeque<Task>>,
    available: Condvar,
    active: AtomicBool,
}

impl TaskQueue {
    pub(crate) fn new() -> Self {
        TaskQueue {
            tasks: Mutex::new(VecDeque::new()),
            available: Condvar::new(),
            active: AtomicBool::new(true),
        }
    }

    /// Appends a task to the tail and wakes one waiting worker.
    pub(crate) fn push(&self, task: Task) -> Result<()> {
        let mut tasks = self.lock();
        if !self.is_active() {
            return Err(PoolError::PoolStopped);
        }
        tasks.push_back(task);
        drop(tasks);
        self.available.notify_one();
        Ok(())
    }

    /// Removes the head of the queue, parking while the queue is empty and
    /// the pool is still active.
    ///
    /// Returns `None` once the queue is empty and closed.
    pub(crate) fn pop_blocking(&self) -> Option<Task> {
        let tasks = self.lock();
        let mut tasks = self
            .available
            .wait_while(tasks, |tasks| tasks.is_empty() && self.is_active())
            .expect("task queue lock poisoned");
        tasks.pop_front()
    }

    /// Marks the queue inactive and wakes every worker.
    ///
    /// Returns `true` only for the call that performed the transition.
    pub(crate) fn close(&self) -> bool {
        let tasks = self.lock();
        let was_active = self.active.swap(false, Ordering::AcqRel);
        drop(tasks);
        self.available.notify_all();
        was_active
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    pub(crate) fn len(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<Task>> {
        self.tasks.lock().expect("task queue lock poisoned")
    }
}
