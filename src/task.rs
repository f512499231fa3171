use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use log::error;

use crate::promise::{self, TaskHandle};
use crate::PoolError;

type Job = Box<dyn FnOnce() + Send + 'static>;

/// A unit of deferred work, invoked at most once.
///
/// The closure carries its own arguments by capture. Panics raised by the
/// closure are caught inside [`Task::invoke`] and never reach the thread
/// that runs it.
pub struct Task {
    job: Job,
}

impl Task {
    /// Wraps `f` and returns the task together with the handle that will
    /// receive its outcome.
    pub fn new<F, T>(f: F) -> (Task, TaskHandle<T>)
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let (promise, handle) = promise::pair();
        let job = move || match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(value) => promise.fulfill(value),
            Err(payload) => {
                promise.fulfill_failure(PoolError::TaskPanicked(panic_message(&*payload)))
            }
        };
        (Task { job: Box::new(job) }, handle)
    }

    /// Wraps a fire-and-forget closure. A panic is logged and dropped.
    pub fn detached<F>(f: F) -> Task
    where
        F: FnOnce() + Send + 'static,
    {
        let job = move || {
            if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(f)) {
                error!("Detached task panicked: {}", panic_message(&*payload));
            }
        };
        Task { job: Box::new(job) }
    }

    /// Runs the task, writing its outcome into the paired handle.
    pub fn invoke(self) {
        (self.job)()
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task").finish_non_exhaustive()
    }
}

/// Extracts a readable message from a panic payload.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_owned()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic payload".to_owned()
    }
}
