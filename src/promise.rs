use std::time::Duration;

use crossbeam::channel::{self, Receiver, RecvTimeoutError, Sender};
use log::debug;

use crate::{PoolError, Result};

/// Creates a linked promise/handle pair.
///
/// The promise writes at most one outcome; the handle reads it. Both sides
/// share a one-slot channel, so fulfilling never blocks.
pub(crate) fn pair<T>() -> (Promise<T>, TaskHandle<T>) {
    let (tx, rx) = channel::bounded(1);
    (Promise { tx }, TaskHandle { rx })
}

/// Producer side of a task result. Owned by the task envelope.
///
/// Both fulfilling methods consume the promise, so an outcome can be
/// written only once. Dropping it unfulfilled breaks the handle.
pub(crate) struct Promise<T> {
    tx: Sender<Result<T>>,
}

impl<T> Promise<T> {
    /// Stores the value produced by the task.
    pub(crate) fn fulfill(self, value: T) {
        self.complete(Ok(value));
    }

    /// Stores the failure raised by the task.
    pub(crate) fn fulfill_failure(self, err: PoolError) {
        self.complete(Err(err));
    }

    fn complete(self, outcome: Result<T>) {
        if self.tx.send(outcome).is_err() {
            debug!("Task result discarded: handle was dropped");
        }
    }
}

/// Consumer side of a task result, returned to the submitter.
///
/// Reading blocks until the task has run. A task that panicked yields
/// [`PoolError::TaskPanicked`]; a task that was dropped without running
/// yields [`PoolError::BrokenPromise`].
#[must_use = "dropping a TaskHandle discards the task's result"]
pub struct TaskHandle<T> {
    rx: Receiver<Result<T>>,
}

impl<T> TaskHandle<T> {
    /// Blocks until the task finishes and returns its outcome.
    ///
    /// # Errors
    ///
    /// Returns the task's failure, or `BrokenPromise` if no outcome will
    /// ever arrive (the task was dropped, or the outcome was already read).
    pub fn get(self) -> Result<T> {
        match self.rx.recv() {
            Ok(outcome) => outcome,
            Err(_) => Err(PoolError::BrokenPromise),
        }
    }

    /// Waits at most `timeout` for the outcome.
    ///
    /// On `Timeout` the handle stays usable: the task still runs and a
    /// later call picks up its outcome.
    ///
    /// # Errors
    ///
    /// Same as [`TaskHandle::get`], plus `Timeout` if nothing arrived in time.
    pub fn get_timeout(&self, timeout: Duration) -> Result<T> {
        match self.rx.recv_timeout(timeout) {
            Ok(outcome) => outcome,
            Err(RecvTimeoutError::Timeout) => Err(PoolError::Timeout),
            Err(RecvTimeoutError::Disconnected) => Err(PoolError::BrokenPromise),
        }
    }

    /// Returns `true` if an outcome is waiting to be read.
    pub fn is_ready(&self) -> bool {
        !self.rx.is_empty()
    }
}
