use std::io;
use thiserror::Error;

/// Error type for thread pool operations.
#[derive(Error, Debug)]
pub enum PoolError {
    /// IO error, e.g. the OS refused to spawn a worker thread.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The pool was asked to start with no worker threads.
    #[error("Thread pool requires at least one worker thread")]
    ZeroThreads,

    /// The task panicked while running. Carries the panic message.
    #[error("Task panicked: {0}")]
    TaskPanicked(String),

    /// The task was dropped without producing a result, or its result
    /// was already taken.
    #[error("Promise broken: no result available for this task")]
    BrokenPromise,

    /// The pool no longer accepts tasks.
    #[error("Thread pool has been stopped")]
    PoolStopped,

    /// No result arrived within the requested time.
    #[error("Timed out waiting for task result")]
    Timeout,

    /// Error with a string message.
    #[error("{0}")]
    StringError(String),
}

/// Result type alias for thread pool operations.
pub type Result<T> = std::result::Result<T, PoolError>;
