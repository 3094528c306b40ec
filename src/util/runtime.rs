//! Tokio runtime helpers for opening the store from synchronous code.

use std::future::Future;
use std::io;

use tokio::runtime::{Handle, Runtime, RuntimeFlavor};

/// Drive an async future to completion from a synchronous context.
///
/// - Inside a multi-thread runtime the current worker is handed over with
///   `block_in_place` and the future runs on the existing handle.
/// - Inside a current-thread runtime, blocking the only worker would
///   deadlock, so the future runs on a scoped helper thread with its own
///   runtime.
/// - Without a runtime a temporary one is created.
///
/// Fails only if a temporary runtime cannot be built.
pub fn run_async<F, T>(future: F) -> io::Result<T>
where
    F: Future<Output = T> + Send,
    T: Send,
{
    match Handle::try_current() {
        Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
            Ok(tokio::task::block_in_place(|| handle.block_on(future)))
        }
        Ok(_) => std::thread::scope(|scope| {
            scope
                .spawn(|| Runtime::new().map(|rt| rt.block_on(future)))
                .join()
                .unwrap_or_else(|_| {
                    Err(io::Error::new(io::ErrorKind::Other, "runtime helper thread panicked"))
                })
        }),
        Err(_) => Runtime::new().map(|rt| rt.block_on(future)),
    }
}

#[cfg(test)]
#[path = "runtime_test.rs"]
mod tests;
