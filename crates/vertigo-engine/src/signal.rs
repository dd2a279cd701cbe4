//! Interrupt handling.
//!
//! The OS handler never touches the window or the GPU. It raises a flag and
//! wakes the event loop; the runtime then tears down on the main thread like
//! any other close.

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};

type Waker = Box<dyn Fn() + Send>;

/// Shared "shutdown requested" flag.
///
/// An optional waker runs on every request so a sleeping event loop notices
/// the flag without waiting for its next window event.
#[derive(Clone, Default)]
pub struct ShutdownFlag {
    requested: Arc<AtomicBool>,
    waker: Arc<Mutex<Option<Waker>>>,
}

impl ShutdownFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn request(&self) {
        self.requested.store(true, Ordering::SeqCst);
        if let Ok(waker) = self.waker.lock() {
            if let Some(wake) = waker.as_ref() {
                wake();
            }
        }
    }

    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::SeqCst)
    }

    /// Installs the callback run on each request, replacing any previous one.
    ///
    /// Runs it right away if a request already happened.
    pub fn set_waker(&self, wake: impl Fn() + Send + 'static) {
        if let Ok(mut waker) = self.waker.lock() {
            if self.is_requested() {
                wake();
            }
            *waker = Some(Box::new(wake));
        }
    }
}

impl fmt::Debug for ShutdownFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShutdownFlag")
            .field("requested", &self.is_requested())
            .finish_non_exhaustive()
    }
}

/// Routes SIGINT / Ctrl-C into `flag`.
///
/// Only one handler can be installed per process.
pub fn install_interrupt_handler(flag: &ShutdownFlag) -> Result<()> {
    let flag = flag.clone();
    ctrlc::set_handler(move || flag.request()).context("failed to install interrupt handler")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;

    fn counting_waker(flag: &ShutdownFlag) -> Arc<AtomicUsize> {
        let wakes = Arc::new(AtomicUsize::new(0));
        let counter = wakes.clone();
        flag.set_waker(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        wakes
    }

    #[test]
    fn clones_share_state() {
        let flag = ShutdownFlag::new();
        let handler_side = flag.clone();
        assert!(!flag.is_requested());
        handler_side.request();
        assert!(flag.is_requested());
    }

    #[test]
    fn request_is_visible_across_threads() {
        let flag = ShutdownFlag::new();
        let remote = flag.clone();
        std::thread::spawn(move || remote.request()).join().unwrap();
        assert!(flag.is_requested());
    }

    // ── waking ────────────────────────────────────────────────────────────

    #[test]
    fn request_from_another_thread_wakes_the_loop() {
        let flag = ShutdownFlag::new();
        let wakes = counting_waker(&flag);
        assert_eq!(wakes.load(Ordering::SeqCst), 0);

        let remote = flag.clone();
        std::thread::spawn(move || remote.request()).join().unwrap();
        assert_eq!(wakes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn late_waker_fires_for_an_earlier_request() {
        let flag = ShutdownFlag::new();
        flag.request();
        let wakes = counting_waker(&flag);
        assert_eq!(wakes.load(Ordering::SeqCst), 1);
    }
}
