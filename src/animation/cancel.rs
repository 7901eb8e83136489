//! Cooperative cancellation for animation runs.
//!
//! Each call to [`AnimationController::start`](super::controller::AnimationController::start)
//! after a stop hands out a fresh [`CancellationToken`]. A procedure keeps its
//! token for its whole lifetime, so a stale procedure whose run was stopped
//! keeps observing `is_cancelled() == true` even after a newer run started.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable view of a run's cancellation state.
#[derive(Debug, Clone)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

/// The control handle that triggers cancellation.
///
/// Dropping the source does not cancel its tokens; call [`cancel`](Self::cancel).
#[derive(Debug)]
pub struct CancellationSource {
    inner: Arc<AtomicBool>,
}

impl CancellationSource {
    pub fn new() -> Self {
        CancellationSource {
            inner: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A token observing this source.
    pub fn token(&self) -> CancellationToken {
        CancellationToken {
            inner: Arc::clone(&self.inner),
        }
    }

    /// Signal cancellation to every token derived from this source.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }
}

impl Default for CancellationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl CancellationToken {
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }
}
