//! Cancellation and deadline signals for outbound calls.
//!
//! A [`CallContext`] travels with every request to the metadata provider.
//! Adapters consult it before touching the network and race the in-flight
//! call against it, so a caller that has gone away never leaves an upstream
//! request running to completion.

use std::future::Future;
use std::time::Duration;

use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

/// Why a call stopped before it produced a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Interrupted {
    /// The cancellation token fired.
    #[error("call cancelled")]
    Cancelled,
    /// The deadline elapsed.
    #[error("call deadline exceeded")]
    DeadlineExceeded,
}

/// Per-request cancellation token plus an optional deadline.
///
/// Cloning shares the token: cancelling one clone cancels them all.
///
/// # Examples
/// ```
/// use std::time::Duration;
///
/// use media_gateway::domain::{CallContext, Interrupted};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let ctx = CallContext::with_timeout(Duration::from_secs(5));
/// assert_eq!(ctx.run(async { 7 }).await, Ok(7));
///
/// ctx.cancel();
/// assert_eq!(ctx.run(async { 7 }).await, Err(Interrupted::Cancelled));
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallContext {
    token: CancellationToken,
    deadline: Option<Instant>,
}

impl CallContext {
    /// Context with neither a deadline nor a cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Context that expires `timeout` from now.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    /// Context that expires at `deadline`.
    #[must_use]
    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            token: CancellationToken::new(),
            deadline: Some(deadline),
        }
    }

    /// Signal cancellation to every clone of this context.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Deadline attached to this context, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Report why the context is already finished, if it is.
    #[must_use]
    pub fn interruption(&self) -> Option<Interrupted> {
        if self.token.is_cancelled() {
            return Some(Interrupted::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(Interrupted::DeadlineExceeded),
            _ => None,
        }
    }

    /// Drive `fut` until it completes or the context finishes.
    ///
    /// When the context is already finished `fut` is never polled. When it
    /// finishes mid-flight `fut` is dropped, aborting whatever I/O it owned.
    pub async fn run<F>(&self, fut: F) -> Result<F::Output, Interrupted>
    where
        F: Future,
    {
        if let Some(reason) = self.interruption() {
            return Err(reason);
        }

        let expiry = async {
            match self.deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = self.token.cancelled() => Err(Interrupted::Cancelled),
            () = expiry => Err(Interrupted::DeadlineExceeded),
            output = fut => Ok(output),
        }
    }
}
