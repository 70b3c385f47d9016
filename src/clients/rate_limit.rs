//! Request quota governance for the ShipStation API.
//!
//! ShipStation caps requests per rolling time window and reports the
//! remaining quota on every response. The [`RateGovernor`] tracks those
//! observations and suspends the caller when the quota is exhausted,
//! instead of letting the request go out and fail.
//!
//! Enforcement is reactive and approximate: quota numbers arrive only via
//! response headers, so the governor prevents *sustained* overrun rather
//! than every single overage.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time::{sleep, Instant};

use crate::clients::http_response::RateLimit;

/// Tracked quota state: what the server last told us, and when.
#[derive(Debug)]
struct QuotaState {
    /// Requests believed to remain in the current window.
    remaining: u32,
    /// Length of the window, as last reported by the server.
    reset_window: Duration,
    /// When the last request completed, if any has.
    last_request: Option<Instant>,
}

impl QuotaState {
    /// Computes how long the caller must wait before the next request.
    ///
    /// Returns `None` when the request may proceed immediately: quota
    /// available, no request observed yet, or the window already elapsed.
    fn wait_needed(&self) -> Option<Duration> {
        if self.remaining > 0 {
            return None;
        }

        // Exhausted but nothing recorded yet: no basis to compute a wait.
        let last_request = self.last_request?;

        let elapsed = last_request.elapsed();
        if elapsed > self.reset_window {
            None
        } else {
            Some(self.reset_window - elapsed)
        }
    }
}

/// Enforces the ShipStation per-minute request quota.
///
/// Call [`acquire`](Self::acquire) before every outbound request and feed
/// every structured response's rate-limit headers back through
/// [`observe`](Self::observe). `acquire` never fails; it either returns
/// immediately or sleeps until the quota window has reset. The wait is
/// bounded and, like any `tokio::time::sleep`, cancelled by dropping the
/// future.
///
/// The governor is optimistic: it does not decrement a local counter on
/// `acquire`, because the true remaining quota is only known once the
/// server answers.
#[derive(Debug)]
pub struct RateGovernor {
    state: Mutex<QuotaState>,
}

impl RateGovernor {
    /// Creates a governor starting from the given request ceiling, with no
    /// reset window and no last-request timestamp.
    #[must_use]
    pub fn new(ceiling: u32) -> Self {
        Self {
            state: Mutex::new(QuotaState {
                remaining: ceiling,
                reset_window: Duration::ZERO,
                last_request: None,
            }),
        }
    }

    /// Blocks the caller until a request may be issued.
    ///
    /// Returns immediately while quota remains. When the quota is
    /// exhausted, sleeps for the remainder of the reset window measured
    /// from the last completed request, then returns without re-checking.
    pub async fn acquire(&self) {
        let wait = self.lock().wait_needed();

        if let Some(wait) = wait {
            tracing::debug!(
                wait_secs = wait.as_secs_f64(),
                "request quota exhausted, waiting for the window to reset"
            );
            sleep(wait).await;
        }
    }

    /// Records a completed request.
    ///
    /// Updates the remaining quota and reset window when the response
    /// carried rate-limit headers, and always stamps the request time.
    pub fn observe(&self, rate_limit: Option<RateLimit>) {
        let mut state = self.lock();

        if let Some(limit) = rate_limit {
            state.remaining = limit.remaining;
            state.reset_window = Duration::from_secs(limit.reset_seconds);
        }
        state.last_request = Some(Instant::now());
    }

    /// Returns the number of requests believed to remain in the window.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.lock().remaining
    }

    /// Returns `true` once at least one request has been observed.
    #[must_use]
    pub fn has_observed_request(&self) -> bool {
        self.lock().last_request.is_some()
    }

    fn lock(&self) -> MutexGuard<'_, QuotaState> {
        // A panic while holding the lock leaves the state intact; recover it.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
