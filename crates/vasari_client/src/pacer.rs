//! Request pacing against upstream rate constraints.

use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use std::num::NonZeroU32;
use std::sync::Arc;
use tracing::trace;

type DirectRateLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// GCRA pacer awaited before every upstream generation call.
///
/// One pacer is shared (cheaply, via `Arc`) between the orchestrator and
/// the batch runner, so batch items and single requests draw from the
/// same budget. This replaces fixed inter-request sleeps: a quiet process
/// proceeds immediately, a busy one smooths out to the configured rate.
#[derive(Clone)]
pub struct RequestPacer {
    limiter: Arc<DirectRateLimiter>,
}

impl RequestPacer {
    /// Pacer allowing `per_minute` upstream calls per minute.
    pub fn per_minute(per_minute: NonZeroU32) -> Self {
        let quota = Quota::per_minute(per_minute);
        Self {
            limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Wait until the next call fits within the configured rate.
    pub async fn until_ready(&self) {
        trace!("Waiting for request pacer");
        self.limiter.until_ready().await;
    }
}

impl std::fmt::Debug for RequestPacer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestPacer").finish_non_exhaustive()
    }
}
