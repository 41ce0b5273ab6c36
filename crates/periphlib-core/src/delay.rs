//! Pluggable settle-interval hook.
//!
//! The AT command engine relies on fixed settle delays rather than
//! event-driven acknowledgment: there is no end-of-message marker on the
//! wire, so "wait until the peer has finished writing" is approximated by a
//! fixed sleep. The [`Delay`] trait isolates that heuristic so an
//! implementation can later substitute a deadline-based read-until-idle
//! strategy without changing any driver call contracts. Tests substitute a
//! no-op delay and run instantly.

use async_trait::async_trait;
use std::time::Duration;

/// A suspension point between writing a command and draining the reply.
#[async_trait]
pub trait Delay: Send {
    /// Suspend the calling task for `duration`.
    async fn delay(&self, duration: Duration);
}

/// The default [`Delay`] backed by `tokio::time::sleep`.
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn delay(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn tokio_delay_sleeps_for_requested_duration() {
        let start = tokio::time::Instant::now();
        TokioDelay.delay(Duration::from_secs(3)).await;
        assert_eq!(start.elapsed(), Duration::from_secs(3));
    }
}
