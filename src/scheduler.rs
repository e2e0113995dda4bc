//! Deferred computer replies.
//!
//! The computer's move is decided the moment it is played; the delay only
//! paces the game. A timer task posts [`ComputerReady`] back to the UI loop
//! instead of blocking it.

use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, instrument};

/// The delay for a scheduled computer reply has elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComputerReady {
    /// Round the reply was scheduled in.
    pub round: u64,
}

/// Schedules computer replies after a fixed delay.
#[derive(Debug, Clone)]
pub struct ComputerScheduler {
    delay: Duration,
    tx: mpsc::UnboundedSender<ComputerReady>,
}

impl ComputerScheduler {
    /// Creates a scheduler and the receiver its notifications arrive on.
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<ComputerReady>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { delay, tx }, rx)
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Posts [`ComputerReady`] for `round` once the delay has elapsed.
    ///
    /// Must be called from within a tokio runtime.
    #[instrument(skip(self), fields(delay_ms = self.delay.as_millis() as u64))]
    pub fn schedule(&self, round: u64) -> JoinHandle<()> {
        let tx = self.tx.clone();
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(ComputerReady { round }).is_err() {
                debug!(round, "UI loop gone, dropping computer reply");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_notification_arrives_after_delay() {
        let (scheduler, mut rx) = ComputerScheduler::new(Duration::from_millis(20));
        let started = tokio::time::Instant::now();
        scheduler.schedule(3).await.unwrap();

        assert_eq!(rx.recv().await, Some(ComputerReady { round: 3 }));
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_nothing_before_delay() {
        let (scheduler, mut rx) = ComputerScheduler::new(Duration::from_millis(200));
        let _handle = scheduler.schedule(0);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_dropped_receiver_is_harmless() {
        let (scheduler, rx) = ComputerScheduler::new(Duration::ZERO);
        drop(rx);
        scheduler.schedule(1).await.unwrap();
    }
}
