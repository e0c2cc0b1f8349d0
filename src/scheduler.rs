//! Redraw scheduling.
//!
//! Each frame asks for the next one after a delay. [`RedrawTimer`] owns the
//! pending request and can be cancelled, so tearing down the UI stops the
//! loop immediately instead of leaving a stray wake-up behind.

use std::time::Duration;

use log::{debug, trace};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Message delivered when a scheduled redraw is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redraw;

/// A cancellable, re-armable one-shot redraw timer.
///
/// At most one request is outstanding: scheduling again replaces the
/// pending one. Delivery is "no earlier than" the requested delay.
pub struct RedrawTimer {
    tx: UnboundedSender<Redraw>,
    pending: Option<JoinHandle<()>>,
    cancelled: bool,
}

impl RedrawTimer {
    /// Creates a timer together with the receiver its redraws arrive on.
    pub fn channel() -> (Self, UnboundedReceiver<Redraw>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let timer = Self {
            tx,
            pending: None,
            cancelled: false,
        };
        (timer, rx)
    }

    /// Arms the timer to deliver one [`Redraw`] after `delay`.
    ///
    /// Must be called from within a tokio runtime. Does nothing once the
    /// timer has been cancelled.
    pub fn schedule(&mut self, delay: Duration) {
        if self.cancelled {
            trace!("Ignoring redraw request on a cancelled timer");
            return;
        }

        if let Some(previous) = self.pending.take() {
            previous.abort();
        }

        let tx = self.tx.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Redraw).is_err() {
                debug!("Redraw receiver dropped, stopping");
            }
        }));
    }

    /// Stops the loop: drops any pending request and refuses new ones.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
        if !self.cancelled {
            debug!("Redraw timer cancelled");
        }
        self.cancelled = true;
    }

    #[cfg(test)]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// True while a request is armed and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for RedrawTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{timeout, Instant};

    const DELAY: Duration = Duration::from_millis(500);

    #[tokio::test(start_paused = true)]
    async fn test_delivers_after_delay() {
        let (mut timer, mut rx) = RedrawTimer::channel();
        let start = Instant::now();

        timer.schedule(DELAY);
        assert!(timer.is_pending());

        assert_eq!(rx.recv().await, Some(Redraw));
        assert!(start.elapsed() >= DELAY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_not_before_delay() {
        let (mut timer, mut rx) = RedrawTimer::channel();

        timer.schedule(DELAY);
        let early = timeout(Duration::from_millis(499), rx.recv()).await;
        assert!(early.is_err());

        assert_eq!(rx.recv().await, Some(Redraw));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rescheduling_replaces_pending_request() {
        let (mut timer, mut rx) = RedrawTimer::channel();

        timer.schedule(DELAY);
        timer.schedule(DELAY);

        assert_eq!(rx.recv().await, Some(Redraw));
        let second = timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(second.is_err(), "only one redraw should be delivered");
    }

    #[tokio::test(start_paused = true)]
    async fn test_loop_keeps_going_while_rescheduled() {
        let (mut timer, mut rx) = RedrawTimer::channel();
        let start = Instant::now();

        timer.schedule(DELAY);
        for _ in 0..3 {
            assert_eq!(rx.recv().await, Some(Redraw));
            timer.schedule(DELAY);
        }
        assert_eq!(rx.recv().await, Some(Redraw));
        assert!(start.elapsed() >= DELAY * 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_request() {
        let (mut timer, mut rx) = RedrawTimer::channel();

        timer.schedule(DELAY);
        timer.cancel();

        assert!(timer.is_cancelled());
        assert!(!timer.is_pending());
        let delivered = timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(delivered.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_after_cancel_is_ignored() {
        let (mut timer, mut rx) = RedrawTimer::channel();

        timer.cancel();
        timer.schedule(DELAY);

        assert!(!timer.is_pending());
        let delivered = timeout(Duration::from_secs(5), rx.recv()).await;
        assert!(delivered.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_closes_the_loop() {
        let (mut timer, mut rx) = RedrawTimer::channel();

        timer.schedule(DELAY);
        drop(timer);

        // Sender gone and the pending task aborted: the channel closes.
        assert_eq!(rx.recv().await, None);
    }
}
