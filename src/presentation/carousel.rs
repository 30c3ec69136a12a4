//! Slide rotation for the home page highlights.
//!
//! [`Carousel`] is the plain index arithmetic. [`AutoAdvance`] owns a
//! carousel inside a single tokio task that steps it on a fixed period and
//! on manual next/previous commands, publishing the current index on a
//! watch channel. The task ends when the handle is stopped or dropped.

use std::time::Duration;

use anyhow::Result;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Period between automatic advances
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(5);

/// Index over a fixed number of slides, wrapping at both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    /// Start at the first slide
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Advance one slide, wrapping to the first
    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    /// Go back one slide, wrapping to the last
    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump to a slide; out-of-range indices are ignored
    pub fn go_to(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }
}

#[derive(Debug)]
enum Command {
    Next,
    Prev,
    GoTo(usize),
    Stop,
}

/// Handle to a running auto-advancing carousel.
///
/// Dropping the handle cancels the timer task.
pub struct AutoAdvance {
    commands: mpsc::Sender<Command>,
    index: watch::Receiver<usize>,
    task: Option<JoinHandle<()>>,
}

impl AutoAdvance {
    /// Spawn the rotation task. Must be called inside a tokio runtime.
    pub fn start(len: usize, period: Duration) -> Self {
        // tokio intervals reject a zero period
        let period = period.max(Duration::from_millis(1));
        let (command_tx, command_rx) = mpsc::channel(16);
        let (index_tx, index_rx) = watch::channel(0);

        let task = tokio::spawn(run_rotation(Carousel::new(len), period, command_rx, index_tx));
        tracing::debug!(slides = len, period_ms = period.as_millis() as u64, "Carousel started");

        Self {
            commands: command_tx,
            index: index_rx,
            task: Some(task),
        }
    }

    /// Index currently shown
    pub fn current(&self) -> usize {
        *self.index.borrow()
    }

    /// Receiver notified on every index change
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.clone()
    }

    /// Manually advance
    pub async fn next(&self) -> Result<()> {
        self.send(Command::Next).await
    }

    /// Manually go back
    pub async fn prev(&self) -> Result<()> {
        self.send(Command::Prev).await
    }

    /// Jump to a slide
    pub async fn go_to(&self, index: usize) -> Result<()> {
        self.send(Command::GoTo(index)).await
    }

    async fn send(&self, command: Command) -> Result<()> {
        self.commands
            .send(command)
            .await
            .map_err(|_| anyhow::anyhow!("Carousel task is no longer running"))
    }

    /// Stop the timer and wait for the task to finish
    pub async fn stop(mut self) -> Result<()> {
        let _ = self.commands.send(Command::Stop).await;
        if let Some(task) = self.task.take() {
            task.await?;
        }
        Ok(())
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

/// Rotation loop: one tick per period, commands in between
async fn run_rotation(
    mut carousel: Carousel,
    period: Duration,
    mut commands: mpsc::Receiver<Command>,
    index_tx: watch::Sender<usize>,
) {
    // First advance happens one full period after start
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                carousel.next();
            }
            command = commands.recv() => match command {
                Some(Command::Next) => {
                    carousel.next();
                }
                Some(Command::Prev) => {
                    carousel.prev();
                }
                Some(Command::GoTo(index)) => {
                    carousel.go_to(index);
                }
                Some(Command::Stop) | None => {
                    tracing::debug!("Carousel stopping");
                    break;
                }
            }
        }

        index_tx.send_replace(carousel.index());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_wraps() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.next(), 1);
        assert_eq!(carousel.next(), 2);
        assert_eq!(carousel.next(), 0);
    }

    #[test]
    fn test_prev_wraps() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.prev(), 1);
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.go_to(2), 2);
        assert_eq!(carousel.go_to(9), 2);
    }

    #[test]
    fn test_empty_carousel_stays_put() {
        let mut carousel = Carousel::new(0);
        assert!(carousel.is_empty());
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
    }
}
