use std::time::Duration;

use rand::Rng;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

use super::controller::SharedController;

/// Periods of the three market timers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickIntervals {
    pub price: Duration,
    pub transactions: Duration,
    pub blocks: Duration,
}

impl Default for TickIntervals {
    fn default() -> Self {
        Self {
            price: Duration::from_secs(5),
            transactions: Duration::from_secs(10),
            blocks: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum TickKind {
    Price,
    Transaction,
    Block,
}

/// Drives the controller's tick handlers from tokio intervals.
///
/// The price timer fires immediately on `start`; the other two wait one period.
/// Each tick holds the controller lock for its whole handler.
#[derive(Debug)]
pub struct Scheduler<R> {
    controller: SharedController<R>,
    intervals: TickIntervals,
    handles: Vec<JoinHandle<()>>,
}

impl<R> Scheduler<R>
where
    R: Rng + Send + 'static,
{
    pub fn new(controller: SharedController<R>, intervals: TickIntervals) -> Self {
        Self {
            controller,
            intervals,
            handles: Vec::new(),
        }
    }

    /// Spawn the timers. Calling `start` on a running scheduler does nothing.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }
        let now = Instant::now();
        self.handles = vec![
            self.spawn(TickKind::Price, now, self.intervals.price),
            self.spawn(
                TickKind::Transaction,
                now + self.intervals.transactions,
                self.intervals.transactions,
            ),
            self.spawn(
                TickKind::Block,
                now + self.intervals.blocks,
                self.intervals.blocks,
            ),
        ];
        tracing::info!(intervals = ?self.intervals, "market timers started");
    }

    /// Abort all timers. Ticks already holding the lock finish first.
    pub fn stop(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        for handle in self.handles.drain(..) {
            handle.abort();
        }
        tracing::info!("market timers stopped");
    }

    pub fn is_running(&self) -> bool {
        !self.handles.is_empty()
    }

    fn spawn(&self, kind: TickKind, start: Instant, period: Duration) -> JoinHandle<()> {
        let controller = self.controller.clone();
        tokio::spawn(async move {
            let mut interval = interval_at(start, period);
            loop {
                interval.tick().await;
                let mut controller = controller.lock().await;
                match kind {
                    TickKind::Price => {
                        controller.on_price_tick();
                    }
                    TickKind::Transaction => {
                        controller.on_transaction_tick();
                    }
                    TickKind::Block => {
                        controller.on_block_tick();
                    }
                }
            }
        })
    }
}

impl<R> Drop for Scheduler<R> {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}
