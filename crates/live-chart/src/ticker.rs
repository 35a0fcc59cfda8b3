// File: crates/live-chart/src/ticker.rs
// Summary: Fixed-cadence tick scheduling and the redraw loop built on it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::LiveChartConfig;
use crate::error::RedrawError;
use crate::redraw::redraw;
use crate::state::ChartState;

/// Hands out 0, 1, 2, ... one value per timer firing.
#[derive(Debug, Default)]
pub struct TickCounter {
    next: u64,
}

impl TickCounter {
    pub fn new() -> Self { Self::default() }

    pub fn next(&mut self) -> u64 {
        let tick = self.next;
        self.next += 1;
        tick
    }
}

/// Call `on_tick` with consecutive tick numbers every `every`, starting
/// immediately. Runs until the surrounding task is dropped or aborted.
///
/// Firings missed because the runtime was busy are skipped rather than
/// bunched up; the counter still advances by exactly one per firing.
pub async fn run_ticks<F>(every: Duration, mut on_tick: F)
where
    F: FnMut(u64),
{
    let mut ticker = interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut ticks = TickCounter::new();

    loop {
        ticker.tick().await;
        on_tick(ticks.next());
    }
}

/// [`run_ticks`] with at most `slots` jobs running at once.
///
/// `start` gets the tick number and a slot, and must hold the slot until its
/// job is done. A tick that finds every slot taken is skipped; its number is
/// not reused.
pub async fn run_slotted_ticks<F>(every: Duration, slots: usize, mut start: F)
where
    F: FnMut(u64, OwnedSemaphorePermit),
{
    let slots = Arc::new(Semaphore::new(slots.max(1)));
    run_ticks(every, move |tick| match Arc::clone(&slots).try_acquire_owned() {
        Ok(slot) => start(tick, slot),
        Err(_) => debug!(tick, "all slots busy, tick skipped"),
    })
    .await;
}

/// Redraw for `tick` on the blocking pool and publish the outcome.
///
/// Resolves to whether the outcome was published (false when a later tick
/// already finished first).
pub fn spawn_redraw(cfg: Arc<LiveChartConfig>, state: ChartState, tick: u64) -> JoinHandle<bool> {
    spawn_redraw_in_slot(cfg, state, tick, None)
}

/// The slot is released when the blocking job ends, even if the awaiting
/// task was aborted first.
fn spawn_redraw_in_slot(
    cfg: Arc<LiveChartConfig>,
    state: ChartState,
    tick: u64,
    slot: Option<OwnedSemaphorePermit>,
) -> JoinHandle<bool> {
    tokio::spawn(async move {
        let job = tokio::task::spawn_blocking(move || {
            let _slot = slot;
            redraw(&cfg, tick)
        });
        let result = match job.await {
            Ok(result) => result,
            Err(e) => Err(RedrawError::Aborted(e.to_string())),
        };
        if let Err(e) = &result {
            warn!(tick, kind = e.kind(), error = %e, "redraw failed");
        }
        state.publish(tick, result)
    })
}

/// The live loop: one redraw per tick. A slow redraw never delays the next
/// tick, but ticks arriving while `max_redraws_in_flight` redraws are still
/// running are skipped.
pub async fn run_redraw_loop(cfg: Arc<LiveChartConfig>, state: ChartState) {
    info!(
        path = %cfg.data_path.display(),
        column = %cfg.column,
        every_ms = cfg.interval.as_millis() as u64,
        max_in_flight = cfg.max_redraws_in_flight,
        "redraw loop started"
    );

    let every = cfg.interval;
    let slots = cfg.max_redraws_in_flight;
    run_slotted_ticks(every, slots, move |tick, slot| {
        spawn_redraw_in_slot(Arc::clone(&cfg), state.clone(), tick, Some(slot));
    })
    .await;
}
