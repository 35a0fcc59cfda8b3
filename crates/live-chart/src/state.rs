// File: crates/live-chart/src/state.rs
// Summary: UI-state holder between the redraw loop (writer) and the HTTP layer (observers).

use std::sync::Arc;

use chart_core::Figure;
use serde::Serialize;
use tokio::sync::watch;

use crate::error::RedrawError;
use crate::redraw::Frame;

/// Failure of the most recent redraw, kept until a later tick succeeds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TickError {
    pub tick: u64,
    pub kind: &'static str,
    pub message: String,
}

/// What observers see. `frame` is the last successful redraw, which stays on
/// screen while later ticks fail.
#[derive(Clone, Debug, Default)]
pub struct Snapshot {
    /// Latest tick whose redraw finished, successfully or not.
    pub tick: Option<u64>,
    pub frame: Option<Arc<Frame>>,
    pub error: Option<TickError>,
}

/// JSON shape of a [`Snapshot`], without the PNG bytes.
#[derive(Debug, Serialize)]
pub struct SnapshotView<'a> {
    pub tick: Option<u64>,
    pub frame_tick: Option<u64>,
    pub rendered_at_ms: Option<u64>,
    pub figure: Option<&'a Figure>,
    pub error: Option<&'a TickError>,
}

/// Small notification pushed to dashboards; they fetch the image separately.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UpdateEvent {
    pub tick: Option<u64>,
    pub frame_tick: Option<u64>,
    pub error: Option<TickError>,
}

impl Snapshot {
    pub fn view(&self) -> SnapshotView<'_> {
        SnapshotView {
            tick: self.tick,
            frame_tick: self.frame.as_ref().map(|f| f.tick),
            rendered_at_ms: self.frame.as_ref().map(|f| f.rendered_at_ms),
            figure: self.frame.as_ref().map(|f| &f.figure),
            error: self.error.as_ref(),
        }
    }

    pub fn event(&self) -> UpdateEvent {
        UpdateEvent {
            tick: self.tick,
            frame_tick: self.frame.as_ref().map(|f| f.tick),
            error: self.error.clone(),
        }
    }
}

#[derive(Clone)]
pub struct ChartState {
    tx: Arc<watch::Sender<Snapshot>>,
}

impl Default for ChartState {
    fn default() -> Self { Self::new() }
}

impl ChartState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Snapshot::default());
        Self { tx: Arc::new(tx) }
    }

    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.tx.subscribe()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.tx.borrow().clone()
    }

    /// Record the outcome of the redraw for `tick`.
    ///
    /// Returns false, leaving the state untouched, when a newer (or the same)
    /// tick has already been published: with overlapping redraws a slow early
    /// tick must not replace a later chart.
    pub fn publish(&self, tick: u64, result: Result<Frame, RedrawError>) -> bool {
        self.tx.send_if_modified(|snap| {
            if snap.tick.is_some_and(|last| tick <= last) {
                return false;
            }
            snap.tick = Some(tick);
            match result {
                Ok(frame) => {
                    snap.frame = Some(Arc::new(frame));
                    snap.error = None;
                }
                Err(e) => {
                    snap.error = Some(TickError { tick, kind: e.kind(), message: e.to_string() });
                }
            }
            true
        })
    }
}
