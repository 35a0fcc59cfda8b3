// File: crates/live-chart/src/lib.rs
// Summary: Live chart server: periodic CSV reload, line-chart redraw and a browser dashboard.

pub mod config;
pub mod error;
pub mod loader;
pub mod logger;
pub mod page;
pub mod redraw;
pub mod server;
pub mod state;
pub mod ticker;

pub use config::LiveChartConfig;
pub use error::{ConfigError, RedrawError};
pub use redraw::{redraw, Frame};
pub use state::{ChartState, Snapshot};
