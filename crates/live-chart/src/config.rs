// File: crates/live-chart/src/config.rs
// Summary: Startup configuration, passed explicitly to the redraw loop and the server.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::path::PathBuf;
use std::time::Duration;

use chart_core::{RenderOptions, Theme};

use crate::error::ConfigError;

pub const DEFAULT_DATA_PATH: &str = "pid.csv";
pub const DEFAULT_INTERVAL_MS: u64 = 500;
pub const DEFAULT_COLUMN: &str = "Mibps";
pub const DEFAULT_ADDR: SocketAddr = SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::LOCALHOST, 8050));
pub const DEFAULT_MAX_REDRAWS_IN_FLIGHT: usize = 1;

#[derive(Clone, Debug)]
pub struct LiveChartConfig {
    /// Location of the source data. Read in full on every tick, never written.
    pub data_path: PathBuf,

    /// Redraw cadence.
    pub interval: Duration,

    /// Name of the column plotted as the single series.
    pub column: String,

    /// Local address the dashboard is served on.
    pub bind_addr: SocketAddr,

    /// Image size, theme and point cap for the rendered PNG.
    pub render: RenderOptions,

    /// Upper bound on redraws running at once. A tick that finds every slot
    /// busy is skipped, so a slow read cannot pile up queued work.
    pub max_redraws_in_flight: usize,
}

impl Default for LiveChartConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            column: DEFAULT_COLUMN.to_string(),
            bind_addr: DEFAULT_ADDR,
            render: RenderOptions::default(),
            max_redraws_in_flight: DEFAULT_MAX_REDRAWS_IN_FLIGHT,
        }
    }
}

impl LiveChartConfig {
    /// Defaults overridden by `LIVE_CHART_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(path) = lookup("LIVE_CHART_FILE") {
            cfg.data_path = PathBuf::from(path);
        }
        if let Some(ms) = lookup("LIVE_CHART_INTERVAL_MS") {
            let ms: u64 = ms.trim().parse().map_err(|e| ConfigError::InvalidVar {
                var: "LIVE_CHART_INTERVAL_MS",
                reason: format!("{e}"),
            })?;
            cfg.interval = Duration::from_millis(ms);
        }
        if let Some(column) = lookup("LIVE_CHART_COLUMN") {
            cfg.column = column.trim().to_string();
        }
        if let Some(addr) = lookup("LIVE_CHART_ADDR") {
            cfg.bind_addr = addr.trim().parse().map_err(|e| ConfigError::InvalidVar {
                var: "LIVE_CHART_ADDR",
                reason: format!("{e}"),
            })?;
        }
        if let Some(n) = lookup("LIVE_CHART_MAX_IN_FLIGHT") {
            cfg.max_redraws_in_flight = n.trim().parse().map_err(|e| ConfigError::InvalidVar {
                var: "LIVE_CHART_MAX_IN_FLIGHT",
                reason: format!("{e}"),
            })?;
        }
        if let Some(name) = lookup("LIVE_CHART_THEME") {
            cfg.render.theme = Theme::by_name(&name).ok_or_else(|| ConfigError::InvalidVar {
                var: "LIVE_CHART_THEME",
                reason: format!("unknown theme {name:?}"),
            })?;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval.is_zero() {
            return Err(ConfigError::ZeroInterval);
        }
        if self.column.is_empty() {
            return Err(ConfigError::EmptyColumn);
        }
        if self.max_redraws_in_flight == 0 {
            return Err(ConfigError::NoRedrawSlots);
        }
        Ok(())
    }
}
