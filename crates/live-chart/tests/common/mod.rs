// File: crates/live-chart/tests/common/mod.rs
// Purpose: Shared fixtures: scratch data files and a fast-rendering config.

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use live_chart::LiveChartConfig;

/// Config pointing at `path`, with a small PNG and no text so renders are quick.
pub fn config_for(path: &Path) -> LiveChartConfig {
    let mut cfg = LiveChartConfig {
        data_path: path.to_path_buf(),
        interval: Duration::from_millis(20),
        ..LiveChartConfig::default()
    };
    cfg.render.width = 240;
    cfg.render.height = 160;
    cfg.render.draw_labels = false;
    cfg
}

pub fn write_csv(path: &Path, contents: &str) {
    std::fs::write(path, contents).expect("write csv");
}

pub fn append_csv(path: &Path, line: &str) {
    let mut f = std::fs::OpenOptions::new().append(true).open(path).expect("open csv");
    writeln!(f, "{line}").expect("append csv");
}

pub fn is_png(bytes: &[u8]) -> bool {
    bytes.starts_with(&[137, 80, 78, 71])
}
