// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the line-chart model, figure description and PNG rendering.

pub mod axis;
pub mod chart;
pub mod downsample;
pub mod figure;
pub mod grid;
pub mod render;
pub mod series;
pub mod text;
pub mod theme;

pub use axis::Axis;
pub use chart::Chart;
pub use downsample::lttb;
pub use figure::Figure;
pub use render::{Insets, RenderOptions};
pub use series::Series;
pub use text::TextShaper;
pub use theme::Theme;
