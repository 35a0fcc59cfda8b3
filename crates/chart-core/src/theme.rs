// File: crates/chart-core/src/theme.rs
// Summary: Light/Dark color themes for line-chart rendering.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub line_stroke: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
        }
    }

    /// Close to the white plot background browsers usually show for dashboards.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 229, 236, 246),
            grid: skia::Color::from_argb(255, 255, 255, 255),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 42, 63, 95),
            tick: skia::Color::from_argb(255, 80, 90, 110),
            line_stroke: skia::Color::from_argb(255, 99, 110, 250),
        }
    }

    /// Look a theme up by name; unknown names give `None`.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}
