//! Scene renderers and the registry that sequences them.
//!
//! Every renderer is a pure function from the shared dataset and a style to a
//! `RenderFrame`. Renderers never fail on data content: empty or malformed
//! data yields a degenerate frame, and non-finite geometry is dropped.

mod axis;
mod grouped_trend;
mod overlay;
mod registry;
mod scatter;
mod trend;

pub use axis::{AxisSide, format_tick, format_year};
pub use grouped_trend::render_grouped_trend;
pub use overlay::tooltip_overlay;
pub use registry::{SceneCursor, SceneEntry, SceneRegistry, SceneRenderFn};
pub use scatter::{
    RADIUS_RANGE_PX, SCATTER_GDP_FLOOR, SCATTER_LIFE_EXP_DOMAIN, render_scatter, scatter_records,
    tooltip_content,
};
pub use trend::{TREND_LIFE_EXP_FLOOR, render_trend};

use serde::{Deserialize, Serialize};

use crate::core::{Margins, PlotArea, Viewport};
use crate::error::SceneResult;
use crate::render::{CATEGORY10, Color};

/// The three scenes of the presentation, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneKind {
    Trend,
    GroupedTrend,
    Scatter,
}

impl SceneKind {
    pub const ALL: [SceneKind; 3] = [Self::Trend, Self::GroupedTrend, Self::Scatter];

    /// 1-based position used in titles and file names.
    #[must_use]
    pub fn number(self) -> usize {
        match self {
            Self::Trend => 1,
            Self::GroupedTrend => 2,
            Self::Scatter => 3,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Trend => "Global Life Expectancy Overview",
            Self::GroupedTrend => "Continental Disparities in Life Expectancy",
            Self::Scatter => "Interactive Country-Level Exploration",
        }
    }

    /// Whether the scene's marks respond to hover.
    #[must_use]
    pub fn is_interactive(self) -> bool {
        matches!(self, Self::Scatter)
    }
}

/// Visual settings shared by all scene renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneStyle {
    pub viewport: Viewport,
    pub margins: Margins,
    pub palette: Vec<Color>,
    pub text_color: Color,
    pub axis_color: Color,
    pub trend_color: Color,
    pub title_font_size_px: f64,
    pub caption_font_size_px: f64,
    pub tick_font_size_px: f64,
    pub label_font_size_px: f64,
    pub line_stroke_width: f64,
    pub axis_stroke_width: f64,
    pub scatter_opacity: f64,
    pub x_tick_count: usize,
    pub y_tick_count: usize,
}

impl Default for SceneStyle {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            margins: Margins::default(),
            palette: CATEGORY10.to_vec(),
            text_color: Color::rgb8(0x33, 0x33, 0x33),
            axis_color: Color::BLACK,
            trend_color: Color::rgb8(0x46, 0x82, 0xb4),
            title_font_size_px: 20.0,
            caption_font_size_px: 13.0,
            tick_font_size_px: 10.0,
            label_font_size_px: 12.0,
            line_stroke_width: 2.0,
            axis_stroke_width: 1.0,
            scatter_opacity: 0.7,
            x_tick_count: 10,
            y_tick_count: 8,
        }
    }
}

impl SceneStyle {
    pub fn plot_area(&self) -> SceneResult<PlotArea> {
        PlotArea::from_viewport(self.viewport, self.margins)
    }
}

/// Renders `kind` with the standard renderer for that scene.
pub fn render_scene(
    kind: SceneKind,
    dataset: &crate::core::Dataset,
    style: &SceneStyle,
) -> SceneResult<crate::render::RenderFrame> {
    match kind {
        SceneKind::Trend => render_trend(dataset, style),
        SceneKind::GroupedTrend => render_grouped_trend(dataset, style),
        SceneKind::Scatter => render_scatter(dataset, style),
    }
}
