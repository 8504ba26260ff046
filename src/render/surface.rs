use tracing::trace;

use crate::error::SceneResult;
use crate::render::{RenderFrame, Renderer, SvgRenderer};

/// Drawing area a scene owns while it is active.
///
/// Scene switches call `clear` then `append_chart`; clearing an empty surface
/// is a no-op.
pub trait Surface {
    fn clear(&mut self);

    fn append_chart(&mut self, frame: RenderFrame) -> SceneResult<()>;

    fn charts(&self) -> &[RenderFrame];

    fn is_empty(&self) -> bool {
        self.charts().is_empty()
    }
}

/// In-memory surface holding validated frames.
#[derive(Debug, Default)]
pub struct FrameSurface {
    charts: Vec<RenderFrame>,
    clear_count: usize,
    append_count: usize,
}

impl FrameSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `clear` calls so far, including no-op ones.
    #[must_use]
    pub fn clear_count(&self) -> usize {
        self.clear_count
    }

    #[must_use]
    pub fn append_count(&self) -> usize {
        self.append_count
    }

    /// Renders every chart currently on the surface through `renderer`.
    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> SceneResult<()> {
        for chart in &self.charts {
            renderer.render(chart)?;
        }
        Ok(())
    }

    /// SVG documents for the charts on the surface, in append order.
    pub fn to_svg_documents(&self) -> SceneResult<Vec<String>> {
        let mut renderer = SvgRenderer::new();
        self.charts
            .iter()
            .map(|chart| renderer.render_to_string(chart))
            .collect()
    }
}

impl Surface for FrameSurface {
    fn clear(&mut self) {
        trace!(charts = self.charts.len(), "clear surface");
        self.charts.clear();
        self.clear_count += 1;
    }

    fn append_chart(&mut self, frame: RenderFrame) -> SceneResult<()> {
        frame.validate()?;
        self.charts.push(frame);
        self.append_count += 1;
        Ok(())
    }

    fn charts(&self) -> &[RenderFrame] {
        &self.charts
    }
}
