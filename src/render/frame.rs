use crate::core::Viewport;
use crate::error::{SceneError, SceneResult};
use crate::render::{CirclePrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Backends draw rects first, then polylines, lines, circles and texts, so
/// labels stay on top of marks. The overlay layer (tooltips) is drawn last.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub rects: Vec<RectPrimitive>,
    pub polylines: Vec<PolylinePrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub overlay_rects: Vec<RectPrimitive>,
    pub overlay_texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            rects: Vec::new(),
            polylines: Vec::new(),
            lines: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
            overlay_rects: Vec::new(),
            overlay_texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_polyline(mut self, polyline: PolylinePrimitive) -> Self {
        self.polylines.push(polyline);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    pub fn validate(&self) -> SceneResult<()> {
        if !self.viewport.is_valid() {
            return Err(SceneError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for rect in self.rects.iter().chain(&self.overlay_rects) {
            rect.validate()?;
        }
        for polyline in &self.polylines {
            polyline.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in self.texts.iter().chain(&self.overlay_texts) {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
            && self.polylines.is_empty()
            && self.lines.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
            && self.overlay_rects.is_empty()
            && self.overlay_texts.is_empty()
    }

    /// Total number of primitives in the frame.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.rects.len()
            + self.polylines.len()
            + self.lines.len()
            + self.circles.len()
            + self.texts.len()
            + self.overlay_rects.len()
            + self.overlay_texts.len()
    }

    /// Topmost circle under `(x, y)`, as an index into `circles`.
    ///
    /// Later circles are drawn over earlier ones, so the search runs backwards.
    #[must_use]
    pub fn hit_test_circle(&self, x: f64, y: f64) -> Option<usize> {
        self.circles
            .iter()
            .rposition(|circle| circle.contains(x, y))
    }
}
