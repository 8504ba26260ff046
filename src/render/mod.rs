mod frame;
mod null_renderer;
mod palette;
mod primitives;
mod surface;
mod svg_renderer;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use palette::{CATEGORY10, OrdinalColorScale};
pub use primitives::{
    CirclePrimitive, Color, LinePrimitive, PolylinePrimitive, RectPrimitive, TextHAlign,
    TextPrimitive,
};
pub use surface::{FrameSurface, Surface};
pub use svg_renderer::{SvgRenderer, escape_xml};

use crate::error::SceneResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from scene and interaction logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> SceneResult<()>;
}
