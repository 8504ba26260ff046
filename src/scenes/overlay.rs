use crate::interaction::TooltipState;
use crate::render::{Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::SceneStyle;

const PADDING_PX: f64 = 6.0;
const LINE_HEIGHT_RATIO: f64 = 1.3;
// Rough advance width of one glyph relative to font size.
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Copy of `frame` with the tooltip drawn on top when it is visible.
///
/// The box goes on the overlay layer and is kept inside the viewport.
#[must_use]
pub fn tooltip_overlay(frame: &RenderFrame, tooltip: &TooltipState, style: &SceneStyle) -> RenderFrame {
    let mut composed = frame.clone();
    if !tooltip.visible || !tooltip.x.is_finite() || !tooltip.y.is_finite() {
        return composed;
    }

    let lines: Vec<&str> = tooltip
        .content
        .lines()
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return composed;
    }

    let font = style.label_font_size_px;
    let line_height = font * LINE_HEIGHT_RATIO;
    let longest = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0);
    let width = longest as f64 * font * GLYPH_WIDTH_RATIO + PADDING_PX * 2.0;
    let height = lines.len() as f64 * line_height + PADDING_PX * 2.0;

    let max_x = (f64::from(frame.viewport.width) - width).max(0.0);
    let max_y = (f64::from(frame.viewport.height) - height).max(0.0);
    let x = tooltip.x.clamp(0.0, max_x);
    let y = tooltip.y.clamp(0.0, max_y);

    composed.overlay_rects.push(
        RectPrimitive::new(x, y, width, height, Color::WHITE.with_alpha(0.92))
            .with_stroke(Color::rgb8(0x99, 0x99, 0x99)),
    );
    for (index, line) in lines.iter().enumerate() {
        composed.overlay_texts.push(TextPrimitive::new(
            *line,
            x + PADDING_PX,
            y + PADDING_PX + font + index as f64 * line_height,
            font,
            style.text_color,
            TextHAlign::Left,
        ));
    }
    composed
}
