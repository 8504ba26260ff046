use crate::core::{PlotArea, Scale};
use crate::render::{LinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::SceneStyle;

const TICK_SIZE_PX: f64 = 6.0;
const TICK_LABEL_GAP_PX: f64 = 3.0;

/// Side of the plot area an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Left,
}

/// Draws the axis domain line, tick marks and tick labels for `scale`.
pub(super) fn push_axis(
    frame: &mut RenderFrame,
    scale: &dyn Scale,
    side: AxisSide,
    plot: PlotArea,
    tick_count: usize,
    format: fn(f64) -> String,
    style: &SceneStyle,
) {
    let (range_start, range_end) = scale.range();
    let color = style.axis_color;
    let stroke = style.axis_stroke_width;
    let font = style.tick_font_size_px;

    match side {
        AxisSide::Bottom => {
            let y = plot.bottom;
            frame
                .lines
                .push(LinePrimitive::new(range_start, y, range_end, y, stroke, color));
            for tick in scale.ticks(tick_count) {
                let x = scale.domain_to_pixel(tick);
                if !x.is_finite() {
                    continue;
                }
                frame
                    .lines
                    .push(LinePrimitive::new(x, y, x, y + TICK_SIZE_PX, stroke, color));
                frame.texts.push(TextPrimitive::new(
                    format(tick),
                    x,
                    y + TICK_SIZE_PX + TICK_LABEL_GAP_PX + font,
                    font,
                    style.text_color,
                    TextHAlign::Center,
                ));
            }
        }
        AxisSide::Left => {
            let x = plot.left;
            frame
                .lines
                .push(LinePrimitive::new(x, range_start, x, range_end, stroke, color));
            for tick in scale.ticks(tick_count) {
                let y = scale.domain_to_pixel(tick);
                if !y.is_finite() {
                    continue;
                }
                frame
                    .lines
                    .push(LinePrimitive::new(x - TICK_SIZE_PX, y, x, y, stroke, color));
                frame.texts.push(TextPrimitive::new(
                    format(tick),
                    x - TICK_SIZE_PX - TICK_LABEL_GAP_PX,
                    y + font / 3.0,
                    font,
                    style.text_color,
                    TextHAlign::Right,
                ));
            }
        }
    }
}

/// Axis caption centered along `side`, rotated for the vertical axis.
pub(super) fn push_axis_caption(
    frame: &mut RenderFrame,
    caption: &str,
    side: AxisSide,
    plot: PlotArea,
    style: &SceneStyle,
) {
    let font = style.caption_font_size_px;
    let text = match side {
        AxisSide::Bottom => TextPrimitive::new(
            caption,
            plot.center_x(),
            plot.bottom + style.margins.bottom - font,
            font,
            style.text_color,
            TextHAlign::Center,
        ),
        AxisSide::Left => TextPrimitive::new(
            caption,
            (plot.left - style.margins.left + font * 1.5).max(font),
            plot.center_y(),
            font,
            style.text_color,
            TextHAlign::Center,
        )
        .rotated(-90.0),
    };
    frame.texts.push(text);
}

pub(super) fn push_title(frame: &mut RenderFrame, title: &str, style: &SceneStyle) {
    let font = style.title_font_size_px;
    frame.texts.push(TextPrimitive::new(
        title,
        f64::from(style.viewport.width) / 2.0,
        (style.margins.top / 2.0 + font / 2.0).max(font),
        font,
        style.text_color,
        TextHAlign::Center,
    ));
}

/// Year labels: integral, no digit grouping.
#[must_use]
pub fn format_year(value: f64) -> String {
    format!("{value:.0}")
}

/// Tick labels: integers with thousands separators, fractions trimmed.
#[must_use]
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return group_thousands(value as i64);
    }

    let formatted = format!("{value:.3}");
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_owned()
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
