use tracing::debug;

use crate::core::{
    DataPoint, Dataset, LinearScale, NumericField, extent, mean_by_year, project_polyline_runs,
    sorted_by_key, values_extent,
};
use crate::error::SceneResult;
use crate::render::{PolylinePrimitive, RenderFrame};

use super::axis::{AxisSide, format_tick, format_year, push_axis, push_axis_caption, push_title};
use super::{SceneKind, SceneStyle};

/// Lower bound of the life-expectancy axis in the trend scene.
pub const TREND_LIFE_EXP_FLOOR: f64 = 30.0;

/// Scene 1: mean life expectancy per year across all records.
pub fn render_trend(dataset: &Dataset, style: &SceneStyle) -> SceneResult<RenderFrame> {
    let plot = style.plot_area()?;
    let mut frame = RenderFrame::new(style.viewport);
    let records = dataset.records();

    let year_extent = extent(records, NumericField::Year);
    push_title(&mut frame, &scene_title(year_extent), style);
    let Some(year_extent) = year_extent else {
        debug!("trend scene has no finite years; rendering title only");
        return Ok(frame);
    };

    let means = sorted_by_key(mean_by_year(records, NumericField::LifeExp));
    let max_mean = values_extent(means.iter().map(|point| point.value))
        .map_or(TREND_LIFE_EXP_FLOOR, |(_, max)| max);

    let x_scale = LinearScale::new(year_extent, plot.x_range())?;
    let y_scale = LinearScale::new((TREND_LIFE_EXP_FLOOR, max_mean), plot.y_range())?;

    push_axis(
        &mut frame,
        &x_scale,
        AxisSide::Bottom,
        plot,
        style.x_tick_count,
        format_year,
        style,
    );
    push_axis(
        &mut frame,
        &y_scale,
        AxisSide::Left,
        plot,
        style.y_tick_count,
        format_tick,
        style,
    );
    push_axis_caption(&mut frame, "Year", AxisSide::Bottom, plot, style);
    push_axis_caption(
        &mut frame,
        "Average Life Expectancy (years)",
        AxisSide::Left,
        plot,
        style,
    );

    let points: Vec<DataPoint> = means
        .iter()
        .map(|point| DataPoint::new(point.key, point.value))
        .collect();
    for run in project_polyline_runs(&points, &x_scale, &y_scale) {
        frame.polylines.push(PolylinePrimitive::new(
            run,
            style.line_stroke_width,
            style.trend_color,
        ));
    }

    debug!(
        years = means.len(),
        runs = frame.polylines.len(),
        "rendered trend scene"
    );
    Ok(frame)
}

fn scene_title(year_extent: Option<(f64, f64)>) -> String {
    let kind = SceneKind::Trend;
    match year_extent {
        Some((first, last)) => format!(
            "Scene {}: {} ({}-{})",
            kind.number(),
            kind.title(),
            format_year(first),
            format_year(last)
        ),
        None => format!("Scene {}: {}", kind.number(), kind.title()),
    }
}
