use tracing::debug;

use crate::core::{
    DataPoint, Dataset, LinearScale, NumericField, distinct_continents, extent,
    mean_by_year_for_continent, project_polyline_runs, sorted_by_key,
};
use crate::error::SceneResult;
use crate::render::{OrdinalColorScale, PolylinePrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::axis::{AxisSide, format_tick, format_year, push_axis, push_axis_caption, push_title};
use super::{SceneKind, SceneStyle};

const LABEL_GAP_PX: f64 = 6.0;

/// Scene 2: one mean-life-expectancy line per continent on a shared frame.
///
/// Both scales come from the extents of the whole dataset, not per group.
/// Labels sit at each line's most recent point; coinciding labels overlap.
pub fn render_grouped_trend(dataset: &Dataset, style: &SceneStyle) -> SceneResult<RenderFrame> {
    let plot = style.plot_area()?;
    let mut frame = RenderFrame::new(style.viewport);
    let records = dataset.records();

    let kind = SceneKind::GroupedTrend;
    push_title(
        &mut frame,
        &format!("Scene {}: {}", kind.number(), kind.title()),
        style,
    );

    let (Some(year_extent), Some(life_exp_extent)) = (
        extent(records, NumericField::Year),
        extent(records, NumericField::LifeExp),
    ) else {
        debug!("grouped trend scene has no finite extents; rendering title only");
        return Ok(frame);
    };

    let x_scale = LinearScale::new(year_extent, plot.x_range())?;
    let y_scale = LinearScale::new(life_exp_extent, plot.y_range())?;

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

    let continents = distinct_continents(records);
    let mut colors = OrdinalColorScale::with_domain(style.palette.clone(), continents.iter().cloned());

    for continent in &continents {
        let color = colors.color_for(continent.as_str());
        let means = sorted_by_key(mean_by_year_for_continent(
            records,
            continent,
            NumericField::LifeExp,
        ));
        let points: Vec<DataPoint> = means
            .iter()
            .map(|point| DataPoint::new(point.key, point.value))
            .collect();
        let runs = project_polyline_runs(&points, &x_scale, &y_scale);

        let last_point = runs.last().and_then(|run| run.last()).copied();
        for run in runs {
            frame
                .polylines
                .push(PolylinePrimitive::new(run, style.line_stroke_width, color));
        }

        if let Some(anchor) = last_point.filter(|_| !continent.is_empty()) {
            frame.texts.push(TextPrimitive::new(
                continent.as_str(),
                anchor.x + LABEL_GAP_PX,
                anchor.y + style.label_font_size_px / 3.0,
                style.label_font_size_px,
                color,
                TextHAlign::Left,
            ));
        }
    }

    debug!(
        continents = continents.len(),
        runs = frame.polylines.len(),
        "rendered grouped trend scene"
    );
    Ok(frame)
}
