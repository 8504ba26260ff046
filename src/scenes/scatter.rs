use tracing::{debug, trace};

use crate::core::{
    Dataset, LinearScale, LogScale, NumericField, Record, SqrtScale, distinct_continents,
    latest_year, max_value, records_in_year,
};
use crate::error::SceneResult;
use crate::render::{
    CirclePrimitive, OrdinalColorScale, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::axis::{AxisSide, format_tick, push_axis, push_axis_caption, push_title};
use super::{SceneKind, SceneStyle};

/// Lower bound of the logarithmic GDP axis.
pub const SCATTER_GDP_FLOOR: f64 = 100.0;
/// Fixed life-expectancy domain of the scatter plot.
pub const SCATTER_LIFE_EXP_DOMAIN: (f64, f64) = (30.0, 90.0);
/// Bubble radius range; radius grows with the square root of population.
pub const RADIUS_RANGE_PX: (f64, f64) = (2.0, 30.0);

const LEGEND_SWATCH_PX: f64 = 10.0;
const LEGEND_ROW_PX: f64 = 18.0;

/// Records plotted by the scatter scene: every row of the most recent year.
pub fn scatter_records(records: &[Record]) -> Vec<&Record> {
    match latest_year(records) {
        Some(year) => records_in_year(records, year),
        None => Vec::new(),
    }
}

/// Tooltip text for one country bubble.
#[must_use]
pub fn tooltip_content(record: &Record) -> String {
    format!(
        "{}\nLife Expectancy: {}\nGDP per Capita: {:.2}",
        record.country, record.life_exp, record.gdp_percap
    )
}

/// Scene 3: GDP per capita (log) against life expectancy for the latest year,
/// bubble area proportional to population, colored by continent.
///
/// GDP values in `(0, 100]` are clamped onto the left edge of the plot.
/// Rows whose GDP is not positive, or whose plotted fields are not finite,
/// are skipped.
pub fn render_scatter(dataset: &Dataset, style: &SceneStyle) -> SceneResult<RenderFrame> {
    let plot = style.plot_area()?;
    let mut frame = RenderFrame::new(style.viewport);
    let records = dataset.records();

    let latest = latest_year(records);
    let kind = SceneKind::Scatter;
    let title = match latest {
        Some(year) => format!("Scene {}: {} ({year:.0})", kind.number(), kind.title()),
        None => format!("Scene {}: {}", kind.number(), kind.title()),
    };
    push_title(&mut frame, &title, style);
    let Some(latest) = latest else {
        debug!("scatter scene has no finite years; rendering title only");
        return Ok(frame);
    };

    let rows = records_in_year(records, latest);
    // A domain that does not rise above the floor is widened by one decade,
    // so small GDP values still clamp onto the left edge.
    let gdp_max = max_value(rows.iter().copied(), NumericField::GdpPercap)
        .filter(|max| *max > SCATTER_GDP_FLOOR)
        .unwrap_or(SCATTER_GDP_FLOOR * 10.0);
    let pop_max = max_value(rows.iter().copied(), NumericField::Pop).unwrap_or(0.0);

    let x_scale = LogScale::new((SCATTER_GDP_FLOOR, gdp_max), plot.x_range())?.with_clamp(true);
    let y_scale = LinearScale::new(SCATTER_LIFE_EXP_DOMAIN, plot.y_range())?;
    let size_scale = SqrtScale::new((0.0, pop_max), RADIUS_RANGE_PX)?;
    // Keyed over the whole dataset so colors match the grouped trend scene.
    let mut colors =
        OrdinalColorScale::with_domain(style.palette.clone(), distinct_continents(records));

    push_axis(
        &mut frame,
        &x_scale,
        AxisSide::Bottom,
        plot,
        style.x_tick_count,
        format_tick,
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
    push_axis_caption(
        &mut frame,
        "GDP per Capita (log scale)",
        AxisSide::Bottom,
        plot,
        style,
    );
    push_axis_caption(
        &mut frame,
        "Life Expectancy (years)",
        AxisSide::Left,
        plot,
        style,
    );

    let mut skipped = 0_usize;
    for record in &rows {
        if !record.gdp_percap.is_finite() || record.gdp_percap <= 0.0 {
            skipped += 1;
            continue;
        }

        let cx = x_scale.domain_to_pixel(record.gdp_percap);
        let cy = y_scale.domain_to_pixel(record.life_exp);
        let radius = size_scale.domain_to_pixel(record.pop);
        if !cx.is_finite() || !cy.is_finite() || !radius.is_finite() || radius < 0.0 {
            trace!(country = %record.country, "skipping bubble with non-finite geometry");
            skipped += 1;
            continue;
        }

        let fill = colors
            .color_for(record.continent.as_str())
            .with_alpha(style.scatter_opacity);
        frame.circles.push(
            CirclePrimitive::new(cx, cy, radius, fill).with_hover_text(tooltip_content(record)),
        );
    }

    push_legend(&mut frame, &colors, plot.right, plot.top, style);

    debug!(
        year = latest,
        bubbles = frame.circles.len(),
        skipped,
        "rendered scatter scene"
    );
    Ok(frame)
}

fn push_legend(
    frame: &mut RenderFrame,
    colors: &OrdinalColorScale,
    plot_right: f64,
    plot_top: f64,
    style: &SceneStyle,
) {
    let x = plot_right + 20.0;
    for (row, continent) in colors.domain().filter(|name| !name.is_empty()).enumerate() {
        let Some(color) = colors.get(continent) else {
            continue;
        };
        let y = plot_top + row as f64 * LEGEND_ROW_PX;
        frame.rects.push(RectPrimitive::new(
            x,
            y,
            LEGEND_SWATCH_PX,
            LEGEND_SWATCH_PX,
            color.with_alpha(style.scatter_opacity),
        ));
        frame.texts.push(TextPrimitive::new(
            continent,
            x + LEGEND_SWATCH_PX + 6.0,
            y + LEGEND_SWATCH_PX,
            style.label_font_size_px,
            style.text_color,
            TextHAlign::Left,
        ));
    }
}
