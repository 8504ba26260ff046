use approx::assert_relative_eq;
use gapminder_scenes::core::{Dataset, Record};
use gapminder_scenes::render::{CATEGORY10, NullRenderer, Renderer};
use gapminder_scenes::scenes::{
    SceneKind, SceneStyle, render_grouped_trend, render_scatter, render_scene, render_trend,
    scatter_records, tooltip_content,
};

fn fixture() -> Dataset {
    Dataset::new(vec![
        Record::new("A", "Asia", 1952.0, 50.0, 1_000.0, 800.0),
        Record::new("B", "Asia", 1952.0, 60.0, 2_000.0, 900.0),
        Record::new("C", "Europe", 1957.0, 70.0, 3_000.0, 5_000.0),
    ])
}

fn has_text(frame: &gapminder_scenes::render::RenderFrame, needle: &str) -> bool {
    frame.texts.iter().any(|text| text.text == needle)
}

#[test]
fn trend_draws_one_line_through_yearly_means() {
    let style = SceneStyle::default();
    let frame = render_trend(&fixture(), &style).expect("trend frame");
    frame.validate().expect("valid frame");

    assert!(has_text(
        &frame,
        "Scene 1: Global Life Expectancy Overview (1952-1957)"
    ));
    assert!(has_text(&frame, "Year"));
    assert!(has_text(&frame, "Average Life Expectancy (years)"));

    assert_eq!(frame.polylines.len(), 1);
    let points = &frame.polylines[0].points;
    assert_eq!(points.len(), 2);

    // Plot area spans x 70..820 and y 60..540; y domain is [30, 70].
    assert_relative_eq!(points[0].x, 70.0);
    assert_relative_eq!(points[0].y, 240.0, epsilon = 1e-9);
    assert_relative_eq!(points[1].x, 820.0);
    assert_relative_eq!(points[1].y, 60.0, epsilon = 1e-9);
}

#[test]
fn grouped_trend_draws_one_colored_line_per_continent() {
    let style = SceneStyle::default();
    let frame = render_grouped_trend(&fixture(), &style).expect("grouped frame");
    frame.validate().expect("valid frame");

    assert!(has_text(
        &frame,
        "Scene 2: Continental Disparities in Life Expectancy"
    ));
    assert_eq!(frame.polylines.len(), 2);
    assert_eq!(frame.polylines[0].color, CATEGORY10[0]);
    assert_eq!(frame.polylines[1].color, CATEGORY10[1]);

    assert!(has_text(&frame, "Asia"));
    assert!(has_text(&frame, "Europe"));
}

#[test]
fn grouped_trend_label_sits_at_the_last_point() {
    let dataset = Dataset::new(vec![
        Record::new("A", "Africa", 1952.0, 40.0, 1.0, 1.0),
        Record::new("A", "Africa", 2007.0, 55.0, 1.0, 1.0),
    ]);
    let frame = render_grouped_trend(&dataset, &SceneStyle::default()).expect("grouped frame");

    let last = *frame.polylines[0].points.last().expect("last point");
    let label = frame
        .texts
        .iter()
        .find(|text| text.text == "Africa")
        .expect("continent label");
    assert!(label.x > last.x);
    assert_relative_eq!(last.x, 820.0);
}

#[test]
fn scatter_plots_only_the_latest_year() {
    let dataset = fixture();
    let style = SceneStyle::default();
    let frame = render_scatter(&dataset, &style).expect("scatter frame");
    frame.validate().expect("valid frame");

    assert!(has_text(
        &frame,
        "Scene 3: Interactive Country-Level Exploration (1957)"
    ));
    assert_eq!(scatter_records(dataset.records()).len(), 1);
    assert_eq!(frame.circles.len(), 1);

    let circle = &frame.circles[0];
    assert_eq!(
        circle.hover_text.as_deref(),
        Some("C\nLife Expectancy: 70\nGDP per Capita: 5000.00")
    );
    assert_relative_eq!(circle.fill.alpha, style.scatter_opacity);
    assert_relative_eq!(circle.radius, 30.0);
}

#[test]
fn scatter_skips_non_positive_gdp_and_clamps_small_gdp() {
    let dataset = Dataset::new(vec![
        Record::new("Rich", "Europe", 2007.0, 80.0, 5_000_000.0, 40_000.0),
        Record::new("Tiny", "Africa", 2007.0, 45.0, 1_000_000.0, 50.0),
        Record::new("Zero", "Africa", 2007.0, 45.0, 1_000_000.0, 0.0),
        Record::new("Broken", "Asia", 2007.0, f64::NAN, 1_000_000.0, 900.0),
    ]);
    let frame = render_scatter(&dataset, &SceneStyle::default()).expect("scatter frame");
    frame.validate().expect("valid frame");

    assert_eq!(frame.circles.len(), 2);
    let tiny = frame
        .circles
        .iter()
        .find(|circle| {
            circle
                .hover_text
                .as_deref()
                .is_some_and(|text| text.starts_with("Tiny"))
        })
        .expect("tiny bubble");
    assert_relative_eq!(tiny.cx, 70.0);
}

#[test]
fn scatter_clamps_to_left_edge_when_latest_gdp_never_exceeds_floor() {
    let below = Dataset::new(vec![
        Record::new("Rich", "Europe", 1952.0, 70.0, 5_000_000.0, 40_000.0),
        Record::new("Low", "Africa", 2007.0, 45.0, 1_000_000.0, 50.0),
        Record::new("Lower", "Asia", 2007.0, 50.0, 2_000_000.0, 80.0),
    ]);
    let at_floor = Dataset::new(vec![Record::new(
        "Floor", "Africa", 2007.0, 45.0, 1_000_000.0, 100.0,
    )]);

    for (dataset, expected) in [(below, 2), (at_floor, 1)] {
        let frame = render_scatter(&dataset, &SceneStyle::default()).expect("scatter frame");
        frame.validate().expect("valid frame");

        assert_eq!(frame.circles.len(), expected);
        for circle in &frame.circles {
            assert_relative_eq!(circle.cx, 70.0);
        }
    }
}

#[test]
fn scatter_legend_lists_every_continent() {
    let dataset = Dataset::new(vec![
        Record::new("A", "Asia", 1952.0, 40.0, 1.0, 500.0),
        Record::new("B", "Europe", 2007.0, 78.0, 1.0, 30_000.0),
    ]);
    let frame = render_scatter(&dataset, &SceneStyle::default()).expect("scatter frame");

    // Asia has no 2007 rows but keeps its legend entry and color slot.
    assert!(has_text(&frame, "Asia"));
    assert!(has_text(&frame, "Europe"));
    assert_eq!(frame.circles[0].fill.with_alpha(1.0), CATEGORY10[1]);
}

#[test]
fn tooltip_content_formats_gdp_with_two_decimals() {
    let record = Record::new("Norway", "Europe", 2007.0, 80.196, 4_627_926.0, 49_357.19017);
    assert_eq!(
        tooltip_content(&record),
        "Norway\nLife Expectancy: 80.196\nGDP per Capita: 49357.19"
    );
}

#[test]
fn empty_dataset_renders_title_only_frames() {
    let dataset = Dataset::new(Vec::new());
    let style = SceneStyle::default();

    for kind in SceneKind::ALL {
        let frame = render_scene(kind, &dataset, &style).expect("degenerate frame");
        frame.validate().expect("valid frame");
        assert_eq!(frame.texts.len(), 1, "{kind:?} should only carry a title");
        assert!(frame.polylines.is_empty());
        assert!(frame.circles.is_empty());
        assert!(frame.lines.is_empty());
    }
}

#[test]
fn nan_measurements_never_fail_rendering() {
    let dataset = Dataset::new(vec![
        Record::new("A", "Asia", 1952.0, f64::NAN, f64::NAN, f64::NAN),
        Record::new("B", "Asia", 1957.0, f64::NAN, f64::NAN, f64::NAN),
    ]);
    let style = SceneStyle::default();
    let mut renderer = NullRenderer::default();

    for kind in SceneKind::ALL {
        let frame = render_scene(kind, &dataset, &style).expect("frame");
        renderer.render(&frame).expect("valid frame");
        assert!(frame.polylines.is_empty(), "{kind:?} drew a NaN line");
        assert!(frame.circles.is_empty(), "{kind:?} drew a NaN bubble");
    }
    assert_eq!(renderer.frames_rendered, 3);
}

#[test]
fn missing_year_breaks_the_trend_line() {
    let dataset = Dataset::new(vec![
        Record::new("A", "Asia", 1952.0, 40.0, 1.0, 1.0),
        Record::new("A", "Asia", 1957.0, f64::NAN, 1.0, 1.0),
        Record::new("A", "Asia", 1962.0, 45.0, 1.0, 1.0),
        Record::new("A", "Asia", 1967.0, 47.0, 1.0, 1.0),
    ]);
    let frame = render_trend(&dataset, &SceneStyle::default()).expect("trend frame");

    assert_eq!(frame.polylines.len(), 2);
    assert_eq!(frame.polylines[0].points.len(), 1);
    assert_eq!(frame.polylines[1].points.len(), 2);
}
