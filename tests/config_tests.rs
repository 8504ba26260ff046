use gapminder_scenes::PresentationConfig;
use gapminder_scenes::core::{Margins, Viewport};
use gapminder_scenes::interaction::TooltipOffset;

#[test]
fn empty_json_yields_defaults() {
    let config = PresentationConfig::from_json_str("{}").expect("parse");

    assert_eq!(config, PresentationConfig::default());
    assert_eq!(config.viewport, Viewport::new(960, 600));
    assert_eq!(config.tooltip_offset, TooltipOffset { dx: 10.0, dy: -28.0 });
    assert_eq!(config.scatter_opacity, 0.7);
    assert!(!config.load.validate_numeric_fields);
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let config = PresentationConfig::from_json_str(
        r#"{ "viewport": { "width": 1280, "height": 720 }, "load": { "validate_numeric_fields": true } }"#,
    )
    .expect("parse");

    assert_eq!(config.viewport, Viewport::new(1280, 720));
    assert!(config.load.validate_numeric_fields);
    assert_eq!(config.load.delimiter, b',');
    assert_eq!(config.margins, Margins::default());
}

#[test]
fn json_round_trip_preserves_config() {
    let config = PresentationConfig::default()
        .with_scatter_opacity(0.5)
        .with_validate_numeric_fields(true);
    let json = config.to_json_pretty().expect("serialize");
    let restored = PresentationConfig::from_json_str(&json).expect("parse");
    assert_eq!(restored, config);
}

#[test]
fn out_of_range_opacity_is_rejected() {
    let err = PresentationConfig::from_json_str(r#"{ "scatter_opacity": 1.5 }"#);
    assert!(err.is_err());
}

#[test]
fn margins_larger_than_viewport_are_rejected() {
    let config = PresentationConfig::default().with_viewport(Viewport::new(100, 100));
    assert!(config.validate().is_err());
}

#[test]
fn malformed_json_is_a_config_error() {
    let err = PresentationConfig::from_json_str("{ not json").expect_err("malformed");
    assert!(err.to_string().contains("invalid config"));
}

#[test]
fn scene_style_carries_layout_settings() {
    let config = PresentationConfig::default()
        .with_viewport(Viewport::new(1200, 800))
        .with_scatter_opacity(0.4);
    let style = config.scene_style();

    assert_eq!(style.viewport, Viewport::new(1200, 800));
    assert_eq!(style.scatter_opacity, 0.4);
    let plot = style.plot_area().expect("plot area");
    assert_eq!(plot.right, 1060.0);
    assert_eq!(plot.bottom, 740.0);
}
