use crate::core::{DataPoint, Scale};

/// Projects data points into pixel-space polyline runs.
///
/// A point whose projection is not finite breaks the line: the points on
/// either side start separate runs. Runs with a single point are kept so a
/// lone sample still has a position for labels.
pub fn project_polyline_runs(
    points: &[DataPoint],
    x_scale: &dyn Scale,
    y_scale: &dyn Scale,
) -> Vec<Vec<DataPoint>> {
    let mut runs = Vec::new();
    let mut current = Vec::with_capacity(points.len());

    for point in points {
        let mapped = DataPoint::new(
            x_scale.domain_to_pixel(point.x),
            y_scale.domain_to_pixel(point.y),
        );
        if mapped.is_finite() {
            current.push(mapped);
        } else if !current.is_empty() {
            runs.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}
