pub mod aggregate;
pub mod dataset;
pub mod line_series;
pub mod log_scale;
pub mod scale;
pub mod sqrt_scale;
pub mod types;

pub use aggregate::{
    AggregatedPoint, NumericField, distinct_continents, extent, latest_year, max_value,
    mean_by_year, mean_by_year_for_continent, records_in_year, sorted_by_key, values_extent,
};
pub use dataset::{Dataset, Record};
pub use line_series::project_polyline_runs;
pub use log_scale::LogScale;
pub use scale::{LinearScale, Scale, Ticks};
pub use sqrt_scale::SqrtScale;
pub use types::{DataPoint, Margins, PlotArea, Viewport};
