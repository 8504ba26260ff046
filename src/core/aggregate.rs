use indexmap::{IndexMap, IndexSet};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::Record;

/// Numeric record column that aggregation and extents can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NumericField {
    Year,
    LifeExp,
    Pop,
    GdpPercap,
}

impl NumericField {
    #[must_use]
    pub fn value(self, record: &Record) -> f64 {
        match self {
            Self::Year => record.year,
            Self::LifeExp => record.life_exp,
            Self::Pop => record.pop,
            Self::GdpPercap => record.gdp_percap,
        }
    }

    /// Source table column name.
    #[must_use]
    pub fn column(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::LifeExp => "lifeExp",
            Self::Pop => "pop",
            Self::GdpPercap => "gdpPercap",
        }
    }
}

/// Mean of one field for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AggregatedPoint {
    pub key: f64,
    pub value: f64,
}

/// Groups records by year and averages `field` per group.
///
/// Groups come back in first-seen order. The mean is a plain arithmetic mean,
/// so a NaN field poisons its group's value. NaN years form their own group.
pub fn mean_by_year<'a, I>(records: I, field: NumericField) -> Vec<AggregatedPoint>
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut groups: IndexMap<OrderedFloat<f64>, (f64, usize)> = IndexMap::new();
    for record in records {
        let entry = groups.entry(OrderedFloat(record.year)).or_insert((0.0, 0));
        entry.0 += field.value(record);
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(year, (sum, count))| AggregatedPoint {
            key: year.into_inner(),
            value: sum / count as f64,
        })
        .collect()
}

/// Same as [`mean_by_year`] restricted to one continent.
pub fn mean_by_year_for_continent(
    records: &[Record],
    continent: &str,
    field: NumericField,
) -> Vec<AggregatedPoint> {
    mean_by_year(
        records
            .iter()
            .filter(|record| record.continent == continent),
        field,
    )
}

/// Distinct continents in order of first appearance.
pub fn distinct_continents(records: &[Record]) -> Vec<String> {
    let set: IndexSet<&str> = records
        .iter()
        .map(|record| record.continent.as_str())
        .collect();
    set.into_iter().map(str::to_owned).collect()
}

/// Min/max of `field`, skipping non-finite values. `None` when nothing finite remains.
pub fn extent<'a, I>(records: I, field: NumericField) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = &'a Record>,
{
    values_extent(records.into_iter().map(|record| field.value(record)))
}

/// Largest finite value of `field`.
pub fn max_value<'a, I>(records: I, field: NumericField) -> Option<f64>
where
    I: IntoIterator<Item = &'a Record>,
{
    extent(records, field).map(|(_, max)| max)
}

pub fn values_extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .filter(|value| value.is_finite())
        .fold(None, |acc, value| match acc {
            None => Some((value, value)),
            Some((min, max)) => Some((min.min(value), max.max(value))),
        })
}

/// Most recent year present in the dataset.
pub fn latest_year(records: &[Record]) -> Option<f64> {
    max_value(records, NumericField::Year)
}

/// Records whose year equals `year`, in dataset order.
pub fn records_in_year(records: &[Record], year: f64) -> Vec<&Record> {
    records.iter().filter(|record| record.year == year).collect()
}

/// Returns aggregated points ordered by ascending key, NaN keys last.
#[must_use]
pub fn sorted_by_key(mut points: Vec<AggregatedPoint>) -> Vec<AggregatedPoint> {
    points.sort_by(|lhs, rhs| OrderedFloat(lhs.key).cmp(&OrderedFloat(rhs.key)));
    points
}
