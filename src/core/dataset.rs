use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One row of the Gapminder table after numeric coercion.
///
/// Numeric columns are `f64` so a malformed source field can carry NaN
/// through aggregation instead of failing the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub country: String,
    pub continent: String,
    pub year: f64,
    pub life_exp: f64,
    pub pop: f64,
    pub gdp_percap: f64,
}

impl Record {
    #[must_use]
    pub fn new(
        country: impl Into<String>,
        continent: impl Into<String>,
        year: f64,
        life_exp: f64,
        pop: f64,
        gdp_percap: f64,
    ) -> Self {
        Self {
            country: country.into(),
            continent: continent.into(),
            year,
            life_exp,
            pop,
            gdp_percap,
        }
    }
}

/// Immutable, shared collection of records.
///
/// Cloning a `Dataset` clones the handle; every scene reads the same rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Arc<[Record]>,
}

impl Dataset {
    #[must_use]
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records: records.into(),
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn shares_rows_with(&self, other: &Dataset) -> bool {
        Arc::ptr_eq(&self.records, &other.records)
    }
}

impl Deref for Dataset {
    type Target = [Record];

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

impl From<Vec<Record>> for Dataset {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

impl FromIterator<Record> for Dataset {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
