//! Dataset loading: CSV decoding plus numeric coercion of the four
//! measurement columns.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{Dataset, NumericField, Record};
use crate::error::LoadError;

/// Loader behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Rejects the table when a numeric column is blank or does not hold a
    /// finite number, instead of carrying 0 or NaN into the dataset.
    #[serde(default)]
    pub validate_numeric_fields: bool,
    #[serde(default = "default_delimiter")]
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            validate_numeric_fields: false,
            delimiter: default_delimiter(),
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn strict() -> Self {
        Self {
            validate_numeric_fields: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }
}

fn default_delimiter() -> u8 {
    b','
}

#[derive(Debug, Deserialize)]
struct RawRow {
    country: String,
    continent: String,
    year: String,
    #[serde(rename = "lifeExp")]
    life_exp: String,
    pop: String,
    #[serde(rename = "gdpPercap")]
    gdp_percap: String,
}

/// Decodes a table with `country, continent, year, lifeExp, pop, gdpPercap`
/// columns. Extra columns are ignored.
pub fn parse_dataset<R: Read>(reader: R, options: LoadOptions) -> Result<Dataset, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut coerced_nan = 0_usize;
    for (index, row) in csv_reader.deserialize::<RawRow>().enumerate() {
        let row = row?;
        let row_number = index + 1;
        let mut numeric = |column: &'static str, raw: &str| -> Result<f64, LoadError> {
            let value = coerce_numeric(raw);
            let blank = raw.trim().is_empty();
            if options.validate_numeric_fields && (blank || !value.is_finite()) {
                return Err(LoadError::MalformedField {
                    row: row_number,
                    column,
                    value: raw.to_owned(),
                });
            }
            if value.is_nan() {
                coerced_nan += 1;
            }
            Ok(value)
        };

        let year = numeric(NumericField::Year.column(), &row.year)?;
        let life_exp = numeric(NumericField::LifeExp.column(), &row.life_exp)?;
        let pop = numeric(NumericField::Pop.column(), &row.pop)?;
        let gdp_percap = numeric(NumericField::GdpPercap.column(), &row.gdp_percap)?;
        records.push(Record {
            country: row.country,
            continent: row.continent,
            year,
            life_exp,
            pop,
            gdp_percap,
        });
    }

    if coerced_nan > 0 {
        warn!(
            fields = coerced_nan,
            "non-numeric fields coerced to NaN while loading dataset"
        );
    }
    debug!(rows = records.len(), "dataset parsed");
    Ok(Dataset::new(records))
}

/// Reads and decodes a dataset file.
pub fn load_dataset(path: impl AsRef<Path>, options: LoadOptions) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "loading dataset");
    parse_dataset(std::io::BufReader::new(file), options)
}

/// Asynchronous variant of [`load_dataset`]; the caller is suspended only
/// while the file is read.
pub async fn load_dataset_async(
    path: impl AsRef<Path>,
    options: LoadOptions,
) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading dataset");
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_dataset(bytes.as_slice(), options)
}

/// Text-to-number coercion with unary-plus semantics.
///
/// Whitespace is trimmed, an empty field is `0`, decimal and exponent
/// literals parse, `Infinity` is accepted with an optional sign, unsigned
/// `0x` / `0o` / `0b` integers parse in their radix, and anything else is NaN.
#[must_use]
pub fn coerce_numeric(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_integer(trimmed) {
        return value;
    }

    let is_literal = trimmed
        .chars()
        .all(|ch| ch.is_ascii_digit() || matches!(ch, '.' | 'e' | 'E' | '+' | '-'));
    if !is_literal {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// `Some` for a `0x`/`0o`/`0b` prefixed token; NaN when its digits are invalid.
fn parse_radix_integer(token: &str) -> Option<f64> {
    let prefix = token.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };

    let digits = &token[2..];
    if digits.is_empty() {
        return Some(f64::NAN);
    }
    let value = digits.chars().try_fold(0.0_f64, |acc, ch| {
        ch.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    });
    Some(value.unwrap_or(f64::NAN))
}
