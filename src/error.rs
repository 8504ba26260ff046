use std::path::PathBuf;

use thiserror::Error;

pub type SceneResult<T> = Result<T, SceneError>;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to fetch or decode the source table.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset table: {0}")]
    Csv(#[from] csv::Error),

    #[error("row {row}: column `{column}` is not numeric: {value:?}")]
    MalformedField {
        row: usize,
        column: &'static str,
        value: String,
    },
}
