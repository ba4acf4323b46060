//! Centralised error types used across the crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Bad `--color` argument.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex colour digit")]
    InvalidHexDigit,
    #[error("hex colour must be exactly 6 digits")]
    InvalidHexLength,
}

/// Faults while turning CSV input into a [`Dataset`](crate::core::data::Dataset).
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("unable to read `{path}`: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error("required columns are missing from the dataset: {}", .missing.join(", "))]
    MissingColumns { missing: Vec<&'static str> },
    #[error("line {line}: invalid {column} value '{text}'")]
    BadNumber {
        line: u64,
        column: &'static str,
        text: String,
    },
}

/// Precise chart configuration faults.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration missing field `{0}`")]
    MissingField(&'static str),
    #[error("y_min {low} must be < y_max {high}")]
    InvalidRange { low: f64, high: f64 },
}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug, Error)]
pub enum DashError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Color(#[from] ColorError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal too small: need ≥{want_w}×{want_h}, got {got_w}×{got_h}")]
    ChartTooSmall {
        want_w: usize,
        want_h: usize,
        got_w: usize,
        got_h: usize,
    },
    #[error("no data set given; pass --file <creditcard.csv> or pipe one on stdin")]
    NoInput,
    #[error("data set is empty")]
    EmptyData,
    #[error("index {index} is out of bounds for a data set of {len} rows")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("{name} {value} must lie within {low}..={high}")]
    InvalidBound {
        name: &'static str,
        value: f64,
        low: f64,
        high: f64,
    },
    #[error("no column named `{0}` in the data set")]
    UnknownColumn(String),
    #[error("unable to write `{}`: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
