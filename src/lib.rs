//! Public-facing crate root – re-exports + one-shot helper.

pub mod cli;
pub mod core;
pub mod render;

pub use crate::core::{
    analysis::{AmountBand, ClassCounts},
    color::{AnsiCode, Palette, colorize},
    config::{ChartConfig, ChartConfigBuilder},
    data::{ClassLabel, Dataset, Transaction, read_dataset, read_dataset_from_path},
    error::{ColorError, ConfigError, DashError, DatasetError},
    ranges::{IndexRange, contiguous_ranges, format_ranges},
    state::{AppState, Section, Tab},
};

pub use crate::render::{TableView, render_section};

/// Fraud and normal index ranges of a CSV data set, as `"<start> to <end>"`.
pub fn class_range_strings<R: std::io::Read>(
    src: R,
) -> Result<(Vec<String>, Vec<String>), DashError> {
    let ds = read_dataset(src)?;
    Ok((
        format_ranges(&crate::core::analysis::class_ranges(&ds, true)),
        format_ranges(&crate::core::analysis::class_ranges(&ds, false)),
    ))
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn range_strings_per_class() {
        let csv = "Time,Amount,Class\n0,1,1\n1,1,1\n2,1,0\n3,1,1\n";
        let (fraud, normal) = class_range_strings(csv.as_bytes()).unwrap();
        assert_eq!(fraud, ["0 to 1", "3 to 3"]);
        assert_eq!(normal, ["2 to 2"]);
    }
}
