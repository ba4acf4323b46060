//! Aggregates the “business logic” layer.

pub mod analysis;
pub mod bounds;
pub mod color;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod export;
pub mod ranges;
pub mod state;

// re-export frequently-used items for convenience
pub use analysis::{AmountBand, ClassCounts};
pub use bounds::Geometry;
pub use color::{AnsiCode, Palette, colorize};
pub use config::{ChartConfig, ChartConfigBuilder};
pub use data::{ClassLabel, Dataset, Transaction};
pub use error::{ColorError, ConfigError, DashError, DatasetError};
pub use ranges::{IndexRange, contiguous_ranges, format_ranges};
pub use state::{AppState, Section, Tab};
