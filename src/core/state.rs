//! Everything one render needs, passed around explicitly.

use std::path::PathBuf;

use crate::core::{bounds::Geometry, color::Palette, data::Dataset};

/// Which view to draw.
#[derive(Clone, Debug, PartialEq)]
pub enum Section {
    /// Preview of the loaded data plus row/column totals.
    Upload { columns: Option<Vec<String>> },
    /// Class counts and contiguous index ranges per class.
    Overview,
    /// Rows `start..=end`; `end = None` means "default, clamped to the data".
    IndexViewer { start: usize, end: Option<usize> },
    Visualize(Tab),
}

/// Chart tabs of [`Section::Visualize`].
#[derive(Clone, Debug, PartialEq)]
pub enum Tab {
    Hourly,
    /// `max = None` means "default, clamped to the largest amount".
    Amount {
        min: f64,
        max: Option<f64>,
        export: Option<PathBuf>,
    },
    Pie,
}

/// Loaded data plus display settings for a single invocation.
#[derive(Debug)]
pub struct AppState {
    pub dataset: Dataset,
    pub palette: Palette,
    pub geometry: Geometry,
}

impl AppState {
    #[must_use]
    pub fn new(dataset: Dataset, palette: Palette, geometry: Geometry) -> Self {
        Self {
            dataset,
            palette,
            geometry,
        }
    }
}
