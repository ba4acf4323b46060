//! A collection of constants.

/// Columns every dataset must provide.
pub const COL_TIME: &str = "Time";
pub const COL_CLASS: &str = "Class";
pub const COL_AMOUNT: &str = "Amount";
/// Derived from `Time`, appended to previews and exports.
pub const COL_HOUR: &str = "Hour";

pub const REQUIRED_COLUMNS: [&str; 3] = [COL_TIME, COL_CLASS, COL_AMOUNT];

pub const SECONDS_PER_HOUR: f64 = 3600.0;
pub const HOURS_PER_DAY: usize = 24;

/// Tables never show more than this many rows.
pub const PREVIEW_ROWS: usize = 500;
/// Cells wider than this are cut and end in `…`
pub const MAX_CELL_WIDTH: usize = 12;

/// Index viewer opens on `0..=10` unless told otherwise
pub const DEFAULT_VIEW_START: usize = 0;
pub const DEFAULT_VIEW_END: usize = 10;

pub const DEFAULT_AMOUNT_MIN: f64 = 0.0;
pub const DEFAULT_AMOUNT_MAX: f64 = 1000.0;
pub const DEFAULT_EXPORT_FILE: &str = "filtered_data.csv";

/// The left and right border characters
pub const BORDER_WIDTH: usize = 2;
/// One character of space between y axis labels and the plotted data
pub const LABEL_GUTTER: usize = 1;

/// Chart must be at least 7 characters tall
pub const MIN_GRAPH_HEIGHT: usize = 7;
/// Chart must be at least 14 characters wide
pub const MIN_GRAPH_WIDTH: usize = 14;

/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_HORIZONTAL_RESOLUTION: usize = 2;
/// Braille has 2 horizontal dots and four vertical dots that can be either off or on
pub const BRAILLE_VERTICAL_RESOLUTION: usize = 4;

/// Widest slot a single bar gets, in characters.
pub const MAX_BAR_SLOT: usize = 3;

/// Counts are integers.
pub const COUNT_PRECISION: usize = 0;
/// Percentages carry one decimal: 12.3%
pub const PERCENT_PRECISION: usize = 1;
