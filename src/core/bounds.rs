//! Geometry helpers: terminal size plumbing and chart sizing.

use terminal_size::{Height, Width, terminal_size};

use crate::core::constants::{
    BORDER_WIDTH, LABEL_GUTTER, MAX_BAR_SLOT, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH,
};

/// Terminal size in character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub cols: usize,
    pub rows: usize,
}

impl Geometry {
    /// Current terminal geometry (80×30 fallback, e.g. when piped).
    #[must_use]
    pub fn detect() -> Self {
        let (Width(w), Height(h)) = terminal_size().unwrap_or((Width(80), Height(30)));
        Self {
            cols: usize::from(w),
            rows: usize::from(h),
        }
    }

    /// Columns left for the plot once borders, y labels and gutter are drawn.
    #[inline]
    #[must_use]
    pub fn plot_cols(&self, label_width: usize) -> usize {
        self.cols
            .saturating_sub(BORDER_WIDTH + LABEL_GUTTER + label_width + 1)
    }

    /// Rows left for the plot once chrome and the axis line are drawn.
    #[inline]
    #[must_use]
    pub fn plot_rows(&self) -> usize {
        std::cmp::max(MIN_GRAPH_HEIGHT, self.rows.saturating_sub(8))
    }
}

/// Characters per bar for `bars` bars in `plot_cols` columns, clamped to `1..=MAX_BAR_SLOT`.
#[inline]
#[must_use]
pub fn bar_slot(plot_cols: usize, bars: usize) -> usize {
    if bars == 0 {
        return MAX_BAR_SLOT;
    }
    (plot_cols / bars).clamp(1, MAX_BAR_SLOT)
}

/// Plot area of a bar chart: `(x_chars, y_chars)`.
#[inline]
#[must_use]
pub fn bar_dims(geo: Geometry, bars: usize, label_width: usize) -> (usize, usize) {
    let slot = bar_slot(geo.plot_cols(label_width), bars);
    let x_chars = std::cmp::max(MIN_GRAPH_WIDTH, slot * bars);
    (x_chars, geo.plot_rows().min(16))
}

/// Plot area of the pie chart; braille dots are roughly square, so a
/// `2h`-wide, `h`-tall cell grid is round.
#[inline]
#[must_use]
pub fn pie_dims(geo: Geometry) -> (usize, usize) {
    let y_chars = geo.plot_rows().min(12);
    let x_chars = std::cmp::max(MIN_GRAPH_WIDTH, 2 * y_chars);
    (x_chars, y_chars)
}

/// How wide will the y-axis labels be for *current* min/max?
#[inline]
#[must_use]
pub fn y_label_width(y_range: (f64, f64), decimals: usize) -> usize {
    let (low, high) = y_range;
    let lo = format!("{low:.decimals$}").len();
    let hi = format!("{high:.decimals$}").len();
    lo.max(hi)
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    #[test]
    fn bars_get_at_most_three_columns() {
        assert_eq!(bar_slot(200, 24), 3);
        assert_eq!(bar_slot(50, 24), 2);
        assert_eq!(bar_slot(10, 24), 1);
        let geo = Geometry { cols: 80, rows: 30 };
        assert_eq!(bar_dims(geo, 24, 3), (72, 16));
    }

    #[test]
    fn pie_is_twice_as_wide_as_tall() {
        let (w, h) = pie_dims(Geometry { cols: 80, rows: 30 });
        assert_eq!((w, h), (24, 12));
    }

    #[test]
    fn label_width_tracks_the_wider_bound() {
        assert_eq!(y_label_width((0.0, 1234.0), 0), 4);
        assert_eq!(y_label_width((-5.0, 1.0), 1), 4);
    }
}
