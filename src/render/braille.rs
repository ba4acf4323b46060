//! Bar heights to UTF-8 braille cells, no intermediate glyph strings.
//!
//! ### Workflow
//! 1. `bars_to_braille` maps every bar to pixel-space spans (`PixelSpan`),
//!    one entry per *half* column; gaps between bars stay `None`.
//! 2. `encode_row` appends one text row to a byte buffer, three bytes per
//!    character cell.  Every braille scalar U+2800..U+28FF encodes to the
//!    fixed pattern `E2 A0+((mask>>6)&3) 80|mask&0x3F`, so we write bytes
//!    directly without `char::encode_utf8`.
//!
//! The intersection of a contiguous vertical span with a 4-pixel braille
//! cell is always one of 11 canonical patterns (full, top/bottom triplet,
//! three pairs, four single dots, empty).  The bit-mask for each pattern is
//! pre-computed for the left and right half-columns.

use crate::core::{
    config::ChartConfig,
    constants::{BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_VERTICAL_RESOLUTION as VR},
    error::DashError,
};

/// Inclusive pixel rows lit in one half-column; row 0 is the top.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelSpan {
    pub top: usize,
    pub bottom: usize,
}

#[derive(Debug)]
pub struct BraillePlot {
    /// `x_chars * 2` entries.
    pub columns: Vec<Option<PixelSpan>>,
    pub x_chars: usize,
    pub y_chars: usize,
}

// --- Pre-Computed Masks ---

/// Pattern enumeration (11 entries):
///
/// 0 empty (⠀), 1 full (⡇), 2 top-three (⠇), 3 bottom-three(⡆), 4 top-two (⠃), 5 middle-two (⠆), 6 bottom-two (⡄),
/// 7 dot-zero (⠁), 8 dot-one (⠂), 9 dot-two (⠄), 10 dot-three (⡀)
const LEFT_MASKS: [u8; 11] = [
    0x00, 0x47, 0x07, 0x46, 0x03, 0x06, 0x44, 0x01, 0x02, 0x04, 0x40,
];
/// Pattern enumeration (11 entries):
///
/// 0 empty (⠀), 1 full (⢸), 2 top-three (⠸), 3 bottom-three(⢰), 4 top-two (⠘), 5 middle-two (⠰), 6 bottom-two (⢠),
/// 7 dot-zero (⠈), 8 dot-one (⠐), 9 dot-two (⠠), 10 dot-three (⢀)
const RIGHT_MASKS: [u8; 11] = [
    0x00, 0xB8, 0x38, 0xB0, 0x18, 0x30, 0xA0, 0x08, 0x10, 0x20, 0x80,
];

/// First single-dot entry in the mask tables.
const SINGLE_DOT: usize = 7;

/// Map `(low, high)` --- pixel offsets inside a 4-row cell --- to the pattern id.
#[inline]
const fn pattern_id(low: usize, high: usize) -> usize {
    match (low, high) {
        (0, 3) => 1,  // full
        (0, 2) => 2,  // top-3
        (1, 3) => 3,  // bottom-3
        (0, 1) => 4,  // top-2
        (1, 2) => 5,  // middle-2
        (2, 3) => 6,  // bottom-2
        (0, 0) => 7,  // single-0
        (1, 1) => 8,  // single-1
        (2, 2) => 9,  // single-2
        (3, 3) => 10, // single-3
        _ => 0,       // empty / no overlap
    }
}

/// Bit of the dot at column `dx` (0..2), row `dy` (0..4) of a cell.
#[inline]
#[must_use]
pub const fn dot_mask(dx: usize, dy: usize) -> u8 {
    if dx == 0 {
        LEFT_MASKS[SINGLE_DOT + dy]
    } else {
        RIGHT_MASKS[SINGLE_DOT + dy]
    }
}

/// Append the three UTF-8 bytes of braille cell `mask`.
/// https://en.wikipedia.org/wiki/Braille_Patterns
#[inline]
pub fn push_cell(buf: &mut Vec<u8>, mask: u8) {
    // most significant two bits: the nonstandard bottom dots
    // least significant six bits: the normal six dots
    buf.extend_from_slice(&[0xE2, 0xA0 | ((mask >> 6) & 0x03), 0x80 | (mask & 0x3F)]);
}

/// Lay `counts` out as vertical bars, `slot` characters per bar with a
/// one-half-column gap on the right of each.
#[allow(clippy::cast_precision_loss)]
pub fn bars_to_braille(
    counts: &[usize],
    cfg: &ChartConfig,
    slot: usize,
) -> Result<BraillePlot, DashError> {
    if counts.is_empty() {
        return Err(DashError::EmptyData);
    }

    let vert_px = cfg.y_chars * VR;
    let y_span = cfg.y_max - cfg.y_min; // > 0 by construction

    // λ : ℝ → [0,vert_px-1]
    let map = |y: f64| -> usize {
        let r = ((y - cfg.y_min) / y_span).clamp(0.0, 1.0) * (vert_px - 1) as f64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let r = r.round() as usize;
        (vert_px - 1) - r
    };

    let half_cols = slot * HR;
    let mut columns = vec![None; cfg.x_chars * HR];
    for (i, &n) in counts.iter().enumerate() {
        if n == 0 {
            continue;
        }
        let span = PixelSpan {
            top: map(n as f64),
            bottom: vert_px - 1,
        };
        for c in columns.iter_mut().skip(i * half_cols).take(half_cols - 1) {
            *c = Some(span);
        }
    }

    Ok(BraillePlot {
        columns,
        x_chars: cfg.x_chars,
        y_chars: cfg.y_chars,
    })
}

#[inline]
fn half_pattern(span: Option<&Option<PixelSpan>>, row_top: usize, row_bottom: usize) -> usize {
    match span {
        Some(Some(s)) if s.bottom >= row_top && s.top <= row_bottom => pattern_id(
            s.top.max(row_top) - row_top,
            s.bottom.min(row_bottom) - row_top,
        ),
        _ => 0,
    }
}

/// Append character row `row` of `plot` to `buf`.
pub fn encode_row(buf: &mut Vec<u8>, plot: &BraillePlot, row: usize) {
    debug_assert!(row < plot.y_chars, "row out of range");

    let row_top = row * VR;
    let row_bottom = row_top + VR - 1;
    buf.reserve(plot.x_chars * 3);

    for col in 0..plot.x_chars {
        let left = col * HR;
        let lp = half_pattern(plot.columns.get(left), row_top, row_bottom);
        let rp = half_pattern(plot.columns.get(left + 1), row_top, row_bottom);
        push_cell(buf, LEFT_MASKS[lp] | RIGHT_MASKS[rp]);
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use test_log::test;

    fn cfg(x: usize, y: usize, max: f64) -> ChartConfig {
        ChartConfig::builder(x, y).y_range(0.0..=max).build().unwrap()
    }

    fn row_text(plot: &BraillePlot, row: usize) -> String {
        let mut buf = Vec::new();
        encode_row(&mut buf, plot, row);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn cell_bytes_are_valid_braille() {
        let mut buf = Vec::new();
        push_cell(&mut buf, 0xFF);
        push_cell(&mut buf, 0x00);
        assert_eq!(String::from_utf8(buf).unwrap(), "⣿⠀");
        assert_eq!(dot_mask(0, 3), 0x40);
        assert_eq!(dot_mask(1, 0), 0x08);
    }

    #[test]
    fn full_bar_fills_every_row() {
        // one bar of slot 1: left half lit, right half is the gap
        let plot = bars_to_braille(&[4], &cfg(1, 2, 4.0), 1).unwrap();
        assert_eq!(row_text(&plot, 0), "⡇");
        assert_eq!(row_text(&plot, 1), "⡇");
    }

    #[test]
    fn zero_bars_stay_empty_and_half_bars_reach_midway() {
        let plot = bars_to_braille(&[0, 3, 7], &cfg(6, 2, 7.0), 2).unwrap();
        // bar 0 blank, bar 1 bottom row only, bar 2 both rows
        assert_eq!(row_text(&plot, 0), "⠀⠀⠀⠀⣿⡇");
        assert_eq!(row_text(&plot, 1), "⠀⠀⣿⡇⣿⡇");
    }

    #[test]
    fn empty_counts_are_an_error() {
        assert!(matches!(
            bars_to_braille(&[], &cfg(4, 2, 1.0), 1),
            Err(DashError::EmptyData)
        ));
    }
}
