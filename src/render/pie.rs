//! Braille pie chart.  Dots inside the circle are lit; each character cell
//! takes the colour of the slice its centre falls in.  Slices start at
//! three o'clock and run counter-clockwise.

use std::f64::consts::TAU;

use crate::{
    core::{
        color::AnsiCode,
        config::ChartConfig,
        constants::{
            BRAILLE_HORIZONTAL_RESOLUTION as HR, BRAILLE_VERTICAL_RESOLUTION as VR,
            PERCENT_PRECISION,
        },
        error::DashError,
    },
    render::{
        braille::{dot_mask, push_cell},
        frame::PlotBody,
    },
};

#[derive(Clone, Copy, Debug)]
pub struct Slice {
    pub label: &'static str,
    pub value: usize,
    pub color: AnsiCode,
}

/// Share of each slice in percent, `None` when every value is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentages(slices: &[Slice]) -> Option<Vec<f64>> {
    let total: usize = slices.iter().map(|s| s.value).sum();
    if total == 0 {
        return None;
    }
    Some(
        slices
            .iter()
            .map(|s| s.value as f64 * 100.0 / total as f64)
            .collect(),
    )
}

/// `Fraud  12.3% (45)` style legend lines, coloured per slice.
#[must_use]
pub fn legend(slices: &[Slice], cfg: &ChartConfig) -> Vec<String> {
    let Some(pcts) = percentages(slices) else {
        return Vec::new();
    };
    let w = slices.iter().map(|s| s.label.len()).max().unwrap_or(0);
    slices
        .iter()
        .zip(pcts)
        .map(|(s, pct)| {
            format!(
                "{} {:<w$} {:>5.*}% ({})",
                cfg.palette.paint(&s.color, "■"),
                s.label,
                PERCENT_PRECISION,
                pct,
                s.value,
            )
        })
        .collect()
}

/// Index of the slice covering `turn` (0..1 of a full circle).
fn slice_at(bounds: &[f64], turn: f64) -> usize {
    bounds
        .iter()
        .position(|&b| turn < b)
        .unwrap_or(bounds.len().saturating_sub(1))
}

#[allow(clippy::cast_precision_loss)]
pub fn pie_body(slices: &[Slice], cfg: &ChartConfig) -> Result<PlotBody, DashError> {
    let pcts = percentages(slices).ok_or(DashError::EmptyData)?;
    // cumulative upper bound of each slice, as a fraction of a turn
    let bounds: Vec<f64> = pcts
        .iter()
        .scan(0.0, |acc, p| {
            *acc += p / 100.0;
            Some(*acc)
        })
        .collect();

    let (w_px, h_px) = ((cfg.x_chars * HR) as f64, (cfg.y_chars * VR) as f64);
    let (cx, cy) = ((w_px - 1.0) / 2.0, (h_px - 1.0) / 2.0);
    let radius = w_px.min(h_px) / 2.0 - 0.5;
    let inside = |x: f64, y: f64| (x - cx).powi(2) + (y - cy).powi(2) <= radius * radius;

    let p = &cfg.palette;
    let mut rows = Vec::with_capacity(cfg.y_chars);
    for row in 0..cfg.y_chars {
        let mut buf = Vec::with_capacity(cfg.x_chars * 3 + 32);
        let mut current: Option<usize> = None;
        for col in 0..cfg.x_chars {
            let mut mask = 0u8;
            for dy in 0..VR {
                for dx in 0..HR {
                    let (x, y) = ((col * HR + dx) as f64, (row * VR + dy) as f64);
                    if inside(x, y) {
                        mask |= dot_mask(dx, dy);
                    }
                }
            }
            if mask != 0 {
                let (mx, my) = ((col * HR) as f64 + 0.5, (row * VR) as f64 + 1.5);
                let turn = (-(my - cy)).atan2(mx - cx).rem_euclid(TAU) / TAU;
                let idx = slice_at(&bounds, turn);
                if current != Some(idx) {
                    buf.extend_from_slice(p.open(&slices[idx].color).as_bytes());
                    current = Some(idx);
                }
            }
            push_cell(&mut buf, mask);
        }
        if current.is_some() {
            buf.extend_from_slice(p.close().as_bytes());
        }
        rows.push(buf);
    }

    Ok(PlotBody {
        rows,
        axis: None,
        y_precision: None,
    })
}
