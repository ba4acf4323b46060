//! Vertical bar chart: braille bars plus a label row under them.

use crate::{
    core::{config::ChartConfig, constants::COUNT_PRECISION, error::DashError},
    render::{
        braille::{bars_to_braille, encode_row},
        frame::PlotBody,
    },
};

/// Labels under their bars, skipping any that would touch the previous one.
#[must_use]
pub fn axis_line(labels: &[String], slot: usize, width: usize) -> String {
    let mut line = vec![' '; width];
    let mut next_free = 0;
    for (i, label) in labels.iter().enumerate() {
        let col = i * slot;
        let len = label.chars().count();
        if col < next_free || col + len > width {
            continue;
        }
        for (dst, ch) in line[col..col + len].iter_mut().zip(label.chars()) {
            *dst = ch;
        }
        next_free = col + len + 1;
    }
    line.into_iter().collect::<String>().trim_end().to_owned()
}

/// Body of a bar chart of `counts`, `slot` characters per bar.
pub fn bar_body(
    counts: &[usize],
    labels: &[String],
    cfg: &ChartConfig,
    slot: usize,
) -> Result<PlotBody, DashError> {
    let plot = bars_to_braille(counts, cfg, slot)?;
    let p = &cfg.palette;

    let rows = (0..cfg.y_chars)
        .map(|r| {
            let mut buf = Vec::with_capacity(cfg.x_chars * 3 + 16);
            buf.extend_from_slice(p.open(&p.accent).as_bytes());
            encode_row(&mut buf, &plot, r);
            buf.extend_from_slice(p.close().as_bytes());
            buf
        })
        .collect();

    Ok(PlotBody {
        rows,
        axis: Some(axis_line(labels, slot, cfg.x_chars)),
        y_precision: Some(COUNT_PRECISION),
    })
}
