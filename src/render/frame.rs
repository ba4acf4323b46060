//! Box-drawing frame around a chart body:
//! - centred title in the top rule, optional subtitle in the bottom rule
//! - y labels on the first and last plot row
//! - optional axis line under the plot

use std::io::Write;

use crate::core::{
    bounds::y_label_width,
    color::{AnsiCode, Palette},
    config::ChartConfig,
    constants::{BORDER_WIDTH, LABEL_GUTTER, MIN_GRAPH_HEIGHT, MIN_GRAPH_WIDTH},
    error::DashError,
};

/// Two spaces in front, one space behind
const TITLE_PADDING: usize = 3;

// Box-drawing glyphs
const TL: &str = "┌";
const TR: &str = "┐";
const BL: &str = "└";
const BR: &str = "┘";
const H: &str = "─";
const V: &str = "│";

/// What goes inside the frame.
#[derive(Debug, Default)]
pub struct PlotBody {
    /// One entry per plot row, exactly `x_chars` visible cells each
    /// (colour escapes allowed).
    pub rows: Vec<Vec<u8>>,
    /// Plain text under the plot, at most `x_chars` wide.
    pub axis: Option<String>,
    /// Decimals for the y labels; `None` draws no labels.
    pub y_precision: Option<usize>,
}

// --- Helpers ---

/// Write centred coloured text between horizontal rules.
fn push_centered(buf: &mut String, text: &str, width: usize, color: &AnsiCode, palette: &Palette) {
    let inner = width.saturating_sub(TITLE_PADDING);
    let len = text.chars().count();
    if len == 0 || len > inner {
        buf.push_str(&H.repeat(width));
        return;
    }
    let pad_left = (inner - len) / 2;
    let pad_right = inner - len - pad_left;

    buf.push_str(&H.repeat(pad_left));
    buf.push_str("  "); // 2-char left padding
    buf.push_str(&palette.paint(color, text));
    buf.push(' '); // 1-char right padding
    buf.push_str(&H.repeat(pad_right));
}

fn blank_line(inner: usize) -> String {
    format!("{V}{}{V}\n", " ".repeat(inner))
}

/// Render `body` inside the chart frame described by `cfg`.
pub fn render_frame<W: Write>(
    out: &mut W,
    cfg: &ChartConfig,
    body: &PlotBody,
) -> Result<(), DashError> {
    if cfg.x_chars < MIN_GRAPH_WIDTH || cfg.y_chars < MIN_GRAPH_HEIGHT {
        return Err(DashError::ChartTooSmall {
            want_w: MIN_GRAPH_WIDTH,
            want_h: MIN_GRAPH_HEIGHT,
            got_w: cfg.x_chars,
            got_h: cfg.y_chars,
        });
    }

    let (high_label, low_label, label_width) = match body.y_precision {
        Some(p) => (
            format!("{:.*}", p, cfg.y_max),
            format!("{:.*}", p, cfg.y_min),
            y_label_width((cfg.y_min, cfg.y_max), p),
        ),
        None => (String::new(), String::new(), 0),
    };
    let line_len = cfg.x_chars + label_width + LABEL_GUTTER + BORDER_WIDTH;
    let inner = line_len - BORDER_WIDTH;
    let palette = &cfg.palette;

    // --- top ---
    let mut top = String::new();
    top.push_str(TL);
    push_centered(&mut top, &cfg.title, inner, &palette.accent, palette);
    top.push_str(TR);
    top.push('\n');
    top.push_str(&blank_line(inner));
    out.write_all(top.as_bytes())?;

    // --- plot rows ---
    let last = cfg.y_chars - 1;
    for r in 0..cfg.y_chars {
        let label = match r {
            0 => high_label.as_str(),
            r if r == last => low_label.as_str(),
            _ => "",
        };
        let mut row = format!("{V}{label:>label_width$}{}", " ".repeat(LABEL_GUTTER));
        if let Some(cells) = body.rows.get(r) {
            out.write_all(row.as_bytes())?;
            out.write_all(cells)?;
            row.clear();
        } else {
            row.push_str(&" ".repeat(cfg.x_chars));
        }
        row.push_str(V);
        row.push('\n');
        out.write_all(row.as_bytes())?;
    }

    // --- bottom ---
    let mut bot = String::new();
    if let Some(axis) = &body.axis {
        let gutter = label_width + LABEL_GUTTER;
        bot.push_str(&format!("{V}{}{axis:<w$}{V}\n", " ".repeat(gutter), w = cfg.x_chars));
    } else {
        bot.push_str(&blank_line(inner));
    }
    bot.push_str(BL);
    if let Some(sub) = &cfg.subtitle {
        push_centered(&mut bot, sub, inner, &palette.accent, palette);
    } else {
        bot.push_str(&H.repeat(inner));
    }
    bot.push_str(BR);
    bot.push('\n');
    out.write_all(bot.as_bytes())?;
    Ok(())
}
