//! Box-drawn table preview that fits the terminal width.

use std::io::Write;

use crate::core::{
    color::{AnsiCode, Palette},
    constants::MAX_CELL_WIDTH,
    data::Dataset,
};

/// Rows and columns to show from a [`Dataset`].
#[derive(Debug)]
pub struct TableView<'a> {
    pub dataset: &'a Dataset,
    /// Row indices, in display order.
    pub rows: Vec<usize>,
    /// Column positions within `Dataset::display_headers`.
    pub columns: Vec<usize>,
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_owned();
    }
    let mut s: String = text.chars().take(width.saturating_sub(1)).collect();
    s.push('…');
    s
}

fn rule(widths: &[usize], left: &str, mid: &str, right: &str) -> String {
    let parts: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
    format!("{left}{}{right}\n", parts.join(mid))
}

impl TableView<'_> {
    /// Write the table, dropping trailing columns that do not fit in `max_width`.
    pub fn render<W: Write>(&self, out: &mut W, max_width: usize, palette: &Palette) -> std::io::Result<()> {
        let headers = self.dataset.display_headers();
        let index_w = self
            .rows
            .iter()
            .map(|r| r.to_string().len())
            .max()
            .unwrap_or(1);

        // (header, width, cells) per column that fits
        let mut used = index_w + 4; // "│ " + index + " │"
        let mut cols = Vec::new();
        for &c in &self.columns {
            let name = headers.get(c).copied().unwrap_or_default();
            let cells: Vec<String> = self
                .rows
                .iter()
                .map(|&r| clip(&self.dataset.cell(r, c).unwrap_or_default(), MAX_CELL_WIDTH))
                .collect();
            let w = cells
                .iter()
                .map(|s| s.chars().count())
                .chain(std::iter::once(clip(name, MAX_CELL_WIDTH).chars().count()))
                .max()
                .unwrap_or(1);
            if used + w + 3 > max_width && !cols.is_empty() {
                break;
            }
            used += w + 3;
            cols.push((clip(name, MAX_CELL_WIDTH), w, cells));
        }
        let hidden = self.columns.len() - cols.len();

        let widths: Vec<usize> = std::iter::once(index_w)
            .chain(cols.iter().map(|(_, w, _)| *w))
            .collect();

        out.write_all(rule(&widths, "┌", "┬", "┐").as_bytes())?;

        let mut line = format!("│ {:>index_w$} │", "");
        for (name, w, _) in &cols {
            let pad = w - name.chars().count();
            line.push_str(&format!(
                " {}{} │",
                " ".repeat(pad),
                palette.paint(&AnsiCode::bold(), name)
            ));
        }
        line.push('\n');
        out.write_all(line.as_bytes())?;
        out.write_all(rule(&widths, "├", "┼", "┤").as_bytes())?;

        for (i, r) in self.rows.iter().enumerate() {
            let mut line = format!("│ {r:>index_w$} │");
            for (_, w, cells) in &cols {
                let cell = &cells[i];
                let pad = w - cell.chars().count();
                line.push_str(&format!(" {}{cell} │", " ".repeat(pad)));
            }
            line.push('\n');
            out.write_all(line.as_bytes())?;
        }
        out.write_all(rule(&widths, "└", "┴", "┘").as_bytes())?;

        if hidden > 0 {
            writeln!(out, "… {hidden} more columns not shown (pick some with --columns)")?;
        }
        Ok(())
    }
}
