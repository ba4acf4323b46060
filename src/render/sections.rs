//! One function per dashboard section; each writes its whole view to `out`.

use std::{io::Write, path::Path};

use crate::{
    core::{
        analysis::{
            AmountBand, ClassCounts, class_ranges, filter_by_amount, hourly_fraud, index_window,
        },
        bounds::{bar_dims, bar_slot, pie_dims, y_label_width},
        color::AnsiCode,
        config::ChartConfig,
        constants::{
            COUNT_PRECISION, DEFAULT_AMOUNT_MAX, DEFAULT_VIEW_END, HOURS_PER_DAY, PREVIEW_ROWS,
        },
        error::DashError,
        export::export_rows,
        ranges::format_ranges,
        state::{AppState, Section, Tab},
    },
    render::{
        bar::bar_body,
        frame::render_frame,
        pie::{Slice, legend, pie_body},
        table::TableView,
    },
};

pub fn render_section<W: Write>(
    state: &AppState,
    section: &Section,
    out: &mut W,
) -> Result<(), DashError> {
    log::debug!("rendering {section:?}");
    match section {
        Section::Upload { columns } => upload(state, columns.as_deref(), out),
        Section::Overview => overview(state, out),
        Section::IndexViewer { start, end } => index_viewer(state, *start, *end, out),
        Section::Visualize(Tab::Hourly) => hourly(state, out),
        Section::Visualize(Tab::Amount { min, max, export }) => {
            amount(state, *min, *max, export.as_deref(), out)
        }
        Section::Visualize(Tab::Pie) => pie(state, out),
    }
}

// --- Helpers ---

fn heading<W: Write>(state: &AppState, out: &mut W, text: &str) -> std::io::Result<()> {
    let p = &state.palette;
    writeln!(out, "{}", p.paint(&AnsiCode::bold(), text))
}

fn warn<W: Write>(state: &AppState, out: &mut W, text: &str) -> std::io::Result<()> {
    log::info!("{text}");
    writeln!(out, "{}", state.palette.paint(&AnsiCode::yellow(), &format!("⚠ {text}")))
}

fn all_columns(state: &AppState) -> Vec<usize> {
    (0..state.dataset.column_count()).collect()
}

fn preview<W: Write>(
    state: &AppState,
    rows: Vec<usize>,
    columns: Vec<usize>,
    out: &mut W,
) -> std::io::Result<()> {
    let total = rows.len();
    let shown: Vec<usize> = rows.into_iter().take(PREVIEW_ROWS).collect();
    let view = TableView {
        dataset: &state.dataset,
        rows: shown,
        columns,
    };
    view.render(out, state.geometry.cols, &state.palette)?;
    if total > PREVIEW_ROWS {
        writeln!(out, "(showing first {PREVIEW_ROWS} of {total} rows)")?;
    }
    Ok(())
}

// --- Sections ---

fn upload<W: Write>(
    state: &AppState,
    columns: Option<&[String]>,
    out: &mut W,
) -> Result<(), DashError> {
    let ds = &state.dataset;
    let columns = match columns {
        None => all_columns(state),
        Some(names) => names
            .iter()
            .map(|n| {
                ds.column_position(n)
                    .ok_or_else(|| DashError::UnknownColumn(n.clone()))
            })
            .collect::<Result<_, _>>()?,
    };

    let p = &state.palette;
    writeln!(out, "{}", p.paint(&p.normal, "✔ Dataset loaded successfully!"))?;
    writeln!(out)?;
    heading(state, out, "Full Dataset Preview")?;
    preview(state, (0..ds.len()).collect(), columns, out)?;
    writeln!(out, "Total Rows: {}", ds.len())?;
    writeln!(out, "Total Columns: {}", ds.column_count())?;
    Ok(())
}

fn overview<W: Write>(state: &AppState, out: &mut W) -> Result<(), DashError> {
    let ds = &state.dataset;
    let p = &state.palette;
    let counts = ClassCounts::of(ds);

    heading(state, out, "Summary Statistics")?;
    writeln!(out, "  {} {}", p.paint(&p.fraud, "Fraud Transactions: "), counts.fraud)?;
    writeln!(out, "  {} {}", p.paint(&p.normal, "Normal Transactions:"), counts.normal)?;
    writeln!(out)?;

    heading(state, out, "Transaction Index Ranges")?;
    for (fraud, title, none) in [
        (true, "Fraud Transaction Ranges", "No fraud transactions found."),
        (false, "Normal Transaction Ranges", "No normal transactions found."),
    ] {
        let color = if fraud { &p.fraud } else { &p.normal };
        writeln!(out, "{}", p.paint(color, title))?;
        let lines = format_ranges(&class_ranges(ds, fraud));
        if lines.is_empty() {
            writeln!(out, "  {none}")?;
        }
        for line in lines {
            writeln!(out, "  {line}")?;
        }
    }
    Ok(())
}

fn index_viewer<W: Write>(
    state: &AppState,
    start: usize,
    end: Option<usize>,
    out: &mut W,
) -> Result<(), DashError> {
    let ds = &state.dataset;
    let end = end.unwrap_or_else(|| DEFAULT_VIEW_END.min(ds.len().saturating_sub(1)));
    let rows = index_window(ds, start, end)?;

    heading(state, out, "View Transactions by Index Range")?;
    if start > end {
        warn(state, out, "End index must be greater than or equal to start index.")?;
        return Ok(());
    }

    writeln!(out, "Showing transactions from index {start} to {end}")?;
    preview(state, (start..=end).collect(), all_columns(state), out)?;
    writeln!(out)?;

    heading(state, out, "Transaction Fraud Status")?;
    let p = &state.palette;
    for t in rows {
        let (color, status) = if t.class.is_fraud() {
            (&p.fraud, "FRAUD")
        } else {
            (&p.normal, "NORMAL")
        };
        writeln!(out, "{} Row {}: {status} transaction", p.paint(color, "●"), t.index)?;
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn hourly<W: Write>(state: &AppState, out: &mut W) -> Result<(), DashError> {
    heading(state, out, "Hourly Distribution of Fraud Transactions")?;
    let hist = hourly_fraud(&state.dataset);
    let Some(&peak) = hist.iter().max().filter(|&&m| m > 0) else {
        writeln!(out, "No fraud transactions found.")?;
        return Ok(());
    };

    let y_max = peak as f64;
    let label_w = y_label_width((0.0, y_max), COUNT_PRECISION);
    let (x_chars, y_chars) = bar_dims(state.geometry, HOURS_PER_DAY, label_w);
    let slot = bar_slot(state.geometry.plot_cols(label_w), HOURS_PER_DAY);

    let cfg = ChartConfig::builder(x_chars, y_chars)
        .title("Fraud transactions per hour")
        .subtitle("hour of day")
        .y_range(0.0..=y_max)
        .palette(state.palette)
        .build()?;

    let labels: Vec<String> = (0..HOURS_PER_DAY).map(|h| format!("{h:02}")).collect();
    let body = bar_body(&hist, &labels, &cfg, slot)?;
    render_frame(out, &cfg, &body)
}

fn amount<W: Write>(
    state: &AppState,
    min: f64,
    max: Option<f64>,
    export: Option<&Path>,
    out: &mut W,
) -> Result<(), DashError> {
    let ds = &state.dataset;
    let max = max.unwrap_or_else(|| {
        ds.max_amount()
            .map_or(DEFAULT_AMOUNT_MAX, |m| DEFAULT_AMOUNT_MAX.min(m))
    });
    let band = AmountBand::checked(min, max, ds)?;

    heading(state, out, "Filter by Transaction Amount")?;
    if band.is_inverted() {
        warn(state, out, "Maximum amount must be greater than or equal to minimum amount.")?;
        return Ok(());
    }

    let hits = filter_by_amount(ds, band);
    writeln!(out, "Filtered {} transactions in amount range", hits.len())?;
    preview(state, hits.iter().map(|t| t.index).collect(), all_columns(state), out)?;

    if let Some(path) = export {
        let n = export_rows(ds, &hits, path)?;
        writeln!(out, "Exported {n} rows to {}", path.display())?;
    }
    Ok(())
}

fn pie<W: Write>(state: &AppState, out: &mut W) -> Result<(), DashError> {
    heading(state, out, "Class Distribution Pie Chart")?;
    let counts = ClassCounts::of(&state.dataset);
    let p = &state.palette;
    let slices = [
        Slice {
            label: "Fraud",
            value: counts.fraud,
            color: p.fraud,
        },
        Slice {
            label: "Normal",
            value: counts.normal,
            color: p.normal,
        },
    ];

    let (x_chars, y_chars) = pie_dims(state.geometry);
    let cfg = ChartConfig::builder(x_chars, y_chars)
        .title("Class split")
        .y_range(0.0..=1.0)
        .palette(state.palette)
        .build()?;

    let body = pie_body(&slices, &cfg)?;
    render_frame(out, &cfg, &body)?;
    for line in legend(&slices, &cfg) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
