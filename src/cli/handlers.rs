use std::{
    io::{BufWriter, IsTerminal, Write, stdin, stdout},
    time::Instant,
};

use crate::{
    core::{
        bounds::Geometry,
        color::{AnsiCode, Palette, colorize},
        data::read_dataset_from_path,
        error::DashError,
        state::{AppState, Section},
    },
    render::render_section,
};

use super::parse::InputArgs;

/// Color only on a real terminal, and never with `--no-color` or `NO_COLOR`.
fn palette(a: &InputArgs) -> Result<Palette, DashError> {
    let accent = AnsiCode::from_name(&a.color)?;
    let enabled =
        !a.no_color && std::env::var_os("NO_COLOR").is_none() && stdout().is_terminal();
    Ok(Palette::new(accent, enabled))
}

/// Reading `-` from an interactive stdin would just block.
fn require_input(file: &str, stdin_is_tty: bool) -> Result<(), DashError> {
    if file == "-" && stdin_is_tty {
        Err(DashError::NoInput)
    } else {
        Ok(())
    }
}

/// Load the data set and draw one section to stdout.
pub fn section(a: &InputArgs, section: &Section) -> Result<(), DashError> {
    require_input(&a.file, stdin().is_terminal())?;
    let palette = palette(a)?;

    let t_ingest = Instant::now();
    let dataset = read_dataset_from_path(&a.file)?;
    log::info!(
        "CSV ingest: {} µs   ({} rows)",
        t_ingest.elapsed().as_micros(),
        dataset.len()
    );

    let state = AppState::new(dataset, palette, Geometry::detect());
    log::debug!("terminal {:?}", state.geometry);

    let mut out = BufWriter::new(stdout().lock());
    render_section(&state, section, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Pretty-print available color names + an example hex code.
pub fn colors() {
    println!("\nPossible colors:");
    println!("{}", colorize(&AnsiCode::red(), "red"));
    println!("{}", colorize(&AnsiCode::green(), "green"));
    println!("{}", colorize(&AnsiCode::yellow(), "yellow"));
    println!("{}", colorize(&AnsiCode::blue(), "blue"));
    println!("{}", colorize(&AnsiCode::magenta(), "magenta"));
    println!("{}", colorize(&AnsiCode::cyan(), "cyan"));
    println!("{}", colorize(&AnsiCode::white(), "white"));
    println!(
        "{}",
        colorize(&AnsiCode::industrial_orange(), "orange | industrial")
    );
    println!(
        "{}  (#505050 or any other #RRGGBB)\n",
        colorize(&AnsiCode::rgb(0x50, 0x50, 0x50), "#505050")
    );
}

/// Print handy invocations for new users.
pub fn examples() {
    let bin = "txn-dash";
    println!(
        "
Example invocations
-------------------
• Preview + totals    : {bin} -f creditcard.csv upload
• Pick columns        : {bin} -f creditcard.csv upload --columns Time,Amount,Class
• Counts and ranges   : {bin} -f creditcard.csv overview
• Rows 100 to 120     : {bin} -f creditcard.csv index --start 100 --end 120
• Fraud per hour      : {bin} -f creditcard.csv visualize hourly --color #6048c1
• Amount filter       : {bin} -f creditcard.csv visualize amount --min 10 --max 250
• ... and export it   : {bin} -f creditcard.csv visualize amount --max 250 --export
• Class pie chart     : {bin} -f creditcard.csv visualize pie
• From stdin, verbose : cat creditcard.csv | {bin} -v overview
"
    );
}
