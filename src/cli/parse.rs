use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::{
    constants::{DEFAULT_AMOUNT_MIN, DEFAULT_EXPORT_FILE, DEFAULT_VIEW_START},
    state::{Section, Tab},
};

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "txn-dash",
    version,
    about = "Explore a card-transaction CSV: counts, index ranges and braille charts"
)]
pub struct Cli {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub logging: LoggingArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Preview the data set and report its size
    Upload(UploadArgs),
    /// Fraud / normal counts and their index ranges
    Overview,
    /// Show the rows in an index range with their fraud status
    Index(IndexArgs),
    /// Charts and the amount filter
    Visualize {
        #[command(subcommand)]
        tab: TabCommand,
    },
    /// Show available color names / hex syntax
    Colors,
    /// Print example invocations
    Examples,
}

#[derive(Subcommand, Debug)]
pub enum TabCommand {
    /// Bar chart of fraud transactions per hour of day
    Hourly,
    /// Filter by transaction amount, optionally exporting the matches
    Amount(AmountArgs),
    /// Pie chart of the fraud / normal split
    Pie,
}

/// Where the data comes from and how it is painted.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// CSV path (use `-` for stdin)
    #[arg(
        short,
        long,
        value_name = "FILE",
        env = "TXN_DASH_FILE",
        default_value = "-",
        global = true
    )]
    pub file: String,

    /// Chart color (name or `#RRGGBB`)
    #[arg(long, default_value = "industrial", global = true)]
    pub color: String,

    /// Never emit color escapes
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// `txn-dash upload …`
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Only show these columns (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub columns: Option<Vec<String>>,
}

/// `txn-dash index …`
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// First row to show
    #[arg(long, default_value_t = DEFAULT_VIEW_START)]
    pub start: usize,
    /// Last row to show (default 10, or the last row if there are fewer)
    #[arg(long)]
    pub end: Option<usize>,
}

/// `txn-dash visualize amount …`
#[derive(Args, Debug)]
pub struct AmountArgs {
    /// Minimum amount (inclusive)
    #[arg(long, default_value_t = DEFAULT_AMOUNT_MIN)]
    pub min: f64,
    /// Maximum amount (inclusive; default 1000, or the largest amount if lower)
    #[arg(long)]
    pub max: Option<f64>,
    /// Write the matching rows as CSV
    #[arg(long, value_name = "PATH", num_args = 0..=1, default_missing_value = DEFAULT_EXPORT_FILE)]
    pub export: Option<PathBuf>,
}

/// Cli Arguments related to logging
#[derive(Args, Debug)]
pub struct LoggingArgs {
    /// Increase log verbosity (multiple uses increase verbosity further)
    #[arg(short, long, action = clap::ArgAction::Count, group = "verbosity")]
    verbose: u8,
    /// Reduce log verbosity to show only errors (equivalent to --log error)
    #[arg(short, long, group = "verbosity")]
    quiet: bool,
    /// Set log verbosity (default is "warn")
    #[arg(
        long = "log",
        value_parser = clap::builder::PossibleValuesParser::new(["error", "warn", "info", "debug", "trace"]),
        group = "verbosity"
    )]
    log_level: Option<String>,
}

impl LoggingArgs {
    /// Sets the logging verbosity, first match wins:
    ///  * `--log <LEVEL>`
    ///  * `Error` when `-q` is used
    ///  * `Info`, `Debug`, `Trace`; depending on the count of `-v`
    ///  * the `TXN_DASH_LOG` environment variable
    ///  * `Warn` otherwise
    pub fn initialize_logging(&self) {
        let mut builder = env_logger::Builder::new();
        builder.filter_level(log::LevelFilter::Warn);
        builder.parse_env("TXN_DASH_LOG");

        if let Some(ref level) = self.log_level {
            builder.parse_filters(level);
        } else if self.quiet {
            builder.filter_level(log::LevelFilter::Error);
        } else if self.verbose > 0 {
            builder.filter_level(match self.verbose {
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            });
        }
        if let Err(err) = builder.try_init() {
            log::debug!("logger already installed: {err}");
        }
    }
}

impl From<UploadArgs> for Section {
    fn from(a: UploadArgs) -> Self {
        Section::Upload { columns: a.columns }
    }
}

impl From<IndexArgs> for Section {
    fn from(a: IndexArgs) -> Self {
        Section::IndexViewer {
            start: a.start,
            end: a.end,
        }
    }
}

impl From<TabCommand> for Section {
    fn from(t: TabCommand) -> Self {
        Section::Visualize(match t {
            TabCommand::Hourly => Tab::Hourly,
            TabCommand::Amount(a) => Tab::Amount {
                min: a.min,
                max: a.max,
                export: a.export,
            },
            TabCommand::Pie => Tab::Pie,
        })
    }
}
