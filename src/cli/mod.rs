mod handlers;
pub mod parse;

use clap::Parser;
pub use parse::Cli;

use crate::core::{error::DashError, state::Section};

pub fn run() -> Result<(), DashError> {
    let cli = parse::Cli::parse();
    cli.logging.initialize_logging();
    log::info!("Version: {}", env!("CARGO_PKG_VERSION"));
    log::debug!("input: {:?}", cli.input);

    match cli.cmd {
        parse::Command::Upload(a) => handlers::section(&cli.input, &Section::from(a)),
        parse::Command::Overview => handlers::section(&cli.input, &Section::Overview),
        parse::Command::Index(a) => handlers::section(&cli.input, &Section::from(a)),
        parse::Command::Visualize { tab } => handlers::section(&cli.input, &Section::from(tab)),
        parse::Command::Colors => {
            handlers::colors();
            Ok(())
        }
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
