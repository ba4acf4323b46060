fn main() {
    if let Err(err) = txn_dash::cli::run() {
        log::debug!("{err:?}");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
