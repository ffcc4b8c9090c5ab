use qviewkit_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Falls back to stderr when the state dir is not writable.
    logging::init();

    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("qviewkit error: {:#}", err);
        std::process::exit(1);
    }
}
