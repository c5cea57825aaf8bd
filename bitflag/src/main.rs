use std::process::ExitCode;

use bitflag::{logging, run, Cli};
use clap::Parser;

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(?err, "command failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
