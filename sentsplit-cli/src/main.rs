use std::process::ExitCode;

use clap::Parser;
use sentsplit_cli::commands::SplitArgs;

fn main() -> ExitCode {
    let args = SplitArgs::parse();

    match args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
