use anyhow::Context;
use clap::Parser;
use pscan::cli::{Args, ScanRequest};
use pscan::error::CliError;
use pscan::output;
use std::io;
use std::process::ExitCode;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    output::init_logging(args.log_level());

    let request = match ScanRequest::load(&args) {
        Ok(request) => request,
        Err(CliError::MissingHost) => {
            println!("{}", CliError::MissingHost);
            print!("{}", Args::usage());
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => {
            output::print_error(&e.to_string());
            return Ok(ExitCode::FAILURE);
        }
    };

    let stdout = io::stdout();
    request
        .execute(&mut stdout.lock())
        .context("failed to write scan results")?;

    Ok(ExitCode::SUCCESS)
}
