//! trebuchet - sum the calibration values of a text file.

mod cli;
mod config;
mod errors;
mod run;

use clap::Parser;
use std::process::ExitCode;

use cli::Cli;
use config::RunConfig;
use errors::CliError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match try_main(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("run failed: {:?}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn try_main(cli: &Cli) -> Result<(), CliError> {
    let config = RunConfig::resolve(cli)?;
    let output = run::run(&config)?;

    if let Some(report) = &output.report {
        println!("{}", report);
    }
    println!(
        "The sum of the concatenated numbers is: {}",
        output.result.total
    );
    Ok(())
}
