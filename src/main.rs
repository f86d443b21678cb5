// src/main.rs
mod cli;
mod error;
mod greet;

use clap::Parser;
use cli::Cli;
use error::GreetError;
use log::LevelFilter;

fn main() -> Result<(), GreetError> {
  let cli = Cli::parse();

  env_logger::Builder::new()
    .filter_level(log_level(cli.verbose))
    .init();

  log::debug!("CLI args: {:?}", cli);

  greet::run_greet(&cli.name.to_string_lossy())?;

  Ok(())
}

/// Maps the `-v` count to a log filter; warnings only by default.
fn log_level(verbose: u8) -> LevelFilter {
  match verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  }
}
