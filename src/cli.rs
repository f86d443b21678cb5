// src/cli.rs
use clap::Parser;
use std::ffi::OsString;

/// Program name as stamped into `Cargo.toml` by the project generator.
pub const PROGRAM_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Parser, Debug)]
#[command(
  name = PROGRAM_NAME,
  author,
  version,
  about = concat!(env!("CARGO_PKG_NAME"), " - ", env!("CARGO_PKG_DESCRIPTION")),
  long_about = None,
  disable_version_flag = true
)]
pub struct Cli {
  /// Name to greet
  #[arg(default_value = "World", allow_negative_numbers = true)]
  pub name: OsString,

  /// Increase verbosity level (e.g., -v, -vv)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Print version
  // Long-only; clap exits before this is ever populated.
  #[arg(long, action = clap::ArgAction::Version)]
  #[allow(dead_code)]
  pub version: Option<bool>,
}
