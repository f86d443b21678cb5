// src/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreetError {
  #[error("Failed to write greeting to stdout: {0}")]
  Output(#[from] std::io::Error),
}
