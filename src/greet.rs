// src/greet.rs
use std::io::{self, Write};

use log::{debug, trace};

use crate::cli::PROGRAM_NAME;
use crate::error::GreetError;

/// Builds the greeting line, without the trailing newline.
pub fn greeting(program: &str, name: &str) -> String {
  format!("Hello from {}, {}!", program, name)
}

/// Writes one greeting line to `out` and flushes it.
pub fn write_greeting<W: Write>(out: &mut W, program: &str, name: &str) -> Result<(), GreetError> {
  let line = greeting(program, name);
  trace!("Greeting line: {:?}", line);
  writeln!(out, "{}", line)?;
  out.flush()?;
  Ok(())
}

pub fn run_greet(name: &str) -> Result<(), GreetError> {
  debug!("Greeting '{}'", name);
  let stdout = io::stdout();
  let mut handle = stdout.lock();
  write_greeting(&mut handle, PROGRAM_NAME, name)
}

#[cfg(test)]
mod tests {
  use super::*;

  struct BrokenPipe;

  impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
      Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
      Ok(())
    }
  }

  #[test]
  fn formats_greeting() {
    assert_eq!(greeting("demo", "World"), "Hello from demo, World!");
  }

  #[test]
  fn keeps_name_verbatim() {
    assert_eq!(
      greeting("demo", "  Zoë & friends "),
      "Hello from demo,   Zoë & friends !"
    );
    assert_eq!(greeting("demo", ""), "Hello from demo, !");
  }

  #[test]
  fn writes_exactly_one_line() {
    let mut out = Vec::new();
    write_greeting(&mut out, "demo", "Ferris").unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "Hello from demo, Ferris!\n");
  }

  #[test]
  fn surfaces_write_failure() {
    let err = write_greeting(&mut BrokenPipe, "demo", "Ferris").unwrap_err();
    match err {
      GreetError::Output(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
    }
  }
}
