//! Line-oriented prompting over any reader/writer pair.

use chrono::NaiveDate;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    /// Input ended; menus treat this as a request to exit.
    #[error("end of input")]
    Eof,

    /// Unparseable input; the message is shown and the menu redisplayed.
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type PromptResult<T> = Result<T, PromptError>;

/// What a menu loop does after an action.
#[derive(Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    /// Prints `label` and reads one trimmed line.
    pub fn read_line(&mut self, label: &str) -> PromptResult<String> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PromptError::Eof);
        }
        Ok(line.trim().to_string())
    }

    /// Reads a line and parses it, naming `what` in the error message.
    pub fn read_parsed<T>(&mut self, label: &str, what: &str) -> PromptResult<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let line = self.read_line(label)?;
        line.parse()
            .map_err(|err| PromptError::Invalid(format!("Invalid {what} '{line}': {err}")))
    }

    /// Reads a `YYYY-MM-DD` date.
    pub fn read_date(&mut self, label: &str) -> PromptResult<NaiveDate> {
        let line = self.read_line(label)?;
        NaiveDate::parse_from_str(&line, "%Y-%m-%d").map_err(|_| {
            PromptError::Invalid(format!("Invalid date '{line}', expected YYYY-MM-DD"))
        })
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Runs `step` until it exits or input ends. Invalid input is reported and
/// the loop goes on; I/O failures end it with an error.
pub fn drive<R, W, F>(console: &mut Console<R, W>, mut step: F) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    F: FnMut(&mut Console<R, W>) -> PromptResult<Flow>,
{
    loop {
        match step(console) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) | Err(PromptError::Eof) => return Ok(()),
            Err(PromptError::Invalid(msg)) => writeln!(console.out(), "{msg}")?,
            Err(PromptError::Io(err)) => return Err(err),
        }
    }
}
