//! Numbered-menu input from a text stream.

use crate::errors::GameError;
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;
use thiserror::Error;

/// A bad line typed at a menu prompt. Recovered by re-prompting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("please enter a number")]
    NotANumber,
    #[error("please choose between {min} and {max}")]
    OutOfRange { min: u32, max: u32 },
}

/// Parses one line of menu input.
pub fn parse_choice(line: &str, range: &RangeInclusive<u32>) -> Result<u32, InputError> {
    let choice: u32 = line.trim().parse().map_err(|_| InputError::NotANumber)?;
    if range.contains(&choice) {
        Ok(choice)
    } else {
        Err(InputError::OutOfRange {
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// Reads numbered choices, re-prompting until a valid one arrives.
pub struct PromptReader<R> {
    reader: R,
    line: String,
}

impl<R: BufRead> PromptReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
        }
    }

    /// Writes `prompt` and blocks until a number in `range` is entered.
    ///
    /// Returns `GameError::InputClosed` once the stream is exhausted.
    pub fn read_choice<W: Write>(
        &mut self,
        out: &mut W,
        prompt: &str,
        range: RangeInclusive<u32>,
    ) -> Result<u32, GameError> {
        loop {
            write!(out, "{}", prompt)?;
            out.flush()?;

            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Err(GameError::InputClosed);
            }

            match parse_choice(&self.line, &range) {
                Ok(choice) => return Ok(choice),
                Err(e) => {
                    log::debug!("rejected menu input {:?}: {}", self.line.trim(), e);
                    writeln!(out, "Invalid choice: {}.", e)?;
                }
            }
        }
    }
}
