//! Line-oriented console capability.
//!
//! # Responsibility
//! - Own the input reader and output writer for one session.
//! - Provide the prompt/re-prompt loops used by every menu and field.
//!
//! # Invariants
//! - Nothing reads process-wide stdin/stdout directly; the capability is
//!   passed to each routine.
//! - A rejected value is reported and the same prompt is shown again.
//! - End of input surfaces as `SessionError::InputClosed`.

use crate::error::{SessionError, SessionResult};
use bookclub_core::{ValidationError, ValidationResult};
use log::debug;
use std::io::{BufRead, Write};

const INVALID_CHOICE_MESSAGE: &str = "Invalid input; please try again: ";
const OUT_OF_RANGE_MESSAGE: &str = "Input does not fall within the range; please try again: ";

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Reads one line without its terminator.
    ///
    /// Bytes that are not UTF-8 are replaced rather than rejected, so a
    /// garbled line reaches the normal choice or field checks.
    pub fn read_line(&mut self) -> SessionResult<String> {
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(SessionError::InputClosed);
        }
        let line = String::from_utf8_lossy(&raw);
        Ok(line.trim_end_matches(['\n', '\r']).to_string())
    }

    pub fn write(&mut self, text: &str) -> SessionResult<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn say(&mut self, text: &str) -> SessionResult<()> {
        self.write(text)?;
        self.write("\n")
    }

    /// Shows `Enter <label>:` and reads the answer.
    pub fn prompt(&mut self, label: &str) -> SessionResult<String> {
        self.write(&format!("Enter {label}:\n >> "))?;
        self.read_line()
    }

    /// Prints `menu` and reads an integer in `low..=high`.
    pub fn choose(&mut self, menu: &str, low: u32, high: u32) -> SessionResult<u32> {
        self.write(menu)?;
        loop {
            let line = self.read_line()?;
            match line.trim().parse::<u32>() {
                Ok(choice) if (low..=high).contains(&choice) => return Ok(choice),
                Ok(_) => self.write(OUT_OF_RANGE_MESSAGE)?,
                Err(_) => self.write(INVALID_CHOICE_MESSAGE)?,
            }
        }
    }

    /// Prompts until `validate` accepts the input.
    ///
    /// Recoverable outcomes are printed and the prompt repeats; anything
    /// else ends the session.
    pub fn collect<T>(
        &mut self,
        label: &str,
        mut validate: impl FnMut(&str) -> ValidationResult<T>,
    ) -> SessionResult<T> {
        loop {
            let input = self.prompt(label)?;
            match validate(&input) {
                Ok(value) => return Ok(value),
                Err(err) => self.reject(err)?,
            }
        }
    }

    /// Reports a recoverable rejection; anything else becomes fatal.
    pub fn reject(&mut self, err: ValidationError) -> SessionResult<()> {
        if !err.is_recoverable() {
            return Err(SessionError::Fatal(err));
        }
        debug!("event=input_rejected module=cli status=retry");
        self.say(&format!("{err}; please try again."))
    }
}
