//! Line-oriented console over any reader/writer pair
//!
//! Prompts re-ask until the input parses. End of input surfaces as
//! [`EndOfInput`] so the session can stop cleanly.

use anyhow::Result;
use rust_decimal::Decimal;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Input stream closed while a prompt was waiting
#[derive(Debug)]
pub struct EndOfInput;

impl fmt::Display for EndOfInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "end of input")
    }
}

impl std::error::Error for EndOfInput {}

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write one line
    pub fn say(&mut self, text: impl fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Ask for a raw line, trimmed
    pub fn line(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buffer = String::new();
        if self.input.read_line(&mut buffer)? == 0 {
            writeln!(self.output)?;
            return Err(EndOfInput.into());
        }
        Ok(buffer.trim().to_string())
    }

    /// Ask until the answer is not empty
    pub fn text(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.line(prompt)?;
            if !answer.is_empty() {
                return Ok(answer);
            }
            self.say("❌ A value is required.")?;
        }
    }

    /// Ask until the answer parses as `T`
    pub fn number<T: FromStr>(&mut self, prompt: &str) -> Result<T> {
        loop {
            let answer = self.line(prompt)?;
            match answer.parse::<T>() {
                Ok(value) => return Ok(value),
                Err(_) => self.say(format!("❌ '{}' is not a valid number.", answer))?,
            }
        }
    }

    /// Ask for a currency amount. Thousands separators are accepted.
    pub fn amount(&mut self, prompt: &str) -> Result<Decimal> {
        loop {
            let answer = self.line(prompt)?;
            let cleaned: String = answer.chars().filter(|c| *c != ',' && *c != '_').collect();
            match Decimal::from_str(cleaned.trim_start_matches('$')) {
                Ok(value) => return Ok(value),
                Err(_) => self.say(format!("❌ '{}' is not a valid amount.", answer))?,
            }
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}
