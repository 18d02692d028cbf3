//! Builder API for configuring a calculator REPL.

mod error;

pub use error::BuildError;

use crate::machine::Repl;
use std::io::{BufRead, Write};

/// Builder for a [`Repl`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use recall_calc::builder::ReplBuilder;
/// use recall_calc::machine::Outcome;
/// use std::io::Cursor;
///
/// let mut repl = ReplBuilder::new()
///     .input(Cursor::new("10\n+\n5\nq\n"))
///     .output(Vec::new())
///     .banner(false)
///     .build()
///     .unwrap();
///
/// assert_eq!(repl.run().unwrap(), Outcome::Quit);
/// assert_eq!(repl.store().active_result(), Some(15.0));
/// ```
pub struct ReplBuilder<R, W> {
    input: Option<R>,
    output: Option<W>,
    banner: bool,
}

impl<R: BufRead, W: Write> ReplBuilder<R, W> {
    /// Create a new builder. The banner is shown unless disabled.
    pub fn new() -> Self {
        Self {
            input: None,
            output: None,
            banner: true,
        }
    }

    /// Set the console input (required).
    pub fn input(mut self, reader: R) -> Self {
        self.input = Some(reader);
        self
    }

    /// Set the console output (required).
    pub fn output(mut self, writer: W) -> Self {
        self.output = Some(writer);
        self
    }

    /// Show or hide the startup banner.
    pub fn banner(mut self, show: bool) -> Self {
        self.banner = show;
        self
    }

    /// Build the REPL.
    /// Returns an error if input or output is missing.
    pub fn build(self) -> Result<Repl<R, W>, BuildError> {
        let input = self.input.ok_or(BuildError::MissingInput)?;
        let output = self.output.ok_or(BuildError::MissingOutput)?;
        Ok(Repl::new(input, output, self.banner))
    }
}

impl<R: BufRead, W: Write> Default for ReplBuilder<R, W> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn builder_requires_input() {
        let result = ReplBuilder::<Cursor<&str>, Vec<u8>>::new()
            .output(Vec::new())
            .build();

        assert!(matches!(result, Err(BuildError::MissingInput)));
    }

    #[test]
    fn builder_requires_output() {
        let result = ReplBuilder::<Cursor<&str>, Vec<u8>>::new()
            .input(Cursor::new(""))
            .build();

        assert!(matches!(result, Err(BuildError::MissingOutput)));
    }

    #[test]
    fn banner_can_be_disabled() {
        let mut repl = ReplBuilder::new()
            .input(Cursor::new("q\n"))
            .output(Vec::new())
            .banner(false)
            .build()
            .unwrap();
        repl.run().unwrap();

        let output = String::from_utf8(repl.into_output()).unwrap();
        assert!(output.starts_with("Enter the first number: "));
    }

    #[test]
    fn banner_is_on_by_default() {
        let mut repl = ReplBuilder::new()
            .input(Cursor::new(""))
            .output(Vec::new())
            .build()
            .unwrap();
        repl.run().unwrap();

        let output = String::from_utf8(repl.into_output()).unwrap();
        assert!(output.starts_with("Simple Calculator\n"));
    }
}
