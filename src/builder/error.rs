//! Build errors for the REPL builder.

use thiserror::Error;

/// Errors that can occur when building a [`crate::machine::Repl`].
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Input not specified. Call .input(reader) before .build()")]
    MissingInput,

    #[error("Output not specified. Call .output(writer) before .build()")]
    MissingOutput,
}
