//! Errors that can stop the REPL.

use crate::core::StoreError;
use std::io;
use thiserror::Error;

/// Failures that escape [`crate::machine::Repl::run`].
///
/// Bad user input never shows up here: it is rejected at the prompt and
/// re-asked. Arithmetic failures are reported on the console and the
/// REPL carries on.
#[derive(Debug, Error)]
pub enum ReplError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error("Illegal transition from '{from}' to '{to}'")]
    IllegalTransition { from: String, to: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}
