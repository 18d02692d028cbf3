//! Recall Calc: a console calculator that remembers its sessions.
//!
//! A session starts from a seed value; each binary operation applied to
//! the running result is logged as a step. Starting a new session keeps
//! the old one in memory, and every stored session can be browsed step
//! by step.
//!
//! # Layout
//!
//! - [`core`]: pure model (operations, records, the session store)
//! - [`machine`]: the REPL state machine and its controller
//! - [`console`]: token scanning and number rendering
//! - [`builder`]: fluent configuration of a [`machine::Repl`]
//!
//! # Example
//!
//! ```rust
//! use recall_calc::builder::ReplBuilder;
//! use std::io::Cursor;
//!
//! let mut repl = ReplBuilder::new()
//!     .input(Cursor::new("10\n+\n5\n*\n2\nq\n"))
//!     .output(Vec::new())
//!     .build()
//!     .unwrap();
//! repl.run().unwrap();
//!
//! assert_eq!(
//!     repl.store().get_steps(1).unwrap(),
//!     ["Start: 10", "10 + 5 = 15", "15 * 2 = 30"]
//! );
//! ```

pub mod builder;
pub mod console;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, ReplBuilder};
pub use crate::core::{CalculationRecord, EvalError, Operation, SessionStore};
pub use crate::error::ReplError;
pub use crate::machine::{Outcome, Repl, ReplState, State};
