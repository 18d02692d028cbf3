//! Pure calculation model.
//!
//! This module holds everything the calculator knows about numbers and
//! sessions, with no console I/O:
//! - `Operation` and the arithmetic evaluator
//! - `CalculationRecord`, the append-only step log of one session
//! - `SessionStore`, the ordered collection of all sessions

mod operation;
mod record;
mod store;

pub use operation::{evaluate, EvalError, Operation};
pub use record::CalculationRecord;
pub use store::{RecordHandle, SessionStore, StoreError};
