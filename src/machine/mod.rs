//! The calculator REPL as an explicit state machine.
//!
//! - `ReplState` names where the REPL is; `State` is the trait it implements
//! - `Command` is the vocabulary of the operation prompt
//! - `TRANSITIONS` lists every legal move, `TransitionLog` the moves taken
//! - `Repl` reads the console and drives the machine until `Terminated`

mod command;
mod controller;
mod state;
mod transition;

pub use command::Command;
pub use controller::{Outcome, Repl};
pub use state::{ReplState, State};
pub use transition::{is_legal, StateTransition, Transition, TransitionLog, TRANSITIONS};
