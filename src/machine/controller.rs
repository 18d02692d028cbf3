//! The REPL controller: reads console input and drives the state machine.

use super::command::Command;
use super::state::{ReplState, State};
use super::transition::{is_legal, StateTransition, TransitionLog};
use crate::console::{format_number, parse_number, parse_selection, Scanner};
use crate::core::{Operation, SessionStore, StoreError};
use crate::error::ReplError;
use chrono::Utc;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

const OPERATION_PROMPT: &str =
    "Choose operation (+, -, *, /, %, n for new, m for memory, q to quit): ";
const UNSUPPORTED_OPERATION: &str =
    "Unsupported operation. Please choose one of +, -, *, /, %, n, m, or q.";
const SELECTION_PROMPT: &str = "Select calculation number to view (0 to return): ";

/// How a finished run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The user entered `q`.
    Quit,
    /// The input stream ran out before `q`.
    InputClosed,
}

/// Interactive calculator over any line-oriented reader and writer.
///
/// Build one with [`crate::builder::ReplBuilder`].
pub struct Repl<R, W> {
    scanner: Scanner<R>,
    output: W,
    banner: bool,
    state: ReplState,
    store: SessionStore,
    log: TransitionLog<ReplState>,
    outcome: Option<Outcome>,
}

impl<R: BufRead, W: Write> Repl<R, W> {
    pub(crate) fn new(input: R, output: W, banner: bool) -> Self {
        Self {
            scanner: Scanner::new(input),
            output,
            banner,
            state: ReplState::AwaitingSeed,
            store: SessionStore::new(),
            log: TransitionLog::new(),
            outcome: None,
        }
    }

    /// Run until the machine reaches `Terminated`.
    pub fn run(&mut self) -> Result<Outcome, ReplError> {
        if self.banner && self.log.transitions().is_empty() {
            writeln!(self.output, "Simple Calculator")?;
            writeln!(self.output, "-----------------")?;
        }

        while !self.state.is_final() {
            self.step()?;
        }

        self.output.flush()?;
        Ok(self.outcome.unwrap_or(Outcome::Quit))
    }

    /// Handle input for the current state, move to the next state and
    /// record the move. Returns the state now current.
    ///
    /// Re-prompts for bad input happen inside this call. Once `Terminated`
    /// is reached further calls do nothing.
    pub fn step(&mut self) -> Result<&ReplState, ReplError> {
        let next = match self.state.clone() {
            ReplState::AwaitingSeed => self.read_seed()?,
            ReplState::AwaitingOperation => self.read_operation()?,
            ReplState::AwaitingOperand(op) => self.read_operand(op)?,
            ReplState::Browsing => self.browse()?,
            ReplState::Terminated => return Ok(&self.state),
        };
        self.move_to(next)?;
        Ok(&self.state)
    }

    pub fn current_state(&self) -> &ReplState {
        &self.state
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn history(&self) -> &TransitionLog<ReplState> {
        &self.log
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consume the REPL and hand back its writer.
    pub fn into_output(self) -> W {
        self.output
    }

    fn move_to(&mut self, next: ReplState) -> Result<(), ReplError> {
        if !is_legal(&self.state, &next) {
            return Err(ReplError::IllegalTransition {
                from: self.state.name().to_string(),
                to: next.name().to_string(),
            });
        }

        debug!(from = self.state.name(), to = next.name(), "state transition");
        let from = std::mem::replace(&mut self.state, next.clone());
        self.log.record(StateTransition {
            from,
            to: next,
            timestamp: Utc::now(),
        });
        Ok(())
    }

    fn read_seed(&mut self) -> Result<ReplState, ReplError> {
        let Some(seed) = self.prompt_number("the first number")? else {
            return Ok(self.input_closed());
        };

        self.store.create_session(seed);
        writeln!(self.output, "Current result: {}", format_number(seed))?;
        Ok(ReplState::AwaitingOperation)
    }

    fn read_operation(&mut self) -> Result<ReplState, ReplError> {
        loop {
            write!(self.output, "{OPERATION_PROMPT}")?;
            self.output.flush()?;

            let Some(token) = self.scanner.next_token()? else {
                return Ok(self.input_closed());
            };

            match Command::parse(&token) {
                Some(Command::Apply(op)) => return Ok(ReplState::AwaitingOperand(op)),
                Some(Command::NewSession) => return Ok(ReplState::AwaitingSeed),
                Some(Command::ShowHistory) => return Ok(ReplState::Browsing),
                Some(Command::Quit) => {
                    writeln!(self.output, "Goodbye!")?;
                    self.outcome = Some(Outcome::Quit);
                    return Ok(ReplState::Terminated);
                }
                None => {
                    debug!(%token, "unrecognized command");
                    self.scanner.discard_line();
                    writeln!(self.output, "{UNSUPPORTED_OPERATION}")?;
                }
            }
        }
    }

    fn read_operand(&mut self, op: Operation) -> Result<ReplState, ReplError> {
        let Some(operand) = self.prompt_number("the next number")? else {
            return Ok(self.input_closed());
        };

        let previous = self
            .store
            .active_result()
            .ok_or(StoreError::NoActiveSession)?;

        match op.apply(previous, operand) {
            Ok(result) => {
                self.store.append_step(previous, op, operand, result)?;
                writeln!(self.output, "Result: {}", format_number(result))?;
            }
            Err(err) => {
                warn!(%err, previous, operand, operation = %op, "operation rejected");
                writeln!(self.output, "Error: {err}")?;
            }
        }
        Ok(ReplState::AwaitingOperation)
    }

    fn browse(&mut self) -> Result<ReplState, ReplError> {
        if self.store.is_empty() {
            writeln!(self.output, "Memory is empty.")?;
            return Ok(ReplState::AwaitingOperation);
        }
        info!(sessions = self.store.len(), "browsing stored calculations");

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Stored calculations:")?;
            for (index, last_result) in self.store.list_summaries() {
                writeln!(
                    self.output,
                    "  {index}) Last result: {}",
                    format_number(last_result)
                )?;
            }
            write!(self.output, "{SELECTION_PROMPT}")?;
            self.output.flush()?;

            let Some(token) = self.scanner.next_token()? else {
                return Ok(self.input_closed());
            };

            let Some(selection) = parse_selection(&token) else {
                self.scanner.discard_line();
                writeln!(
                    self.output,
                    "Invalid selection. Please enter a number from the list."
                )?;
                continue;
            };

            if selection == 0 {
                writeln!(self.output)?;
                return Ok(ReplState::AwaitingOperation);
            }

            let steps = usize::try_from(selection)
                .ok()
                .and_then(|index| self.store.get_steps(index).ok());
            let Some(steps) = steps else {
                debug!(selection, "selection out of range");
                writeln!(self.output, "Selection out of range. Try again.")?;
                continue;
            };

            writeln!(self.output, "Calculation {selection} steps:")?;
            for step in steps {
                writeln!(self.output, "  {step}")?;
            }
            writeln!(self.output)?;
        }
    }

    /// Prompt with `Enter <label>: ` until a number is read.
    ///
    /// Returns `Ok(None)` if the input closes first.
    fn prompt_number(&mut self, label: &str) -> Result<Option<f64>, ReplError> {
        loop {
            write!(self.output, "Enter {label}: ")?;
            self.output.flush()?;

            let Some(token) = self.scanner.next_token()? else {
                return Ok(None);
            };
            if let Some(value) = parse_number(&token) {
                return Ok(Some(value));
            }

            debug!(%token, "rejected number");
            self.scanner.discard_line();
            writeln!(self.output, "Invalid number. Please try again.")?;
        }
    }

    fn input_closed(&mut self) -> ReplState {
        warn!(state = self.state.name(), "input closed, terminating");
        self.outcome = Some(Outcome::InputClosed);
        ReplState::Terminated
    }
}
