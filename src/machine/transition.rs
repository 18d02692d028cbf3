//! Legal REPL moves and the timestamped log of moves taken.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A legal move between two states, matched by state name.
///
/// Matching by name lets one entry cover data-carrying states such as
/// `AwaitingOperand(op)` for every `op`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: &'static str,
    pub to: &'static str,
}

/// Every move the calculator REPL may make.
///
/// Re-prompts after bad input are not moves and do not appear here.
pub const TRANSITIONS: [Transition; 10] = [
    Transition {
        from: "AwaitingSeed",
        to: "AwaitingOperation",
    },
    Transition {
        from: "AwaitingOperation",
        to: "AwaitingOperand",
    },
    Transition {
        from: "AwaitingOperation",
        to: "AwaitingSeed",
    },
    Transition {
        from: "AwaitingOperation",
        to: "Browsing",
    },
    Transition {
        from: "AwaitingOperation",
        to: "Terminated",
    },
    Transition {
        from: "AwaitingOperand",
        to: "AwaitingOperation",
    },
    Transition {
        from: "Browsing",
        to: "AwaitingOperation",
    },
    // Input closing at any prompt ends the session.
    Transition {
        from: "AwaitingSeed",
        to: "Terminated",
    },
    Transition {
        from: "AwaitingOperand",
        to: "Terminated",
    },
    Transition {
        from: "Browsing",
        to: "Terminated",
    },
];

impl Transition {
    /// Check if this transition covers the move `current -> next` (pure).
    pub fn can_execute<S: State>(&self, current: &S, next: &S) -> bool {
        current.name() == self.from && next.name() == self.to
    }
}

/// Check a move against [`TRANSITIONS`].
pub fn is_legal<S: State>(current: &S, next: &S) -> bool {
    TRANSITIONS.iter().any(|t| t.can_execute(current, next))
}

/// Record of a single move actually taken.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// When the move happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered log of the moves a machine has taken.
///
/// # Example
///
/// ```rust
/// use chrono::Utc;
/// use recall_calc::machine::{ReplState, StateTransition, TransitionLog};
///
/// let mut log = TransitionLog::new();
/// log.record(StateTransition {
///     from: ReplState::AwaitingSeed,
///     to: ReplState::AwaitingOperation,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(
///     log.get_path(),
///     vec![&ReplState::AwaitingSeed, &ReplState::AwaitingOperation]
/// );
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionLog<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for TransitionLog<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> TransitionLog<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    pub fn record(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// States visited in order: the first `from`, then every `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;
    use crate::machine::ReplState;

    fn transition(from: ReplState, to: ReplState) -> StateTransition<ReplState> {
        StateTransition {
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn operand_moves_match_any_operation() {
        for op in Operation::ALL {
            assert!(is_legal(
                &ReplState::AwaitingOperation,
                &ReplState::AwaitingOperand(op)
            ));
            assert!(is_legal(
                &ReplState::AwaitingOperand(op),
                &ReplState::AwaitingOperation
            ));
        }
    }

    #[test]
    fn illegal_moves_are_rejected() {
        assert!(!is_legal(&ReplState::AwaitingSeed, &ReplState::Browsing));
        assert!(!is_legal(
            &ReplState::Browsing,
            &ReplState::AwaitingOperand(Operation::Add)
        ));
        assert!(!is_legal(&ReplState::Terminated, &ReplState::AwaitingSeed));
        assert!(!is_legal(
            &ReplState::AwaitingOperation,
            &ReplState::AwaitingOperation
        ));
    }

    #[test]
    fn terminated_has_no_outgoing_moves() {
        assert!(TRANSITIONS.iter().all(|t| t.from != "Terminated"));
    }

    #[test]
    fn new_log_is_empty() {
        let log: TransitionLog<ReplState> = TransitionLog::new();
        assert!(log.transitions().is_empty());
        assert!(log.get_path().is_empty());
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let mut log = TransitionLog::new();
        log.record(transition(
            ReplState::AwaitingSeed,
            ReplState::AwaitingOperation,
        ));
        log.record(transition(ReplState::AwaitingOperation, ReplState::Terminated));

        let path = log.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &ReplState::AwaitingSeed);
        assert_eq!(path[1], &ReplState::AwaitingOperation);
        assert_eq!(path[2], &ReplState::Terminated);
    }

    #[test]
    fn log_serializes_correctly() {
        let mut log = TransitionLog::new();
        log.record(transition(
            ReplState::AwaitingOperation,
            ReplState::AwaitingOperand(Operation::Divide),
        ));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: TransitionLog<ReplState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions().len(), 1);
        assert_eq!(
            deserialized.transitions()[0].to,
            ReplState::AwaitingOperand(Operation::Divide)
        );
    }
}
