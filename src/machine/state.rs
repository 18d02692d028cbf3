//! REPL states and the trait every machine state implements.

use crate::core::Operation;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are plain values describing where the
/// machine currently is.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the transition log
/// - `PartialEq`: states are compared when validating moves
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `Deserialize`: the transition log can be exported
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The state's name for display and logging.
    ///
    /// States carrying data share the name of their variant.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Where the calculator REPL currently is.
///
/// The machine starts in `AwaitingSeed` and stops in `Terminated`. The
/// legal moves between states are listed in [`super::TRANSITIONS`].
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum ReplState {
    AwaitingSeed,
    AwaitingOperation,
    /// Waiting for the right-hand operand of the remembered operation.
    AwaitingOperand(Operation),
    Browsing,
    Terminated,
}

impl State for ReplState {
    fn name(&self) -> &str {
        match self {
            Self::AwaitingSeed => "AwaitingSeed",
            Self::AwaitingOperation => "AwaitingOperation",
            Self::AwaitingOperand(_) => "AwaitingOperand",
            Self::Browsing => "Browsing",
            Self::Terminated => "Terminated",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Terminated)
    }
}
