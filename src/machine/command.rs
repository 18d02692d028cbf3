//! Commands accepted at the operation prompt.

use crate::core::Operation;

/// A token accepted at the operation prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Apply an arithmetic operation to the running result.
    Apply(Operation),
    /// Start a new session (`n` / `N`).
    NewSession,
    /// Browse stored sessions (`m` / `M`).
    ShowHistory,
    /// Leave the calculator (`q` / `Q`).
    Quit,
}

impl Command {
    /// Parse a single-character command token.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recall_calc::core::Operation;
    /// use recall_calc::machine::Command;
    ///
    /// assert_eq!(Command::parse("*"), Some(Command::Apply(Operation::Multiply)));
    /// assert_eq!(Command::parse("M"), Some(Command::ShowHistory));
    /// assert_eq!(Command::parse("++"), None);
    /// ```
    pub fn parse(token: &str) -> Option<Self> {
        let mut chars = token.chars();
        let (Some(symbol), None) = (chars.next(), chars.next()) else {
            return None;
        };

        match symbol {
            'n' | 'N' => Some(Self::NewSession),
            'm' | 'M' => Some(Self::ShowHistory),
            'q' | 'Q' => Some(Self::Quit),
            other => Operation::from_symbol(other).ok().map(Self::Apply),
        }
    }
}
