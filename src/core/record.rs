//! A single calculation session and its step log.

use super::operation::Operation;
use crate::console::format_number;

/// One continuous chain of calculations starting from a seed value.
///
/// The step log is append-only and never empty: creation writes the
/// `Start: <seed>` entry, and `last_result` always matches the value at
/// the end of the newest step.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculationRecord {
    steps: Vec<String>,
    last_result: f64,
}

impl CalculationRecord {
    /// Create a record whose only step describes the seed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use recall_calc::core::CalculationRecord;
    ///
    /// let record = CalculationRecord::seeded(10.0);
    /// assert_eq!(record.steps(), ["Start: 10"]);
    /// assert_eq!(record.last_result(), 10.0);
    /// ```
    pub fn seeded(seed: f64) -> Self {
        Self {
            steps: vec![format!("Start: {}", format_number(seed))],
            last_result: seed,
        }
    }

    /// Append `previous op operand = result` and advance the running value.
    pub fn append(&mut self, previous: f64, op: Operation, operand: f64, result: f64) {
        self.steps.push(format!(
            "{} {} {} = {}",
            format_number(previous),
            op.symbol(),
            format_number(operand),
            format_number(result)
        ));
        self.last_result = result;
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn last_result(&self) -> f64 {
        self.last_result
    }
}
