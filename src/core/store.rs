//! Session store: every calculation record created during the process.

use super::operation::Operation;
use super::record::CalculationRecord;
use thiserror::Error;
use tracing::info;

/// Errors raised by [`SessionStore`] operations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("No active calculation session")]
    NoActiveSession,

    #[error("Calculation {index} does not exist (stored: {size})")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Stable, 1-based handle to a record in the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordHandle(usize);

impl RecordHandle {
    /// The 1-based index shown to the user.
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Ordered, append-only collection of calculation records.
///
/// Records are never removed, so an index handed out once stays valid
/// until the process exits. The active record is always the one created
/// most recently.
///
/// # Example
///
/// ```rust
/// use recall_calc::core::{Operation, SessionStore};
///
/// let mut store = SessionStore::new();
/// let handle = store.create_session(10.0);
/// store.append_step(10.0, Operation::Add, 5.0, 15.0).unwrap();
///
/// assert_eq!(store.list_summaries(), vec![(1, 15.0)]);
/// assert_eq!(store.get_steps(handle.index()).unwrap(), ["Start: 10", "10 + 5 = 15"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SessionStore {
    records: Vec<CalculationRecord>,
    active: Option<usize>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly seeded record and make it the active one.
    pub fn create_session(&mut self, seed: f64) -> RecordHandle {
        self.records.push(CalculationRecord::seeded(seed));
        let position = self.records.len() - 1;
        self.active = Some(position);
        info!(session = position + 1, seed, "calculation session created");
        RecordHandle(position + 1)
    }

    /// Record a successful evaluation on the active record.
    pub fn append_step(
        &mut self,
        previous: f64,
        op: Operation,
        operand: f64,
        result: f64,
    ) -> Result<(), StoreError> {
        let record = self
            .active
            .and_then(|position| self.records.get_mut(position))
            .ok_or(StoreError::NoActiveSession)?;
        record.append(previous, op, operand, result);
        Ok(())
    }

    /// Running value of the active record, if a session has been started.
    pub fn active_result(&self) -> Option<f64> {
        self.active().map(CalculationRecord::last_result)
    }

    pub fn active(&self) -> Option<&CalculationRecord> {
        self.active.and_then(|position| self.records.get(position))
    }

    pub fn active_handle(&self) -> Option<RecordHandle> {
        self.active.map(|position| RecordHandle(position + 1))
    }

    /// `(index, last_result)` for every record, in creation order.
    pub fn list_summaries(&self) -> Vec<(usize, f64)> {
        self.records
            .iter()
            .enumerate()
            .map(|(position, record)| (position + 1, record.last_result()))
            .collect()
    }

    /// Step log of the record at a 1-based `index`.
    pub fn get_steps(&self, index: usize) -> Result<&[String], StoreError> {
        if index == 0 || index > self.records.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                size: self.records.len(),
            });
        }
        Ok(self.records[index - 1].steps())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
