//! Per (collection, operation) results.

use std::fmt;

use vk_core::Error;
use vk_visitors::{Operation, OperationValue};

/// How a batch ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Every element was visited.
    Completed,
    /// The batch stopped at the first rejected element.
    Aborted(Error),
}

impl Outcome {
    /// Return `true` for [`Outcome::Completed`].
    pub fn is_completed(&self) -> bool {
        matches!(self, Outcome::Completed)
    }

    /// The error that aborted the batch, if any.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Outcome::Completed => None,
            Outcome::Aborted(e) => Some(e),
        }
    }
}

/// Result of one (collection, operation) pair.
///
/// An aborted batch still reports the visitor's value at the point it
/// stopped.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// Label of the collection.
    pub collection: String,
    /// Operation applied.
    pub operation: Operation,
    /// Accumulated value when the batch ended.
    pub value: OperationValue,
    /// How the batch ended.
    pub outcome: Outcome,
}

impl Report {
    /// Render the report line, real results with `precision` decimals if
    /// given.
    pub fn render(&self, precision: Option<usize>) -> String {
        let line = format!(
            "{} of {}: {}",
            self.operation,
            self.collection,
            self.value.format(precision)
        );
        match &self.outcome {
            Outcome::Completed => line,
            Outcome::Aborted(e) => format!("{line} (aborted: {e})"),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(f.precision()))
    }
}
