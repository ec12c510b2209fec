//! Sessions: one visitor per operation, run batch by batch.

use tracing::{debug, info, warn};
use vk_core::{ensure, Accumulator, Result};
use vk_elements::ElementVisitor;
use vk_visitors::{apply_all, MultiplyVisitor, Operation, OperationValue, SumVisitor, XorVisitor};

use super::collection::Collection;
use super::report::{Outcome, Report};

/// What a [`Session`] runs and how it reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Operations applied to each collection, in order, without repeats.
    pub operations: Vec<Operation>,
    /// Decimals printed for real results; `None` prints the shortest form.
    pub precision: Option<usize>,
}

impl SessionConfig {
    /// Build a configuration, dropping repeated operations.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`](vk_core::Error::InvalidArgument) if
    /// no operation is selected.
    pub fn new(operations: Vec<Operation>, precision: Option<usize>) -> Result<Self> {
        let mut unique: Vec<Operation> = Vec::with_capacity(operations.len());
        for op in operations {
            if !unique.contains(&op) {
                unique.push(op);
            }
        }
        ensure!(!unique.is_empty(), "at least one operation must be selected");
        Ok(Self {
            operations: unique,
            precision,
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            operations: Operation::ALL.to_vec(),
            precision: None,
        }
    }
}

/// Owns one visitor per operation and runs them over collections.
#[derive(Debug, Clone)]
pub struct Session {
    config: SessionConfig,
    sum: SumVisitor,
    product: MultiplyVisitor,
    xor: XorVisitor,
}

impl Session {
    /// Create a session with every visitor at its identity.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            config,
            sum: SumVisitor::new(),
            product: MultiplyVisitor::new(),
            xor: XorVisitor::new(),
        }
    }

    /// Borrow the visitor for `operation` as a trait object.
    pub fn visitor_mut(&mut self, operation: Operation) -> &mut dyn ElementVisitor {
        match operation {
            Operation::Sum => &mut self.sum,
            Operation::Multiply => &mut self.product,
            Operation::Xor => &mut self.xor,
        }
    }

    /// Current accumulated value for `operation`.
    pub fn value(&self, operation: Operation) -> OperationValue {
        match operation {
            Operation::Sum => OperationValue::Real(self.sum.value()),
            Operation::Multiply => OperationValue::Real(self.product.value()),
            Operation::Xor => OperationValue::Checksum(self.xor.value()),
        }
    }

    /// Put every visitor back to its identity.
    pub fn reset(&mut self) {
        self.sum.reset();
        self.product.reset();
        self.xor.reset();
    }

    /// Apply one operation to `collection` as a single batch.
    ///
    /// A rejected element aborts the batch; the error is logged and recorded
    /// in the report rather than returned.  Visitors are not reset.
    pub fn apply(&mut self, operation: Operation, collection: &Collection) -> Report {
        let outcome = match apply_all(self.visitor_mut(operation), &collection.elements) {
            Ok(()) => Outcome::Completed,
            Err(err) => {
                warn!(
                    collection = %collection.label,
                    %operation,
                    error = %err,
                    "batch aborted"
                );
                Outcome::Aborted(err)
            }
        };
        let report = Report {
            collection: collection.label.clone(),
            operation,
            value: self.value(operation),
            outcome,
        };
        info!(
            collection = %report.collection,
            %operation,
            value = %report.value,
            "batch finished"
        );
        report
    }

    /// Run every configured operation over `collection`, then reset.
    pub fn run(&mut self, collection: &Collection) -> Vec<Report> {
        debug!(
            collection = %collection.label,
            elements = collection.len(),
            "running collection"
        );
        let operations = self.config.operations.clone();
        let reports = operations
            .into_iter()
            .map(|op| self.apply(op, collection))
            .collect();
        self.reset();
        reports
    }

    /// Run [`run`](Self::run) over each collection, in order.
    pub fn run_all(&mut self, collections: &[Collection]) -> Vec<Report> {
        collections.iter().flat_map(|c| self.run(c)).collect()
    }

    /// Render reports with the configured precision, one line each.
    pub fn render(&self, reports: &[Report]) -> Vec<String> {
        reports
            .iter()
            .map(|r| r.render(self.config.precision))
            .collect()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vk_core::Error;
    use vk_elements::Element;

    #[test]
    fn config_drops_repeats() {
        let config = SessionConfig::new(
            vec![Operation::Xor, Operation::Sum, Operation::Xor],
            Some(2),
        )
        .unwrap();
        assert_eq!(config.operations, vec![Operation::Xor, Operation::Sum]);
        assert_eq!(config.precision, Some(2));
    }

    #[test]
    fn config_requires_an_operation() {
        assert!(matches!(
            SessionConfig::new(vec![], None),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn apply_keeps_state_until_reset() {
        let mut session = Session::default();
        let c = Collection::new("one", vec![Element::from(2.0)]);
        session.apply(Operation::Sum, &c);
        session.apply(Operation::Sum, &c);
        assert_eq!(session.value(Operation::Sum), OperationValue::Real(4.0));
        session.reset();
        assert_eq!(session.value(Operation::Sum), OperationValue::Real(0.0));
    }

    #[test]
    fn run_resets_afterwards() {
        let mut session = Session::default();
        let c = Collection::new("text", vec!["12".into()]);
        let reports = session.run(&c);
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[1].value, OperationValue::Real(2.0));
        assert_eq!(session.value(Operation::Multiply), OperationValue::Real(1.0));
        assert_eq!(session.value(Operation::Xor), OperationValue::Checksum(0));
    }

    #[test]
    fn aborted_batch_is_recorded() {
        let mut session = Session::default();
        let c = Collection::new("mixed", vec!["A".into(), Element::from(1.0), "B".into()]);
        let report = session.apply(Operation::Xor, &c);
        assert_eq!(report.value, OperationValue::Checksum(b'A'));
        assert!(report.outcome.error().is_some_and(Error::is_unsupported));
    }
}
