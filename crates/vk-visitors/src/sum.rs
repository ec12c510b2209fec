//! Sum visitor.

use tracing::trace;
use vk_core::utilities::digits::digit_sum;
use vk_core::{Accumulator, Real, Result};
use vk_elements::{ArrayElement, ElementVisitor, SingleElement, StringElement};

/// Adds up everything it visits.
///
/// * single value: the value;
/// * array: the sum of its values (0 when empty);
/// * string: the sum of its ASCII digit values, other characters count 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SumVisitor {
    total: Real,
}

impl SumVisitor {
    /// Create a visitor at the identity (0).
    pub fn new() -> Self {
        Self {
            total: Self::IDENTITY,
        }
    }

    fn add(&mut self, contribution: Real) {
        self.total += contribution;
        trace!(contribution, total = self.total, "sum accumulated");
    }
}

impl Default for SumVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator for SumVisitor {
    type Value = Real;
    const IDENTITY: Real = 0.0;

    fn value(&self) -> Real {
        self.total
    }

    fn reset(&mut self) {
        self.total = Self::IDENTITY;
    }
}

impl ElementVisitor for SumVisitor {
    fn process_single(&mut self, element: &SingleElement) -> Result<()> {
        self.add(element.value());
        Ok(())
    }

    fn process_array(&mut self, element: &ArrayElement) -> Result<()> {
        self.add(element.value().iter().sum());
        Ok(())
    }

    fn process_string(&mut self, element: &StringElement) -> Result<()> {
        self.add(digit_sum(element.value()));
        Ok(())
    }
}
