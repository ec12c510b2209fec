//! Product visitor.

use tracing::trace;
use vk_core::utilities::digits::digit_product;
use vk_core::{Accumulator, Real, Result};
use vk_elements::{ArrayElement, ElementVisitor, SingleElement, StringElement};

/// Multiplies together everything it visits.
///
/// * single value: the value;
/// * array: the product of its values (1 when empty);
/// * string: the product of its ASCII digit values, other characters count 1.
///   A `'0'` anywhere drives the product to zero for good, as any real
///   multiplication by zero would.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MultiplyVisitor {
    product: Real,
}

impl MultiplyVisitor {
    /// Create a visitor at the identity (1).
    pub fn new() -> Self {
        Self {
            product: Self::IDENTITY,
        }
    }

    fn multiply(&mut self, factor: Real) {
        self.product *= factor;
        trace!(factor, product = self.product, "product accumulated");
    }
}

impl Default for MultiplyVisitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Accumulator for MultiplyVisitor {
    type Value = Real;
    const IDENTITY: Real = 1.0;

    fn value(&self) -> Real {
        self.product
    }

    fn reset(&mut self) {
        self.product = Self::IDENTITY;
    }
}

impl ElementVisitor for MultiplyVisitor {
    fn process_single(&mut self, element: &SingleElement) -> Result<()> {
        self.multiply(element.value());
        Ok(())
    }

    fn process_array(&mut self, element: &ArrayElement) -> Result<()> {
        self.multiply(element.value().iter().product());
        Ok(())
    }

    fn process_string(&mut self, element: &StringElement) -> Result<()> {
        self.multiply(digit_product(element.value()));
        Ok(())
    }
}
