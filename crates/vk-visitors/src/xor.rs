//! XOR checksum visitor.
//!
//! The checksum is only defined over text: single-value and array elements
//! are rejected with [`Error::UnsupportedOperation`] and leave the checksum
//! untouched.
//!
//! [`Error::UnsupportedOperation`]: vk_core::Error::UnsupportedOperation

use tracing::{debug, trace};
use vk_core::utilities::digits::xor_bytes;
use vk_core::{unsupported, Accumulator, Checksum, Result};
use vk_elements::{ArrayElement, ElementKind, ElementVisitor, SingleElement, StringElement};

/// Name reported in rejection errors.
const OPERATION: &str = "XOR";

/// Running XOR of the bytes of every string visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XorVisitor {
    checksum: Checksum,
}

impl XorVisitor {
    /// Create a visitor at the identity (0).
    pub fn new() -> Self {
        Self::default()
    }
}

impl Accumulator for XorVisitor {
    type Value = Checksum;
    const IDENTITY: Checksum = 0;

    fn value(&self) -> Checksum {
        self.checksum
    }

    fn reset(&mut self) {
        self.checksum = Self::IDENTITY;
    }
}

impl ElementVisitor for XorVisitor {
    fn process_single(&mut self, _element: &SingleElement) -> Result<()> {
        debug!(element = %ElementKind::Single, "xor rejected element");
        unsupported!(OPERATION, ElementKind::Single.with_article());
    }

    fn process_array(&mut self, _element: &ArrayElement) -> Result<()> {
        debug!(element = %ElementKind::Array, "xor rejected element");
        unsupported!(OPERATION, ElementKind::Array.with_article());
    }

    fn process_string(&mut self, element: &StringElement) -> Result<()> {
        let reduction = xor_bytes(element.value());
        self.checksum ^= reduction;
        trace!(reduction, checksum = self.checksum, "checksum accumulated");
        Ok(())
    }
}
