//! The element visitor interface.

use vk_core::Result;

use crate::element::{ArrayElement, SingleElement, StringElement};

/// An operation applied across the element variants by double dispatch.
///
/// Every visitor handles all three variants.  A visitor for which a variant
/// is meaningless returns [`Error::UnsupportedOperation`] from that method
/// and leaves its state as it was; it never silently ignores the element.
///
/// The trait is object safe: elements accept `&mut dyn ElementVisitor`.
///
/// [`Error::UnsupportedOperation`]: vk_core::Error::UnsupportedOperation
pub trait ElementVisitor {
    /// Process a single-value element.
    fn process_single(&mut self, element: &SingleElement) -> Result<()>;

    /// Process an array element.
    fn process_array(&mut self, element: &ArrayElement) -> Result<()>;

    /// Process a string element.
    fn process_string(&mut self, element: &StringElement) -> Result<()>;
}

impl<V: ElementVisitor + ?Sized> ElementVisitor for &mut V {
    fn process_single(&mut self, element: &SingleElement) -> Result<()> {
        (**self).process_single(element)
    }

    fn process_array(&mut self, element: &ArrayElement) -> Result<()> {
        (**self).process_array(element)
    }

    fn process_string(&mut self, element: &StringElement) -> Result<()> {
        (**self).process_string(element)
    }
}
