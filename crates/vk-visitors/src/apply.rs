//! Applying one visitor across a sequence of elements.
//!
//! A batch visits elements strictly in sequence order and aborts at the first
//! error: elements visited before the failure stay accumulated, the failing
//! element and everything after it are not applied.  Recovering from the
//! error is the caller's business.

use vk_core::{Result, Visitable};

/// Adapt "accept `visitor`" into a callable usable over a sequence.
///
/// ```
/// use vk_core::Accumulator;
/// use vk_elements::SingleElement;
/// use vk_visitors::{visit_with, SumVisitor};
///
/// let elements = [SingleElement::new(1.0), SingleElement::new(2.0)];
/// let mut sum = SumVisitor::new();
/// elements.iter().try_for_each(visit_with(&mut sum)).unwrap();
/// assert_eq!(sum.value(), 3.0);
/// ```
pub fn visit_with<'v, V, E>(visitor: &'v mut V) -> impl FnMut(E) -> Result<()> + 'v
where
    V: ?Sized,
    E: Visitable<V>,
{
    move |element| element.accept(visitor)
}

/// Apply `visitor` to every element of `elements`, in order.
///
/// # Errors
/// Returns the first error raised by the visitor; the remaining elements are
/// not visited.
pub fn apply_all<V, I>(visitor: &mut V, elements: I) -> Result<()>
where
    V: ?Sized,
    I: IntoIterator,
    I::Item: Visitable<V>,
{
    elements.into_iter().try_for_each(visit_with(visitor))
}

/// Extension trait offering [`apply_all`] as a method on any sequence of
/// visitable elements.
pub trait AcceptAll<V: ?Sized> {
    /// Apply `visitor` to every element, stopping at the first error.
    fn accept_all(self, visitor: &mut V) -> Result<()>;
}

impl<V, I> AcceptAll<V> for I
where
    V: ?Sized,
    I: IntoIterator,
    I::Item: Visitable<V>,
{
    fn accept_all(self, visitor: &mut V) -> Result<()> {
        apply_all(visitor, self)
    }
}
