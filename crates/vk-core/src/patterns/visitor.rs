//! Visitor pattern.
//!
//! Elements implement [`Visitable<V>`] for every visitor family `V` they can
//! dispatch into.  `accept` is the first half of the double dispatch: it
//! selects the visitor method that matches the element's own variant and
//! hands `self` over, read-only.  The visitor decides what happens next and
//! may refuse by returning an error.

pub use super::accumulator::Accumulator;

/// An object that can be visited by a visitor of type `V`.
///
/// `V` is usually an unsized trait object (`dyn ElementVisitor`) or a
/// concrete visitor; implementations should be generic over
/// `V: ?Sized` so both work.
pub trait Visitable<V: ?Sized> {
    /// Dispatch to the method of `visitor` that handles this element.
    ///
    /// Any error returned by the visitor is propagated unchanged.
    fn accept(&self, visitor: &mut V) -> crate::errors::Result<()>;
}

impl<V: ?Sized, T: Visitable<V> + ?Sized> Visitable<V> for &T {
    fn accept(&self, visitor: &mut V) -> crate::errors::Result<()> {
        (**self).accept(visitor)
    }
}

impl<V: ?Sized, T: Visitable<V> + ?Sized> Visitable<V> for Box<T> {
    fn accept(&self, visitor: &mut V) -> crate::errors::Result<()> {
        (**self).accept(visitor)
    }
}
