//! Accumulator state shared by every visitor.
//!
//! A visitor carries one running scalar.  It starts at the operation's
//! identity, absorbs every element it visits, and is put back to the identity
//! by an explicit [`reset`][Accumulator::reset] between runs.

/// Running state of a visitor.
pub trait Accumulator {
    /// Scalar type of the running value.
    type Value: Copy + PartialEq + std::fmt::Debug;

    /// Value that leaves subsequent accumulation unaffected.
    const IDENTITY: Self::Value;

    /// Return the value accumulated since construction or the last reset.
    fn value(&self) -> Self::Value;

    /// Restore the running value to [`IDENTITY`][Self::IDENTITY].
    fn reset(&mut self);

    /// Return `true` if nothing has changed the value since the last reset.
    ///
    /// Visiting only identity contributions (an empty array, a string with no
    /// digits) also keeps this `true`.
    fn is_identity(&self) -> bool {
        self.value() == Self::IDENTITY
    }
}
