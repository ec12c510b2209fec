//! Element data holders.
//!
//! Each type wraps one payload, which can be read and replaced.  The variant
//! of an element never changes after construction, and none of them compute
//! anything: `accept` only calls back into the visitor method named after the
//! variant.

use vk_core::{Real, Result, Visitable};

use crate::visitor::ElementVisitor;

/// An element holding one real value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SingleElement {
    value: Real,
}

impl SingleElement {
    /// Create a new element with the given value.
    pub fn new(value: Real) -> Self {
        Self { value }
    }

    /// Return the value.
    pub fn value(&self) -> Real {
        self.value
    }

    /// Replace the value.
    pub fn set_value(&mut self, value: Real) {
        self.value = value;
    }
}

impl<V: ElementVisitor + ?Sized> Visitable<V> for SingleElement {
    fn accept(&self, visitor: &mut V) -> Result<()> {
        visitor.process_single(self)
    }
}

/// An element holding an ordered sequence of real values (possibly empty).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ArrayElement {
    values: Vec<Real>,
}

impl ArrayElement {
    /// Create a new element from the given values.
    pub fn new(values: Vec<Real>) -> Self {
        Self { values }
    }

    /// Return the values, in order.
    pub fn value(&self) -> &[Real] {
        &self.values
    }

    /// Replace the values.
    pub fn set_value(&mut self, values: Vec<Real>) {
        self.values = values;
    }

    /// Number of values held.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Return `true` if the array holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V: ElementVisitor + ?Sized> Visitable<V> for ArrayElement {
    fn accept(&self, visitor: &mut V) -> Result<()> {
        visitor.process_array(self)
    }
}

/// An element holding text.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StringElement {
    text: String,
}

impl StringElement {
    /// Create a new element from the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Return the text.
    pub fn value(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_value(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl<V: ElementVisitor + ?Sized> Visitable<V> for StringElement {
    fn accept(&self, visitor: &mut V) -> Result<()> {
        visitor.process_string(self)
    }
}
