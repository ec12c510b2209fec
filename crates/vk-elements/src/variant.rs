//! The [`Element`] tagged union.
//!
//! Because the variant set is closed, a heterogeneous collection can hold
//! plain `Element` values and dispatch with a single `match` instead of
//! boxing trait objects.

use std::fmt;

use vk_core::{Real, Result, Visitable};

use crate::element::{ArrayElement, SingleElement, StringElement};
use crate::visitor::ElementVisitor;

/// Which variant an element is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// [`SingleElement`].
    Single,
    /// [`ArrayElement`].
    Array,
    /// [`StringElement`].
    String,
}

impl ElementKind {
    /// Short description (`"single-value"`, `"array"`, `"string"`).
    pub fn description(&self) -> &'static str {
        match self {
            ElementKind::Single => "single-value",
            ElementKind::Array => "array",
            ElementKind::String => "string",
        }
    }

    /// Description with its indefinite article, as used in error messages.
    pub fn with_article(&self) -> &'static str {
        match self {
            ElementKind::Single => "a single-value",
            ElementKind::Array => "an array",
            ElementKind::String => "a string",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Any element.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// One real value.
    Single(SingleElement),
    /// A sequence of real values.
    Array(ArrayElement),
    /// Text.
    String(StringElement),
}

impl Element {
    /// Return the variant of this element.
    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Single(_) => ElementKind::Single,
            Element::Array(_) => ElementKind::Array,
            Element::String(_) => ElementKind::String,
        }
    }

    /// Borrow the inner single-value element, if this is one.
    pub fn as_single(&self) -> Option<&SingleElement> {
        match self {
            Element::Single(e) => Some(e),
            _ => None,
        }
    }

    /// Borrow the inner array element, if this is one.
    pub fn as_array(&self) -> Option<&ArrayElement> {
        match self {
            Element::Array(e) => Some(e),
            _ => None,
        }
    }

    /// Borrow the inner string element, if this is one.
    pub fn as_string(&self) -> Option<&StringElement> {
        match self {
            Element::String(e) => Some(e),
            _ => None,
        }
    }
}

impl<V: ElementVisitor + ?Sized> Visitable<V> for Element {
    fn accept(&self, visitor: &mut V) -> Result<()> {
        match self {
            Element::Single(e) => visitor.process_single(e),
            Element::Array(e) => visitor.process_array(e),
            Element::String(e) => visitor.process_string(e),
        }
    }
}

impl From<SingleElement> for Element {
    fn from(e: SingleElement) -> Self {
        Element::Single(e)
    }
}

impl From<ArrayElement> for Element {
    fn from(e: ArrayElement) -> Self {
        Element::Array(e)
    }
}

impl From<StringElement> for Element {
    fn from(e: StringElement) -> Self {
        Element::String(e)
    }
}

impl From<Real> for Element {
    fn from(value: Real) -> Self {
        Element::Single(SingleElement::new(value))
    }
}

impl From<Vec<Real>> for Element {
    fn from(values: Vec<Real>) -> Self {
        Element::Array(ArrayElement::new(values))
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element::String(StringElement::new(text))
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Element::String(StringElement::new(text))
    }
}

impl fmt::Display for Element {
    /// Writes the element as a literal accepted by
    /// [`parse_element`](crate::parse::parse_element).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Single(e) => write!(f, "{}", e.value()),
            Element::Array(e) => {
                f.write_str("[")?;
                for (i, v) in e.value().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{v}")?;
                }
                f.write_str("]")
            }
            Element::String(e) => write!(f, "\"{}\"", crate::parse::escape(e.value())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::tests::Recorder;

    #[test]
    fn kind_and_accessors() {
        let s = Element::from(1.5);
        let a = Element::from(vec![1.0, 2.0]);
        let t = Element::from("hi");
        assert_eq!(s.kind(), ElementKind::Single);
        assert_eq!(a.kind(), ElementKind::Array);
        assert_eq!(t.kind(), ElementKind::String);
        assert_eq!(s.as_single().map(SingleElement::value), Some(1.5));
        assert!(s.as_array().is_none());
        assert_eq!(a.as_array().map(ArrayElement::len), Some(2));
        assert_eq!(t.as_string().map(StringElement::value), Some("hi"));
    }

    #[test]
    fn enum_dispatch_matches_variant() {
        let elements = vec![
            Element::from(3.0),
            Element::from(vec![]),
            Element::from("x"),
        ];
        let mut rec = Recorder::default();
        for e in &elements {
            e.accept(&mut rec).unwrap();
        }
        assert_eq!(rec.calls, vec!["single:3", "array:0", "string:x"]);
    }

    #[test]
    fn kind_display() {
        assert_eq!(ElementKind::Single.to_string(), "single-value");
        assert_eq!(ElementKind::Array.with_article(), "an array");
        assert_eq!(ElementKind::String.with_article(), "a string");
    }

    #[test]
    fn display_as_literal() {
        assert_eq!(Element::from(4.0).to_string(), "4");
        assert_eq!(Element::from(vec![1.0, 2.5]).to_string(), "[1, 2.5]");
        assert_eq!(Element::from(vec![]).to_string(), "[]");
        assert_eq!(Element::from("a\"b\u{2}").to_string(), "\"a\\\"b\\x02\"");
    }
}
