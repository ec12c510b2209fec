//! Labelled element collections and the sample data.

use std::fmt;

use vk_core::Result;
use vk_elements::{parse_collection, ArrayElement, Element, SingleElement, StringElement};

/// A labelled sequence of elements, visited as one batch per operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection {
    /// Name used in reports.
    pub label: String,
    /// Elements, in visitation order.
    pub elements: Vec<Element>,
}

impl Collection {
    /// Create a collection.
    pub fn new(label: impl Into<String>, elements: Vec<Element>) -> Self {
        Self {
            label: label.into(),
            elements,
        }
    }

    /// Parse a `;`-separated list of element literals into a collection.
    pub fn parse(label: impl Into<String>, literals: &str) -> Result<Self> {
        Ok(Self::new(label, parse_collection(literals)?))
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Return `true` if the collection holds no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.label)?;
        for (i, e) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{e}")?;
        }
        Ok(())
    }
}

/// The three demonstration collections.
///
/// * `SingleElement list`: the values 1 through 9;
/// * `ArrayElement list`: `[1]`, `[2, 3]`, `[4, 5, 6]`, `[7, 8, 9]`;
/// * `StringElement`: `"Hello World 123456789\x02"`.
///
/// Sum and product are 45 and 362880 for every one of them.
pub fn sample_collections() -> Vec<Collection> {
    let singles: Vec<Element> = (1..=9)
        .map(|v| SingleElement::new(f64::from(v)).into())
        .collect();
    let arrays: Vec<Element> = vec![
        ArrayElement::new(vec![1.0]).into(),
        ArrayElement::new(vec![2.0, 3.0]).into(),
        ArrayElement::new(vec![4.0, 5.0, 6.0]).into(),
        ArrayElement::new(vec![7.0, 8.0, 9.0]).into(),
    ];
    let text: Vec<Element> = vec![StringElement::new("Hello World 123456789\u{2}").into()];
    vec![
        Collection::new("SingleElement list", singles),
        Collection::new("ArrayElement list", arrays),
        Collection::new("StringElement", text),
    ]
}
