//! # vk-elements
//!
//! The closed set of element variants visited by visitkit's operations.
//!
//! * [`SingleElement`], [`ArrayElement`], [`StringElement`] — the data
//!   holders.  They expose their payload and a double-dispatch entry point,
//!   nothing else.
//! * [`ElementVisitor`] — one method per variant.
//! * [`Element`] / [`ElementKind`] — the tagged union over the variants, for
//!   heterogeneous collections.
//! * [`parse`] — element literals (`4.5`, `[1, 2]`, `"text"`).

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Single, array, and string element types.
pub mod element;

/// Element literal parsing.
pub mod parse;

/// Tagged union over the element variants.
pub mod variant;

/// The visitor interface.
pub mod visitor;

pub use element::{ArrayElement, SingleElement, StringElement};
pub use parse::{parse_collection, parse_element};
pub use variant::{Element, ElementKind};
pub use visitor::ElementVisitor;
