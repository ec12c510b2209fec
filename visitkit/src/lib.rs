//! # visitkit
//!
//! Element visitors: a closed set of element types (single value, numeric
//! array, string) and the operations applied to them by double dispatch
//! (sum, product, XOR checksum).
//!
//! This crate is a **façade** that re-exports the workspace crates and adds
//! the [`driver`], which runs every visitor over every collection and
//! reports the results.
//!
//! ## Quick start
//!
//! ```rust
//! use visitkit::core::Accumulator;
//! use visitkit::elements::Element;
//! use visitkit::visitors::{apply_all, SumVisitor};
//!
//! let elements = vec![Element::from(1.5), Element::from(vec![2.0, 3.0])];
//! let mut sum = SumVisitor::new();
//! apply_all(&mut sum, &elements).unwrap();
//! assert_eq!(sum.value(), 6.5);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, traits, and error definitions.
pub use vk_core as core;

/// Element variants and the visitor interface.
pub use vk_elements as elements;

/// Sum, product, and XOR visitors.
pub use vk_visitors as visitors;

/// Collections, sessions, and reports.
pub mod driver;

pub use driver::{sample_collections, Collection, Outcome, Report, Session, SessionConfig};
