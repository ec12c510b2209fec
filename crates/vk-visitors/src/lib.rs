//! # vk-visitors
//!
//! The operations applied to elements:
//!
//! * [`SumVisitor`] — running total, identity 0.
//! * [`MultiplyVisitor`] — running product, identity 1.
//! * [`XorVisitor`] — 8-bit XOR checksum over string bytes, identity 0.
//!   Rejects single-value and array elements.
//!
//! [`apply_all`] runs one visitor over a sequence of elements and stops at
//! the first rejection.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Applying a visitor across a sequence.
pub mod apply;

/// Product visitor.
pub mod multiply;

/// Operation tags and finished results.
pub mod operation;

/// Sum visitor.
pub mod sum;

/// XOR checksum visitor.
pub mod xor;

pub use apply::{apply_all, visit_with, AcceptAll};
pub use multiply::MultiplyVisitor;
pub use operation::{Operation, OperationValue};
pub use sum::SumVisitor;
pub use xor::XorVisitor;
