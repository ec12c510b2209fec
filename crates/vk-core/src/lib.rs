//! # vk-core
//!
//! Core types, traits, and error definitions for visitkit.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – type aliases, the error hierarchy, the
//! `Visitable` / `Accumulator` traits behind every visitor, and the digit and
//! formatting helpers the visitors and the driver share.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `unsupported!` macros.
pub mod errors;

/// Design patterns: visitor, accumulator.
pub mod patterns;

/// Miscellaneous utilities.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type carried by single and array elements.
pub type Real = f64;

/// 8-bit wrapping checksum produced by the XOR visitor.
pub type Checksum = u8;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use patterns::visitor::{Accumulator, Visitable};
