//! Operation tags and finished results.

use std::fmt;
use std::str::FromStr;

use vk_core::utilities::data_formatters::{format_checksum, format_result};
use vk_core::{Checksum, Error, Real};

/// The operations a visitor can perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// [`SumVisitor`](crate::SumVisitor).
    Sum,
    /// [`MultiplyVisitor`](crate::MultiplyVisitor).
    Multiply,
    /// [`XorVisitor`](crate::XorVisitor).
    Xor,
}

impl Operation {
    /// Every operation, in reporting order.
    pub const ALL: [Operation; 3] = [Operation::Sum, Operation::Multiply, Operation::Xor];

    /// Label of the operation's result (`"Sum"`, `"Product"`, `"Checksum"`).
    pub fn result_label(&self) -> &'static str {
        match self {
            Operation::Sum => "Sum",
            Operation::Multiply => "Product",
            Operation::Xor => "Checksum",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.result_label())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sum" => Ok(Operation::Sum),
            "product" | "multiply" => Ok(Operation::Multiply),
            "xor" | "checksum" => Ok(Operation::Xor),
            other => Err(Error::InvalidArgument(format!(
                "unknown operation `{other}` (expected sum, product, or xor)"
            ))),
        }
    }
}

/// A visitor's accumulated result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperationValue {
    /// Sum or product.
    Real(Real),
    /// XOR checksum.
    Checksum(Checksum),
}

impl OperationValue {
    /// Format the value, real results with `precision` decimals if given.
    pub fn format(&self, precision: Option<usize>) -> String {
        match self {
            OperationValue::Real(v) => format_result(*v, precision),
            OperationValue::Checksum(c) => format_checksum(*c),
        }
    }
}

impl fmt::Display for OperationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(f.precision()))
    }
}
