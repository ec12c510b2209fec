//! Error types for visitkit.
//!
//! Every fallible operation in the workspace returns [`Result`].  The only
//! error a visitor itself raises is [`Error::UnsupportedOperation`]; the
//! other variants belong to the element parser and the driver.  The
//! [`unsupported!`](crate::unsupported) and [`ensure!`](crate::ensure)
//! macros build the common cases.

use thiserror::Error;

/// The top-level error type used throughout visitkit.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A visitor was asked to process an element variant it cannot handle.
    ///
    /// The visitor's accumulated state is left untouched when this is
    /// returned.
    #[error("cannot apply {operation} to {element} element")]
    UnsupportedOperation {
        /// Name of the rejected operation (e.g. `"XOR"`).
        operation: &'static str,
        /// Article-qualified element description (e.g. `"an array"`).
        element: &'static str,
    },

    /// An element literal could not be parsed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Return `true` for [`Error::UnsupportedOperation`].
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::UnsupportedOperation { .. })
    }
}

/// Shorthand `Result` type used throughout visitkit.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use vk_core::{ensure, errors::Error};
/// fn positive(x: f64) -> vk_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(matches!(positive(-1.0), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::UnsupportedOperation { .. })` immediately.
///
/// # Example
/// ```
/// use vk_core::{unsupported, errors::Error};
/// fn reject() -> vk_core::errors::Result<()> {
///     unsupported!("XOR", "an array");
/// }
/// assert_eq!(
///     reject().unwrap_err().to_string(),
///     "cannot apply XOR to an array element"
/// );
/// ```
#[macro_export]
macro_rules! unsupported {
    ($operation:expr, $element:expr) => {
        return Err($crate::errors::Error::UnsupportedOperation {
            operation: $operation,
            element: $element,
        })
    };
}
