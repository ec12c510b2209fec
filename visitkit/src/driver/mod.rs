//! Driver: runs visitors over collections and reports the results.
//!
//! A [`Session`] owns one visitor per [`Operation`](vk_visitors::Operation).
//! For each collection it applies every selected visitor as one batch,
//! catches a batch failure at this boundary, records a [`Report`] per
//! (collection, operation) pair, and resets the visitors before the next
//! collection.

mod collection;
mod report;
mod session;

pub use collection::{sample_collections, Collection};
pub use report::{Outcome, Report};
pub use session::{Session, SessionConfig};
