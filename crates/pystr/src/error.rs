//! Error types for text lookups.

use thiserror::Error;

/// Errors produced by lookup operations.
///
/// Lookups that miss are ordinary results everywhere else in the API
/// (`find` returns -1, `subtract` returns an equal copy); only `index`
/// surfaces the miss as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The requested substring does not occur in the text.
    #[error("substring not found: {0:?}")]
    NotFound(String),
}
