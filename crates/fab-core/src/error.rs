//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `FabError` where a
//! configuration problem needs to surface through them.

use thiserror::Error;

/// The top-level error type for `fab-core`.
#[derive(Debug, Error)]
pub enum FabError {
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `fab-core`.
pub type FabResult<T> = Result<T, FabError>;
