//! Installation errors.

use thiserror::Error;

/// Returned by [`Builder::install`](crate::intercept::Builder::install)
/// when a required argument was never supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InstallError {
    #[error("argument target is required")]
    MissingTarget,

    #[error("argument listener must be a function")]
    MissingListener,
}
