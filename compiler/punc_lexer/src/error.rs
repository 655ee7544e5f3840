//! Fatal tokenizer errors.
//!
//! Malformed input is never an error: the scanner recovers and reports
//! through a diagnostic sink. Running out of memory while materializing
//! the token sequence is the only way construction fails.

use std::collections::TryReserveError;

/// Construction of a [`TokenStream`](crate::TokenStream) could not proceed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// Storage for tokens or token text could not be allocated.
    #[error("cannot allocate {what}: {source}")]
    AllocationFailure {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },
}

impl LexError {
    pub(crate) fn allocation(what: &'static str) -> impl FnOnce(TryReserveError) -> Self {
        move |source| LexError::AllocationFailure { what, source }
    }
}
