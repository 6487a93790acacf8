use thiserror::Error;

/// Errors returned by [`OrderPageClient`](super::OrderPageClient).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClientError {
    /// The control to interact with is not in the current document.
    #[error("Control not found: {0}")]
    ControlNotFound(String),

    #[error("Page communication error: {0}")]
    PageCommunication(String),
}
