//! # Framework Errors
//!
//! Common error types shared by the runtime, the generic client and the mock.

use crate::dom::DomError;

/// Errors that can occur within the page framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Page closed")]
    PageClosed,
    #[error("Page dropped response channel")]
    PageDropped,
    #[error("Document error: {0}")]
    Dom(#[from] DomError),
    #[error("Page error: {0}")]
    App(Box<dyn std::error::Error + Send + Sync>),
}
