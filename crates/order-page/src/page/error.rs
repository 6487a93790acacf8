//! Error types for the order page.

use crate::order_state::OrderError;
use crate::render::RenderError;
use page_framework::DomError;
use thiserror::Error;

/// Problems with the payment form.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PaymentError {
    /// The form has no control with this `name`.
    #[error("Payment form has no {0:?} field")]
    MissingField(&'static str),

    /// The customer left the name blank.
    #[error("Customer name is required")]
    MissingName,
}

/// Errors a handler of the order page can fail with.
#[derive(Debug, Error)]
pub enum PageError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Payment(#[from] PaymentError),
}
