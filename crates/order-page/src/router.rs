//! # Event Router
//!
//! Classifies a [`UiEvent`] by looking at its target. One entry point handles every control
//! on the page, in this order for clicks:
//!
//! 1. `data-product` tag: add that product
//! 2. `data-remove` tag: remove that line
//! 3. `#complete-order-btn`: open the payment overlay
//!
//! Submissions only count when they target `#payment-form`. Input events are applied by the
//! runtime and never routed.
//!
//! Routing is pure: it reads the document and returns a [`Route`]. Applying it is up to the
//! [page](crate::page::OrderPage), which also runs the outside-click check after every click.

use crate::model::LineId;
use crate::render::{CHECKOUT_BUTTON, PRODUCT_TAG, REMOVE_TAG};
use page_framework::{Document, DomError, UiEvent};

pub const PAYMENT_FORM: &str = "payment-form";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Raw `data-product` value; parsing is left to the caller.
    AddProduct(String),
    RemoveLine(LineId),
    Checkout,
    SubmitPayment,
}

/// Finds the action for `event`, if any.
///
/// # Errors
/// [`DomError::UnknownNode`] if the target no longer exists.
pub fn route(event: &UiEvent, doc: &Document) -> Result<Option<Route>, DomError> {
    let target = doc.element(event.target())?;
    let route = match event {
        UiEvent::Click { .. } => {
            if let Some(product) = target.data(PRODUCT_TAG) {
                Some(Route::AddProduct(product.to_string()))
            } else if let Some(line) = target.data(REMOVE_TAG) {
                Some(Route::RemoveLine(LineId::new(line)))
            } else if target.id() == Some(CHECKOUT_BUTTON) {
                Some(Route::Checkout)
            } else {
                None
            }
        }
        UiEvent::Submit { .. } if target.id() == Some(PAYMENT_FORM) => Some(Route::SubmitPayment),
        UiEvent::Submit { .. } | UiEvent::Input { .. } => None,
    };
    Ok(route)
}
