//! # Order Page
//!
//! [`OrderPage`] is the application root. It owns the catalog, the cart and the overlay, and
//! plugs them into the [`PageRuntime`](page_framework::PageRuntime) by implementing
//! [`PageApp`].
//!
//! ## Event Flow
//!
//! ```text
//! UiEvent ─► router::route ─► apply(Route) ─► OrderState / ModalController
//!                                   │
//!                                   └──────► render_order / modal.sync
//!
//! then, for clicks only: outside-click check on the overlay
//! ```
//!
//! ## Rejected Input
//!
//! - Unknown or malformed product tag: logged, cart untouched, nothing redrawn.
//! - Remove of a line that is gone: no-op.
//! - Payment with a blank name: submission swallowed, cart and overlay stay as they were.
//! - Payment while the overlay is hidden: submission swallowed.

pub mod error;
pub mod shell;

pub use error::*;

use crate::modal::{ModalController, ModalState};
use crate::model::{Catalog, OrderSnapshot, ProductId};
use crate::order_state::{LineIdGenerator, OrderError, OrderState};
use crate::render::{render_menu, render_order, render_thank_you};
use crate::router::{self, Route};
use page_framework::{Document, Element, EventOutcome, PageApp, UiEvent};
use serde::Serialize;
use tracing::{debug, info, warn};

pub const DEFAULT_TITLE: &str = "Jimmy's Diner";
pub const DEFAULT_TAGLINE: &str = "The best burgers and pizzas in town";

/// What clients can see of a running page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageState {
    pub order: OrderSnapshot,
    pub modal: ModalState,
    pub completed_orders: u32,
}

#[derive(Debug)]
pub struct OrderPage {
    catalog: Catalog,
    order: OrderState,
    modal: ModalController,
    title: String,
    tagline: String,
    completed_orders: u32,
}

impl OrderPage {
    pub fn new(catalog: Catalog, ids: impl LineIdGenerator + 'static) -> Self {
        Self {
            catalog,
            order: OrderState::new(ids),
            modal: ModalController::new(),
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            completed_orders: 0,
        }
    }

    pub fn with_header(mut self, title: impl Into<String>, tagline: impl Into<String>) -> Self {
        self.title = title.into();
        self.tagline = tagline.into();
        self
    }

    fn apply(&mut self, route: Route, doc: &mut Document) -> Result<EventOutcome, PageError> {
        debug!(?route, "Route");
        match route {
            Route::AddProduct(tag) => self.add_product(&tag, doc),
            Route::RemoveLine(line_id) => {
                self.order.remove_line(&line_id);
                render_order(doc, &self.order)?;
                Ok(EventOutcome::rerendered())
            }
            Route::Checkout => {
                if !self.modal.open() {
                    return Ok(EventOutcome::ignored());
                }
                self.modal.sync(doc)?;
                info!(lines = self.order.len(), "Checkout opened");
                Ok(EventOutcome::rerendered())
            }
            Route::SubmitPayment => self.submit_payment(doc).map(EventOutcome::prevent_default),
        }
    }

    fn add_product(&mut self, tag: &str, doc: &mut Document) -> Result<EventOutcome, PageError> {
        let added = tag
            .parse::<ProductId>()
            .map_err(|_| OrderError::InvalidProductTag(tag.to_string()))
            .and_then(|product_id| self.order.add_line(&self.catalog, product_id).map(|_| ()));

        match added {
            Ok(()) => {
                render_order(doc, &self.order)?;
                Ok(EventOutcome::rerendered())
            }
            Err(e @ (OrderError::UnknownProduct(_) | OrderError::InvalidProductTag(_))) => {
                warn!(error = %e, "Add rejected");
                Ok(EventOutcome::ignored())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn submit_payment(&mut self, doc: &mut Document) -> Result<EventOutcome, PageError> {
        if !self.modal.is_visible() {
            debug!("Payment submitted while the overlay is hidden");
            return Ok(EventOutcome::ignored());
        }

        let name = match payment_name(doc) {
            Ok(name) => name,
            Err(PageError::Payment(e @ PaymentError::MissingName)) => {
                warn!(error = %e, "Payment rejected");
                return Ok(EventOutcome::ignored());
            }
            Err(e) => return Err(e),
        };

        let lines = self.order.clear();
        shell::reset_form(doc)?;
        self.modal.close();
        self.modal.sync(doc)?;
        render_order(doc, &self.order)?;
        render_thank_you(doc, &name)?;
        self.completed_orders += 1;

        info!(customer = %name, lines, completed = self.completed_orders, "Order completed");
        Ok(EventOutcome::rerendered())
    }
}

/// Trimmed content of the name field.
fn payment_name(doc: &Document) -> Result<String, PageError> {
    let field = shell::field(doc, shell::NAME_FIELD)
        .ok_or(PaymentError::MissingField(shell::NAME_FIELD))?;
    let name = doc.element(field)?.value().map(str::trim).unwrap_or_default();
    if name.is_empty() {
        return Err(PaymentError::MissingName.into());
    }
    Ok(name.to_string())
}

impl PageApp for OrderPage {
    type State = PageState;
    type Error = PageError;

    fn mount(&mut self, doc: &mut Document) -> Result<(), PageError> {
        shell::build(doc, &self.title, &self.tagline)?;
        render_menu(doc, &self.catalog)?;
        render_order(doc, &self.order)?;
        self.modal.sync(doc)?;
        info!(items = self.catalog.len(), "Order page mounted");
        Ok(())
    }

    fn handle_event(
        &mut self,
        event: &UiEvent,
        doc: &mut Document,
    ) -> Result<EventOutcome, PageError> {
        let mut outcome = match router::route(event, doc)? {
            Some(route) => self.apply(route, doc)?,
            None => EventOutcome::ignored(),
        };

        // A target removed by the redraw above is no longer inside the overlay.
        if let UiEvent::Click { target } = event {
            if self.modal.dismiss_from_outside(doc, *target) {
                self.modal.sync(doc)?;
                outcome = outcome.merge(EventOutcome::rerendered());
            }
        }
        Ok(outcome)
    }

    fn state(&self) -> PageState {
        PageState {
            order: self.order.snapshot(),
            modal: self.modal.state(),
            completed_orders: self.completed_orders,
        }
    }

    fn on_unmount(&mut self, doc: &Document) {
        let thanks = doc.find_all(doc.body(), |el: &Element| el.tag() == "h5").len();
        info!(
            lines = self.order.len(),
            completed = self.completed_orders,
            thanks,
            "Order page closed"
        );
    }
}
