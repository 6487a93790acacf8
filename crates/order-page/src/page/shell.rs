//! Static page markup: header, the two render regions and the payment overlay.
//!
//! ```text
//! body
//! ├── header          h1 title, p tagline
//! ├── main
//! │   ├── section#menu-section
//! │   └── section#your-order-section
//! └── div#modal
//!     └── div#modal-content
//!         ├── h2
//!         └── form#payment-form   inputs name, card-number, cvv; button Pay
//! ```

use crate::modal::{MODAL_CONTENT, MODAL_REGION};
use crate::render::{MENU_REGION, ORDER_REGION};
use crate::router::PAYMENT_FORM;
use page_framework::{Document, DomError, Element, NodeId};

pub const NAME_FIELD: &str = "name";
pub const CARD_FIELD: &str = "card-number";
pub const CVV_FIELD: &str = "cvv";
pub const PAY_BUTTON: &str = "pay-btn";

/// Appends the shell to `body`.
pub fn build(doc: &mut Document, title: &str, tagline: &str) -> Result<(), DomError> {
    let body = doc.body();

    let header = doc.append(body, Element::new("header"))?;
    doc.append(header, Element::new("h1").with_text(title))?;
    doc.append(header, Element::new("p").with_text(tagline))?;

    let main = doc.append(body, Element::new("main"))?;
    doc.append(main, Element::new("section").with_id(MENU_REGION))?;
    doc.append(main, Element::new("section").with_id(ORDER_REGION))?;

    let modal = doc.append(body, Element::new("div").with_id(MODAL_REGION).with_class("modal"))?;
    let content = doc.append(
        modal,
        Element::new("div").with_id(MODAL_CONTENT).with_class("modal-content"),
    )?;
    doc.append(content, Element::new("h2").with_text("Enter card details"))?;

    let form = doc.append(content, Element::new("form").with_id(PAYMENT_FORM))?;
    input(doc, form, NAME_FIELD, "text", "Enter your name")?;
    input(doc, form, CARD_FIELD, "text", "Enter card number")?;
    input(doc, form, CVV_FIELD, "text", "Enter CVV")?;
    doc.append(
        form,
        Element::new("button")
            .with_id(PAY_BUTTON)
            .with_attr("type", "submit")
            .with_text("Pay"),
    )?;
    Ok(())
}

fn input(
    doc: &mut Document,
    form: NodeId,
    name: &str,
    kind: &str,
    placeholder: &str,
) -> Result<NodeId, DomError> {
    doc.append(
        form,
        Element::new("input")
            .with_attr("type", kind)
            .with_attr("name", name)
            .with_attr("placeholder", placeholder)
            .with_attr("required", "required"),
    )
}

/// The form control called `name` inside `#payment-form`.
pub fn field(doc: &Document, name: &str) -> Option<NodeId> {
    let form = doc.by_id(PAYMENT_FORM)?;
    doc.find(form, |el| el.tag() == "input" && el.attr("name") == Some(name))
}

/// Empties every input of `#payment-form`.
pub fn reset_form(doc: &mut Document) -> Result<(), DomError> {
    let Some(form) = doc.by_id(PAYMENT_FORM) else {
        return Ok(());
    };
    for input in doc.find_all(form, |el| el.tag() == "input") {
        doc.element_mut(input)?.clear_value();
    }
    Ok(())
}
