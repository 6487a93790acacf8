//! # Renderer
//!
//! Draws the menu and the cart into their regions of the [`Document`].
//!
//! `render_menu` and `render_order` throw away everything inside their region and rebuild it
//! from scratch, so calling them twice with the same input produces the same markup.
//! `render_thank_you` is the exception: it appends.
//!
//! Controls are tagged with `data-*` attributes that the [router](crate::router) reads back:
//!
//! | Control | Selector | Tag |
//! |---------|----------|-----|
//! | add to order | `button.order-btn` | `data-product=<product id>` |
//! | remove line | `button.remove-item-btn` | `data-remove=<line id>` |
//! | checkout | `button#complete-order-btn` | |

use crate::model::{Catalog, MenuItem, OrderLine};
use crate::order_state::OrderState;
use page_framework::{Document, DomError, Element, NodeId};
use thiserror::Error;
use tracing::debug;

pub const MENU_REGION: &str = "menu-section";
pub const ORDER_REGION: &str = "your-order-section";
pub const CHECKOUT_BUTTON: &str = "complete-order-btn";

pub const PRODUCT_TAG: &str = "product";
pub const REMOVE_TAG: &str = "remove";

/// Errors raised while drawing.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RenderError {
    #[error("Region #{0} is missing from the document")]
    MissingRegion(&'static str),

    #[error(transparent)]
    Dom(#[from] DomError),
}

/// `$` followed by the shortest decimal form of `price`: `14.0` is `$14`, `12.5` is `$12.5`.
pub fn format_price(price: f64) -> String {
    format!("${price}")
}

pub fn thank_you_message(name: &str) -> String {
    format!("Thanks, {name}! Your order is on its way!")
}

pub(crate) fn region(doc: &Document, id: &'static str) -> Result<NodeId, RenderError> {
    doc.by_id(id).ok_or(RenderError::MissingRegion(id))
}

/// Replaces the menu region with one entry per catalog item, in catalog order.
pub fn render_menu(doc: &mut Document, catalog: &Catalog) -> Result<(), RenderError> {
    let menu = region(doc, MENU_REGION)?;
    doc.clear_children(menu)?;
    for item in catalog.items() {
        menu_entry(doc, menu, item)?;
    }
    debug!(items = catalog.len(), "Menu rendered");
    Ok(())
}

fn menu_entry(doc: &mut Document, menu: NodeId, item: &MenuItem) -> Result<(), DomError> {
    let article = doc.append(menu, Element::new("article").with_class("menu-item"))?;
    doc.append(article, Element::new("p").with_class("emoji").with_text(&item.emoji))?;
    let product = doc.append(article, Element::new("div").with_class("product"))?;
    doc.append(product, Element::new("h2").with_text(&item.name))?;
    doc.append(product, Element::new("p").with_text(item.ingredients.join(", ")))?;
    doc.append(product, Element::new("h3").with_text(format_price(item.price)))?;
    doc.append(
        article,
        Element::new("button")
            .with_class("order-btn")
            .with_data(PRODUCT_TAG, item.id.to_string())
            .with_text("+"),
    )?;
    Ok(())
}

/// Replaces the order region with the current cart.
///
/// An empty cart leaves the region empty: no heading, no total and no checkout control.
pub fn render_order(doc: &mut Document, order: &OrderState) -> Result<(), RenderError> {
    let section = region(doc, ORDER_REGION)?;
    doc.clear_children(section)?;
    if order.is_empty() {
        debug!("Order rendered empty");
        return Ok(());
    }

    doc.append(
        section,
        Element::new("h2").with_class("your-order-h2").with_text("Your Order"),
    )?;
    for line in order.lines() {
        order_row(doc, section, line)?;
    }

    let total = doc.append(section, Element::new("div").with_class("total"))?;
    doc.append(
        total,
        Element::new("h2").with_class("total-price-h2").with_text("Total Price:"),
    )?;
    doc.append(total, Element::new("h4").with_text(format_price(order.total())))?;

    doc.append(
        section,
        Element::new("button")
            .with_id(CHECKOUT_BUTTON)
            .with_class("complete-order-btn")
            .with_text("Complete order"),
    )?;
    debug!(lines = order.len(), total = order.total(), "Order rendered");
    Ok(())
}

fn order_row(doc: &mut Document, section: NodeId, line: &OrderLine) -> Result<(), DomError> {
    let row = doc.append(section, Element::new("div").with_class("order-item"))?;
    doc.append(row, Element::new("h3").with_class("order-item-h3").with_text(&line.name))?;
    doc.append(
        row,
        Element::new("button")
            .with_class("remove-item-btn")
            .with_data(REMOVE_TAG, line.id.as_str())
            .with_text("remove"),
    )?;
    doc.append(row, Element::new("h4").with_text(format_price(line.price)))?;
    Ok(())
}

/// Appends the confirmation for `name` to the order region and returns its node.
pub fn render_thank_you(doc: &mut Document, name: &str) -> Result<NodeId, RenderError> {
    let section = region(doc, ORDER_REGION)?;
    let node = doc.append(section, Element::new("h5").with_text(thank_you_message(name)))?;
    Ok(node)
}
