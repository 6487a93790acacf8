//! # Modal Controller
//!
//! Visibility of the payment overlay. It is kept apart from the cart: opening or closing the
//! overlay never changes the order.
//!
//! ```text
//!            open()
//!   Hidden ---------> Visible
//!     ^                  |
//!     +------------------+
//!     close() / outside click
//! ```

use crate::render::{region, RenderError};
use page_framework::{Document, NodeId};
use serde::Serialize;
use tracing::debug;

pub const MODAL_REGION: &str = "modal";
pub const MODAL_CONTENT: &str = "modal-content";
pub const MODAL_OPEN_CLASS: &str = "modal-open";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum ModalState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Debug, Clone, Default)]
pub struct ModalController {
    state: ModalState,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == ModalState::Visible
    }

    /// Shows the overlay. Returns whether the state changed.
    pub fn open(&mut self) -> bool {
        self.transition(ModalState::Visible)
    }

    /// Hides the overlay. Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        self.transition(ModalState::Hidden)
    }

    fn transition(&mut self, to: ModalState) -> bool {
        if self.state == to {
            return false;
        }
        debug!(from = ?self.state, ?to, "Modal");
        self.state = to;
        true
    }

    /// A click on the backdrop: inside `#modal` but outside `#modal-content`.
    ///
    /// Only counts while the overlay is visible.
    pub fn is_outside_click(&self, doc: &Document, target: NodeId) -> bool {
        if !self.is_visible() {
            return false;
        }
        match (doc.by_id(MODAL_REGION), doc.by_id(MODAL_CONTENT)) {
            (Some(modal), Some(content)) => {
                doc.contains(modal, target) && !doc.contains(content, target)
            }
            _ => false,
        }
    }

    /// Closes the overlay if `target` is an outside click. Returns whether it closed.
    pub fn dismiss_from_outside(&mut self, doc: &Document, target: NodeId) -> bool {
        self.is_outside_click(doc, target) && self.close()
    }

    /// Writes the current state onto `#modal` and the `body` class list.
    pub fn sync(&self, doc: &mut Document) -> Result<(), RenderError> {
        let modal = region(doc, MODAL_REGION)?;
        let display = match self.state {
            ModalState::Visible => "display: block",
            ModalState::Hidden => "display: none",
        };
        doc.element_mut(modal)?.set_attr("style", display);

        let body = doc.body();
        let body = doc.element_mut(body)?;
        match self.state {
            ModalState::Visible => body.add_class(MODAL_OPEN_CLASS),
            ModalState::Hidden => body.remove_class(MODAL_OPEN_CLASS),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use page_framework::Element;

    struct Overlay {
        doc: Document,
        backdrop: NodeId,
        content: NodeId,
        field: NodeId,
        outside: NodeId,
    }

    fn overlay() -> Overlay {
        let mut doc = Document::new();
        let body = doc.body();
        let outside = doc.append(body, Element::new("main")).unwrap();
        let backdrop = doc.append(body, Element::new("div").with_id(MODAL_REGION)).unwrap();
        let content = doc
            .append(backdrop, Element::new("div").with_id(MODAL_CONTENT))
            .unwrap();
        let field = doc.append(content, Element::new("input")).unwrap();
        Overlay {
            doc,
            backdrop,
            content,
            field,
            outside,
        }
    }

    #[test]
    fn test_open_then_close_returns_to_hidden() {
        let mut modal = ModalController::new();
        assert_eq!(modal.state(), ModalState::Hidden);
        assert!(modal.open());
        assert!(!modal.open());
        assert!(modal.close());
        assert_eq!(modal.state(), ModalState::Hidden);
        assert!(!modal.close());
    }

    #[test]
    fn test_backdrop_click_dismisses() {
        let o = overlay();
        let mut modal = ModalController::new();
        modal.open();
        assert!(modal.dismiss_from_outside(&o.doc, o.backdrop));
        assert!(!modal.is_visible());
    }

    #[test]
    fn test_content_clicks_do_not_dismiss() {
        let o = overlay();
        let mut modal = ModalController::new();
        modal.open();
        assert!(!modal.dismiss_from_outside(&o.doc, o.content));
        assert!(!modal.dismiss_from_outside(&o.doc, o.field));
        assert!(modal.is_visible());
    }

    #[test]
    fn test_clicks_outside_the_overlay_do_not_dismiss() {
        let o = overlay();
        let mut modal = ModalController::new();
        modal.open();
        assert!(!modal.dismiss_from_outside(&o.doc, o.outside));
        assert!(modal.is_visible());
    }

    #[test]
    fn test_backdrop_click_while_hidden_is_ignored() {
        let o = overlay();
        let mut modal = ModalController::new();
        assert!(!modal.is_outside_click(&o.doc, o.backdrop));
        assert!(!modal.dismiss_from_outside(&o.doc, o.backdrop));
        assert_eq!(modal.state(), ModalState::Hidden);
    }

    #[test]
    fn test_sync_reflects_state() {
        let mut o = overlay();
        let mut modal = ModalController::new();

        modal.open();
        modal.sync(&mut o.doc).unwrap();
        assert_eq!(o.doc.element(o.backdrop).unwrap().attr("style"), Some("display: block"));
        assert!(o.doc.element(o.doc.body()).unwrap().has_class(MODAL_OPEN_CLASS));

        modal.close();
        modal.sync(&mut o.doc).unwrap();
        assert_eq!(o.doc.element(o.backdrop).unwrap().attr("style"), Some("display: none"));
        assert!(!o.doc.element(o.doc.body()).unwrap().has_class(MODAL_OPEN_CLASS));
    }
}
