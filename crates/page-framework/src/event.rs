//! # UI Events
//!
//! Discrete interactions delivered to a page: pointer activation, form input and form
//! submission. Every event names the element it struck.

use crate::dom::NodeId;

/// An interaction with an element of the document.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Pointer activation on `target`.
    Click { target: NodeId },
    /// Text entered into the form control `target`. Applied by the runtime itself.
    Input { target: NodeId, value: String },
    /// Submission of the form `target`.
    Submit { target: NodeId },
}

impl UiEvent {
    pub fn target(&self) -> NodeId {
        match self {
            UiEvent::Click { target }
            | UiEvent::Input { target, .. }
            | UiEvent::Submit { target } => *target,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            UiEvent::Click { .. } => "click",
            UiEvent::Input { .. } => "input",
            UiEvent::Submit { .. } => "submit",
        }
    }
}

/// What a page did with an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// The default action (e.g. form navigation) was suppressed.
    pub default_prevented: bool,
    /// At least one region of the document was redrawn.
    pub rerendered: bool,
}

impl EventOutcome {
    /// Nothing happened.
    pub fn ignored() -> Self {
        Self::default()
    }

    pub fn rerendered() -> Self {
        Self {
            rerendered: true,
            ..Self::default()
        }
    }

    pub fn prevent_default(mut self) -> Self {
        self.default_prevented = true;
        self
    }

    /// Combines two outcomes of the same event.
    pub fn merge(self, other: Self) -> Self {
        Self {
            default_prevented: self.default_prevented || other.default_prevented,
            rerendered: self.rerendered || other.rerendered,
        }
    }
}
