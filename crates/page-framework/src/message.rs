//! # Page Messages
//!
//! This module defines the message types exchanged between the `PageClient` and the
//! `PageRuntime`.

use crate::app::PageApp;
use crate::dom::Document;
use crate::error::FrameworkError;
use crate::event::{EventOutcome, UiEvent};
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the runtime.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the runtime.
///
/// `Dispatch` is the only variant that can change anything. `Document` and `State` are reads
/// and are answered between two dispatches, never in the middle of one.
pub enum PageRequest<A: PageApp> {
    Dispatch {
        event: UiEvent,
        respond_to: Response<EventOutcome>,
    },
    Document {
        respond_to: Response<Document>,
    },
    State {
        respond_to: Response<A::State>,
    },
}

impl<A: PageApp> PageRequest<A> {
    pub fn kind(&self) -> &'static str {
        match self {
            PageRequest::Dispatch { .. } => "dispatch",
            PageRequest::Document { .. } => "document",
            PageRequest::State { .. } => "state",
        }
    }
}
