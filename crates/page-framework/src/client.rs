//! # Generic Client
//!
//! This module defines the generic client for talking to a running page.

use crate::app::PageApp;
use crate::dom::Document;
use crate::error::FrameworkError;
use crate::event::{EventOutcome, UiEvent};
use crate::message::PageRequest;
use tokio::sync::{mpsc, oneshot};

/// ## PageClient
///
/// The `PageClient<A>` forwards events and reads to a `PageRuntime<A>` over a Tokio mpsc
/// channel and returns results via oneshot channels.
///
/// * **Cloneable** – holds only a sender, so cloning is inexpensive.
/// * **Ordered** – requests from one client are handled in the order they were sent.
pub struct PageClient<A: PageApp> {
    sender: mpsc::Sender<PageRequest<A>>,
}

// Manual impl: the page itself need not be `Clone`.
impl<A: PageApp> Clone for PageClient<A> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<A: PageApp> PageClient<A> {
    pub fn new(sender: mpsc::Sender<PageRequest<A>>) -> Self {
        Self { sender }
    }

    pub async fn dispatch(&self, event: UiEvent) -> Result<EventOutcome, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PageRequest::Dispatch { event, respond_to })
            .await
            .map_err(|_| FrameworkError::PageClosed)?;
        response.await.map_err(|_| FrameworkError::PageDropped)?
    }

    /// Snapshot of the document as it stands after every previously sent event.
    pub async fn document(&self) -> Result<Document, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PageRequest::Document { respond_to })
            .await
            .map_err(|_| FrameworkError::PageClosed)?;
        response.await.map_err(|_| FrameworkError::PageDropped)?
    }

    pub async fn state(&self) -> Result<A::State, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(PageRequest::State { respond_to })
            .await
            .map_err(|_| FrameworkError::PageClosed)?;
        response.await.map_err(|_| FrameworkError::PageDropped)?
    }
}
