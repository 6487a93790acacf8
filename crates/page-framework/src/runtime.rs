//! # Page Runtime
//!
//! This module defines the `PageRuntime`, the event loop that owns a page and its document.
//! It is the "server" half of the framework: events arrive over a channel and are dispatched
//! one at a time, each handler running to completion before the next event is looked at.

use crate::app::PageApp;
use crate::client::PageClient;
use crate::dom::{Document, DomError};
use crate::error::FrameworkError;
use crate::event::{EventOutcome, UiEvent};
use crate::message::PageRequest;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// The generic event loop that drives a single page.
///
/// **Concurrency Model**:
/// The runtime task exclusively owns the page and the [`Document`]. Requests are processed
/// sequentially, so no `Mutex` or `RwLock` is needed around either of them. Reads
/// (`Document`, `State`) always observe the state between two complete dispatches.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `PageRuntime::new(app, buffer)` to get the runtime and its client.
/// 2.  **Run**: Spawn `runtime.run()`; it mounts the page, then starts dispatching.
/// 3.  **Use**: Clone the client wherever events need to be sent.
///
/// ## Dispatch
///
/// * **Click / Submit**: the target must be attached to the document, then the event is
///   handed to [`PageApp::handle_event`].
/// * **Input**: the runtime writes the value into the target control itself, the way a
///   browser updates a text field before any script sees it.
pub struct PageRuntime<A: PageApp> {
    receiver: mpsc::Receiver<PageRequest<A>>,
    app: A,
    document: Document,
}

impl<A: PageApp> PageRuntime<A> {
    /// Creates a new `PageRuntime` and its associated `PageClient`.
    ///
    /// # Arguments
    ///
    /// * `app` - The page to drive. It is mounted when [`run`](Self::run) starts.
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(app: A, buffer_size: usize) -> (Self, PageClient<A>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let runtime = Self {
            receiver,
            app,
            document: Document::new(),
        };
        (runtime, PageClient::new(sender))
    }

    /// Mounts the page, then processes requests until every client is dropped.
    ///
    /// If mounting fails the loop never starts: the receiver is dropped and clients see
    /// [`FrameworkError::PageClosed`].
    pub async fn run(mut self) {
        // "OrderPage" instead of "order_page::page::OrderPage"
        let page = std::any::type_name::<A>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(page, "Page runtime started");

        if let Err(e) = self.app.mount(&mut self.document) {
            error!(page, error = %e, "Mount failed");
            return;
        }
        info!(page, nodes = self.document.len(), "Mounted");

        while let Some(msg) = self.receiver.recv().await {
            debug!(page, request = msg.kind(), "Request");
            match msg {
                PageRequest::Dispatch { event, respond_to } => {
                    let result = self.dispatch(page, event);
                    let _ = respond_to.send(result);
                }
                PageRequest::Document { respond_to } => {
                    let _ = respond_to.send(Ok(self.document.clone()));
                }
                PageRequest::State { respond_to } => {
                    let _ = respond_to.send(Ok(self.app.state()));
                }
            }
        }

        self.app.on_unmount(&self.document);
        info!(page, nodes = self.document.len(), "Shutdown");
    }

    fn dispatch(&mut self, page: &str, event: UiEvent) -> Result<EventOutcome, FrameworkError> {
        let target = event.target();
        debug!(page, kind = event.kind(), %target, "Dispatch");

        if !self.document.is_attached(target) {
            warn!(page, kind = event.kind(), %target, "Event target is not in the document");
            return Err(DomError::Detached(target).into());
        }

        if let UiEvent::Input { value, .. } = event {
            self.document.element_mut(target)?.set_value(value);
            return Ok(EventOutcome::ignored());
        }

        match self.app.handle_event(&event, &mut self.document) {
            Ok(outcome) => {
                debug!(
                    page,
                    kind = event.kind(),
                    rerendered = outcome.rerendered,
                    default_prevented = outcome.default_prevented,
                    "Handled"
                );
                Ok(outcome)
            }
            Err(e) => {
                warn!(page, kind = event.kind(), %target, error = %e, "Handler failed");
                Err(FrameworkError::App(Box::new(e)))
            }
        }
    }
}
