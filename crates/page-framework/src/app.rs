//! # PageApp Trait
//!
//! The `PageApp` trait is the contract every page implements to be driven by the generic
//! [`PageRuntime`](crate::PageRuntime). A page owns its application state, builds its markup
//! in [`PageApp::mount`], and reacts to events in [`PageApp::handle_event`].
//!
//! # Architecture Note
//! The runtime owns both the page and the [`Document`]. It lends the document to the page
//! for exactly one hook call at a time, so the page is the only writer while a handler runs
//! and nothing else can observe a half-rendered region.
//!
//! # Provided Methods (Hooks)
//! - [`PageApp::on_unmount`] defaults to doing nothing.

use crate::dom::Document;
use crate::event::{EventOutcome, UiEvent};
use std::fmt::Debug;

/// Trait that any page must implement to be driven by a `PageRuntime`.
///
/// Handlers are synchronous: each one runs to completion before the runtime looks at the
/// next event.
pub trait PageApp: Send + 'static {
    /// Read-only view of the application state handed out to clients.
    type State: Clone + Send + Debug + 'static;

    /// The error type for this page.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the initial markup. Called once, before any event is dispatched.
    fn mount(&mut self, doc: &mut Document) -> Result<(), Self::Error>;

    /// Handles one interaction. `Input` events never reach this hook.
    fn handle_event(
        &mut self,
        event: &UiEvent,
        doc: &mut Document,
    ) -> Result<EventOutcome, Self::Error>;

    /// Snapshot of the current state.
    fn state(&self) -> Self::State;

    /// Called once when the runtime's channel closes.
    fn on_unmount(&mut self, _doc: &Document) {}
}
