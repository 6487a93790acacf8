//! # AppClient Trait
//!
//! Provides a common interface for page-specific clients, adding default `dispatch`,
//! `document` and `state` methods built on top of a generic `PageClient`.
use crate::{Document, EventOutcome, FrameworkError, PageApp, PageClient, UiEvent};
use async_trait::async_trait;

/// Trait for page-specific clients to inherit the standard operations.
///
/// A wrapper only has to say where its `PageClient` lives and how framework errors map onto
/// its own error type.
///
/// # Example
///
/// ```rust
/// use page_framework::{AppClient, Document, EventOutcome, FrameworkError, PageApp, PageClient, UiEvent};
/// use async_trait::async_trait;
///
/// struct Blank;
/// #[derive(Debug, thiserror::Error)] #[error("blank")] struct BlankError;
///
/// impl PageApp for Blank {
///     type State = ();
///     type Error = BlankError;
///     fn mount(&mut self, _: &mut Document) -> Result<(), BlankError> { Ok(()) }
///     fn handle_event(&mut self, _: &UiEvent, _: &mut Document) -> Result<EventOutcome, BlankError> {
///         Ok(EventOutcome::ignored())
///     }
///     fn state(&self) {}
/// }
///
/// #[derive(Debug)] struct ClientError(String);
///
/// struct BlankClient { inner: PageClient<Blank> }
///
/// #[async_trait]
/// impl AppClient<Blank> for BlankClient {
///     type Error = ClientError;
///     fn inner(&self) -> &PageClient<Blank> { &self.inner }
///     fn map_error(e: FrameworkError) -> ClientError { ClientError(e.to_string()) }
/// }
///
/// async fn usage(client: BlankClient) {
///     // document() and state() are provided automatically
///     let _ = client.document().await;
///     let _ = client.state().await;
/// }
/// ```
#[async_trait]
pub trait AppClient<A: PageApp>: Send + Sync {
    /// The page-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic PageClient.
    fn inner(&self) -> &PageClient<A>;

    /// Map framework errors to the page-specific error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Send one event and wait for it to be handled.
    #[tracing::instrument(skip(self))]
    async fn dispatch(&self, event: UiEvent) -> Result<EventOutcome, Self::Error> {
        tracing::debug!("Sending event");
        self.inner().dispatch(event).await.map_err(Self::map_error)
    }

    /// Fetch a snapshot of the document.
    #[tracing::instrument(skip(self))]
    async fn document(&self) -> Result<Document, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().document().await.map_err(Self::map_error)
    }

    /// Fetch a snapshot of the page state.
    #[tracing::instrument(skip(self))]
    async fn state(&self) -> Result<A::State, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().state().await.map_err(Self::map_error)
    }
}
