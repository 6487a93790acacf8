//! # Mock Page & Testing Guide
//!
//! `MockPageClient<A>` hands out a real `PageClient<A>` whose requests are answered from a
//! queue of expectations instead of a running page. Use it to test logic that sits *around*
//! the client (for example a wrapper that resolves a control in the current document and then
//! clicks it) without mounting anything.
//!
//! ## When to use Mocks vs a Real Runtime
//!
//! | Feature | MockPageClient | PageRuntime |
//! |---------|----------------|-------------|
//! | **State** | None (expectations) | Real page and document |
//! | **Use Case** | Client-side orchestration | The page itself, end to end |
//! | **Error Injection** | Easy (`return_err`) | Requires a failing handler |
//!
//! ## Example
//!
//! ```rust
//! use page_framework::mock::MockPageClient;
//! use page_framework::{Document, Element, EventOutcome, PageApp, UiEvent};
//!
//! struct Blank;
//! #[derive(Debug, thiserror::Error)] #[error("blank")] struct BlankError;
//!
//! impl PageApp for Blank {
//!     type State = u32;
//!     type Error = BlankError;
//!     fn mount(&mut self, _: &mut Document) -> Result<(), BlankError> { Ok(()) }
//!     fn handle_event(&mut self, _: &UiEvent, _: &mut Document) -> Result<EventOutcome, BlankError> {
//!         Ok(EventOutcome::ignored())
//!     }
//!     fn state(&self) -> u32 { 0 }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut doc = Document::new();
//!     let body = doc.body();
//!     let button = doc.append(body, Element::new("button")).unwrap();
//!
//!     let mut mock = MockPageClient::<Blank>::new();
//!     mock.expect_document().return_ok(doc);
//!     mock.expect_dispatch().return_ok(EventOutcome::rerendered());
//!
//!     let client = mock.client();
//!     let snapshot = client.document().await.unwrap();
//!     assert!(snapshot.is_attached(button));
//!     let outcome = client.dispatch(UiEvent::Click { target: button }).await.unwrap();
//!     assert!(outcome.rerendered);
//!
//!     mock.verify();
//!     assert_eq!(mock.dispatched(), vec![UiEvent::Click { target: button }]);
//! }
//! ```
//!
//! ## Testing Failure Scenarios
//!
//! ```rust
//! # use page_framework::mock::MockPageClient;
//! # use page_framework::{Document, EventOutcome, FrameworkError, PageApp, UiEvent};
//! # struct Blank;
//! # #[derive(Debug, thiserror::Error)] #[error("blank")] struct BlankError;
//! # impl PageApp for Blank {
//! #     type State = u32;
//! #     type Error = BlankError;
//! #     fn mount(&mut self, _: &mut Document) -> Result<(), BlankError> { Ok(()) }
//! #     fn handle_event(&mut self, _: &UiEvent, _: &mut Document) -> Result<EventOutcome, BlankError> {
//! #         Ok(EventOutcome::ignored())
//! #     }
//! #     fn state(&self) -> u32 { 0 }
//! # }
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockPageClient::<Blank>::new();
//!     mock.expect_state().return_err(FrameworkError::PageClosed);
//!
//!     let result = mock.client().state().await;
//!     assert!(matches!(result, Err(FrameworkError::PageClosed)));
//! }
//! ```

use crate::app::PageApp;
use crate::client::PageClient;
use crate::dom::Document;
use crate::error::FrameworkError;
use crate::event::{EventOutcome, UiEvent};
use crate::message::PageRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to give it.
enum Expectation<A: PageApp> {
    Dispatch {
        response: Result<EventOutcome, FrameworkError>,
    },
    Document {
        response: Result<Document, FrameworkError>,
    },
    State {
        response: Result<A::State, FrameworkError>,
    },
}

type Queue<A> = Arc<Mutex<VecDeque<Expectation<A>>>>;

/// A mock page with expectation tracking for fluent testing.
pub struct MockPageClient<A: PageApp> {
    client: PageClient<A>,
    expectations: Queue<A>,
    dispatched: Arc<Mutex<Vec<UiEvent>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<A: PageApp> Default for MockPageClient<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: PageApp> MockPageClient<A> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<PageRequest<A>>(100);
        let expectations: Queue<A> = Arc::new(Mutex::new(VecDeque::new()));
        let dispatched = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let dispatched_clone = dispatched.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        PageRequest::Dispatch { event, respond_to },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        dispatched_clone.lock().unwrap().push(event);
                        let _ = respond_to.send(response);
                    }
                    (
                        PageRequest::Document { respond_to },
                        Some(Expectation::Document { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (PageRequest::State { respond_to }, Some(Expectation::State { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (request, _) => {
                        panic!("Unexpected {} request or expectation mismatch", request.kind());
                    }
                }
            }
        });

        Self {
            client: PageClient::new(sender),
            expectations,
            dispatched,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> PageClient<A> {
        self.client.clone()
    }

    /// Expects a `dispatch` request.
    pub fn expect_dispatch(&mut self) -> ExpectationBuilder<A, EventOutcome> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Dispatch {
            response,
        })
    }

    /// Expects a `document` request.
    pub fn expect_document(&mut self) -> ExpectationBuilder<A, Document> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::Document {
            response,
        })
    }

    /// Expects a `state` request.
    pub fn expect_state(&mut self) -> ExpectationBuilder<A, A::State> {
        ExpectationBuilder::new(self.expectations.clone(), |response| Expectation::State {
            response,
        })
    }

    /// Events received so far, in order.
    pub fn dispatched(&self) -> Vec<UiEvent> {
        self.dispatched.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that queues the response for one expected request.
pub struct ExpectationBuilder<A: PageApp, T> {
    expectations: Queue<A>,
    wrap: fn(Result<T, FrameworkError>) -> Expectation<A>,
}

impl<A: PageApp, T> ExpectationBuilder<A, T> {
    fn new(expectations: Queue<A>, wrap: fn(Result<T, FrameworkError>) -> Expectation<A>) -> Self {
        Self { expectations, wrap }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(Ok(value)));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back((self.wrap)(Err(error)));
    }
}

// =============================================================================
// LOW-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests land on.
///
/// Use this when a test needs to inspect each request and answer it by hand; otherwise
/// prefer [`MockPageClient`].
pub fn create_mock_client<A: PageApp>(
    buffer_size: usize,
) -> (PageClient<A>, mpsc::Receiver<PageRequest<A>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (PageClient::new(sender), receiver)
}

/// Waits for the next request and returns it if it is a dispatch.
pub async fn expect_dispatch<A: PageApp>(
    receiver: &mut mpsc::Receiver<PageRequest<A>>,
) -> Option<(
    UiEvent,
    tokio::sync::oneshot::Sender<Result<EventOutcome, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(PageRequest::Dispatch { event, respond_to }) => Some((event, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    struct Counter;

    #[derive(Debug, thiserror::Error)]
    #[error("Counter error")]
    struct CounterError;

    impl PageApp for Counter {
        type State = u32;
        type Error = CounterError;

        fn mount(&mut self, _doc: &mut Document) -> Result<(), CounterError> {
            Ok(())
        }

        fn handle_event(
            &mut self,
            _event: &UiEvent,
            _doc: &mut Document,
        ) -> Result<EventOutcome, CounterError> {
            Ok(EventOutcome::ignored())
        }

        fn state(&self) -> u32 {
            0
        }
    }

    fn doc_with_button() -> (Document, crate::dom::NodeId) {
        let mut doc = Document::new();
        let body = doc.body();
        let button = doc.append(body, Element::new("button")).unwrap();
        (doc, button)
    }

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Counter>(10);
        let (_, button) = doc_with_button();

        let dispatch_task =
            tokio::spawn(async move { client.dispatch(UiEvent::Click { target: button }).await });

        let (event, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert_eq!(event, UiEvent::Click { target: button });
        responder.send(Ok(EventOutcome::rerendered())).unwrap();

        let result = dispatch_task.await.unwrap();
        assert!(matches!(result, Ok(outcome) if outcome.rerendered));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockPageClient::<Counter>::new();
        let (doc, button) = doc_with_button();

        mock.expect_state().return_ok(7);
        mock.expect_document().return_ok(doc);
        mock.expect_dispatch().return_ok(EventOutcome::ignored());

        let client = mock.client();
        assert_eq!(client.state().await.unwrap(), 7);
        let snapshot = client.document().await.unwrap();
        assert!(snapshot.is_attached(button));
        client
            .dispatch(UiEvent::Click { target: button })
            .await
            .unwrap();

        mock.verify();
        assert_eq!(mock.dispatched(), vec![UiEvent::Click { target: button }]);
    }

    #[tokio::test]
    async fn test_mock_error_injection() {
        let mut mock = MockPageClient::<Counter>::new();
        mock.expect_document().return_err(FrameworkError::PageClosed);

        let result = mock.client().document().await;
        assert!(matches!(result, Err(FrameworkError::PageClosed)));
        mock.verify();
    }
}
