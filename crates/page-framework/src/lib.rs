//! # Page Framework
//!
//! Building blocks for single-page interfaces that run headless: an in-process document,
//! a set of UI events, and an event loop that drives one page at a time.
//!
//! ## Layers
//!
//! 1. **Document Layer** ([`Document`]) - The element tree a page renders into
//! 2. **Page Layer** ([`PageApp`]) - Your application state, markup and event handling
//! 3. **Runtime Layer** ([`PageRuntime`]) - Sequential event dispatch
//! 4. **Interface Layer** ([`PageClient`]) - Type-safe communication with a running page
//!
//! You write the page logic **once** as synchronous hooks; the framework handles delivery,
//! ordering and snapshots.
//!
//! ```rust
//! use page_framework::{Document, Element, EventOutcome, PageApp, PageRuntime, UiEvent};
//!
//! #[derive(Default)]
//! struct Clicker {
//!     clicks: u32,
//! }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("clicker failed")]
//! struct ClickerError;
//!
//! impl PageApp for Clicker {
//!     type State = u32;
//!     type Error = ClickerError;
//!
//!     fn mount(&mut self, doc: &mut Document) -> Result<(), ClickerError> {
//!         let body = doc.body();
//!         doc.append(body, Element::new("button").with_id("clicker")).map_err(|_| ClickerError)?;
//!         Ok(())
//!     }
//!
//!     fn handle_event(&mut self, _: &UiEvent, _: &mut Document) -> Result<EventOutcome, ClickerError> {
//!         self.clicks += 1;
//!         Ok(EventOutcome::ignored())
//!     }
//!
//!     fn state(&self) -> u32 {
//!         self.clicks
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let (runtime, client) = PageRuntime::new(Clicker::default(), 8);
//!     tokio::spawn(runtime.run());
//!
//!     let doc = client.document().await.unwrap();
//!     let button = doc.by_id("clicker").unwrap();
//!     client.dispatch(UiEvent::Click { target: button }).await.unwrap();
//!     assert_eq!(client.state().await.unwrap(), 1);
//! }
//! ```
//!
//! ## Concurrency Model
//!
//! - One runtime task owns one page and its document
//! - Events are handled **sequentially**, each to completion (no locks needed)
//! - Handlers never await; reads are answered between two dispatches
//!
//! ## Testing
//!
//! [`mock::MockPageClient`] answers client requests from a queue of expectations, so wrapper
//! logic can be tested without mounting a page.

pub mod app;
pub mod client;
pub mod client_trait;
pub mod dom;
pub mod error;
pub mod event;
pub mod message;
pub mod mock;
pub mod runtime;
pub mod tracing;

// Re-export core types for convenience
pub use app::PageApp;
pub use client::PageClient;
pub use client_trait::AppClient;
pub use dom::{Document, DomError, Element, NodeId};
pub use error::FrameworkError;
pub use event::{EventOutcome, UiEvent};
pub use message::{PageRequest, Response};
pub use runtime::PageRuntime;
