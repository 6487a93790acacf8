//! # Storefront Lifecycle
//!
//! Starting and stopping the page. A [`Storefront`] builds the [`OrderPage`](crate::page::OrderPage)
//! from a [`StorefrontConfig`], spawns its [`PageRuntime`](page_framework::PageRuntime) on the
//! current Tokio runtime, and keeps the task handle for shutdown.
//!
//! ## Shutdown
//!
//! 1. **Drop the client** - closes the sender side of the event channel
//! 2. **Runtime detects closure** - `receiver.recv()` returns `None`
//! 3. **Page unmounts** - logs its final cart and completed order count
//! 4. **Await completion** - the task handle resolves
//!
//! Events already queued are still handled before the loop exits.
//!
//! ## Logging
//!
//! Call [`setup_tracing`](page_framework::tracing::setup_tracing) once before starting a
//! storefront:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Lifecycle and cart changes
//! RUST_LOG=debug cargo run     # Every event, route and render
//! ```

pub mod config;
pub mod storefront;

pub use config::*;
pub use storefront::*;
