//! # Observability & Tracing
//!
//! Structured logging for pages built on this framework.
//!
//! The runtime tags every record with `page` (the page type name), so module paths are
//! hidden (`with_target(false)`) to keep lines short.
//!
//! ```bash
//! RUST_LOG=info cargo run     # lifecycle and state changes
//! RUST_LOG=debug cargo run    # every request, event and outcome
//! ```
//!
//! With `RUST_LOG=info` an order walkthrough reads:
//!
//! ```text
//! INFO Page runtime started page="OrderPage"
//! INFO Mounted page="OrderPage" nodes=40
//! INFO Line added line_id=2f1c… product_id=0 lines=1
//! INFO Checkout opened lines=2
//! INFO Order completed customer=Sam lines=2 completed=1
//! INFO Shutdown page="OrderPage" nodes=28
//! ```

/// Initializes the tracing subscriber, filtered by `RUST_LOG`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
