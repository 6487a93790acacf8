//! Type-safe wrappers around [`PageClient`](page_framework::PageClient).

pub mod error;
pub mod order_page_client;

pub use error::*;
pub use order_page_client::*;
