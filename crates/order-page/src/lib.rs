//! # Order Page
//!
//! A single-page ordering interface: a menu, a cart and a payment overlay, driven by the
//! [`page_framework`] event loop.
//!
//! ## Core Components
//!
//! - **[model]**: Menu items, the [`Catalog`](model::Catalog) and cart lines.
//! - **[order_state]**: The cart itself, the only domain state of the page.
//! - **[render]**: Redraws the menu and cart regions from state.
//! - **[modal]**: Visibility of the payment overlay.
//! - **[router]**: Decides what a click or submission means.
//! - **[page]**: [`OrderPage`](page::OrderPage), which ties the above together.
//! - **[clients]**: [`OrderPageClient`](clients::OrderPageClient), a typed API for driving a running page.
//! - **[lifecycle]**: Starting and stopping a [`Storefront`](lifecycle::Storefront).
//!
//! ## Testing
//!
//! See [`page_framework::mock`] for utilities to test clients without spawning a page.

pub mod clients;
pub mod lifecycle;
pub mod modal;
pub mod model;
pub mod order_state;
pub mod page;
pub mod render;
pub mod router;
