//! # Order Page Demo
//!
//! Walks through one order against the built-in menu:
//! 1.  Starting a [`Storefront`].
//! 2.  Adding and removing cart lines.
//! 3.  Paying, then printing the final document.

use order_page::clients::OrderPageClient;
use order_page::lifecycle::{Storefront, StorefrontConfig};
use order_page::model::ProductId;
use page_framework::tracing::setup_tracing;
use tracing::{info, Instrument};

async fn place_order(client: &OrderPageClient) -> Result<(), String> {
    client.add_product(ProductId(0)).await.map_err(|e| e.to_string())?;
    client.add_product(ProductId(2)).await.map_err(|e| e.to_string())?;
    client.add_product(ProductId(1)).await.map_err(|e| e.to_string())?;

    let order = client.order().await.map_err(|e| e.to_string())?;
    info!(lines = order.len(), total = order.total, "Cart filled");

    // Changed our mind about the burger.
    if let Some(burger) = order.lines.iter().find(|line| line.name == "Hamburger") {
        client.remove_line(&burger.id).await.map_err(|e| e.to_string())?;
    }

    let order = client.order().await.map_err(|e| e.to_string())?;
    info!(items = ?order.names(), total = order.total, "Checking out");

    client.checkout().await.map_err(|e| e.to_string())?;
    client.pay("Sam").await.map_err(|e| e.to_string())?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting order page demo");

    let store = Storefront::new(StorefrontConfig::default());

    let span = tracing::info_span!("order");
    place_order(&store.client).instrument(span).await?;

    let html = store.client.html().await.map_err(|e| e.to_string())?;
    println!("{html}");

    store.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
