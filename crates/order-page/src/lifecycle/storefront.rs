use crate::clients::OrderPageClient;
use crate::lifecycle::StorefrontConfig;
use crate::order_state::{LineIdGenerator, UuidLineIds};
use crate::page::OrderPage;
use page_framework::PageRuntime;
use tracing::{error, info};

/// Owns the running page and hands out its client.
///
/// `Storefront` is responsible for:
/// - **Startup**: building the [`OrderPage`] from a [`StorefrontConfig`] and spawning its runtime
/// - **Shutdown**: closing the event channel and waiting for the runtime to finish
///
/// # Example
///
/// ```ignore
/// let store = Storefront::new(StorefrontConfig::default());
///
/// store.client.add_product(ProductId(0)).await?;
/// store.client.checkout().await?;
/// store.client.pay("Sam").await?;
///
/// store.shutdown().await?;
/// ```
pub struct Storefront {
    /// Client for driving the page
    pub client: OrderPageClient,

    handle: tokio::task::JoinHandle<()>,
}

impl Storefront {
    /// Starts a page that numbers its cart lines with random UUIDs.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_line_ids(config, UuidLineIds)
    }

    /// Starts a page with a custom line id source.
    pub fn with_line_ids(config: StorefrontConfig, ids: impl LineIdGenerator + 'static) -> Self {
        info!(items = config.catalog.len(), buffer = config.buffer_size, "Starting storefront");

        let page = OrderPage::new(config.catalog, ids).with_header(config.title, config.tagline);
        let (runtime, inner) = PageRuntime::new(page, config.buffer_size);
        let handle = tokio::spawn(runtime.run());

        Self {
            client: OrderPageClient::new(inner),
            handle,
        }
    }

    /// Closes the page and waits for its runtime to finish.
    ///
    /// Any clones of [`client`](Self::client) keep the page alive until they are dropped too.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the runtime finished cleanly
    /// - `Err(String)` if the runtime task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");

        // Dropping the last sender ends the runtime loop.
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Page runtime failed: {:?}", e);
            return Err(format!("Page runtime failed: {:?}", e));
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}
