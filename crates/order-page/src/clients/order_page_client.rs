//! # Order Page Client
//!
//! Provides a high-level API for driving a running [`OrderPage`]. Each method looks the
//! control up in a fresh document snapshot and dispatches the event a user would produce,
//! so the page sees exactly what it would see from a real click.
use crate::clients::ClientError;
use crate::modal::{MODAL_CONTENT, MODAL_REGION};
use crate::model::{LineId, OrderSnapshot, ProductId};
use crate::page::{shell, OrderPage};
use crate::render::{CHECKOUT_BUTTON, PRODUCT_TAG, REMOVE_TAG};
use crate::router::PAYMENT_FORM;
use page_framework::{AppClient, Document, EventOutcome, FrameworkError, NodeId, PageClient, UiEvent};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the order page.
#[derive(Clone)]
pub struct OrderPageClient {
    inner: PageClient<OrderPage>,
}

impl OrderPageClient {
    pub fn new(inner: PageClient<OrderPage>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl AppClient<OrderPage> for OrderPageClient {
    type Error = ClientError;

    fn inner(&self) -> &PageClient<OrderPage> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ClientError::PageCommunication(e.to_string())
    }
}

impl OrderPageClient {
    async fn locate(
        &self,
        control: &str,
        find: impl FnOnce(&Document) -> Option<NodeId>,
    ) -> Result<NodeId, ClientError> {
        let doc = self.document().await?;
        find(&doc).ok_or_else(|| ClientError::ControlNotFound(control.to_string()))
    }

    async fn click(
        &self,
        control: &str,
        find: impl FnOnce(&Document) -> Option<NodeId>,
    ) -> Result<EventOutcome, ClientError> {
        let target = self.locate(control, find).await?;
        self.dispatch(UiEvent::Click { target }).await
    }

    /// Presses the `+` button of a menu entry.
    #[instrument(skip(self))]
    pub async fn add_product(&self, product_id: ProductId) -> Result<EventOutcome, ClientError> {
        debug!("Sending click");
        let tag = product_id.to_string();
        self.click(&format!("add button for product {product_id}"), |doc| {
            doc.find(doc.body(), |el| el.data(PRODUCT_TAG) == Some(tag.as_str()))
        })
        .await
    }

    /// Presses `remove` on one cart line.
    #[instrument(skip(self))]
    pub async fn remove_line(&self, line_id: &LineId) -> Result<EventOutcome, ClientError> {
        debug!("Sending click");
        self.click(&format!("remove button for line {line_id}"), |doc| {
            doc.find(doc.body(), |el| el.data(REMOVE_TAG) == Some(line_id.as_str()))
        })
        .await
    }

    /// Presses `Complete order`. Only present while the cart has lines.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<EventOutcome, ClientError> {
        debug!("Sending click");
        self.click(CHECKOUT_BUTTON, |doc| doc.by_id(CHECKOUT_BUTTON)).await
    }

    /// Clicks the overlay backdrop.
    #[instrument(skip(self))]
    pub async fn click_overlay(&self) -> Result<EventOutcome, ClientError> {
        debug!("Sending click");
        self.click(MODAL_REGION, |doc| doc.by_id(MODAL_REGION)).await
    }

    /// Clicks inside the overlay's content box.
    #[instrument(skip(self))]
    pub async fn click_modal_content(&self) -> Result<EventOutcome, ClientError> {
        debug!("Sending click");
        self.click(MODAL_CONTENT, |doc| doc.by_id(MODAL_CONTENT)).await
    }

    /// Types `name` into the payment form.
    #[instrument(skip(self))]
    pub async fn enter_name(&self, name: &str) -> Result<EventOutcome, ClientError> {
        debug!("Sending input");
        let target = self
            .locate(shell::NAME_FIELD, |doc| shell::field(doc, shell::NAME_FIELD))
            .await?;
        self.dispatch(UiEvent::Input {
            target,
            value: name.to_string(),
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn submit_payment(&self) -> Result<EventOutcome, ClientError> {
        debug!("Sending submit");
        let target = self.locate(PAYMENT_FORM, |doc| doc.by_id(PAYMENT_FORM)).await?;
        self.dispatch(UiEvent::Submit { target }).await
    }

    /// Fills in the name and submits the payment form.
    #[instrument(skip(self))]
    pub async fn pay(&self, name: &str) -> Result<EventOutcome, ClientError> {
        self.enter_name(name).await?;
        self.submit_payment().await
    }

    #[instrument(skip(self))]
    pub async fn order(&self) -> Result<OrderSnapshot, ClientError> {
        debug!("Sending request");
        Ok(self.state().await?.order)
    }

    /// The whole document serialized as HTML.
    #[instrument(skip(self))]
    pub async fn html(&self) -> Result<String, ClientError> {
        debug!("Sending request");
        Ok(self.document().await?.to_html())
    }
}
