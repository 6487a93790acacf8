use order_page::clients::{ClientError, OrderPageClient};
use order_page::model::{Catalog, MenuItem, ProductId};
use order_page::order_state::SequentialLineIds;
use order_page::page::{shell, OrderPage};
use order_page::router::PAYMENT_FORM;
use order_page::render::PRODUCT_TAG;
use page_framework::mock::MockPageClient;
use page_framework::{Document, EventOutcome, FrameworkError, PageApp, UiEvent};

/// The markup a freshly started page would show.
fn mounted_document() -> Document {
    let catalog = Catalog::new(vec![
        MenuItem::new(1, "A", 5.0, "a", &[]),
        MenuItem::new(2, "B", 7.0, "b", &[]),
    ])
    .unwrap();
    let mut page = OrderPage::new(catalog, SequentialLineIds::default());
    let mut doc = Document::new();
    page.mount(&mut doc).unwrap();
    doc
}

#[tokio::test]
async fn test_add_product_clicks_matching_button() {
    let doc = mounted_document();
    let button = doc
        .find(doc.body(), |el| el.data(PRODUCT_TAG) == Some("2"))
        .unwrap();

    let mut mock = MockPageClient::<OrderPage>::new();
    mock.expect_document().return_ok(doc);
    mock.expect_dispatch().return_ok(EventOutcome::rerendered());

    let client = OrderPageClient::new(mock.client());
    let outcome = client.add_product(ProductId(2)).await.unwrap();

    assert!(outcome.rerendered);
    mock.verify();
    assert_eq!(mock.dispatched(), vec![UiEvent::Click { target: button }]);
}

#[tokio::test]
async fn test_missing_control_sends_nothing() {
    let mut mock = MockPageClient::<OrderPage>::new();
    mock.expect_document().return_ok(mounted_document());

    let client = OrderPageClient::new(mock.client());
    let result = client.remove_line(&"line_9".into()).await;

    assert!(matches!(result, Err(ClientError::ControlNotFound(_))));
    mock.verify();
    assert!(mock.dispatched().is_empty());
}

#[tokio::test]
async fn test_pay_types_name_then_submits() {
    let doc = mounted_document();
    let field = shell::field(&doc, shell::NAME_FIELD).unwrap();
    let form = doc.by_id(PAYMENT_FORM).unwrap();

    let mut mock = MockPageClient::<OrderPage>::new();
    mock.expect_document().return_ok(doc.clone());
    mock.expect_dispatch().return_ok(EventOutcome::ignored());
    mock.expect_document().return_ok(doc);
    mock.expect_dispatch()
        .return_ok(EventOutcome::rerendered().prevent_default());

    let client = OrderPageClient::new(mock.client());
    let outcome = client.pay("Sam").await.unwrap();

    assert!(outcome.default_prevented);
    mock.verify();
    assert_eq!(
        mock.dispatched(),
        vec![
            UiEvent::Input {
                target: field,
                value: "Sam".to_string()
            },
            UiEvent::Submit { target: form },
        ]
    );
}

#[tokio::test]
async fn test_framework_errors_are_mapped() {
    let mut mock = MockPageClient::<OrderPage>::new();
    mock.expect_state().return_err(FrameworkError::PageClosed);

    let client = OrderPageClient::new(mock.client());
    let result = client.order().await;

    assert_eq!(result, Err(ClientError::PageCommunication("Page closed".to_string())));
    mock.verify();
}

#[tokio::test]
async fn test_html_serializes_snapshot() {
    let doc = mounted_document();
    let expected = doc.to_html();

    let mut mock = MockPageClient::<OrderPage>::new();
    mock.expect_document().return_ok(doc);

    let client = OrderPageClient::new(mock.client());
    let html = client.html().await.unwrap();

    assert_eq!(html, expected);
    assert!(html.starts_with("<body"));
    mock.verify();
}
