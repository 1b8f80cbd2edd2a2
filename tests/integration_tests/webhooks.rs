use crate::common::{test_context::TestContext, FAILED_TRANSACTION_ID, SUCCESSFUL_TRANSACTION_ID};
use flutterwave_rust::{webhooks::WebhookMessage, Error};
use serde_json::json;

fn webhook(id: i64) -> WebhookMessage {
    serde_json::from_value(json!({
        "event": "charge.completed",
        "data": {
            "id": id,
            "tx_ref": "mock-order-99",
            "amount": 100,
            "currency": "NGN",
            // Forged: webhooks are never trusted on their own
            "status": "successful"
        }
    }))
    .unwrap()
}

#[tokio::test]
async fn verify_successful_webhook() {
    let ctx = TestContext::start().await;

    let transaction = webhook(SUCCESSFUL_TRANSACTION_ID)
        .verify(&ctx.secret_key, &ctx.api_url())
        .await
        .unwrap();

    assert_eq!(transaction.data.id, SUCCESSFUL_TRANSACTION_ID);
    assert_eq!(transaction.data.status, "successful");
}

#[tokio::test]
async fn verify_webhook_of_failed_transaction() {
    let ctx = TestContext::start().await;

    let err = webhook(FAILED_TRANSACTION_ID)
        .verify_with(&ctx.client)
        .await
        .expect_err("Expected error");

    assert!(matches!(err, Error::Verification(ref status) if status == "failed"));
}

#[tokio::test]
async fn verify_webhook_of_unknown_transaction() {
    let ctx = TestContext::start().await;

    let err = webhook(4242)
        .verify_with(&ctx.client)
        .await
        .expect_err("Expected error");

    assert!(matches!(err, Error::ApiError(ref e) if e.status == 404));
}
