use crate::common::{
    test_context::TestContext, FAILED_TRANSACTION_ID, MOCK_CARD_TOKEN, MOCK_TX_REF,
    SUCCESSFUL_TRANSACTION_ID,
};
use chrono::{TimeZone, Utc};
use flutterwave_rust::{error::ApiError, Error};

#[tokio::test]
async fn verify_transaction() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .transactions
        .verify(SUCCESSFUL_TRANSACTION_ID)
        .await
        .unwrap();

    assert_eq!(res.status, "success");
    assert_eq!(res.data.id, SUCCESSFUL_TRANSACTION_ID);
    assert_eq!(res.data.tx_ref, MOCK_TX_REF);
    assert_eq!(res.data.status, "successful");
    assert_eq!(res.data.amount, 100.0);
    assert_eq!(res.data.amount_settled, Some(98.6));
    assert_eq!(res.data.device_fingerprint.as_deref(), Some("N/A"));

    let card = res.data.card.as_ref().unwrap();
    assert_eq!(card.token, MOCK_CARD_TOKEN);
    assert_eq!(card.last_4digits, "2950");
    assert!(res.is_tokenised());
    assert_eq!(
        res.card_will_expire_before(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        (false, "09/32")
    );
    assert_eq!(
        res.card_will_expire_before(Utc.with_ymd_and_hms(2033, 1, 1, 0, 0, 0).unwrap()),
        (true, "09/32")
    );
}

#[tokio::test]
async fn verify_unknown_transaction() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .transactions
        .verify(123456)
        .await
        .expect_err("Expected error");

    assert!(matches!(
        err,
        Error::ApiError(ApiError { status: 404, ref endpoint, .. })
            if endpoint == &format!("{}/transactions/123456/verify", ctx.api_url())
    ));
}

#[tokio::test]
async fn list_transactions_by_reference() {
    let ctx = TestContext::start().await;

    let transactions = ctx
        .client
        .transactions
        .list_by_reference(MOCK_TX_REF)
        .await
        .unwrap();

    assert_eq!(
        transactions.iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![FAILED_TRANSACTION_ID, SUCCESSFUL_TRANSACTION_ID]
    );
    assert!(transactions.iter().all(|t| t.tx_ref == MOCK_TX_REF));
}

#[tokio::test]
async fn list_transactions_by_reference_page() {
    let ctx = TestContext::start().await;

    let first = ctx
        .client
        .transactions
        .list_by_reference_page(MOCK_TX_REF, 1)
        .await
        .unwrap();
    assert_eq!(first.meta.page_info.current_page, 1);
    assert_eq!(first.data.len(), 2);

    let second = ctx
        .client
        .transactions
        .list_by_reference_page(MOCK_TX_REF, 2)
        .await
        .unwrap();
    assert_eq!(second.meta.page_info.current_page, 2);
    assert!(second.data.is_empty());
}

#[tokio::test]
async fn list_unknown_reference_is_empty() {
    let ctx = TestContext::start().await;

    let transactions = ctx
        .client
        .transactions
        .list_by_reference("no-such-order")
        .await
        .unwrap();

    assert!(transactions.is_empty());
}
