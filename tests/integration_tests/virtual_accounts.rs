use crate::common::test_context::TestContext;
use flutterwave_rust::Error;

#[tokio::test]
async fn create_permanent_virtual_account() {
    let ctx = TestContext::start().await;

    let res = ctx
        .client
        .virtual_accounts
        .create_permanent(
            "ada@example.com",
            "Ada",
            "Obi",
            "12345678901",
            "customer-ada",
        )
        .await
        .unwrap();

    assert_eq!(res.status, "success");
    assert_eq!(res.data.order_ref, "URF_customer-ada");
    assert_eq!(res.data.account_number, "7824822527");
    assert_eq!(res.data.expiry_date.as_deref(), Some("N/A"));

    let requests = ctx.received_requests().await;
    let body: serde_json::Value = requests[0].body_json().unwrap();
    assert_eq!(body["narration"], "Ada Obi");
    assert_eq!(body["is_permanent"], true);
    assert_eq!(body["firstname"], "Ada");
    assert_eq!(body["lastname"], "Obi");
}

#[tokio::test]
async fn missing_bvn_sends_nothing() {
    let ctx = TestContext::start().await;

    let err = ctx
        .client
        .virtual_accounts
        .create_permanent("ada@example.com", "Ada", "Obi", "", "customer-ada")
        .await
        .expect_err("Expected error");

    assert!(matches!(err, Error::MissingField("bvn")));
    assert!(ctx.received_requests().await.is_empty());
}
