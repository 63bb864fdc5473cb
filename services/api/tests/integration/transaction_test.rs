use chrono::Utc;
use rust_decimal_macros::dec;
use uuid::Uuid;

use shipway_api::domain::types::TransactionStatus;
use shipway_api::error::ApiServiceError;
use shipway_api::usecase::transaction::{
    CallbackInput, CallbackUseCase, CreateTransactionInput, CreateTransactionUseCase,
    ListPaymentsUseCase,
};
use shipway_domain::pagination::PageRequest;

use crate::helpers::{
    MockBankAccountRepo, MockGateway, MockOrderRepo, MockTransactionRepo, MockUserRepo,
    test_bank_account, test_order, test_package, test_transaction, test_user,
};

#[tokio::test]
async fn should_checkout_and_record_pending_transaction() {
    let shipper = test_user();
    let package = test_package(shipper.id);
    let order = test_order(package.id, Uuid::now_v7());
    let partner = Uuid::now_v7();

    let tx_store = MockTransactionRepo::empty();
    let transactions_handle = tx_store.transactions_handle();
    let gateway = MockGateway::new(Some("https://pay.example/h/abc"), None);
    let calls_handle = gateway.calls_handle();

    let uc = CreateTransactionUseCase {
        orders: MockOrderRepo::new(vec![order.clone()], vec![package], vec![]),
        users: MockUserRepo::new(vec![shipper.clone()], vec![]),
        transactions: tx_store,
        bank_accounts: MockBankAccountRepo::new(
            vec![test_bank_account(partner)],
            vec![(order.id, partner)],
        ),
        gateway,
        public_base_url: "https://api.shipway.example/".to_owned(),
    };

    let (auth_url, transaction) = uc
        .execute(
            shipper.id,
            CreateTransactionInput {
                tracking_code: "ORD-CCCC333344".to_owned(),
                callback: Some("https://app.shipway.example/payments/done".to_owned()),
            },
        )
        .await
        .unwrap();

    assert_eq!(auth_url, "https://pay.example/h/abc");
    assert_eq!(transaction.amount, dec!(1200));
    assert_eq!(transaction.bank_account_id, Some(partner));
    assert!(matches!(transaction.status, TransactionStatus::Pending));
    assert_eq!(transaction.reference.len(), 32);
    assert!(transaction.reference.chars().all(|c| c.is_ascii_hexdigit()));

    let rows = transactions_handle.lock().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        rows[0].redirect_url.as_deref(),
        Some("https://app.shipway.example/payments/done")
    );

    // The gateway was sent our own callback endpoint and the stored reference.
    let calls = calls_handle.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "https://api.shipway.example/callback");
    assert_eq!(calls[0].1, rows[0].reference);
}

#[tokio::test]
async fn should_not_record_transaction_when_gateway_refuses() {
    let shipper = test_user();
    let package = test_package(shipper.id);
    let order = test_order(package.id, Uuid::now_v7());

    let tx_store = MockTransactionRepo::empty();
    let transactions_handle = tx_store.transactions_handle();

    let uc = CreateTransactionUseCase {
        orders: MockOrderRepo::new(vec![order], vec![package], vec![]),
        users: MockUserRepo::new(vec![shipper.clone()], vec![]),
        transactions: tx_store,
        bank_accounts: MockBankAccountRepo::new(vec![], vec![]),
        gateway: MockGateway::new(None, None),
        public_base_url: "https://api.shipway.example".to_owned(),
    };

    let result = uc
        .execute(
            shipper.id,
            CreateTransactionInput {
                tracking_code: "ORD-CCCC333344".to_owned(),
                callback: None,
            },
        )
        .await;
    assert!(matches!(result, Err(ApiServiceError::PaymentSessionFailed)));
    assert!(transactions_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_reject_second_checkout_for_the_same_order() {
    let shipper = test_user();
    let package = test_package(shipper.id);
    let order = test_order(package.id, Uuid::now_v7());
    let pending = test_transaction(order.id, None, None);

    let tx_store = MockTransactionRepo::new(vec![pending]);
    let transactions_handle = tx_store.transactions_handle();

    let uc = CreateTransactionUseCase {
        orders: MockOrderRepo::new(vec![order], vec![package], vec![]),
        users: MockUserRepo::new(vec![shipper.clone()], vec![]),
        transactions: tx_store,
        bank_accounts: MockBankAccountRepo::new(vec![], vec![]),
        gateway: MockGateway::new(Some("https://pay.example/h/abc"), None),
        public_base_url: "https://api.shipway.example".to_owned(),
    };

    let result = uc
        .execute(
            shipper.id,
            CreateTransactionInput {
                tracking_code: "ORD-CCCC333344".to_owned(),
                callback: None,
            },
        )
        .await;
    assert!(matches!(result, Err(ApiServiceError::PaymentInProgress)));
    assert_eq!(transactions_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_settle_transaction_on_verified_callback() {
    let transaction = test_transaction(
        Uuid::now_v7(),
        None,
        Some("https://app.shipway.example/payments/done"),
    );

    let store = MockTransactionRepo::new(vec![transaction.clone()]);
    let transactions_handle = store.transactions_handle();

    let uc = CallbackUseCase {
        transactions: store,
        gateway: MockGateway::new(None, Some(true)),
    };

    let result = uc
        .execute(CallbackInput {
            tx_ref: transaction.reference.clone(),
            transaction_id: Some("4453".to_owned()),
        })
        .await
        .unwrap();

    assert_eq!(result.status, "success");
    assert_eq!(result.message, "Payment successful");
    assert_eq!(result.tracking_code, "TXN-EEEE555566");
    assert_eq!(
        result.redirect_url.as_deref(),
        Some("https://app.shipway.example/payments/done")
    );

    let rows = transactions_handle.lock().unwrap();
    assert!(matches!(rows[0].status, TransactionStatus::Success));
    assert!(rows[0].paid_at.is_some());
}

#[tokio::test]
async fn should_fail_transaction_on_declined_callback() {
    let transaction = test_transaction(Uuid::now_v7(), None, None);

    let store = MockTransactionRepo::new(vec![transaction.clone()]);
    let transactions_handle = store.transactions_handle();

    let uc = CallbackUseCase {
        transactions: store,
        gateway: MockGateway::new(None, Some(false)),
    };

    let result = uc
        .execute(CallbackInput {
            tx_ref: transaction.reference.clone(),
            transaction_id: Some("4453".to_owned()),
        })
        .await
        .unwrap();

    assert_eq!(result.status, "failed");
    let rows = transactions_handle.lock().unwrap();
    assert!(matches!(rows[0].status, TransactionStatus::Failed));
    assert!(rows[0].paid_at.is_none());
}

#[tokio::test]
async fn should_leave_transaction_pending_when_unverifiable() {
    let transaction = test_transaction(Uuid::now_v7(), None, None);

    let store = MockTransactionRepo::new(vec![transaction.clone()]);
    let transactions_handle = store.transactions_handle();

    // No gateway transaction id in the redirect, so nothing can be confirmed.
    let uc = CallbackUseCase {
        transactions: store,
        gateway: MockGateway::new(None, Some(true)),
    };

    let result = uc
        .execute(CallbackInput {
            tx_ref: transaction.reference.clone(),
            transaction_id: None,
        })
        .await
        .unwrap();

    assert_eq!(result.status, "error");
    assert_eq!(result.message, "Unable to verify transaction");
    let rows = transactions_handle.lock().unwrap();
    assert!(
        matches!(rows[0].status, TransactionStatus::Pending),
        "an unverifiable callback must not settle the row"
    );
}

#[tokio::test]
async fn should_filter_payments_by_status() {
    let partner = Uuid::now_v7();
    let pending = test_transaction(Uuid::now_v7(), Some(partner), None);
    let mut settled = test_transaction(Uuid::now_v7(), Some(partner), None);
    settled.tracking_code = "TXN-GGGG777788".to_owned();
    settled.reference = "c0ffeec0ffeec0ffeec0ffeec0ffee00".to_owned();
    settled.status = TransactionStatus::Success;
    settled.paid_at = Some(Utc::now());

    let uc = ListPaymentsUseCase {
        bank_accounts: MockBankAccountRepo::new(vec![test_bank_account(partner)], vec![]),
        transactions: MockTransactionRepo::new(vec![pending, settled]),
    };

    let all = uc
        .execute(partner, None, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(all.len(), 2);

    let successful = uc
        .execute(partner, Some("success"), PageRequest::default())
        .await
        .unwrap();
    assert_eq!(successful.len(), 1);
    assert_eq!(successful[0].tracking_code, "TXN-GGGG777788");

    let result = uc
        .execute(partner, Some("settled"), PageRequest::default())
        .await;
    assert!(matches!(result, Err(ApiServiceError::InvalidStatusFilter)));
}
