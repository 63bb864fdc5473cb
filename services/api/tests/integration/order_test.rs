use rust_decimal_macros::dec;
use uuid::Uuid;

use shipway_api::error::ApiServiceError;
use shipway_api::usecase::order::{
    AssignDriverInput, AssignDriverUseCase, CreateOrderInput, CreateOrderUseCase,
    DeleteOrderUseCase, ListRecentOrdersUseCase,
};
use shipway_domain::pagination::PageRequest;

use crate::helpers::{
    MockDriverRepo, MockLogisticRepo, MockOrderRepo, MockPackageRepo, test_contact, test_logistic,
    test_offer, test_order, test_package,
};

#[tokio::test]
async fn should_replace_order_when_shipper_reselects() {
    let logistic_id = Uuid::now_v7();
    let offer_a = test_offer(logistic_id, "RTE-AAAA111122", dec!(100));
    let offer_b = test_offer(logistic_id, "RTE-FFFF666677", dec!(150));
    let package = test_package(Uuid::now_v7());

    let pkg_store = MockPackageRepo::new(
        vec![package.clone()],
        vec![offer_a.clone(), offer_b.clone()],
    );
    pkg_store.link(package.id, offer_a.id);
    pkg_store.link(package.id, offer_b.id);

    let order_store = MockOrderRepo::new(vec![], vec![package.clone()], vec![]);
    let orders_handle = order_store.orders_handle();

    let uc = CreateOrderUseCase {
        packages: pkg_store,
        orders: order_store,
    };

    let first = uc
        .execute(CreateOrderInput {
            package_code: "PKG-BBBB222233".to_owned(),
            price_code: "RTE-AAAA111122".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(first.price, dec!(1200));

    let second = uc
        .execute(CreateOrderInput {
            package_code: "PKG-BBBB222233".to_owned(),
            price_code: "RTE-FFFF666677".to_owned(),
        })
        .await
        .unwrap();
    assert_eq!(second.price, dec!(1800));

    let orders = orders_handle.lock().unwrap();
    assert_eq!(orders.len(), 1, "reselection must replace, not accumulate");
    assert_eq!(orders[0].id, second.id);
    assert_eq!(orders[0].price_package_id, offer_b.id);
}

#[tokio::test]
async fn should_block_reselection_after_payment_started() {
    let logistic_id = Uuid::now_v7();
    let offer_a = test_offer(logistic_id, "RTE-AAAA111122", dec!(100));
    let offer_b = test_offer(logistic_id, "RTE-FFFF666677", dec!(150));
    let package = test_package(Uuid::now_v7());
    let existing = test_order(package.id, offer_a.id);

    let pkg_store = MockPackageRepo::new(
        vec![package.clone()],
        vec![offer_a.clone(), offer_b.clone()],
    );
    pkg_store.link(package.id, offer_a.id);
    pkg_store.link(package.id, offer_b.id);

    let mut order_store = MockOrderRepo::new(vec![existing.clone()], vec![package], vec![]);
    order_store.paid_order_ids.push(existing.id);
    let orders_handle = order_store.orders_handle();

    let uc = CreateOrderUseCase {
        packages: pkg_store,
        orders: order_store,
    };

    let result = uc
        .execute(CreateOrderInput {
            package_code: "PKG-BBBB222233".to_owned(),
            price_code: "RTE-FFFF666677".to_owned(),
        })
        .await;
    assert!(matches!(result, Err(ApiServiceError::PaymentInProgress)));

    let orders = orders_handle.lock().unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(
        orders[0].price_package_id, offer_a.id,
        "the paid selection must survive the rejected attempt"
    );
}

#[tokio::test]
async fn should_assign_driver_and_record_it_on_the_order() {
    let logistic = test_logistic(Uuid::now_v7());
    let offer = test_offer(logistic.id, "RTE-AAAA111122", dec!(100));
    let package = test_package(Uuid::now_v7());
    let order = test_order(package.id, offer.id);
    let contact = test_contact(logistic.id, "ade@shipway.example", "08021234567", true, true);
    let driver_id = contact.driver.id;

    let order_store = MockOrderRepo::new(vec![order], vec![package], vec![offer]);
    let orders_handle = order_store.orders_handle();

    let uc = AssignDriverUseCase {
        logistics: MockLogisticRepo::new(vec![logistic.clone()]),
        drivers: MockDriverRepo::new(vec![contact]),
        orders: order_store,
    };

    uc.execute(
        logistic.user_id,
        AssignDriverInput {
            driver_code: "DRV-DDDD444455".to_owned(),
            order_code: "ORD-CCCC333344".to_owned(),
        },
    )
    .await
    .unwrap();

    assert_eq!(orders_handle.lock().unwrap()[0].driver_id, Some(driver_id));
}

#[tokio::test]
async fn should_delete_order_for_owner_only() {
    let owner = Uuid::now_v7();
    let stranger = Uuid::now_v7();
    let package = test_package(owner);
    let order = test_order(package.id, Uuid::now_v7());

    let store = MockOrderRepo::new(vec![order], vec![package], vec![]);
    let orders_handle = store.orders_handle();

    let uc = DeleteOrderUseCase { repo: store };

    let result = uc.execute(stranger, "ORD-CCCC333344").await;
    assert!(matches!(result, Err(ApiServiceError::OrderNotFound)));
    assert_eq!(orders_handle.lock().unwrap().len(), 1);

    uc.execute(owner, "ORD-CCCC333344").await.unwrap();
    assert!(orders_handle.lock().unwrap().is_empty());
}

#[tokio::test]
async fn should_list_only_orders_served_by_the_caller_logistic() {
    let mine = test_logistic(Uuid::now_v7());
    let rival = test_logistic(Uuid::now_v7());
    let my_offer = test_offer(mine.id, "RTE-AAAA111122", dec!(100));
    let rival_offer = test_offer(rival.id, "RTE-FFFF666677", dec!(150));

    let package_a = test_package(Uuid::now_v7());
    let mut package_b = test_package(Uuid::now_v7());
    package_b.tracking_code = "PKG-XYZW987654".to_owned();

    let my_order = test_order(package_a.id, my_offer.id);
    let mut rival_order = test_order(package_b.id, rival_offer.id);
    rival_order.tracking_code = "ORD-GGGG777788".to_owned();

    let uc = ListRecentOrdersUseCase {
        logistics: MockLogisticRepo::new(vec![mine.clone(), rival]),
        orders: MockOrderRepo::new(
            vec![my_order.clone(), rival_order],
            vec![package_a, package_b],
            vec![my_offer, rival_offer],
        ),
    };

    let recent = uc
        .execute(mine.user_id, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].id, my_order.id);
}
