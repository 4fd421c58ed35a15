use axum::http::StatusCode;
use uuid::Uuid;

use storefront_client::order_detail::{NOTIFY_ACKNOWLEDGEMENT, NotifyOutcome, OrderDetailView};
use storefront_domain::order::OrderStatus;
use storefront_testing::fixture::sample_order;
use storefront_testing::stub::unreachable_base_url;

use crate::helpers::{ShopBehavior, shop_client, spawn_shop};

#[tokio::test]
async fn should_acknowledge_stored_notification() {
    let stub = spawn_shop(ShopBehavior::default()).await;
    let mut view = OrderDetailView::new(
        shop_client(&stub.server.base_url()),
        sample_order(Uuid::now_v7(), OrderStatus::Processing),
    );
    view.set_message("Your order is ready");

    let outcome = view.submit_notification().await;
    assert_eq!(outcome, NotifyOutcome::Acknowledged);
    assert_eq!(outcome.acknowledgement(), Some(NOTIFY_ACKNOWLEDGEMENT));
    assert_eq!(stub.notify_bodies.lock().unwrap()[0]["message"], "Your order is ready");
}

#[tokio::test]
async fn should_report_failure_on_server_error() {
    let stub = spawn_shop(ShopBehavior {
        notify_status: StatusCode::INTERNAL_SERVER_ERROR,
        ..ShopBehavior::default()
    })
    .await;
    let mut view = OrderDetailView::new(
        shop_client(&stub.server.base_url()),
        sample_order(Uuid::now_v7(), OrderStatus::Pending),
    );
    view.set_message("Your order is ready");

    let outcome = view.submit_notification().await;
    assert_eq!(outcome, NotifyOutcome::Failed);
    assert_eq!(outcome.acknowledgement(), None);
    assert_eq!(view.message(), "Your order is ready");
}

#[tokio::test]
async fn should_report_failure_when_service_is_unreachable() {
    let view = OrderDetailView::new(
        shop_client(&unreachable_base_url().await),
        sample_order(Uuid::now_v7(), OrderStatus::Pending),
    );

    assert_eq!(view.submit_notification().await, NotifyOutcome::Failed);
}

#[tokio::test]
async fn should_send_empty_message() {
    let stub = spawn_shop(ShopBehavior::default()).await;
    let view = OrderDetailView::new(
        shop_client(&stub.server.base_url()),
        sample_order(Uuid::now_v7(), OrderStatus::Pending),
    );

    assert_eq!(view.submit_notification().await, NotifyOutcome::Acknowledged);
    assert_eq!(stub.notify_bodies.lock().unwrap()[0]["message"], "");
}
