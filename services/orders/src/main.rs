use std::sync::Arc;

use sea_orm::Database;
use tracing::info;

use storefront_core::tracing::init_tracing;
use storefront_orders::config::OrdersConfig;
use storefront_orders::infra::maps::MapsAutocompleteClient;
use storefront_orders::infra::partner::PartnerApiClient;
use storefront_orders::router::build_router;
use storefront_orders::state::AppState;

#[tokio::main]
async fn main() {
    init_tracing();

    let config = OrdersConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    let http = reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("failed to build HTTP client");

    let state = AppState {
        db: Arc::new(db),
        partner: PartnerApiClient::new(http.clone(), config.partner),
        maps: MapsAutocompleteClient::new(http, config.maps),
    };

    let router = build_router(state);
    let addr = format!("0.0.0.0:{}", config.orders_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!("orders service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
