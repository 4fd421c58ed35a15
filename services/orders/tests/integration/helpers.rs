use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

use storefront_orders::config::{MapsApiConfig, PartnerApiConfig};
use storefront_orders::infra::maps::MapsAutocompleteClient;
use storefront_orders::infra::partner::PartnerApiClient;
use storefront_orders::state::AppState;
use storefront_orders_schema::orders;
use storefront_testing::fixture::{TEST_PARTNER_TOKEN, partner_token};
use storefront_testing::stub::{HitCounter, StubServer};

pub const PARTNER_USERNAME: &str = "storefront";
pub const PARTNER_PASSWORD: &str = "partner-secret";
pub const MAPS_KEY: &str = "maps-test-key";

// ── Partner API stub ─────────────────────────────────────────────────────────

pub struct PartnerStub {
    pub server: StubServer,
    pub token_hits: HitCounter,
    pub lookup_hits: HitCounter,
    pub phones: Arc<Mutex<Vec<String>>>,
}

/// Serve the partner token and customer-by-phone endpoints.
///
/// The token endpoint only accepts the test credentials; the lookup endpoint only
/// accepts the test bearer token and answers with `lookup`.
pub async fn spawn_partner(token_status: StatusCode, lookup: (StatusCode, Value)) -> PartnerStub {
    let token_hits = HitCounter::default();
    let lookup_hits = HitCounter::default();
    let phones = Arc::new(Mutex::new(Vec::new()));

    let token_route = {
        let hits = token_hits.clone();
        move |Json(body): Json<Value>| async move {
            hits.hit();
            if body["username"] != PARTNER_USERNAME || body["password"] != PARTNER_PASSWORD {
                return (StatusCode::UNAUTHORIZED, Json(Value::Null));
            }
            if token_status != StatusCode::OK {
                return (token_status, Json(Value::Null));
            }
            (StatusCode::OK, Json(partner_token(TEST_PARTNER_TOKEN)))
        }
    };

    let lookup_route = {
        let hits = lookup_hits.clone();
        let phones = phones.clone();
        move |Path(phone): Path<String>, headers: HeaderMap| async move {
            hits.hit();
            phones.lock().unwrap().push(phone);
            let expected = format!("Bearer {TEST_PARTNER_TOKEN}");
            let authorized = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .is_some_and(|v| v == expected);
            if !authorized {
                return (StatusCode::UNAUTHORIZED, Json(Value::Null));
            }
            let (status, body) = lookup;
            (status, Json(body))
        }
    };

    let router = Router::new()
        .route("/config/api/gettokens", post(token_route))
        .route("/customer/phone/{phone}", get(lookup_route));

    PartnerStub {
        server: StubServer::spawn(router).await,
        token_hits,
        lookup_hits,
        phones,
    }
}

pub fn partner_config(base_url: String) -> PartnerApiConfig {
    PartnerApiConfig {
        base_url,
        username: PARTNER_USERNAME.to_owned(),
        password: PARTNER_PASSWORD.to_owned(),
    }
}

pub fn partner_client(base_url: String) -> PartnerApiClient {
    PartnerApiClient::new(reqwest::Client::new(), partner_config(base_url))
}

// ── Maps stub ────────────────────────────────────────────────────────────────

pub struct MapsStub {
    pub server: StubServer,
    pub hits: HitCounter,
    pub queries: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

pub async fn spawn_maps(status: StatusCode, body: Value) -> MapsStub {
    let hits = HitCounter::default();
    let queries = Arc::new(Mutex::new(Vec::new()));
    let route = {
        let hits = hits.clone();
        let queries = queries.clone();
        move |Query(params): Query<HashMap<String, String>>| async move {
            hits.hit();
            queries.lock().unwrap().push(params);
            (status, Json(body))
        }
    };
    MapsStub {
        server: StubServer::spawn(Router::new().route("/autocomplete", get(route))).await,
        hits,
        queries,
    }
}

pub fn maps_client(autocomplete_url: String) -> MapsAutocompleteClient {
    MapsAutocompleteClient::new(
        reqwest::Client::new(),
        MapsApiConfig {
            autocomplete_url,
            api_key: MAPS_KEY.to_owned(),
        },
    )
}

// ── App state / rows ─────────────────────────────────────────────────────────

pub fn test_state(db: DatabaseConnection, partner_url: String, maps_url: String) -> AppState {
    AppState {
        db: Arc::new(db),
        partner: partner_client(partner_url),
        maps: maps_client(maps_url),
    }
}

pub fn order_row(vendor_id: Uuid, status: &str) -> orders::Model {
    let now = Utc::now();
    orders::Model {
        id: Uuid::now_v7(),
        vendor_id,
        status: status.to_owned(),
        total_amount: 2599,
        customer_phone: Some("5551234567".to_owned()),
        delivery_address: Some("12 Main St".to_owned()),
        place_id: None,
        created_at: now,
        updated_at: now,
    }
}
