use chrono::{DateTime, Utc};
use reqwest::{Client, Response, Url};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_domain::id::{OrderId, VendorId};
use storefront_domain::order::{Order, OrderStatus};
use storefront_domain::place::Prediction;

use crate::autocomplete::PlaceSuggester;
use crate::error::ClientError;

/// A notification stored by the orders service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub order_id: OrderId,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
struct NotifyBody<'a> {
    message: &'a str,
}

#[derive(Serialize)]
struct StatusBody {
    status: OrderStatus,
}

/// HTTP client for the orders service REST API.
#[derive(Clone)]
pub struct ShopClient {
    http: Client,
    base_url: Url,
}

impl ShopClient {
    pub fn new(http: Client, base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    // ── POST /api/orders/{order_id}/notify ──

    pub async fn notify_order(
        &self,
        order_id: OrderId,
        message: &str,
    ) -> Result<Notification, ClientError> {
        let url = self.endpoint(&["api", "orders", &order_id.to_string(), "notify"])?;
        let response = self
            .http
            .post(url)
            .json(&NotifyBody { message })
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    // ── GET /api/vendors/{vendor_id}/orders ──

    pub async fn vendor_orders(&self, vendor_id: VendorId) -> Result<Vec<Order>, ClientError> {
        let url = self.endpoint(&["api", "vendors", &vendor_id.to_string(), "orders"])?;
        let response = self.http.get(url).send().await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    // ── PUT /api/orders/{order_id}/status ──

    pub async fn update_order_status(
        &self,
        order_id: OrderId,
        status: OrderStatus,
    ) -> Result<Order, ClientError> {
        let url = self.endpoint(&["api", "orders", &order_id.to_string(), "status"])?;
        let response = self
            .http
            .put(url)
            .json(&StatusBody { status })
            .send()
            .await?;
        Ok(ensure_success(response).await?.json().await?)
    }

    // ── GET /api/places/autocomplete ──

    pub async fn autocomplete(&self, input: &str) -> Result<Vec<Prediction>, ClientError> {
        let mut url = self.endpoint(&["api", "places", "autocomplete"])?;
        url.query_pairs_mut().append_pair("input", input);
        let response = self.http.get(url).send().await?;
        Ok(ensure_success(response).await?.json().await?)
    }
}

impl PlaceSuggester for ShopClient {
    async fn suggest(&self, input: &str) -> Result<Vec<Prediction>, ClientError> {
        self.autocomplete(input).await
    }
}

async fn ensure_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Status { status, body })
}
