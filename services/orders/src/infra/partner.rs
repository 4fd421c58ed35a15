use anyhow::Context as _;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};

use crate::config::PartnerApiConfig;
use crate::domain::repository::CustomerLookupPort;
use crate::domain::types::PartnerCustomer;
use crate::error::OrdersServiceError;

const RESULT_SUCCESS: &str = "SUCCESS";

/// HTTP client for the dispensary partner API.
///
/// Every lookup fetches a fresh bearer token first; tokens are not cached.
#[derive(Clone)]
pub struct PartnerApiClient {
    client: Client,
    config: PartnerApiConfig,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    #[serde(default, alias = "accessToken", alias = "access_token")]
    token: Option<String>,
    #[serde(default)]
    data: Option<TokenData>,
}

#[derive(Deserialize)]
struct TokenData {
    #[serde(default, alias = "accessToken", alias = "access_token")]
    token: Option<String>,
}

impl TokenResponse {
    fn into_token(self) -> Option<String> {
        self.token
            .or(self.data.and_then(|d| d.token))
            .filter(|t| !t.is_empty())
    }
}

#[derive(Deserialize)]
struct CustomerLookupResponse {
    #[serde(rename = "resultCode", default)]
    result_code: Option<String>,
    #[serde(default)]
    data: serde_json::Value,
}

impl CustomerLookupResponse {
    /// First customer of a successful response; `None` for empty or non-success results.
    fn into_first_customer(self) -> Option<PartnerCustomer> {
        if self.result_code.as_deref() != Some(RESULT_SUCCESS) {
            return None;
        }
        match self.data {
            serde_json::Value::Array(mut items) if !items.is_empty() => {
                Some(PartnerCustomer(items.swap_remove(0)))
            }
            _ => None,
        }
    }
}

impl PartnerApiClient {
    pub fn new(client: Client, config: PartnerApiConfig) -> Self {
        Self { client, config }
    }

    fn endpoint(&self, segments: &[&str]) -> anyhow::Result<Url> {
        let mut url = Url::parse(&self.config.base_url).context("invalid partner base url")?;
        url.path_segments_mut()
            .map_err(|()| anyhow::anyhow!("partner base url cannot carry a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch_token(&self) -> anyhow::Result<String> {
        let url = self.endpoint(&["config", "api", "gettokens"])?;
        let response = self
            .client
            .post(url)
            .json(&TokenRequest {
                username: &self.config.username,
                password: &self.config.password,
            })
            .send()
            .await
            .context("send partner token request")?
            .error_for_status()
            .context("partner token request rejected")?;
        let body: TokenResponse = response
            .json()
            .await
            .context("decode partner token response")?;
        body.into_token()
            .context("partner token response carried no token")
    }

    async fn lookup(&self, token: &str, phone: &str) -> anyhow::Result<Option<PartnerCustomer>> {
        let url = self.endpoint(&["customer", "phone", phone])?;
        let response = self
            .client
            .get(url)
            .bearer_auth(token)
            .send()
            .await
            .context("send partner customer lookup")?
            .error_for_status()
            .context("partner customer lookup rejected")?;
        let body: CustomerLookupResponse = response
            .json()
            .await
            .context("decode partner customer lookup")?;
        Ok(body.into_first_customer())
    }

    async fn try_find_customer(&self, phone: &str) -> anyhow::Result<Option<PartnerCustomer>> {
        let token = self.fetch_token().await.context("fetch partner token")?;
        tracing::debug!("partner token acquired");
        let customer = self
            .lookup(&token, phone)
            .await
            .context("look up partner customer")?;
        tracing::debug!(found = customer.is_some(), "partner customer lookup finished");
        Ok(customer)
    }
}

impl CustomerLookupPort for PartnerApiClient {
    async fn find_customer_by_phone(
        &self,
        phone: &str,
    ) -> Result<Option<PartnerCustomer>, OrdersServiceError> {
        self.try_find_customer(phone)
            .await
            .map_err(OrdersServiceError::PartnerUnavailable)
    }
}
