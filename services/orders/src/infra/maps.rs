use anyhow::Context as _;
use reqwest::{Client, Url};
use serde::Deserialize;

use storefront_domain::place::Prediction;

use crate::config::MapsApiConfig;
use crate::domain::repository::AutocompletePort;
use crate::error::OrdersServiceError;

/// HTTP client for the map-provider place autocomplete endpoint.
#[derive(Clone)]
pub struct MapsAutocompleteClient {
    client: Client,
    config: MapsApiConfig,
}

#[derive(Deserialize)]
struct AutocompleteResponse {
    status: String,
    #[serde(default)]
    predictions: Vec<Prediction>,
    #[serde(default)]
    error_message: Option<String>,
}

impl AutocompleteResponse {
    fn into_predictions(self) -> anyhow::Result<Vec<Prediction>> {
        match self.status.as_str() {
            "OK" => Ok(self.predictions),
            "ZERO_RESULTS" => Ok(Vec::new()),
            status => Err(anyhow::anyhow!(
                "autocomplete provider answered {status}: {}",
                self.error_message.as_deref().unwrap_or("no message")
            )),
        }
    }
}

impl MapsAutocompleteClient {
    pub fn new(client: Client, config: MapsApiConfig) -> Self {
        Self { client, config }
    }

    async fn try_autocomplete(&self, input: &str) -> anyhow::Result<Vec<Prediction>> {
        let url = Url::parse_with_params(
            &self.config.autocomplete_url,
            &[("input", input), ("key", self.config.api_key.as_str())],
        )
        .context("invalid autocomplete url")?;
        // Strip the URL from reqwest errors: it carries the API key.
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| e.without_url())
            .context("send autocomplete request")?
            .error_for_status()
            .map_err(|e| e.without_url())
            .context("autocomplete request rejected")?;
        let body: AutocompleteResponse = response
            .json()
            .await
            .map_err(|e| e.without_url())
            .context("decode autocomplete response")?;
        body.into_predictions()
    }
}

impl AutocompletePort for MapsAutocompleteClient {
    async fn autocomplete(&self, input: &str) -> Result<Vec<Prediction>, OrdersServiceError> {
        let predictions = self
            .try_autocomplete(input)
            .await
            .map_err(OrdersServiceError::AutocompleteUnavailable)?;
        tracing::debug!(count = predictions.len(), "autocomplete predictions received");
        Ok(predictions)
    }
}
