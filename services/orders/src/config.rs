use std::fmt;

/// Credentials and endpoint of the dispensary partner API.
#[derive(Clone)]
pub struct PartnerApiConfig {
    /// Base URL, e.g. "https://partner.example.com/api". Env var: `PARTNER_API_URL`.
    pub base_url: String,
    /// Env var: `PARTNER_API_USERNAME`.
    pub username: String,
    /// Env var: `PARTNER_API_PASSWORD`.
    pub password: String,
}

impl fmt::Debug for PartnerApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartnerApiConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Endpoint and key of the map-provider autocomplete API.
#[derive(Clone)]
pub struct MapsApiConfig {
    /// Autocomplete endpoint. Env var: `MAPS_AUTOCOMPLETE_URL`
    /// (default: Google Places autocomplete JSON endpoint).
    pub autocomplete_url: String,
    /// Env var: `MAPS_API_KEY`.
    pub api_key: String,
}

impl fmt::Debug for MapsApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapsApiConfig")
            .field("autocomplete_url", &self.autocomplete_url)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

pub const DEFAULT_MAPS_AUTOCOMPLETE_URL: &str =
    "https://maps.googleapis.com/maps/api/place/autocomplete/json";

/// Orders service configuration loaded from environment variables.
#[derive(Debug)]
pub struct OrdersConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3120). Env var: `ORDERS_PORT`.
    pub orders_port: u16,
    pub partner: PartnerApiConfig,
    pub maps: MapsApiConfig,
}

impl OrdersConfig {
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL").expect("DATABASE_URL"),
            orders_port: std::env::var("ORDERS_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3120),
            partner: PartnerApiConfig {
                base_url: std::env::var("PARTNER_API_URL").expect("PARTNER_API_URL"),
                username: std::env::var("PARTNER_API_USERNAME").expect("PARTNER_API_USERNAME"),
                password: std::env::var("PARTNER_API_PASSWORD").expect("PARTNER_API_PASSWORD"),
            },
            maps: MapsApiConfig {
                autocomplete_url: std::env::var("MAPS_AUTOCOMPLETE_URL")
                    .unwrap_or_else(|_| DEFAULT_MAPS_AUTOCOMPLETE_URL.to_owned()),
                api_key: std::env::var("MAPS_API_KEY").expect("MAPS_API_KEY"),
            },
        }
    }
}
