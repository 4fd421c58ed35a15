use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::infra::db::{DbExternalApiLogRepository, DbNotificationRepository, DbOrderRepository};
use crate::infra::maps::MapsAutocompleteClient;
use crate::infra::partner::PartnerApiClient;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub partner: PartnerApiClient,
    pub maps: MapsAutocompleteClient,
}

impl AppState {
    pub fn order_repo(&self) -> DbOrderRepository {
        DbOrderRepository {
            db: self.db.clone(),
        }
    }

    pub fn notification_repo(&self) -> DbNotificationRepository {
        DbNotificationRepository {
            db: self.db.clone(),
        }
    }

    pub fn external_api_log_repo(&self) -> DbExternalApiLogRepository {
        DbExternalApiLogRepository {
            db: self.db.clone(),
        }
    }
}
