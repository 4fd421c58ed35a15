use std::sync::Arc;

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, Insert,
    IntoActiveModel as _, QueryFilter, QueryOrder,
    sea_query::{Expr, OnConflict},
};
use uuid::Uuid;

use storefront_domain::order::OrderStatus;
use storefront_orders_schema::external_api_logs::{self, ExternalApiStatus};
use storefront_orders_schema::{order_notifications, orders};

use crate::domain::repository::{ExternalApiLogRepository, NotificationRepository, OrderRepository};
use crate::domain::types::{
    ExternalApiLog, ExternalCallError, ExternalCallStatus, Order, OrderNotification,
};
use crate::error::OrdersServiceError;

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: Arc<DatabaseConnection>,
}

impl OrderRepository for DbOrderRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, OrdersServiceError> {
        let model = orders::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .context("find order by id")?;
        model.map(order_from_model).transpose()
    }

    async fn list_by_vendor(&self, vendor_id: Uuid) -> Result<Vec<Order>, OrdersServiceError> {
        let models = orders::Entity::find()
            .filter(orders::Column::VendorId.eq(vendor_id))
            .order_by_desc(orders::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list orders by vendor")?;
        models.into_iter().map(order_from_model).collect()
    }

    async fn create(&self, order: &Order) -> Result<(), OrdersServiceError> {
        orders::ActiveModel {
            id: Set(order.id),
            vendor_id: Set(order.vendor_id),
            status: Set(order.status.as_str().to_owned()),
            total_amount: Set(order.total_amount),
            customer_phone: Set(order.customer_phone.clone()),
            delivery_address: Set(order.delivery_address.clone()),
            place_id: Set(order.place_id.clone()),
            created_at: Set(order.created_at),
            updated_at: Set(order.updated_at),
        }
        .insert(self.db.as_ref())
        .await
        .context("create order")?;
        Ok(())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: OrderStatus,
    ) -> Result<Option<Order>, OrdersServiceError> {
        let Some(model) = orders::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .context("find order for status update")?
        else {
            return Ok(None);
        };
        let mut am = model.into_active_model();
        am.status = Set(status.as_str().to_owned());
        am.updated_at = Set(Utc::now());
        let updated = am.update(self.db.as_ref()).await.context("update order status")?;
        order_from_model(updated).map(Some)
    }
}

fn order_from_model(model: orders::Model) -> Result<Order, OrdersServiceError> {
    let status = model
        .status
        .parse::<OrderStatus>()
        .with_context(|| format!("order {} has invalid status", model.id))?;
    Ok(Order {
        id: model.id,
        vendor_id: model.vendor_id,
        status,
        total_amount: model.total_amount,
        customer_phone: model.customer_phone,
        delivery_address: model.delivery_address,
        place_id: model.place_id,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Notification repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNotificationRepository {
    pub db: Arc<DatabaseConnection>,
}

impl NotificationRepository for DbNotificationRepository {
    async fn create(&self, notification: &OrderNotification) -> Result<(), OrdersServiceError> {
        let am = order_notifications::ActiveModel {
            id: Set(notification.id),
            order_id: Set(notification.order_id),
            message: Set(notification.message.clone()),
            created_at: Set(notification.created_at),
        };
        order_notifications::Entity::insert(am)
            .exec_without_returning(self.db.as_ref())
            .await
            .context("create order notification")?;
        Ok(())
    }

    async fn list_by_order(
        &self,
        order_id: Uuid,
    ) -> Result<Vec<OrderNotification>, OrdersServiceError> {
        let models = order_notifications::Entity::find()
            .filter(order_notifications::Column::OrderId.eq(order_id))
            .order_by_desc(order_notifications::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .context("list order notifications")?;
        Ok(models
            .into_iter()
            .map(|m| OrderNotification {
                id: m.id,
                order_id: m.order_id,
                message: m.message,
                created_at: m.created_at,
            })
            .collect())
    }
}

// ── External API log repository ──────────────────────────────────────────────

#[derive(Clone)]
pub struct DbExternalApiLogRepository {
    pub db: Arc<DatabaseConnection>,
}

impl ExternalApiLogRepository for DbExternalApiLogRepository {
    async fn find_by_order_id(
        &self,
        order_id: Uuid,
    ) -> Result<Option<ExternalApiLog>, OrdersServiceError> {
        let model = external_api_logs::Entity::find()
            .filter(external_api_logs::Column::OrderId.eq(order_id))
            .one(self.db.as_ref())
            .await
            .context("find external api log by order")?;
        Ok(model.map(external_api_log_from_model))
    }

    async fn begin_attempt(
        &self,
        order_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<ExternalApiLog, OrdersServiceError> {
        let model = begin_attempt_insert(&ExternalApiLog::first_attempt(order_id, now))
            .exec_with_returning(self.db.as_ref())
            .await
            .context("begin external api attempt")?;
        Ok(external_api_log_from_model(model))
    }

    async fn settle(&self, log: &ExternalApiLog) -> Result<(), OrdersServiceError> {
        let error = log.error.as_ref();
        external_api_logs::Entity::update_many()
            .set(external_api_logs::ActiveModel {
                status: Set(status_to_column(log.status)),
                error_message: Set(error.map(|e| e.message.clone())),
                error_code: Set(error.and_then(|e| e.code.clone())),
                error_stack: Set(error.and_then(|e| e.stack.clone())),
                response_data: Set(log.response_data.clone()),
                updated_at: Set(log.updated_at),
                ..Default::default()
            })
            .filter(external_api_logs::Column::Id.eq(log.id))
            .exec(self.db.as_ref())
            .await
            .context("settle external api attempt")?;
        Ok(())
    }
}

/// Insert a fresh log for the order, or, when the order already has one, bump its
/// attempt counter in place and mark it pending. Earlier error and response
/// columns stay until the attempt settles.
fn begin_attempt_insert(log: &ExternalApiLog) -> Insert<external_api_logs::ActiveModel> {
    let am = external_api_logs::ActiveModel {
        id: Set(log.id),
        order_id: Set(log.order_id),
        status: Set(status_to_column(log.status)),
        attempts: Set(log.attempts),
        last_attempted: Set(log.last_attempted),
        error_message: Set(None),
        error_code: Set(None),
        error_stack: Set(None),
        response_data: Set(None),
        created_at: Set(log.created_at),
        updated_at: Set(log.updated_at),
    };
    external_api_logs::Entity::insert(am).on_conflict(
        OnConflict::column(external_api_logs::Column::OrderId)
            .value(
                external_api_logs::Column::Attempts,
                Expr::col((external_api_logs::Entity, external_api_logs::Column::Attempts)).add(1),
            )
            .update_columns([
                external_api_logs::Column::Status,
                external_api_logs::Column::LastAttempted,
                external_api_logs::Column::UpdatedAt,
            ])
            .to_owned(),
    )
}

fn status_to_column(status: ExternalCallStatus) -> ExternalApiStatus {
    match status {
        ExternalCallStatus::Success => ExternalApiStatus::Success,
        ExternalCallStatus::Failed => ExternalApiStatus::Failed,
        ExternalCallStatus::Pending => ExternalApiStatus::Pending,
    }
}

fn external_api_log_from_model(model: external_api_logs::Model) -> ExternalApiLog {
    let status = match model.status {
        ExternalApiStatus::Success => ExternalCallStatus::Success,
        ExternalApiStatus::Failed => ExternalCallStatus::Failed,
        ExternalApiStatus::Pending => ExternalCallStatus::Pending,
    };
    let error = model.error_message.map(|message| ExternalCallError {
        message,
        code: model.error_code,
        stack: model.error_stack,
    });
    ExternalApiLog {
        id: model.id,
        order_id: model.order_id,
        status,
        attempts: model.attempts,
        last_attempted: model.last_attempted,
        error,
        response_data: model.response_data,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}
