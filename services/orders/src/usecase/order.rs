use chrono::Utc;
use uuid::Uuid;

use storefront_domain::order::OrderStatus;

use crate::domain::repository::OrderRepository;
use crate::domain::types::Order;
use crate::error::OrdersServiceError;

// ── CreateOrder ──────────────────────────────────────────────────────────────

pub struct CreateOrderInput {
    pub vendor_id: Uuid,
    pub total_amount: i64,
    pub customer_phone: Option<String>,
    pub delivery_address: Option<String>,
    pub place_id: Option<String>,
}

pub struct CreateOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> CreateOrderUseCase<R> {
    pub async fn execute(&self, input: CreateOrderInput) -> Result<Order, OrdersServiceError> {
        if input.total_amount < 0 {
            return Err(OrdersServiceError::InvalidAmount);
        }
        let now = Utc::now();
        let order = Order {
            id: Uuid::now_v7(),
            vendor_id: input.vendor_id,
            status: OrderStatus::Pending,
            total_amount: input.total_amount,
            customer_phone: input.customer_phone,
            delivery_address: input.delivery_address,
            place_id: input.place_id,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&order).await?;
        tracing::info!(order_id = %order.id, vendor_id = %order.vendor_id, "order created");
        Ok(order)
    }
}

// ── GetOrder ─────────────────────────────────────────────────────────────────

pub struct GetOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> GetOrderUseCase<R> {
    pub async fn execute(&self, order_id: Uuid) -> Result<Order, OrdersServiceError> {
        self.repo
            .find_by_id(order_id)
            .await?
            .ok_or(OrdersServiceError::OrderNotFound)
    }
}

// ── ListVendorOrders ─────────────────────────────────────────────────────────

pub struct ListVendorOrdersUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> ListVendorOrdersUseCase<R> {
    pub async fn execute(&self, vendor_id: Uuid) -> Result<Vec<Order>, OrdersServiceError> {
        self.repo.list_by_vendor(vendor_id).await
    }
}

// ── UpdateOrderStatus ────────────────────────────────────────────────────────

pub struct UpdateOrderStatusUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> UpdateOrderStatusUseCase<R> {
    pub async fn execute(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> Result<Order, OrdersServiceError> {
        let order = self
            .repo
            .update_status(order_id, status)
            .await?
            .ok_or(OrdersServiceError::OrderNotFound)?;
        tracing::info!(%order_id, status = %status, "order status updated");
        Ok(order)
    }
}
