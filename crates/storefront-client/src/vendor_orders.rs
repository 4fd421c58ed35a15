use storefront_domain::id::{OrderId, VendorId};
use storefront_domain::order::{Order, OrderStatus};

use crate::api::ShopClient;

/// User-visible error when the order list cannot be loaded.
pub const FETCH_ORDERS_ERROR: &str = "Failed to fetch orders";

/// The orders of one vendor and the two status transitions offered on each.
pub struct VendorOrderList {
    api: ShopClient,
    vendor_id: VendorId,
    orders: Vec<Order>,
    error: Option<String>,
}

impl VendorOrderList {
    pub fn new(api: ShopClient, vendor_id: VendorId) -> Self {
        Self {
            api,
            vendor_id,
            orders: Vec::new(),
            error: None,
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the vendor's orders. On failure the previous list is kept.
    pub async fn load(&mut self) {
        match self.api.vendor_orders(self.vendor_id).await {
            Ok(orders) => {
                tracing::debug!(vendor_id = %self.vendor_id, count = orders.len(), "orders loaded");
                self.orders = orders;
                self.error = None;
            }
            Err(err) => {
                tracing::error!(
                    vendor_id = %self.vendor_id,
                    error = %err,
                    "failed to fetch orders"
                );
                self.error = Some(FETCH_ORDERS_ERROR.to_owned());
            }
        }
    }

    pub async fn mark_processing(&mut self, order_id: OrderId) {
        self.set_status(order_id, OrderStatus::Processing).await;
    }

    pub async fn mark_completed(&mut self, order_id: OrderId) {
        self.set_status(order_id, OrderStatus::Completed).await;
    }

    async fn set_status(&mut self, order_id: OrderId, status: OrderStatus) {
        if let Err(err) = self.api.update_order_status(order_id, status).await {
            tracing::error!(%order_id, %status, error = %err, "failed to update order status");
            return;
        }
        if let Some(order) = self.orders.iter_mut().find(|o| o.id == order_id) {
            order.status = status;
        }
    }
}
