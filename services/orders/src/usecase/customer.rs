use chrono::Utc;
use uuid::Uuid;

use crate::domain::repository::{CustomerLookupPort, ExternalApiLogRepository, OrderRepository};
use crate::domain::types::{ExternalApiLog, ExternalCallError, PartnerCustomer};
use crate::error::OrdersServiceError;

// ── FindCustomer ─────────────────────────────────────────────────────────────

pub struct FindCustomerUseCase<C: CustomerLookupPort> {
    pub lookup: C,
}

impl<C: CustomerLookupPort> FindCustomerUseCase<C> {
    pub async fn execute(&self, phone: &str) -> Result<PartnerCustomer, OrdersServiceError> {
        self.lookup
            .find_customer_by_phone(phone)
            .await?
            .ok_or(OrdersServiceError::CustomerNotFound)
    }
}

// ── LookupOrderCustomer ──────────────────────────────────────────────────────

pub struct LookupOrderCustomerInput {
    /// Overrides the phone stored on the order.
    pub phone: Option<String>,
}

pub struct LookupOrderCustomerOutput {
    pub customer: Option<PartnerCustomer>,
    pub log: ExternalApiLog,
}

/// Look up the partner customer of an order and record the attempt in its
/// external API log.
///
/// The attempt is counted and the log marked `PENDING` before the partner is
/// called, so an attempt that never settles remains visible.
pub struct LookupOrderCustomerUseCase<O, L, C>
where
    O: OrderRepository,
    L: ExternalApiLogRepository,
    C: CustomerLookupPort,
{
    pub orders: O,
    pub logs: L,
    pub lookup: C,
}

impl<O, L, C> LookupOrderCustomerUseCase<O, L, C>
where
    O: OrderRepository,
    L: ExternalApiLogRepository,
    C: CustomerLookupPort,
{
    pub async fn execute(
        &self,
        order_id: Uuid,
        input: LookupOrderCustomerInput,
    ) -> Result<LookupOrderCustomerOutput, OrdersServiceError> {
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or(OrdersServiceError::OrderNotFound)?;

        let phone = input
            .phone
            .filter(|p| !p.trim().is_empty())
            .or(order.customer_phone)
            .ok_or(OrdersServiceError::MissingPhone)?;

        let mut log = self.logs.begin_attempt(order_id, Utc::now()).await?;

        match self.lookup.find_customer_by_phone(&phone).await {
            Ok(customer) => {
                log.succeed(customer.as_ref().map(|c| c.0.clone()), Utc::now());
                self.logs.settle(&log).await?;
                tracing::info!(
                    %order_id,
                    attempts = log.attempts,
                    found = customer.is_some(),
                    "partner customer lookup succeeded"
                );
                Ok(LookupOrderCustomerOutput { customer, log })
            }
            Err(err) => {
                log.fail(call_error(&err), Utc::now());
                self.logs.settle(&log).await?;
                tracing::warn!(
                    %order_id,
                    attempts = log.attempts,
                    error = %err,
                    "partner customer lookup failed"
                );
                Err(err)
            }
        }
    }
}

fn call_error(err: &OrdersServiceError) -> ExternalCallError {
    let (message, stack) = match err {
        OrdersServiceError::PartnerUnavailable(source)
        | OrdersServiceError::AutocompleteUnavailable(source)
        | OrdersServiceError::Internal(source) => {
            (source.to_string(), Some(format!("{source:?}")))
        }
        other => (other.to_string(), None),
    };
    ExternalCallError {
        message,
        code: Some(err.kind().to_owned()),
        stack,
    }
}

// ── GetExternalApiLog ────────────────────────────────────────────────────────

pub struct GetExternalApiLogUseCase<L: ExternalApiLogRepository> {
    pub logs: L,
}

impl<L: ExternalApiLogRepository> GetExternalApiLogUseCase<L> {
    pub async fn execute(&self, order_id: Uuid) -> Result<ExternalApiLog, OrdersServiceError> {
        self.logs
            .find_by_order_id(order_id)
            .await?
            .ok_or(OrdersServiceError::ExternalApiLogNotFound)
    }
}
