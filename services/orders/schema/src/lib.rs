pub mod external_api_logs;
pub mod order_notifications;
pub mod orders;
