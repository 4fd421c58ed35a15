//! Shared HTTP plumbing for Storefront services: error bodies, health checks,
//! request-id/trace middleware, serde helpers and tracing setup.

pub mod error;
pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
