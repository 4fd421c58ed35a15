//! Typed client and view state for the storefront order screens.
//!
//! Rendering lives elsewhere; this crate owns what the screens fetch, what they
//! keep, and how they react to failures.

pub mod api;
pub mod autocomplete;
pub mod error;
pub mod order_detail;
pub mod vendor_orders;
