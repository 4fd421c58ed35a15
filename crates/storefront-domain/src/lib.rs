//! Domain types shared between the orders service and its clients.
//!
//! This crate contains only pure types with no framework dependencies.

pub mod id;
pub mod order;
pub mod place;
