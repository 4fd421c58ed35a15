//! Test utilities for Storefront crates.
//!
//! Provides in-process HTTP stub servers and canned third-party responses.
//! Use from `dev-dependencies` only.

pub mod fixture;
pub mod stub;
