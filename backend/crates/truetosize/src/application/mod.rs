//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod fetch_average;
pub mod fetch_averages;
pub mod record_ratings;
