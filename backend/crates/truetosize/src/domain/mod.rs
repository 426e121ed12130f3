//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (Rating, RatingBatch, ShoeAverage)
//! - Domain value objects (ShoeId, TrueToSize)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod value_objects;
