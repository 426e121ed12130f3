//! True-to-size ratings backend module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Resource model
//! - One resource (`/shoes/truetosize`) backed by one append-only table
//! - Ratings are integers 1-5, validated before persistence
//! - Per-shoe averages are computed at read time, never stored
//! - Single-shoe lookups 404 when no ratings exist; batch lookups omit
//!   absent shoes from the result set

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{TtsError, TtsResult};
pub use infra::postgres::PgRatingRepository;
pub use presentation::router::{truetosize_router, truetosize_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};
