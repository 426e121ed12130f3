//! True-to-size Router

use axum::{Router, routing::any};
use std::sync::Arc;

use crate::domain::repository::RatingRepository;
use crate::infra::postgres::PgRatingRepository;
use crate::presentation::handlers::{self, TtsAppState};

/// Create the true-to-size router with PostgreSQL repository
pub fn truetosize_router(repo: PgRatingRepository) -> Router {
    truetosize_router_generic(repo)
}

/// Create a true-to-size router for any repository implementation
pub fn truetosize_router_generic<R>(repo: R) -> Router
where
    R: RatingRepository + Clone + Send + Sync + 'static,
{
    let state = TtsAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route("/truetosize", any(handlers::true_to_size::<R>))
        .with_state(state)
}
