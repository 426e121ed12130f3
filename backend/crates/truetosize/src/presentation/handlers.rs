//! HTTP Handlers

use std::collections::HashMap;
use std::sync::Arc;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::fetch_average::FetchAverageUseCase;
use crate::application::fetch_averages::FetchAveragesUseCase;
use crate::application::record_ratings::RecordRatingsUseCase;
use crate::domain::repository::RatingRepository;
use crate::domain::value_objects::ShoeId;
use crate::error::{TtsError, TtsResult};
use crate::presentation::dto::{AverageResponse, decode_rating_batch, decode_shoe_ids};

/// Shared state for true-to-size handlers
#[derive(Clone)]
pub struct TtsAppState<R>
where
    R: RatingRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

/// `/shoes/truetosize` - all methods
///
/// GET and POST are dispatched below; anything else is 501. Method
/// routing happens here rather than in the router so that unsupported
/// methods reach our error type instead of axum's default 405.
pub async fn true_to_size<R>(
    State(state): State<TtsAppState<R>>,
    method: Method,
    Query(params): Query<HashMap<String, String>>,
    body: Bytes,
) -> TtsResult<Response>
where
    R: RatingRepository + Clone + Send + Sync + 'static,
{
    match method {
        Method::GET => get_true_to_size(state, params, body).await,
        Method::POST => post_true_to_size(state, body).await,
        other => Err(TtsError::MethodNotSupported(other)),
    }
}

/// GET - single shoe via `shoeId` query parameter, batch via body
///
/// The single lookup 404s for a shoe with zero ratings; the batch
/// lookup omits such shoes instead. Both behaviors are part of the
/// contract and covered by tests.
async fn get_true_to_size<R>(
    state: TtsAppState<R>,
    params: HashMap<String, String>,
    body: Bytes,
) -> TtsResult<Response>
where
    R: RatingRepository + Clone + Send + Sync + 'static,
{
    if let Some(raw) = params.get("shoeId") {
        let shoe_id = ShoeId::new(raw.parse::<i32>().map_err(TtsError::InvalidShoeId)?);

        let use_case = FetchAverageUseCase::new(state.repo.clone());
        let average = use_case.execute(shoe_id).await?;

        return Ok(Json(AverageResponse::from(average)).into_response());
    }

    if body.is_empty() {
        return Err(TtsError::MissingShoeId);
    }

    let shoe_ids = decode_shoe_ids(&body)?;

    let use_case = FetchAveragesUseCase::new(state.repo.clone());
    let averages = use_case.execute(&shoe_ids).await?;

    // Stream of concatenated JSON objects, newline-delimited,
    // ascending shoe id order
    let mut out = String::new();
    for average in averages {
        let line = serde_json::to_string(&AverageResponse::from(average))
            .map_err(|e| TtsError::Internal(format!("Response encoding failed: {e}")))?;
        out.push_str(&line);
        out.push('\n');
    }

    Ok(([(header::CONTENT_TYPE, "application/json")], out).into_response())
}

/// POST - record ratings from concatenated body objects
async fn post_true_to_size<R>(state: TtsAppState<R>, body: Bytes) -> TtsResult<Response>
where
    R: RatingRepository + Clone + Send + Sync + 'static,
{
    let batch = decode_rating_batch(&body)?;

    let use_case = RecordRatingsUseCase::new(state.repo.clone());
    use_case.execute(batch).await?;

    Ok(StatusCode::CREATED.into_response())
}
