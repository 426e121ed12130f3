//! Record Ratings Use Case

use std::sync::Arc;

use crate::domain::entities::RatingBatch;
use crate::domain::repository::RatingRepository;
use crate::error::{TtsError, TtsResult};

/// Output DTO for record ratings
#[derive(Debug, Clone, Copy)]
pub struct RecordRatingsOutput {
    pub rows_inserted: u64,
}

/// Record a batch of validated true-to-size ratings
///
/// A batch holding exactly one row takes the single-row insert path;
/// anything larger goes through the multi-row statement.
pub struct RecordRatingsUseCase<R>
where
    R: RatingRepository,
{
    repo: Arc<R>,
}

impl<R> RecordRatingsUseCase<R>
where
    R: RatingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, batch: RatingBatch) -> TtsResult<RecordRatingsOutput> {
        if batch.is_empty() {
            return Err(TtsError::EmptyBatch);
        }

        let rows_inserted = if batch.row_count() == 1 {
            // rows() yields exactly one element here
            let rating = batch
                .rows()
                .next()
                .ok_or_else(|| TtsError::Internal("Non-empty batch yielded no rows".into()))?;
            self.repo.insert_rating(&rating).await?
        } else {
            self.repo.insert_ratings(&batch).await?
        };

        tracing::info!(rows_inserted, "Recorded true-to-size ratings");

        Ok(RecordRatingsOutput { rows_inserted })
    }
}
