//! Fetch Average Use Case (single shoe)

use std::sync::Arc;

use crate::domain::entities::ShoeAverage;
use crate::domain::repository::RatingRepository;
use crate::domain::value_objects::ShoeId;
use crate::error::{TtsError, TtsResult};

/// Fetch the true-to-size average for one shoe
///
/// Unlike the batch lookup, a shoe with zero ratings is a 404 here.
pub struct FetchAverageUseCase<R>
where
    R: RatingRepository,
{
    repo: Arc<R>,
}

impl<R> FetchAverageUseCase<R>
where
    R: RatingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, shoe_id: ShoeId) -> TtsResult<ShoeAverage> {
        let ratings = self.repo.select_ratings(shoe_id).await?;

        let average = ShoeAverage::from_ratings(shoe_id, &ratings)
            .ok_or(TtsError::NoRatings(shoe_id.value()))?;

        tracing::debug!(
            shoe_id = %shoe_id,
            rating_count = ratings.len(),
            average = average.average,
            "Computed true-to-size average"
        );

        Ok(average)
    }
}
