//! Fetch Averages Use Case (batch)

use std::sync::Arc;

use crate::domain::entities::ShoeAverage;
use crate::domain::repository::RatingRepository;
use crate::domain::value_objects::ShoeId;
use crate::error::TtsResult;

/// Fetch true-to-size averages for a set of shoes
///
/// Shoes with zero ratings are silently omitted from the result; the
/// caller receives one average per resolvable shoe id, ascending.
pub struct FetchAveragesUseCase<R>
where
    R: RatingRepository,
{
    repo: Arc<R>,
}

impl<R> FetchAveragesUseCase<R>
where
    R: RatingRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, shoe_ids: &[ShoeId]) -> TtsResult<Vec<ShoeAverage>> {
        let ratings_by_shoe = self.repo.select_ratings_batch(shoe_ids).await?;

        let averages: Vec<ShoeAverage> = ratings_by_shoe
            .iter()
            .filter_map(|(shoe_id, ratings)| ShoeAverage::from_ratings(*shoe_id, ratings))
            .collect();

        tracing::debug!(
            requested = shoe_ids.len(),
            resolved = averages.len(),
            "Computed true-to-size averages"
        );

        Ok(averages)
    }
}
