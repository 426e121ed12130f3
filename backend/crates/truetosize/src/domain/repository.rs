//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use std::collections::BTreeMap;

use crate::domain::entities::{Rating, RatingBatch};
use crate::domain::value_objects::ShoeId;
use crate::error::TtsResult;

/// Rating repository trait
#[trait_variant::make(RatingRepository: Send)]
pub trait LocalRatingRepository {
    /// Insert one rating row, returning rows affected (expected 1)
    async fn insert_rating(&self, rating: &Rating) -> TtsResult<u64>;

    /// Insert every row of a non-empty batch in one statement,
    /// returning total rows affected
    async fn insert_ratings(&self, batch: &RatingBatch) -> TtsResult<u64>;

    /// All rating values for one shoe, in unspecified order; the
    /// derived average is order-insensitive
    /// (empty list, not an error, when none exist)
    async fn select_ratings(&self, shoe_id: ShoeId) -> TtsResult<Vec<i32>>;

    /// Rating values for every requested shoe id that has at least one
    /// row; ids without rows are omitted from the map. A non-empty id
    /// list is required.
    async fn select_ratings_batch(
        &self,
        shoe_ids: &[ShoeId],
    ) -> TtsResult<BTreeMap<ShoeId, Vec<i32>>>;
}
