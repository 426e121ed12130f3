//! PostgreSQL Repository Implementations

use std::collections::BTreeMap;

use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::domain::entities::{Rating, RatingBatch};
use crate::domain::repository::RatingRepository;
use crate::domain::value_objects::ShoeId;
use crate::error::{TtsError, TtsResult};

/// PostgreSQL-backed rating repository
#[derive(Clone)]
pub struct PgRatingRepository {
    pool: PgPool,
}

impl PgRatingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RatingRepository for PgRatingRepository {
    async fn insert_rating(&self, rating: &Rating) -> TtsResult<u64> {
        let affected = sqlx::query("INSERT INTO truetosize (shoes_id, truetosize) VALUES ($1, $2)")
            .bind(rating.shoe_id.value())
            .bind(rating.value.value())
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(
            shoe_id = %rating.shoe_id,
            value = rating.value.value(),
            "Rating recorded"
        );

        Ok(affected)
    }

    async fn insert_ratings(&self, batch: &RatingBatch) -> TtsResult<u64> {
        if batch.is_empty() {
            return Err(TtsError::EmptyBatch);
        }

        // One bind pair per row; QueryBuilder emits driver-correct $n
        // placeholders, so no untrusted value ever lands in the SQL text
        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("INSERT INTO truetosize (shoes_id, truetosize) ");
        builder.push_values(batch.rows(), |mut row, rating| {
            row.push_bind(rating.shoe_id.value())
                .push_bind(rating.value.value());
        });

        let affected = builder.build().execute(&self.pool).await?.rows_affected();

        tracing::info!(rows = affected, "Rating batch recorded");

        Ok(affected)
    }

    async fn select_ratings(&self, shoe_id: ShoeId) -> TtsResult<Vec<i32>> {
        let ratings = sqlx::query_scalar::<_, i32>(
            "SELECT truetosize FROM truetosize WHERE shoes_id = $1",
        )
        .bind(shoe_id.value())
        .fetch_all(&self.pool)
        .await?;

        Ok(ratings)
    }

    async fn select_ratings_batch(
        &self,
        shoe_ids: &[ShoeId],
    ) -> TtsResult<BTreeMap<ShoeId, Vec<i32>>> {
        if shoe_ids.is_empty() {
            return Err(TtsError::EmptyShoeIds);
        }

        let ids: Vec<i32> = shoe_ids.iter().map(|id| id.value()).collect();

        let rows = sqlx::query_as::<_, (i32, i32)>(
            "SELECT shoes_id, truetosize FROM truetosize WHERE shoes_id = ANY($1)",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut ratings_by_shoe: BTreeMap<ShoeId, Vec<i32>> = BTreeMap::new();
        for (shoe_id, value) in rows {
            ratings_by_shoe
                .entry(ShoeId::new(shoe_id))
                .or_default()
                .push(value);
        }

        Ok(ratings_by_shoe)
    }
}
