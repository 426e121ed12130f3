//! Domain Entities
//!
//! Core business entities for the true-to-size domain.

use std::collections::BTreeMap;

use crate::domain::value_objects::{ShoeId, TrueToSize};

/// Rating entity - one true-to-size rating recorded against a shoe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating {
    pub shoe_id: ShoeId,
    pub value: TrueToSize,
}

impl Rating {
    pub fn new(shoe_id: ShoeId, value: TrueToSize) -> Self {
        Self { shoe_id, value }
    }
}

/// RatingBatch entity - ratings grouped by shoe, ready for one insert
///
/// Ratings for the same shoe are merged by concatenation, preserving the
/// order they were pushed. Keys iterate in ascending shoe id order.
#[derive(Debug, Clone, Default)]
pub struct RatingBatch {
    ratings: BTreeMap<ShoeId, Vec<TrueToSize>>,
}

impl RatingBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one rating, merging with any already present for the same shoe
    pub fn push(&mut self, rating: Rating) {
        self.ratings
            .entry(rating.shoe_id)
            .or_default()
            .push(rating.value);
    }

    /// Total number of rating rows across all shoes
    pub fn row_count(&self) -> usize {
        self.ratings.values().map(Vec::len).sum()
    }

    /// True when the batch holds zero rating rows
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Values recorded for one shoe, if any
    pub fn values_for(&self, shoe_id: ShoeId) -> Option<&[TrueToSize]> {
        self.ratings.get(&shoe_id).map(Vec::as_slice)
    }

    /// Iterate all (shoe id, value) rows in ascending shoe id order
    pub fn rows(&self) -> impl Iterator<Item = Rating> + '_ {
        self.ratings
            .iter()
            .flat_map(|(shoe_id, values)| values.iter().map(|v| Rating::new(*shoe_id, *v)))
    }
}

impl FromIterator<Rating> for RatingBatch {
    fn from_iter<I: IntoIterator<Item = Rating>>(iter: I) -> Self {
        let mut batch = Self::new();
        for rating in iter {
            batch.push(rating);
        }
        batch
    }
}

/// ShoeAverage - derived aggregate, never stored
///
/// Arithmetic mean of all ratings recorded for one shoe, computed in f64.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShoeAverage {
    pub shoe_id: ShoeId,
    pub average: f64,
}

impl ShoeAverage {
    /// Compute the mean of the given rating values
    ///
    /// Returns `None` for an empty slice; an average over zero ratings
    /// does not exist.
    pub fn from_ratings(shoe_id: ShoeId, ratings: &[i32]) -> Option<Self> {
        if ratings.is_empty() {
            return None;
        }
        let sum: i64 = ratings.iter().map(|&v| v as i64).sum();
        Some(Self {
            shoe_id,
            average: sum as f64 / ratings.len() as f64,
        })
    }
}
