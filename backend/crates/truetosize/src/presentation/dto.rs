//! API DTOs (Data Transfer Objects)
//!
//! Request bodies are streams of concatenated JSON objects (not
//! array-wrapped), decoded one object at a time with serde_json's
//! stream deserializer.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Rating, RatingBatch, ShoeAverage};
use crate::domain::value_objects::{ShoeId, TrueToSize};
use crate::error::{TtsError, TtsResult};

/// One object of a batch GET body
///
/// An absent shoeId decodes as zero, the wire sentinel for "missing".
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoeIdRequest {
    #[serde(default)]
    pub shoe_id: i32,
}

/// trueToSize field of a POST body object
///
/// The single variant sends one integer, the batch variant an array;
/// both are accepted everywhere.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TrueToSizeField {
    One(i32),
    Many(Vec<i32>),
}

impl TrueToSizeField {
    pub fn into_values(self) -> Vec<i32> {
        match self {
            TrueToSizeField::One(value) => vec![value],
            TrueToSizeField::Many(values) => values,
        }
    }
}

impl Default for TrueToSizeField {
    fn default() -> Self {
        TrueToSizeField::Many(Vec::new())
    }
}

/// One object of a POST body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRequest {
    #[serde(default)]
    pub shoe_id: i32,
    #[serde(default)]
    pub true_to_size: TrueToSizeField,
}

/// Response object for GET (single and batch)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AverageResponse {
    pub shoe_id: i32,
    pub true_to_size_avg: f64,
}

impl From<ShoeAverage> for AverageResponse {
    fn from(avg: ShoeAverage) -> Self {
        Self {
            shoe_id: avg.shoe_id.value(),
            true_to_size_avg: avg.average,
        }
    }
}

/// Decode a batch GET body: concatenated `{"shoeId": n}` objects
///
/// Zero decoded objects is a validation failure.
pub fn decode_shoe_ids(body: &[u8]) -> TtsResult<Vec<ShoeId>> {
    let mut shoe_ids = Vec::new();

    for request in serde_json::Deserializer::from_slice(body).into_iter::<ShoeIdRequest>() {
        shoe_ids.push(ShoeId::new(request?.shoe_id));
    }

    if shoe_ids.is_empty() {
        return Err(TtsError::EmptyBody);
    }

    Ok(shoe_ids)
}

/// Decode a POST body: concatenated rating objects
///
/// Objects repeating a shoe id merge by concatenating their value lists.
/// Every value must lie in [1,5] and every shoe id must be non-zero.
pub fn decode_rating_batch(body: &[u8]) -> TtsResult<RatingBatch> {
    let mut batch = RatingBatch::new();
    let mut decoded_any = false;

    for request in serde_json::Deserializer::from_slice(body).into_iter::<RatingRequest>() {
        let request = request?;
        decoded_any = true;

        if request.shoe_id == 0 {
            return Err(TtsError::ShoeIdRequired);
        }
        let shoe_id = ShoeId::new(request.shoe_id);

        for raw in request.true_to_size.into_values() {
            let value = TrueToSize::new(raw).ok_or(TtsError::ValueOutOfRange(raw))?;
            batch.push(Rating::new(shoe_id, value));
        }
    }

    if !decoded_any {
        return Err(TtsError::EmptyBody);
    }

    Ok(batch)
}
