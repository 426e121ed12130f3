//! Domain Value Objects
//!
//! Immutable value types for the true-to-size domain.

use std::fmt;

/// Shoe model identifier
///
/// An opaque integer. Zero is the "absent" sentinel on the wire and is
/// rejected when recording ratings, but remains representable so that
/// lookups for it resolve to "no ratings" rather than a parse failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShoeId(i32);

impl ShoeId {
    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for ShoeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ShoeId> for i32 {
    fn from(id: ShoeId) -> Self {
        id.0
    }
}

/// True-to-size rating value
///
/// Integer 1-5 indicating whether a shoe fits smaller, true, or larger
/// than its labeled size. Construction is boundary-inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrueToSize(i32);

impl TrueToSize {
    pub const MIN: i32 = 1;
    pub const MAX: i32 = 5;

    pub fn new(value: i32) -> Option<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<TrueToSize> for i32 {
    fn from(tts: TrueToSize) -> Self {
        tts.0
    }
}
