use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("Range is inverted: min {min} is greater than max {max}")]
    Inverted { min: i64, max: i64 },
}

/// An inclusive `[min, max]` interval of integers to classify.
///
/// `min > max` is representable and describes an empty interval.
/// Use [`Range::try_new`] to reject it up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    min: i64,
    max: i64,
}

impl Range {
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    pub fn try_new(min: i64, max: i64) -> Result<Self, RangeError> {
        if min > max {
            return Err(RangeError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    pub fn is_inverted(&self) -> bool {
        self.min > self.max
    }

    pub fn is_empty(&self) -> bool {
        self.is_inverted()
    }

    /// Number of integers in the interval, saturating at `u64::MAX`.
    pub fn len(&self) -> u64 {
        if self.is_inverted() {
            0
        } else {
            self.max
                .abs_diff(self.min)
                .saturating_add(1)
        }
    }

    pub fn iter(&self) -> RangeInclusive<i64> {
        self.min..=self.max
    }
}

impl IntoIterator for Range {
    type Item = i64;
    type IntoIter = RangeInclusive<i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<RangeInclusive<i64>> for Range {
    fn from(r: RangeInclusive<i64>) -> Self {
        Range::new(*r.start(), *r.end())
    }
}
