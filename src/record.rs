use std::cmp::Ordering;

use crate::numeric::int_or_nan;
use crate::rarity::RarityRecord;

/// A listing joined with its rarity row and moonrank.
///
/// `rarity` is `None` when the store had no row for the identifier; such a
/// record carries only id, price and the two links.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichedListing {
    pub id: Option<i64>,
    pub price: f64,
    pub moon_rank: Option<String>,
    pub rarity: Option<RarityRecord>,
    pub rarity_url: String,
    pub marketplace_url: String,
}

impl EnrichedListing {
    pub fn is_matched(&self) -> bool {
        self.rarity.is_some()
    }

    pub fn rank(&self) -> Option<&str> {
        self.rarity.as_ref().and_then(|r| r.rank.as_deref())
    }

    /// `rank + moonRank` as integers; NaN if either is missing or non-numeric.
    pub fn combined_rank(&self) -> f64 {
        int_or_nan(self.rank()) + int_or_nan(self.moon_rank.as_deref())
    }
}

/// Ascending by id, records without a numeric id last.
pub fn by_id(a: &EnrichedListing, b: &EnrichedListing) -> Ordering {
    match (a.id, b.id) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Ascending by combined rank, NaN keys last.
pub fn by_combined_rank(a: &EnrichedListing, b: &EnrichedListing) -> Ordering {
    nan_last(a.combined_rank(), b.combined_rank())
}

/// Total order on `f64` that sorts every NaN after all numbers, whatever its sign bit.
pub fn nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (false, false) => a.total_cmp(&b),
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => Ordering::Equal,
    }
}
