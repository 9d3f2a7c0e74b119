//! Top-picks selection: rank sort, price bands, and the first three per band.

use crate::record::{EnrichedListing, by_combined_rank};

/// Picks taken from each price band.
pub const PICKS_PER_BAND: usize = 3;

/// Price band of a listing. Upper bounds are inclusive.
///
/// | Band       | Price          |
/// |------------|----------------|
/// | `UpToHalf` | <= 0.5         |
/// | `UpToOne`  | (0.5, 1.0]     |
/// | `UpToOneAndHalf` | (1.0, 1.5] |
/// | `UpToTwo`  | (1.5, 2.0]     |
///
/// Prices above 2.0 (or NaN) have no band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriceBand {
    UpToHalf,
    UpToOne,
    UpToOneAndHalf,
    UpToTwo,
}

impl PriceBand {
    pub const ALL: [PriceBand; 4] = [
        PriceBand::UpToHalf,
        PriceBand::UpToOne,
        PriceBand::UpToOneAndHalf,
        PriceBand::UpToTwo,
    ];

    pub fn for_price(price: f64) -> Option<Self> {
        match price {
            p if p <= 0.5 => Some(PriceBand::UpToHalf),
            p if p <= 1.0 => Some(PriceBand::UpToOne),
            p if p <= 1.5 => Some(PriceBand::UpToOneAndHalf),
            p if p <= 2.0 => Some(PriceBand::UpToTwo),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Stable sort by combined rank. Equal keys keep their incoming order.
pub fn rank_sort(listings: &mut [EnrichedListing]) {
    listings.sort_by(by_combined_rank);
}

/// Splits rank-sorted listings into the four bands, preserving order.
pub fn bucketize(ranked: &[EnrichedListing]) -> [Vec<&EnrichedListing>; 4] {
    let mut buckets: [Vec<&EnrichedListing>; 4] = Default::default();
    for listing in ranked {
        if let Some(band) = PriceBand::for_price(listing.price) {
            buckets[band.index()].push(listing);
        }
    }
    buckets
}

/// Rank-sorts `listings`, then concatenates the first [`PICKS_PER_BAND`] of
/// each band from lowest to highest.
pub fn top_picks(listings: &[EnrichedListing]) -> Vec<EnrichedListing> {
    let mut ranked = listings.to_vec();
    rank_sort(&mut ranked);

    bucketize(&ranked)
        .into_iter()
        .flat_map(|bucket| bucket.into_iter().take(PICKS_PER_BAND).cloned())
        .collect()
}
