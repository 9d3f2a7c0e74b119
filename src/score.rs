use crate::numeric::int_or_nan;
use crate::record::EnrichedListing;

/// `(price - min_price) * 100 + moonRank`.
///
/// NaN when the moonrank is missing or non-numeric. Written to the data
/// report only; picks are ordered by combined rank instead.
pub fn score(listing: &EnrichedListing, min_price: f64) -> f64 {
    (listing.price - min_price) * 100.0 + int_or_nan(listing.moon_rank.as_deref())
}

/// Scores every listing against the same minimum price.
pub fn score_all(listings: &[EnrichedListing], min_price: f64) -> Vec<f64> {
    listings.iter().map(|l| score(l, min_price)).collect()
}
