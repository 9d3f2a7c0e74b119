//! Joins listings to their rarity rows and moonrank values.

use anyhow::Result;
use tracing::{debug, warn};

use crate::listing::Listing;
use crate::marketplace::{Marketplace, rarity_url};
use crate::moonrank::MoonrankMap;
use crate::rarity::RarityLookup;
use crate::record::{EnrichedListing, by_id};

/// Result of one enrichment pass.
#[derive(Debug)]
pub struct Enrichment {
    /// One record per input listing, ascending by id.
    pub listings: Vec<EnrichedListing>,
    /// Lowest price among listings that matched a rarity row; `+inf` if none did.
    pub min_price: f64,
}

impl Enrichment {
    pub fn matched_count(&self) -> usize {
        self.listings.iter().filter(|l| l.is_matched()).count()
    }
}

/// Enriches every listing, queries `store` once per listing, and sorts the
/// result by id.
///
/// A listing with no rarity row is kept as a partial record and logged.
#[tracing::instrument(skip_all, fields(marketplace = %marketplace, listings = listings.len()))]
pub fn enrich<S: RarityLookup>(
    marketplace: Marketplace,
    listings: &[Listing],
    moonrank: &MoonrankMap,
    store: &S,
) -> Result<Enrichment> {
    let mut min_price = f64::INFINITY;
    let mut enriched = Vec::with_capacity(listings.len());

    for listing in listings {
        let identifier = listing.identifier();
        let token = identifier.token.as_deref().unwrap_or_default();

        let mut record = EnrichedListing {
            id: identifier.value,
            price: listing.price,
            moon_rank: None,
            rarity: None,
            rarity_url: rarity_url(token),
            marketplace_url: marketplace.listing_url(&listing.address),
        };

        let rarity = match identifier.token.as_deref() {
            Some(token) => store.lookup(token)?,
            None => None,
        };

        match rarity {
            Some(rarity) => {
                if listing.price < min_price {
                    min_price = listing.price;
                }
                record.moon_rank = moonrank.get(token).map(str::to_string);
                record.rarity = Some(rarity);
            }
            None => {
                warn!(id = token, title = %listing.title, "No rarity data for listing");
            }
        }

        enriched.push(record);
    }

    enriched.sort_by(by_id);
    debug!(min_price, "Enrichment pass complete");

    Ok(Enrichment {
        listings: enriched,
        min_price,
    })
}
