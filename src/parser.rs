//! JSON decoders for raw marketplace exports.

use anyhow::Result;
use serde::Deserialize;

use crate::listing::Listing;
use crate::marketplace::Marketplace;

/// MagicEden export: `{ "results": [ ... ] }`.
#[derive(Debug, Deserialize)]
struct MagicEdenExport {
    results: Vec<MagicEdenItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MagicEdenItem {
    mint_address: String,
    price: f64,
    title: String,
}

/// Solanart export: a bare array of items.
#[derive(Debug, Deserialize)]
struct SolanartItem {
    token_add: String,
    price: f64,
    name: String,
}

/// Decodes a raw export for `marketplace` into normalized listings.
///
/// # Errors
///
/// Returns an error if the bytes are not valid JSON of the marketplace's shape.
pub fn parse_listings(marketplace: Marketplace, bytes: &[u8]) -> Result<Vec<Listing>> {
    let listings = match marketplace {
        Marketplace::MagicEden => {
            let export: MagicEdenExport = serde_json::from_slice(bytes)?;
            export
                .results
                .into_iter()
                .map(|item| Listing {
                    title: item.title,
                    price: item.price,
                    address: item.mint_address,
                })
                .collect()
        }
        Marketplace::Solanart => {
            let items: Vec<SolanartItem> = serde_json::from_slice(bytes)?;
            items
                .into_iter()
                .map(|item| Listing {
                    title: item.name,
                    price: item.price,
                    address: item.token_add,
                })
                .collect()
        }
    };

    Ok(listings)
}
