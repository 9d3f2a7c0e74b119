//! CSV persistence for the data and picks reports.

use anyhow::{Context, Result, ensure};
use csv::WriterBuilder;
use serde::Serialize;
use std::path::Path;
use tracing::debug;

use crate::marketplace::Marketplace;
use crate::record::EnrichedListing;

const TRAIT_COLUMNS: [&str; 10] = [
    "background",
    "skin",
    "hair",
    "mouth",
    "eyes",
    "eyebrows",
    "clothes",
    "headAccessory",
    "faceAccessory",
    "glasses",
];

/// One CSV row. Field order must match [`header`].
#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    id: Option<i64>,
    price: f64,
    moon_rank: Option<&'a str>,
    rank: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    score: Option<f64>,
    background: Option<&'a str>,
    skin: Option<&'a str>,
    hair: Option<&'a str>,
    mouth: Option<&'a str>,
    eyes: Option<&'a str>,
    eyebrows: Option<&'a str>,
    clothes: Option<&'a str>,
    head_accessory: Option<&'a str>,
    face_accessory: Option<&'a str>,
    glasses: Option<&'a str>,
    rarity_url: &'a str,
    marketplace_url: &'a str,
}

impl<'a> ReportRow<'a> {
    fn new(listing: &'a EnrichedListing, score: Option<f64>) -> Self {
        let [background, skin, hair, mouth, eyes, eyebrows, clothes, head_accessory, face_accessory, glasses] =
            listing
                .rarity
                .as_ref()
                .map(|r| r.traits())
                .unwrap_or_default();

        ReportRow {
            id: listing.id,
            price: listing.price,
            moon_rank: listing.moon_rank.as_deref(),
            rank: listing.rank(),
            score,
            background,
            skin,
            hair,
            mouth,
            eyes,
            eyebrows,
            clothes,
            head_accessory,
            face_accessory,
            glasses,
            rarity_url: &listing.rarity_url,
            marketplace_url: &listing.marketplace_url,
        }
    }
}

/// Column names of a report, with or without the `score` column.
pub fn header(marketplace: Marketplace, with_score: bool) -> Vec<&'static str> {
    let mut columns = vec!["id", "price", "moonRank", "rank"];
    if with_score {
        columns.push("score");
    }
    columns.extend(TRAIT_COLUMNS);
    columns.push("rarityURL");
    columns.push(marketplace.url_column());
    columns
}

/// Writes `listings` to a CSV file at `path`, replacing any existing file.
///
/// When `scores` is given it must hold one score per listing, and a `score`
/// column is added after `rank`.
pub fn write_report(
    path: impl AsRef<Path>,
    marketplace: Marketplace,
    listings: &[EnrichedListing],
    scores: Option<&[f64]>,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(scores) = scores {
        ensure!(
            scores.len() == listings.len(),
            "got {} scores for {} listings",
            scores.len(),
            listings.len()
        );
    }
    debug!(path = %path.display(), rows = listings.len(), "Writing CSV report");

    let mut writer = WriterBuilder::new()
        .has_headers(false) // header carries marketplace-specific names
        .from_path(path)
        .with_context(|| format!("failed to create '{}'", path.display()))?;

    writer.write_record(header(marketplace, scores.is_some()))?;
    for (i, listing) in listings.iter().enumerate() {
        let score = scores.map(|s| s[i]);
        writer.serialize(ReportRow::new(listing, score))?;
    }
    writer.flush()?;

    Ok(())
}
