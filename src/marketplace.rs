//! Per-marketplace settings for the enrichment pipeline.
//!
//! The MagicEden and Solanart runs differ only in the values held here; the
//! pipeline itself is shared.

use std::fmt;

/// Base URL of the public rarity page, followed by the identifier token.
pub const RARITY_URL_BASE: &str = "https://gloom-rarity-page.vercel.app/punk/";

/// File name of the moonrank mapping inside the data directory.
pub const MOONRANK_FILE: &str = "gloom-moonrank.json";

/// File name of the rarity store inside the data directory.
pub const RARITY_DB_FILE: &str = "glooms.db";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marketplace {
    MagicEden,
    Solanart,
}

impl Marketplace {
    /// Slug used in output file names.
    pub fn slug(self) -> &'static str {
        match self {
            Marketplace::MagicEden => "magiceden",
            Marketplace::Solanart => "solanart",
        }
    }

    /// Directory holding the moonrank mapping and rarity store by default.
    pub fn default_data_dir(self) -> &'static str {
        match self {
            Marketplace::MagicEden => "zzz",
            Marketplace::Solanart => "data",
        }
    }

    /// Header of the marketplace link column.
    pub fn url_column(self) -> &'static str {
        match self {
            Marketplace::MagicEden => "meURL",
            Marketplace::Solanart => "solanartURL",
        }
    }

    /// Link to the listing on the marketplace, keyed by its mint or token address.
    pub fn listing_url(self, address: &str) -> String {
        match self {
            Marketplace::MagicEden => format!("https://magiceden.io/item-details/{address}"),
            Marketplace::Solanart => format!("https://solanart.io/search/?token={address}"),
        }
    }

    /// Whether the data report carries a `score` column.
    pub fn scores_listings(self) -> bool {
        matches!(self, Marketplace::MagicEden)
    }

    /// Whether the consumed export is removed after both reports are written.
    pub fn removes_input(self) -> bool {
        matches!(self, Marketplace::MagicEden)
    }

    pub fn data_file_name(self) -> String {
        format!("gloom-data-{}.csv", self.slug())
    }

    pub fn picks_file_name(self) -> String {
        format!("gloom-picks-{}.csv", self.slug())
    }
}

impl fmt::Display for Marketplace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Link to the rarity detail page for an identifier token.
pub fn rarity_url(token: &str) -> String {
    format!("{RARITY_URL_BASE}{token}")
}
