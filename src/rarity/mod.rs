//! Rarity store access.
//!
//! [`RarityRecord`] is the trait/rank row for one identifier.
//! [`RarityLookup`] is the trait for finding that row by identifier token.
//! [`SqliteRarityStore`] implements [`RarityLookup`] over the local `glooms.db`.

mod record;
mod sqlite;

pub use record::RarityRecord;
pub use sqlite::SqliteRarityStore;

use anyhow::Result;

/// Looks up the rarity row for an identifier token.
pub trait RarityLookup {
    /// Returns `Ok(None)` when the store has no row for `token`.
    fn lookup(&self, token: &str) -> Result<Option<RarityRecord>>;
}
