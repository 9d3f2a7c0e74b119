use anyhow::{Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension, Row};
use std::path::Path;
use tracing::debug;

use super::{RarityLookup, RarityRecord};

const LOOKUP_SQL: &str = "SELECT * FROM gloomRarity WHERE id = ?1";

/// Read-only handle on the `gloomRarity` table.
///
/// The table has no declared column names we rely on; rows are read by
/// position in this order:
/// `id, rank, background, skin, hair, mouth, eyes, eyebrows, clothes,
/// headAccessory, faceAccessory, glasses`.
pub struct SqliteRarityStore {
    conn: Connection,
}

impl SqliteRarityStore {
    /// Opens an existing store. A missing file is an error; no empty
    /// database is created in its place.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("failed to open rarity store '{}'", path.display()))?;
        debug!(path = %path.display(), "Rarity store opened");
        Ok(Self { conn })
    }

    /// Wraps an already open connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn close(self) -> Result<()> {
        self.conn
            .close()
            .map_err(|(_, e)| e)
            .context("failed to close rarity store")
    }
}

impl RarityLookup for SqliteRarityStore {
    fn lookup(&self, token: &str) -> Result<Option<RarityRecord>> {
        let mut stmt = self.conn.prepare_cached(LOOKUP_SQL)?;
        let record = stmt.query_row([token], record_from_row).optional()?;
        Ok(record)
    }
}

fn record_from_row(row: &Row<'_>) -> rusqlite::Result<RarityRecord> {
    Ok(RarityRecord {
        rank: column_text(row, 1)?,
        background: column_text(row, 2)?,
        skin: column_text(row, 3)?,
        hair: column_text(row, 4)?,
        mouth: column_text(row, 5)?,
        eyes: column_text(row, 6)?,
        eyebrows: column_text(row, 7)?,
        clothes: column_text(row, 8)?,
        head_accessory: column_text(row, 9)?,
        face_accessory: column_text(row, 10)?,
        glasses: column_text(row, 11)?,
    })
}

/// Reads column `idx` as text whatever its storage class. NULL and columns
/// past the end of a short row read as `None`.
fn column_text(row: &Row<'_>, idx: usize) -> rusqlite::Result<Option<String>> {
    let value = match row.get_ref(idx) {
        Ok(value) => value,
        Err(rusqlite::Error::InvalidColumnIndex(_)) => return Ok(None),
        Err(e) => return Err(e),
    };

    Ok(match value {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    })
}
