//! End-to-end enrichment run: load, enrich, score, write both reports, and
//! remove the consumed export where the marketplace calls for it.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::enrich::enrich;
use crate::marketplace::{MOONRANK_FILE, Marketplace, RARITY_DB_FILE};
use crate::moonrank::MoonrankMap;
use crate::output::write_report;
use crate::parser::parse_listings;
use crate::picks::top_picks;
use crate::rarity::SqliteRarityStore;
use crate::score::score_all;

/// Inputs and outputs of one run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub marketplace: Marketplace,
    pub input: PathBuf,
    pub moonrank_path: PathBuf,
    pub rarity_db_path: PathBuf,
    pub output_dir: PathBuf,
    pub remove_input: bool,
}

impl PipelineConfig {
    /// Defaults for `marketplace`: lookup files under its data directory,
    /// reports in the working directory.
    pub fn new(marketplace: Marketplace, input: impl Into<PathBuf>) -> Self {
        let data_dir = Path::new(marketplace.default_data_dir());
        PipelineConfig {
            marketplace,
            input: input.into(),
            moonrank_path: data_dir.join(MOONRANK_FILE),
            rarity_db_path: data_dir.join(RARITY_DB_FILE),
            output_dir: PathBuf::from("."),
            remove_input: marketplace.removes_input(),
        }
    }

    /// Looks up both auxiliary files under `dir`.
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.moonrank_path = dir.as_ref().join(MOONRANK_FILE);
        self.rarity_db_path = dir.as_ref().join(RARITY_DB_FILE);
        self
    }

    pub fn with_moonrank_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.moonrank_path = path.into();
        self
    }

    pub fn with_rarity_db_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.rarity_db_path = path.into();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Keeps the export on disk even for marketplaces that remove it.
    pub fn keep_input(mut self) -> Self {
        self.remove_input = false;
        self
    }

    pub fn data_report_path(&self) -> PathBuf {
        self.output_dir.join(self.marketplace.data_file_name())
    }

    pub fn picks_report_path(&self) -> PathBuf {
        self.output_dir.join(self.marketplace.picks_file_name())
    }
}

/// What a run did.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub initial: usize,
    pub processed: usize,
    pub matched: usize,
    pub picks: usize,
    pub data_report: PathBuf,
    pub picks_report: PathBuf,
    pub input_removed: bool,
}

/// Runs the pipeline once. Any load or write failure aborts before the
/// input is touched.
#[tracing::instrument(skip_all, fields(marketplace = %config.marketplace, input = %config.input.display()))]
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    let marketplace = config.marketplace;

    let bytes = std::fs::read(&config.input)
        .with_context(|| format!("failed to read export '{}'", config.input.display()))?;
    let listings = parse_listings(marketplace, &bytes)
        .with_context(|| format!("malformed export '{}'", config.input.display()))?;
    let moonrank = MoonrankMap::load(&config.moonrank_path)?;
    let store = SqliteRarityStore::open(&config.rarity_db_path)?;

    let enrichment = enrich(marketplace, &listings, &moonrank, &store)?;
    store.close()?;

    info!(count = listings.len(), "Initial listings");
    info!(
        count = enrichment.listings.len(),
        matched = enrichment.matched_count(),
        "Processed listings"
    );

    let data_report = config.data_report_path();
    let scores = marketplace
        .scores_listings()
        .then(|| score_all(&enrichment.listings, enrichment.min_price));
    write_report(&data_report, marketplace, &enrichment.listings, scores.as_deref())?;
    info!(path = %data_report.display(), "Wrote data report");

    let picks = top_picks(&enrichment.listings);
    let picks_report = config.picks_report_path();
    write_report(&picks_report, marketplace, &picks, None)?;
    info!(path = %picks_report.display(), picks = picks.len(), "Wrote picks report");

    if config.remove_input {
        std::fs::remove_file(&config.input)
            .with_context(|| format!("failed to remove export '{}'", config.input.display()))?;
        info!(path = %config.input.display(), "Removed consumed export");
    }

    Ok(RunSummary {
        initial: listings.len(),
        processed: enrichment.listings.len(),
        matched: enrichment.matched_count(),
        picks: picks.len(),
        data_report,
        picks_report,
        input_removed: config.remove_input,
    })
}
