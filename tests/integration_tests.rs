use gloom_picks::marketplace::Marketplace;
use gloom_picks::pipeline::{PipelineConfig, run};
use rusqlite::Connection;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Lays out a data directory with the moonrank file and a rarity store
/// holding ids 1-3 (id 4 is deliberately missing).
fn data_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("gloom-moonrank.json"),
        include_str!("fixtures/gloom-moonrank.json"),
    )
    .unwrap();

    let conn = Connection::open(dir.path().join("glooms.db")).unwrap();
    conn.execute_batch(
        "CREATE TABLE gloomRarity (
            id INTEGER PRIMARY KEY, rank TEXT, background TEXT, skin TEXT,
            hair TEXT, mouth TEXT, eyes TEXT, eyebrows TEXT, clothes TEXT,
            headAccessory TEXT, faceAccessory TEXT, glasses TEXT
        );
        INSERT INTO gloomRarity VALUES
            (1, '1', 'Blue', 'Pale', 'Mohawk', 'Grin', 'Red', 'Thin', 'Hoodie', 'Cap', 'Scar', 'Shades'),
            (2, '2', 'Green', 'Tan', 'Bald', 'Frown', 'Blue', 'Thick', 'Vest', 'None', 'None', 'None'),
            (3, '3', 'Pink', 'Grey', 'Bun', 'Smile', 'Gold', 'Arched', 'Suit', 'Crown', 'None', 'Monocle');",
    )
    .unwrap();
    conn.close().unwrap();

    dir
}

fn read_rows(path: &Path) -> Vec<csv::StringRecord> {
    let mut rdr = csv::Reader::from_path(path).unwrap();
    rdr.records().map(|r| r.unwrap()).collect()
}

#[test]
fn test_magiceden_pipeline() {
    let data = data_dir();
    let work = TempDir::new().unwrap();
    let input = work.path().join("magiceden.json");
    fs::write(&input, include_str!("fixtures/magiceden.json")).unwrap();

    let config = PipelineConfig::new(Marketplace::MagicEden, &input)
        .with_data_dir(data.path())
        .with_output_dir(work.path());
    let summary = run(&config).expect("pipeline run failed");

    assert_eq!(summary.initial, 4);
    assert_eq!(summary.processed, 4);
    assert_eq!(summary.matched, 3);
    assert_eq!(summary.picks, 3);
    assert!(summary.input_removed);
    assert!(!input.exists());

    let mut rdr = csv::Reader::from_path(&summary.data_report).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(&headers[4], "score");
    assert_eq!(&headers[16], "meURL");

    let rows = read_rows(&summary.data_report);
    let ids: Vec<_> = rows.iter().map(|r| r[0].to_string()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4"]);

    // cheapest matched listing scores its own moonrank
    assert_eq!(&rows[0][4], "40.0");
    assert_eq!(&rows[0][16], "https://magiceden.io/item-details/MintOne");
    // unmatched listing keeps only id, price and links
    assert_eq!(&rows[3][1], "2.5");
    assert_eq!(&rows[3][3], "");
    assert_eq!(&rows[3][4], "NaN");
    assert_eq!(&rows[3][15], "https://gloom-rarity-page.vercel.app/punk/4");

    let picks = read_rows(&summary.picks_report);
    let pick_ids: Vec<_> = picks.iter().map(|r| r[0].to_string()).collect();
    assert_eq!(pick_ids, vec!["1", "2", "3"]);
    assert_eq!(picks[0].len(), 16);
}

#[test]
fn test_solanart_pipeline_keeps_input() {
    let data = data_dir();
    let work = TempDir::new().unwrap();
    let input = work.path().join("solanart.json");
    fs::write(&input, include_str!("fixtures/solanart.json")).unwrap();

    let config = PipelineConfig::new(Marketplace::Solanart, &input)
        .with_data_dir(data.path())
        .with_output_dir(work.path());
    let summary = run(&config).expect("pipeline run failed");

    assert!(!summary.input_removed);
    assert!(input.exists());
    assert_eq!(
        summary.data_report,
        work.path().join("gloom-data-solanart.csv")
    );

    let mut rdr = csv::Reader::from_path(&summary.data_report).unwrap();
    let headers = rdr.headers().unwrap().clone();
    assert!(!headers.iter().any(|h| h == "score"));
    assert_eq!(&headers[15], "solanartURL");

    let rows = read_rows(&summary.data_report);
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][2], "40");
    assert_eq!(&rows[0][3], "1");
    assert_eq!(&rows[0][4], "Blue");
    assert_eq!(&rows[0][15], "https://solanart.io/search/?token=TokOne");
}

#[test]
fn test_rerun_is_byte_identical() {
    let data = data_dir();
    let work = TempDir::new().unwrap();
    let input = work.path().join("solanart.json");
    fs::write(&input, include_str!("fixtures/solanart.json")).unwrap();

    let config = PipelineConfig::new(Marketplace::Solanart, &input)
        .with_data_dir(data.path())
        .with_output_dir(work.path());

    let first = run(&config).unwrap();
    let data_before = fs::read(&first.data_report).unwrap();
    let picks_before = fs::read(&first.picks_report).unwrap();

    let second = run(&config).unwrap();
    assert_eq!(fs::read(&second.data_report).unwrap(), data_before);
    assert_eq!(fs::read(&second.picks_report).unwrap(), picks_before);
}

#[test]
fn test_missing_rarity_store_writes_nothing() {
    let data = data_dir();
    let work = TempDir::new().unwrap();
    let input = work.path().join("magiceden.json");
    fs::write(&input, include_str!("fixtures/magiceden.json")).unwrap();

    let config = PipelineConfig::new(Marketplace::MagicEden, &input)
        .with_data_dir(data.path())
        .with_rarity_db_path(work.path().join("missing.db"))
        .with_output_dir(work.path());

    assert!(run(&config).is_err());
    assert!(input.exists());
    assert!(!config.data_report_path().exists());
    assert!(!work.path().join("missing.db").exists());
}

#[test]
fn test_malformed_moonrank_is_fatal() {
    let data = data_dir();
    fs::write(data.path().join("gloom-moonrank.json"), "[not a map]").unwrap();
    let work = TempDir::new().unwrap();
    let input = work.path().join("solanart.json");
    fs::write(&input, include_str!("fixtures/solanart.json")).unwrap();

    let config = PipelineConfig::new(Marketplace::Solanart, &input)
        .with_data_dir(data.path())
        .with_output_dir(work.path());

    assert!(run(&config).is_err());
    assert!(!config.picks_report_path().exists());
}
