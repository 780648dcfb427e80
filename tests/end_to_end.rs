// tests/end_to_end.rs
//
// A saved album page through the whole pipeline: assemble, write, read back.
//
use std::fs;

use rym_scrape::config::options::BatchOptions;
use rym_scrape::{assemble, runner, AlbumRecord};

const FLOOD: &str = include_str!("fixtures/boris_flood.html");

#[test]
fn flood_assembles_to_expected_record() {
    let r = assemble(FLOOD);
    let expected = AlbumRecord::new(
        "Boris".into(),
        "Flood".into(),
        "2000".into(),
        Some(4.21),
        Some(2500),
        "Drone Metal:Post-Rock:".into(),
        "".into(),
        "atmospheric:heavy:".into(),
        Some("70:00".into()),
    );
    assert_eq!(r, expected);
    assert_eq!(
        r.to_row(),
        ["Boris", "Flood", "2000", "4.21", "2500", "Drone Metal:Post-Rock:", "", "atmospheric:heavy:", "70:00"]
            .map(String::from)
    );
}

#[test]
fn batch_over_directory_writes_one_row_per_page() {
    let src = tempfile::tempdir().unwrap();
    fs::write(src.path().join("flood.html"), FLOOD).unwrap();
    fs::write(src.path().join("empty.html"), "").unwrap();
    fs::write(src.path().join("readme.txt"), FLOOD).unwrap();

    let out_dir = tempfile::tempdir().unwrap();
    let out = out_dir.path().join("albums.csv");
    let opts = BatchOptions::new(src.path(), &out);

    let summary = runner::run(&opts, None).unwrap();
    assert_eq!(summary.documents, 2);
    assert_eq!(summary.written, 2);
    assert_eq!(summary.out_path, out);

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&out)
        .unwrap();
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    // sorted by path: empty.html, flood.html
    assert_eq!(rows[0].iter().collect::<Vec<_>>(), vec![""; 9]);
    assert_eq!(&rows[1][0], "Boris");
    assert_eq!(&rows[1][7], "atmospheric:heavy:");
    assert_eq!(rows[1].len(), AlbumRecord::FIELD_COUNT);
}

#[test]
fn running_twice_appends() {
    let src = tempfile::tempdir().unwrap();
    fs::write(src.path().join("flood.html"), FLOOD).unwrap();
    let out_dir = tempfile::tempdir().unwrap();

    let mut opts = BatchOptions::new(src.path(), out_dir.path());
    opts.export.include_headers = true;

    runner::run(&opts, None).unwrap();
    let summary = runner::run(&opts, None).unwrap();
    assert!(summary.out_path.ends_with("Popular All Time Sample.csv"));

    let text = fs::read_to_string(&summary.out_path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Artist,Album,Year"));
    assert_eq!(lines[1], lines[2]);
}
