//! Tests for persisting imported sheets and reading them back.

use crate::helpers::{numbered_grid, sales_grid};
use sheetcharter::data::{DataError, extract_points, import_bytes};
use sheetcharter::settings::ImportSettings;
use sheetcharter::store::{JsonDirStore, MemoryStore, SheetStore};
use sheetcharter::types::{ChartConfiguration, ChartKind, Grid, SheetFile};
use std::sync::Arc;

#[test]
fn test_json_store_roundtrip_preserves_grid() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonDirStore::open(dir.path()).unwrap();

    let csv = "name,score\n\"Doe, J\",  9 \n,\n  ,3\n";
    let mut sheet = import_bytes("scores.csv", "csv", csv.as_bytes(), &ImportSettings::default())
        .unwrap();
    sheet.add_chart(ChartConfiguration::new("Scores", ChartKind::Area, 0, 1).with_color("#ff8000"));
    store.save(&sheet).unwrap();

    let loaded = store.load(sheet.id).unwrap();
    assert_eq!(loaded, sheet);
    assert_eq!(loaded.data.cell(1, 1), Some("  9 "));
    assert_eq!(loaded.charts[0].chart_kind, ChartKind::Area);
    assert_eq!(
        extract_points(&loaded.data, 0, 1),
        extract_points(&sheet.data, 0, 1)
    );
}

#[test]
fn test_store_reopen_lists_sheets_in_import_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = SheetFile::new("first.csv", "csv", sales_grid());
    let mut second = SheetFile::new_manual("typed in", numbered_grid(2));
    second.imported_at = first.imported_at + chrono::Duration::seconds(1);
    {
        let store = JsonDirStore::open(dir.path()).unwrap();
        store.save(&second).unwrap();
        store.save(&first).unwrap();
    }

    let reopened = JsonDirStore::open(dir.path()).unwrap();
    let titles: Vec<String> = reopened
        .list()
        .unwrap()
        .into_iter()
        .map(|s| s.title)
        .collect();
    assert_eq!(titles, vec!["first.csv", "typed in"]);
}

#[test]
fn test_unknown_chart_kind_loads_as_bar() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonDirStore::open(dir.path()).unwrap();
    let mut sheet = SheetFile::new("k.csv", "csv", Grid::default());
    sheet.add_chart(ChartConfiguration::new("c", ChartKind::Line, 0, 1));
    store.save(&sheet).unwrap();

    let path = dir.path().join(format!("{}.json", sheet.id));
    let edited = std::fs::read_to_string(&path)
        .unwrap()
        .replace("\"line\"", "\"donut\"");
    std::fs::write(&path, edited).unwrap();

    assert_eq!(store.load(sheet.id).unwrap().charts[0].chart_kind, ChartKind::Bar);
}

#[test]
fn test_memory_store_shared_across_threads() {
    let store = Arc::new(MemoryStore::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                let sheet = SheetFile::new(format!("{}.csv", i), "csv", numbered_grid(i));
                store.save(&sheet).unwrap();
                sheet.id
            })
        })
        .collect();
    let ids: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(store.len(), 4);
    for id in ids {
        assert!(store.load(id).is_ok());
    }
    assert!(matches!(
        store.load(uuid::Uuid::nil()),
        Err(DataError::NotFound(_))
    ));
}
