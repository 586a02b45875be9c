//! File-backed history store.

use chrono::{TimeZone, Utc};

use dorkscope_core::{DorkString, DorkscopeConfig, HistoryEntry, HistoryError, HistoryStore};
use dorkscope_risk::FixedRandom;
use dorkscope_session::{build_from_config, JsonFileHistoryStore, Orchestrator};

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn entry(input: &str, dork: &str) -> HistoryEntry {
    HistoryEntry::at(
        input,
        DorkString::from(dork),
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap(),
    )
}

#[test]
fn missing_file_loads_empty() {
    let dir = tempdir();
    let mut store = JsonFileHistoryStore::new(dir.path(), "dorkHistory");
    assert!(store.load().unwrap().is_empty());
    assert_eq!(store.path(), dir.path().join("dorkHistory.json"));
}

#[test]
fn save_then_load_preserves_order() {
    let dir = tempdir();
    let mut store = JsonFileHistoryStore::new(dir.path().join("nested"), "dorkHistory");
    let entries = vec![
        entry("admin login page", "inurl:admin intitle:login"),
        entry("backup", "ext:bak inurl:backup"),
    ];
    store.save(&entries).unwrap();
    assert_eq!(store.load().unwrap(), entries);
}

#[test]
fn saved_json_is_an_array_of_entries() {
    let dir = tempdir();
    let mut store = JsonFileHistoryStore::new(dir.path(), "dorkHistory");
    store.save(&[entry("backup", "ext:bak inurl:backup")]).unwrap();

    let raw = std::fs::read_to_string(store.path()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value[0]["input"], "backup");
    assert_eq!(value[0]["dork"], "ext:bak inurl:backup");
    assert!(value[0]["timestamp"].as_str().unwrap().starts_with("2025-03-14T09:26:53"));
}

#[test]
fn corrupt_file_is_reported() {
    let dir = tempdir();
    std::fs::write(dir.path().join("dorkHistory.json"), "{not json").unwrap();
    let mut store = JsonFileHistoryStore::new(dir.path(), "dorkHistory");
    assert!(matches!(store.load(), Err(HistoryError::Corrupt { .. })));

    // The orchestrator recovers with an empty log.
    let orch = Orchestrator::new(store, FixedRandom(100), 10).unwrap();
    assert!(orch.history().is_empty());
}

#[test]
fn clear_removes_the_file() {
    let dir = tempdir();
    let mut store = JsonFileHistoryStore::new(dir.path(), "dorkHistory");
    store.save(&[entry("backup", "ext:bak inurl:backup")]).unwrap();
    assert!(store.path().exists());
    store.clear().unwrap();
    assert!(!store.path().exists());
    // Clearing twice is fine.
    store.clear().unwrap();
}

#[test]
fn configured_orchestrator_persists_across_sessions() {
    let dir = tempdir();
    let config = DorkscopeConfig::from_toml(&format!(
        "[history]\nstorage_dir = {:?}\nkey = \"sessionTest\"\ncapacity = 5\n\n[simulation]\nseed = 3\n",
        dir.path().display().to_string()
    ))
    .unwrap();

    let mut first = build_from_config(&config).unwrap();
    first.generate("admin login page").unwrap();
    drop(first);

    let second = build_from_config(&config).unwrap();
    assert_eq!(second.history().len(), 1);
    assert_eq!(second.history()[0].dork.as_str(), "inurl:admin intitle:login");
    assert!(dir.path().join("sessionTest.json").exists());
}

#[test]
fn disabled_persistence_writes_nothing() {
    let dir = tempdir();
    let config = DorkscopeConfig::from_toml(&format!(
        "[history]\nstorage_dir = {:?}\npersist = false\n",
        dir.path().display().to_string()
    ))
    .unwrap();
    let mut orch = build_from_config(&config).unwrap();
    orch.generate("backup").unwrap();
    assert!(!dir.path().join("dorkHistory.json").exists());
}
