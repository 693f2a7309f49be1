use std::{
    path::PathBuf,
    sync::atomic::{AtomicUsize, Ordering},
};

use swiftread_core::{
    history::{HistoryStore, SessionRecord},
    settings::{SettingsStore, TrainerSettings},
};

use super::{JsonHistoryStore, JsonSettingsStore};

static DIR_SEQ: AtomicUsize = AtomicUsize::new(0);

fn scratch_file(name: &str) -> PathBuf {
    let seq = DIR_SEQ.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir()
        .join(format!("swiftread-storage-{}-{seq}", std::process::id()))
        .join(name)
}

fn record(wpm: u32) -> SessionRecord {
    SessionRecord {
        date: "2026-08-29".to_owned(),
        wpm,
        comprehension_score: 67,
        duration_seconds: 42.5,
        text_id: "1".to_owned(),
    }
}

#[test]
fn settings_round_trip() {
    let mut store = JsonSettingsStore::new(scratch_file("settings.json"));
    assert!(store.load().unwrap().is_none());

    let settings = TrainerSettings {
        wpm: 650,
        chunk_size: 3,
        ..TrainerSettings::default()
    };
    store.save(&settings).unwrap();
    assert_eq!(store.load().unwrap(), Some(settings));
}

#[test]
fn history_appends_and_clears() {
    let mut store = JsonHistoryStore::new(scratch_file("history.json"));
    assert!(store.load().unwrap().is_empty());

    store.append(&record(500)).unwrap();
    store.append(&record(550)).unwrap();
    let records = store.load().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1].wpm, 550);

    store.clear().unwrap();
    assert!(store.load().unwrap().is_empty());
    // Clearing twice is fine.
    store.clear().unwrap();
}

#[test]
fn history_uses_the_wire_field_names() {
    let path = scratch_file("history.json");
    let mut store = JsonHistoryStore::new(path.clone());
    store.append(&record(480)).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("comprehensionScore"));
    assert!(raw.contains("durationSeconds"));
    assert!(raw.contains("textId"));
}
