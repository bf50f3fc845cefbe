//! Tests for the file-backed tournament slot.

use golf_tournament_web::{
    finish_tournament, record_score, reset_tournament, start_tournament, Tournament,
    TournamentStatus, TournamentStore,
};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

/// Fresh directory under the system temp dir; removed by `Cleanup` on drop
/// so a failing assert doesn't leave files behind.
struct Cleanup(PathBuf);

impl Drop for Cleanup {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn temp_store() -> (TournamentStore, Cleanup) {
    let dir = std::env::temp_dir().join(format!("golf_store_test_{}", Uuid::new_v4()));
    (TournamentStore::new(&dir), Cleanup(dir))
}

#[test]
fn load_from_empty_slot_is_none() {
    let (store, _guard) = temp_store();
    assert!(store.load().is_none());
}

#[test]
fn save_then_load_round_trips_the_tournament() {
    let (store, _guard) = temp_store();

    let mut t = Tournament::new();
    let id = t.add_player("Alice", None, Some(12)).unwrap();
    t.add_player("Bob", None, None).unwrap();
    start_tournament(&mut t).unwrap();
    record_score(&mut t, id, 1, 4).unwrap();
    record_score(&mut t, id, 2, 3).unwrap();

    store.save(&t).unwrap();
    let loaded = store.load().expect("saved tournament should load");
    assert_eq!(loaded, t);
    assert_eq!(loaded.players[0].strokes_on(1), Some(4));
}

#[test]
fn malformed_slot_loads_as_none() {
    let (store, _guard) = temp_store();
    fs::create_dir_all(store.path().parent().unwrap()).unwrap();
    fs::write(store.path(), "{ not valid json").unwrap();
    assert!(store.load().is_none());
}

#[test]
fn clear_discards_the_slot_and_is_idempotent() {
    let (store, _guard) = temp_store();
    store.save(&Tournament::new()).unwrap();
    assert!(store.load().is_some());

    store.clear().unwrap();
    assert!(store.load().is_none());
    // Clearing an already-empty slot is fine.
    store.clear().unwrap();
}

#[test]
fn reset_flow_clears_both_memory_and_slot() {
    let (store, _guard) = temp_store();

    let mut t = Tournament::new();
    t.add_player("Alice", None, None).unwrap();
    start_tournament(&mut t).unwrap();
    store.save(&t).unwrap();
    finish_tournament(&mut t).unwrap();
    store.save(&t).unwrap();

    // The reset intent: fresh Setup in memory, slot discarded.
    reset_tournament(&mut t).unwrap();
    store.clear().unwrap();

    assert_eq!(t.status, TournamentStatus::Setup);
    assert!(t.players.is_empty() && t.course.is_empty());
    assert!(store.load().is_none());
}

#[test]
fn save_overwrites_the_previous_slot() {
    let (store, _guard) = temp_store();
    let mut t = Tournament::new();
    t.add_player("Alice", None, None).unwrap();
    store.save(&t).unwrap();

    t.add_player("Bob", None, None).unwrap();
    store.save(&t).unwrap();

    let loaded = store.load().unwrap();
    assert_eq!(loaded.players.len(), 2);
}
