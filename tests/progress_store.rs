use std::fs;

use vocabquiz::progress::{mastered_key, saved_key, TopicProgress};
use vocabquiz::store::{FileStore, KeyValueStore, MemoryStore};

#[test]
fn test_toggle_and_persist() {
    let mut store = MemoryStore::new();
    let mut progress = TopicProgress::load(&store, "travel");
    assert!(!progress.is_saved("Airport"));

    assert!(progress.toggle_saved("Airport"));
    assert!(progress.toggle_mastered("Hotel"));
    progress.save(&mut store).unwrap();

    assert!(store.get(&saved_key("travel")).is_some());
    assert!(store.get("mastered-travel").is_some());

    let reloaded = TopicProgress::load(&store, "travel");
    assert!(reloaded.is_saved("Airport"));
    assert!(reloaded.is_mastered("Hotel"));
    assert!(!reloaded.is_mastered("Airport"));
}

#[test]
fn test_toggle_twice_removes() {
    let mut progress = TopicProgress::load(&MemoryStore::new(), "food");
    assert!(progress.toggle_mastered("Menu"));
    assert!(!progress.toggle_mastered("Menu"));
    assert_eq!(progress.mastered_count(), 0);
}

#[test]
fn test_topics_are_independent() {
    let mut store = MemoryStore::new();
    let mut travel = TopicProgress::load(&store, "travel");
    travel.toggle_saved("Hotel");
    travel.save(&mut store).unwrap();

    let food = TopicProgress::load(&store, "food");
    assert!(!food.is_saved("Hotel"));
    assert_eq!(food.saved_count(), 0);
}

#[test]
fn test_counts_ignore_other_topics() {
    let mut store = MemoryStore::new();
    store
        .set(&mastered_key("travel"), "- travel-Airport\n- food-Menu\n")
        .unwrap();
    let progress = TopicProgress::load(&store, "travel");
    assert_eq!(progress.mastered_count(), 1);
}

#[test]
fn test_mastery_percent_rounds() {
    let mut progress = TopicProgress::load(&MemoryStore::new(), "travel");
    assert_eq!(progress.mastery_percent(5), 0);
    progress.toggle_mastered("Airport");
    assert_eq!(progress.mastery_percent(5), 20);
    progress.toggle_mastered("Hotel");
    assert_eq!(progress.mastery_percent(3), 67);
    assert_eq!(progress.mastery_percent(0), 0);
}

#[test]
fn test_corrupt_value_reads_as_empty() {
    let mut store = MemoryStore::new();
    store.set(&saved_key("travel"), "{not: [a list").unwrap();
    let progress = TopicProgress::load(&store, "travel");
    assert_eq!(progress.saved_count(), 0);
}

#[test]
fn test_file_store_round_trip() {
    let tmp_dir = std::env::temp_dir().join("vocabquiz_test_file_store");
    let _ = fs::remove_dir_all(&tmp_dir);
    let path = tmp_dir.join("nested/store.yaml");

    {
        let mut store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("user"), None);
        store.set("user", "id: '1'\n").unwrap();
        store.set("savedWords-travel", "- travel-Hotel\n").unwrap();
        store.remove("user").unwrap();
    }
    assert!(path.exists());

    let store = FileStore::open(&path).unwrap();
    assert_eq!(store.get("user"), None);
    let progress = TopicProgress::load(&store, "travel");
    assert!(progress.is_saved("Hotel"));

    let _ = fs::remove_dir_all(&tmp_dir);
}

#[test]
fn test_file_store_rejects_garbage() {
    let tmp_dir = std::env::temp_dir().join("vocabquiz_test_file_store_garbage");
    let _ = fs::remove_dir_all(&tmp_dir);
    fs::create_dir_all(&tmp_dir).unwrap();
    let path = tmp_dir.join("store.yaml");
    fs::write(&path, "- just\n- a list\n").unwrap();

    assert!(FileStore::open(&path).is_err());

    let _ = fs::remove_dir_all(&tmp_dir);
}
