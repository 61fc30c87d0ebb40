use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;
use text_tools::items::{CopyAction, LineList, LINES_KEY};
use text_tools::storage::{JsonFileStore, KeyValueStore, Preferences, Theme};
use text_tools::text::{ListSorter, SortMode, TextCounts};

fn store_in(dir: &TempDir) -> JsonFileStore {
    JsonFileStore::open(dir.path().join("store.json")).unwrap()
}

#[test]
fn test_line_list_survives_reopen() {
    let dir = TempDir::new().unwrap();

    let first_id = {
        let mut store = store_in(&dir);
        let mut list = LineList::from_text("first\n\nsecond\nthird\n");
        let first_id = list.items()[0].id.clone();
        let third_id = list.items()[2].id.clone();
        assert_eq!(list.copy(&first_id, CopyAction::Mark).as_deref(), Some("first"));
        assert_eq!(list.copy(&third_id, CopyAction::Remove).as_deref(), Some("third"));
        list.save(&mut store).unwrap();
        first_id
    };

    let mut store = store_in(&dir);
    let list = LineList::load(&mut store).unwrap();
    assert_eq!(list.len(), 2);
    assert!(list.get(&first_id).unwrap().copied);
    assert_eq!(list.items()[1].text, "second");
}

#[test]
fn test_corrupt_lines_value_is_dropped_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, r#"{"lines":"[{\"broken\":","theme":"light"}"#).unwrap();

    let mut store = JsonFileStore::open(&path).unwrap();
    assert!(LineList::load(&mut store).unwrap().is_empty());

    let reopened = JsonFileStore::open(&path).unwrap();
    assert_eq!(reopened.get(LINES_KEY), None);
    assert_eq!(reopened.get("theme").as_deref(), Some("light"));
}

#[test]
fn test_preferences_share_the_store_with_lines() {
    let dir = TempDir::new().unwrap();
    {
        let mut store = store_in(&dir);
        LineList::from_text("kept").save(&mut store).unwrap();
        let mut prefs = Preferences::new(&mut store);
        prefs.set_nickname("  Robin ").unwrap();
        prefs.set_theme(Theme::Light).unwrap();
    }

    let mut store = store_in(&dir);
    assert_eq!(LineList::load(&mut store).unwrap().len(), 1);
    let prefs = Preferences::new(&mut store);
    assert_eq!(prefs.nickname().as_deref(), Some("Robin"));
    assert_eq!(prefs.theme(), Theme::Light);
}

#[test]
fn test_clearing_the_list_removes_the_key() {
    let dir = TempDir::new().unwrap();
    let mut store = store_in(&dir);
    let mut list = LineList::from_text("a\nb");
    list.save(&mut store).unwrap();
    list.clear();
    list.save(&mut store).unwrap();

    let reopened = store_in(&dir);
    assert_eq!(reopened.get(LINES_KEY), None);
}

#[test]
fn test_damaged_store_does_not_block_stateless_tools() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "not json").unwrap();

    assert!(JsonFileStore::open(&path).is_err());

    let mut store = JsonFileStore::open_or_empty(&path);
    assert_eq!(Preferences::new(&mut store).theme(), Theme::Dark);

    let sorted = ListSorter::sort_text("b\na", SortMode::Ascending, &mut StdRng::seed_from_u64(1));
    assert_eq!(sorted, "a\nb");
    assert_eq!(TextCounts::of("one two").words, 2);
    assert_eq!(fs::read_to_string(&path).unwrap(), "not json");

    Preferences::new(&mut store).set_theme(Theme::Light).unwrap();
    let repaired = JsonFileStore::open(&path).unwrap();
    assert_eq!(repaired.get("theme").as_deref(), Some("light"));
}
