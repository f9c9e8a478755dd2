//! Favorites store integration tests.
//!
//! Exercises the persisted round trip, toggle/remove semantics, corruption
//! handling, and write-failure rollback against real temp-dir files.

use std::collections::HashSet;

use roster::models::User;
use roster::store::FavoritesStore;
use tempfile::TempDir;

fn test_user(id: i64) -> User {
    User {
        id,
        first_name: format!("First{id}"),
        last_name: format!("Last{id}"),
        email: format!("user{id}@reqres.in"),
        avatar: format!("https://reqres.in/img/faces/{id}-image.jpg"),
    }
}

fn store_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("favorites.json")
}

fn ids(entries: &[User]) -> Vec<i64> {
    entries.iter().map(|u| u.id).collect()
}

#[tokio::test]
async fn test_save_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let favorites = vec![test_user(1), test_user(2), test_user(3)];

    let mut store = FavoritesStore::with_path(store_path(&dir));
    store.save(favorites.clone()).await.unwrap();

    // A fresh store on the same path sees the identical set
    let mut reopened = FavoritesStore::with_path(store_path(&dir));
    let loaded = reopened.load().await;
    assert_eq!(loaded, favorites);
}

#[tokio::test]
async fn test_toggle_twice_restores_original_set() {
    let dir = TempDir::new().unwrap();
    let mut store = FavoritesStore::with_path(store_path(&dir));
    store.save(vec![test_user(1), test_user(2)]).await.unwrap();

    let before: HashSet<i64> = ids(store.entries()).into_iter().collect();

    let newcomer = test_user(9);
    store.toggle(&newcomer).await.unwrap();
    store.toggle(&newcomer).await.unwrap();

    let after: HashSet<i64> = ids(store.entries()).into_iter().collect();
    assert_eq!(before, after);

    // And the persisted value agrees
    let mut reopened = FavoritesStore::with_path(store_path(&dir));
    let persisted: HashSet<i64> = ids(&reopened.load().await).into_iter().collect();
    assert_eq!(persisted, before);
}

#[tokio::test]
async fn test_toggle_changes_size_by_exactly_one() {
    let dir = TempDir::new().unwrap();
    let mut store = FavoritesStore::with_path(store_path(&dir));
    store.save(vec![test_user(1), test_user(2)]).await.unwrap();

    store.toggle(&test_user(3)).await.unwrap();
    assert_eq!(store.entries().len(), 3);

    store.toggle(&test_user(1)).await.unwrap();
    assert_eq!(store.entries().len(), 2);
}

#[tokio::test]
async fn test_remove_on_empty_store_is_noop() {
    let dir = TempDir::new().unwrap();
    let mut store = FavoritesStore::with_path(store_path(&dir));

    assert!(!store.remove(1).await.unwrap());
    assert!(store.entries().is_empty());
    assert!(!store_path(&dir).exists());
}

#[tokio::test]
async fn test_remove_absent_id_leaves_file_untouched() {
    let dir = TempDir::new().unwrap();
    let mut store = FavoritesStore::with_path(store_path(&dir));
    store.save(vec![test_user(1)]).await.unwrap();

    let before = std::fs::read(store_path(&dir)).unwrap();
    assert!(!store.remove(42).await.unwrap());
    let after = std::fs::read(store_path(&dir)).unwrap();
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_remove_preserves_order_of_remaining_entries() {
    let dir = TempDir::new().unwrap();
    let mut store = FavoritesStore::with_path(store_path(&dir));
    store
        .save(vec![test_user(4), test_user(2), test_user(7)])
        .await
        .unwrap();

    store.remove(2).await.unwrap();
    assert_eq!(ids(store.entries()), vec![4, 7]);
}

#[tokio::test]
async fn test_corrupt_file_degrades_to_empty_and_is_preserved() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    std::fs::write(&path, b"{ not json at all").unwrap();

    let mut store = FavoritesStore::with_path(path.clone());
    assert!(store.load().await.is_empty());

    // The corrupted bytes must remain inspectable on disk
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(bytes, b"{ not json at all");
}

#[tokio::test]
async fn test_save_dedups_duplicate_ids() {
    let dir = TempDir::new().unwrap();
    let mut store = FavoritesStore::with_path(store_path(&dir));

    let mut shadow = test_user(1);
    shadow.email = "shadow@reqres.in".to_string();
    store
        .save(vec![test_user(1), shadow, test_user(2)])
        .await
        .unwrap();

    let mut reopened = FavoritesStore::with_path(store_path(&dir));
    let loaded = reopened.load().await;
    assert_eq!(ids(&loaded), vec![1, 2]);
    assert_eq!(loaded[0].email, "user1@reqres.in");
}

#[tokio::test]
async fn test_write_failure_rolls_back_memory() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let mut store = FavoritesStore::with_path(path.clone());
    store.save(vec![test_user(1)]).await.unwrap();

    // Replace the file with a directory so the next write fails
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    let result = store.toggle(&test_user(2)).await;
    assert!(matches!(result, Err(roster::error::StoreError::Write { .. })));

    // The failed mutation must not have been committed in memory
    assert_eq!(ids(store.entries()), vec![1]);
}

#[tokio::test]
async fn test_persisted_value_is_a_json_array_of_users() {
    let dir = TempDir::new().unwrap();
    let mut store = FavoritesStore::with_path(store_path(&dir));
    store.save(vec![test_user(2)]).await.unwrap();

    let text = std::fs::read_to_string(store_path(&dir)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(value.is_array());
    assert_eq!(value[0]["id"], 2);
    assert_eq!(value[0]["email"], "user2@reqres.in");
}
