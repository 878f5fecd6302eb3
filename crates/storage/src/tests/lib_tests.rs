use super::*;

#[tokio::test]
async fn missing_key_reads_as_none() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    assert_eq!(storage.get_value("favorites").await.expect("read"), None);
}

#[tokio::test]
async fn put_overwrites_previous_value() {
    let storage = Storage::new("sqlite::memory:").await.expect("db");
    storage.put_value("favorites", "[]").await.expect("first write");
    let first = storage
        .get_entry("favorites")
        .await
        .expect("read")
        .expect("entry");

    storage
        .put_value("favorites", r#"["a","b"]"#)
        .await
        .expect("second write");
    let second = storage
        .get_entry("favorites")
        .await
        .expect("read")
        .expect("entry");

    assert_eq!(second.value, r#"["a","b"]"#);
    assert!(second.updated_at >= first.updated_at);
}

#[tokio::test]
async fn creates_database_file_when_missing() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("nested").join("storage.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    let storage = Storage::new(&database_url).await.expect("db");
    drop(storage);

    assert!(
        db_path.exists(),
        "database file should exist: {}",
        db_path.display()
    );
}

#[tokio::test]
async fn memory_store_behaves_like_sqlite_store() {
    let store = MemoryStore::new();
    assert_eq!(store.get_value("k").await.expect("read"), None);
    store.put_value("k", "one").await.expect("write");
    store.put_value("k", "two").await.expect("overwrite");
    assert_eq!(store.get_value("k").await.expect("read").as_deref(), Some("two"));
}

#[test]
fn database_file_skips_memory_urls_and_query_string() {
    assert_eq!(database_file("sqlite::memory:"), None);
    assert_eq!(database_file("sqlite://shared?mode=memory&cache=shared"), None);
    assert_eq!(database_file("postgres://db"), None);
    assert_eq!(
        database_file("sqlite://./data/favorites.db?mode=rwc"),
        Some(Path::new("./data/favorites.db"))
    );
    assert_eq!(
        database_file("sqlite:favorites.db"),
        Some(Path::new("favorites.db"))
    );
}
