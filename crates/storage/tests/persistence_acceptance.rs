use storage::{KeyValueStore, Storage};

#[tokio::test]
async fn values_survive_reopening_the_database() {
    let temp_root = tempfile::tempdir().expect("tempdir");
    let db_path = temp_root.path().join("favorites.db");
    let database_url = format!("sqlite://{}", db_path.to_string_lossy().replace('\\', "/"));

    {
        let storage = Storage::new(&database_url).await.expect("first open");
        storage
            .put_value("favorites", r#"["7a0eed16-9430-4d68-901f-c0d4c1c3bf00"]"#)
            .await
            .expect("write");
        storage.pool().close().await;
    }

    let reopened = Storage::new(&database_url).await.expect("reopen");
    let value = reopened.get_value("favorites").await.expect("read");
    assert_eq!(
        value.as_deref(),
        Some(r#"["7a0eed16-9430-4d68-901f-c0d4c1c3bf00"]"#)
    );
}
