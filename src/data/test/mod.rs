mod membership;
mod settings;

use tempfile::TempDir;

use crate::data::store::JsonStore;

/// Creates an initialized store in a throwaway directory.
///
/// The `TempDir` must stay alive for the duration of the test or the
/// documents disappear underneath the store.
pub async fn temp_store() -> (TempDir, JsonStore) {
    let dir = TempDir::new().unwrap();
    let store = JsonStore::new(
        dir.path().join("server_settings.json"),
        dir.path().join("members.json"),
    );
    store.init().await.unwrap();

    (dir, store)
}

/// Overwrites the members document with the given member list entries.
pub async fn write_members(dir: &TempDir, members: serde_json::Value) {
    let doc = serde_json::json!({ "plus_members": members });
    tokio::fs::write(
        dir.path().join("members.json"),
        serde_json::to_string_pretty(&doc).unwrap(),
    )
    .await
    .unwrap();
}
