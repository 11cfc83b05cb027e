use std::path::{Path, PathBuf};

use aim_core::ports::{PreferenceStoreError, PreferenceStorePort};
use aim_core::{PreferenceKey, Preferences};
use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::{watch, Mutex};
use tracing::{debug, info};

/// Preferences kept as one JSON object on disk.
///
/// The file is read once on open; afterwards the in-memory snapshot is
/// authoritative and every write replaces the whole file atomically.
/// Observers are notified only after the rename succeeded.
pub struct FilePreferenceStore {
    path: PathBuf,
    write_lock: Mutex<()>,
    snapshot: watch::Sender<Preferences>,
}

impl FilePreferenceStore {
    /// Load the store from `path`. A missing file is an empty store; a file
    /// that does not parse is reported as [`PreferenceStoreError::Corrupt`].
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, PreferenceStoreError> {
        let path = path.into();
        let initial = read_preferences(&path).await?;
        info!(path = %path.display(), entries = initial.len(), "Preference store opened");

        let (snapshot, _) = watch::channel(initial);
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
            snapshot,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn commit(&self, next: Preferences) -> Result<(), PreferenceStoreError> {
        let content = serde_json::to_string_pretty(&next)
            .map_err(|e| PreferenceStoreError::Io(format!("serialize preferences failed: {e}")))?;

        atomic_write(&self.path, &content)
            .await
            .map_err(|e| PreferenceStoreError::Io(format!("{e:#}")))?;

        debug!(entries = next.len(), "Preferences committed");
        self.snapshot.send_replace(next);
        Ok(())
    }
}

#[async_trait]
impl PreferenceStorePort for FilePreferenceStore {
    fn observe(&self) -> watch::Receiver<Preferences> {
        self.snapshot.subscribe()
    }

    async fn get(&self, key: PreferenceKey) -> Result<Option<String>, PreferenceStoreError> {
        Ok(self.snapshot.borrow().get(key).map(str::to_string))
    }

    async fn put_all(&self, entries: Vec<(PreferenceKey, String)>) -> Result<(), PreferenceStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut next = self.snapshot.borrow().clone();
        next.apply(&entries);
        self.commit(next).await
    }

    async fn clear(&self) -> Result<(), PreferenceStoreError> {
        let _guard = self.write_lock.lock().await;
        self.commit(Preferences::new()).await
    }
}

async fn read_preferences(path: &Path) -> Result<Preferences, PreferenceStoreError> {
    let content = match fs::read_to_string(path).await {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(Preferences::new());
        }
        Err(e) => {
            return Err(PreferenceStoreError::Io(format!(
                "read preferences failed: {}: {e}",
                path.display()
            )))
        }
    };

    if content.trim().is_empty() {
        return Ok(Preferences::new());
    }

    serde_json::from_str(&content)
        .map_err(|e| PreferenceStoreError::Corrupt(format!("{}: {e}", path.display())))
}

/// Write to a sibling temp file, then rename over the target.
async fn atomic_write(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("create preferences dir failed: {}", dir.display()))?;
    }

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, content)
        .await
        .with_context(|| format!("write temp preferences failed: {}", tmp_path.display()))?;

    if let Err(err) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(err).with_context(|| {
            format!(
                "rename temp preferences to target failed: {} -> {}",
                tmp_path.display(),
                path.display()
            )
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn login_entries() -> Vec<(PreferenceKey, String)> {
        vec![
            (PreferenceKey::Id, "user0001".to_string()),
            (PreferenceKey::Password, "pwd-hash".to_string()),
            (PreferenceKey::Email, "a@b.com".to_string()),
            (PreferenceKey::PhoneNumber, "01012345678".to_string()),
        ]
    }

    #[tokio::test]
    async fn missing_file_opens_empty() {
        let dir = tempdir().unwrap();
        let store = FilePreferenceStore::open(dir.path().join("preferences.json"))
            .await
            .unwrap();
        assert!(store.observe().borrow().is_empty());
        assert_eq!(store.get(PreferenceKey::Id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let store = FilePreferenceStore::open(&path).await.unwrap();
        store.put_all(login_entries()).await.unwrap();
        drop(store);

        let reopened = FilePreferenceStore::open(&path).await.unwrap();
        assert_eq!(
            reopened.get(PreferenceKey::Id).await.unwrap().as_deref(),
            Some("user0001")
        );
        assert_eq!(
            reopened.get(PreferenceKey::PhoneNumber).await.unwrap().as_deref(),
            Some("01012345678")
        );
    }

    #[tokio::test]
    async fn file_uses_on_disk_key_names_and_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let store = FilePreferenceStore::open(&path).await.unwrap();
        store.put_all(login_entries()).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["id"], "user0001");
        assert_eq!(raw["pwd"], "pwd-hash");
        assert_eq!(raw["phone_number"], "01012345678");
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn clear_removes_every_key() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        let store = FilePreferenceStore::open(&path).await.unwrap();
        store.put_all(login_entries()).await.unwrap();

        store.clear().await.unwrap();

        assert!(store.observe().borrow().is_empty());
        let reopened = FilePreferenceStore::open(&path).await.unwrap();
        assert!(reopened.observe().borrow().is_empty());
    }

    #[tokio::test]
    async fn observers_see_each_commit() {
        let dir = tempdir().unwrap();
        let store = FilePreferenceStore::open(dir.path().join("preferences.json"))
            .await
            .unwrap();
        let mut rx = store.observe();

        store.put_all(login_entries()).await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().get(PreferenceKey::Id), Some("user0001"));
    }

    #[tokio::test]
    async fn corrupt_file_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = FilePreferenceStore::open(&path).await.err().unwrap();
        assert!(matches!(err, PreferenceStoreError::Corrupt(_)));
    }

    #[tokio::test]
    async fn unknown_keys_are_preserved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, r#"{"theme":"dark"}"#).unwrap();

        let store = FilePreferenceStore::open(&path).await.unwrap();
        store.put_all(login_entries()).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["theme"], "dark");
    }

    #[tokio::test]
    async fn failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        // a non-empty directory at the target path makes the rename fail
        let path = dir.path().join("preferences.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep"), "x").unwrap();

        let result = atomic_write(&path, "{}").await;

        assert!(result.is_err());
        assert!(!path.with_extension("json.tmp").exists());
        assert!(path.join("keep").exists());
    }
}
