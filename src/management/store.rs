use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use chrono::Utc;
use tokio::sync::Mutex;

use crate::{error::StoreError, types::Entry};

type Entries = BTreeMap<String, Entry>;

/// TTL-aware key/value store backing the state ledger and the token vault.
///
/// An entry whose expiry has passed is reported as absent and dropped on the
/// next write. Writes to the same key are last-write-wins; there are no
/// multi-key transactions.
#[derive(Debug, Clone)]
pub enum Store {
    File(FileStore),
    Memory(MemoryStore),
}

impl Store {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Store::File(FileStore::new(path.into()))
    }

    pub fn memory() -> Self {
        Store::Memory(MemoryStore::default())
    }

    pub async fn get(&self, key: &str) -> Result<Option<Entry>, StoreError> {
        match self {
            Store::File(s) => s.get(key).await,
            Store::Memory(s) => Ok(s.get(key).await),
        }
    }

    pub async fn put(&self, key: &str, value: String, ttl: Duration) -> Result<(), StoreError> {
        let entry = Entry {
            value,
            expires_at: Utc::now() + chrono::Duration::milliseconds(ttl.as_millis() as i64),
        };
        match self {
            Store::File(s) => s.put(key, entry).await,
            Store::Memory(s) => {
                s.put(key, entry).await;
                Ok(())
            }
        }
    }

    pub async fn delete(&self, key: &str) -> Result<(), StoreError> {
        match self {
            Store::File(s) => s.take(key).await.map(|_| ()),
            Store::Memory(s) => {
                s.take(key).await;
                Ok(())
            }
        }
    }

    /// Removes the entry and returns it if it was still live.
    pub async fn take(&self, key: &str) -> Result<Option<Entry>, StoreError> {
        match self {
            Store::File(s) => s.take(key).await,
            Store::Memory(s) => Ok(s.take(key).await),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Store::File(s) => s.path.display().to_string(),
            Store::Memory(_) => "in-memory".to_string(),
        }
    }
}

/// Store persisted as one JSON document on disk.
///
/// Every mutation is a read-modify-write of the whole document, serialized
/// through an async mutex shared by all clones. The document is replaced
/// atomically (temp file + rename) and is only readable by its owner on Unix,
/// since it holds the access and refresh tokens.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    lock: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Arc::new(Mutex::new(())),
        }
    }

    async fn get(&self, key: &str) -> Result<Option<Entry>, StoreError> {
        let _guard = self.lock.lock().await;
        let entries = self.load().await?;
        Ok(entries
            .get(key)
            .filter(|e| !e.is_expired(Utc::now()))
            .cloned())
    }

    async fn put(&self, key: &str, entry: Entry) -> Result<(), StoreError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), entry);
        self.persist(entries).await
    }

    async fn take(&self, key: &str) -> Result<Option<Entry>, StoreError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.load().await?;
        let Some(entry) = entries.remove(key) else {
            return Ok(None);
        };
        self.persist(entries).await?;
        Ok(Some(entry).filter(|e| !e.is_expired(Utc::now())))
    }

    async fn load(&self) -> Result<Entries, StoreError> {
        match async_fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(Entries::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Entries::new()),
            Err(e) => Err(StoreError::IoError(e)),
        }
    }

    async fn persist(&self, mut entries: Entries) -> Result<(), StoreError> {
        let now = Utc::now();
        entries.retain(|_, e| !e.is_expired(now));

        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&entries)?;
        let tmp = self.temp_path();

        // Permissions are fixed before any token bytes hit the disk.
        async_fs::write(&tmp, "").await?;
        restrict_permissions(&tmp).await?;
        async_fs::write(&tmp, json).await?;

        if let Err(e) = async_fs::rename(&tmp, &self.path).await {
            let _ = async_fs::remove_file(&tmp).await;
            return Err(StoreError::IoError(e));
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "store.json".to_string());
        self.path
            .with_file_name(format!(".{}.{}.tmp", name, std::process::id()))
    }
}

#[cfg(unix)]
async fn restrict_permissions(path: &Path) -> Result<(), StoreError> {
    use std::os::unix::fs::PermissionsExt;

    async_fs::set_permissions(path, std::fs::Permissions::from_mode(0o600)).await?;
    Ok(())
}

#[cfg(not(unix))]
async fn restrict_permissions(_path: &Path) -> Result<(), StoreError> {
    Ok(())
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<Entries>>,
}

impl MemoryStore {
    async fn get(&self, key: &str) -> Option<Entry> {
        let mut entries = self.entries.lock().await;
        let now = Utc::now();
        if entries.get(key).is_some_and(|e| e.is_expired(now)) {
            entries.remove(key);
        }
        entries.get(key).cloned()
    }

    async fn put(&self, key: &str, entry: Entry) {
        self.entries.lock().await.insert(key.to_string(), entry);
    }

    async fn take(&self, key: &str) -> Option<Entry> {
        self.entries
            .lock()
            .await
            .remove(key)
            .filter(|e| !e.is_expired(Utc::now()))
    }
}
