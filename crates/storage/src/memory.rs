use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use aula_core::storage::{join_public_url, strip_public_url, ObjectStorage, StorageError};

/// Base URL reported by [`MemoryObjectStorage`].
pub const MEMORY_BASE_URL: &str = "https://storage.test/aula";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    pub content: Vec<u8>,
    pub content_type: String,
}

/// In-memory object storage.
///
/// `fail_puts` and `fail_deletes` make the next operations fail so callers
/// can exercise their error paths.
#[derive(Default)]
pub struct MemoryObjectStorage {
    objects: Mutex<HashMap<String, StoredObject>>,
    fail_puts: AtomicBool,
    fail_deletes: AtomicBool,
}

impl MemoryObjectStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_puts(&self, fail: bool) {
        self.fail_puts.store(fail, Ordering::SeqCst);
    }

    pub fn fail_deletes(&self, fail: bool) {
        self.fail_deletes.store(fail, Ordering::SeqCst);
    }

    pub fn get(&self, key: &str) -> Option<StoredObject> {
        self.objects.lock().ok()?.get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.objects.lock().map(|o| o.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ObjectStorage for MemoryObjectStorage {
    async fn put_object(
        &self,
        key: &str,
        content: Vec<u8>,
        content_type: &str,
    ) -> Result<(), StorageError> {
        let put_err = |reason: &str| StorageError::Put {
            key: key.to_string(),
            reason: reason.to_string(),
        };
        if self.fail_puts.load(Ordering::SeqCst) {
            return Err(put_err("injected failure"));
        }
        let mut objects = self.objects.lock().map_err(|_| put_err("poisoned"))?;
        objects.insert(
            key.to_string(),
            StoredObject {
                content,
                content_type: content_type.to_string(),
            },
        );
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<(), StorageError> {
        let delete_err = |reason: &str| StorageError::Delete {
            key: key.to_string(),
            reason: reason.to_string(),
        };
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(delete_err("injected failure"));
        }
        let mut objects = self.objects.lock().map_err(|_| delete_err("poisoned"))?;
        objects.remove(key);
        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        join_public_url(MEMORY_BASE_URL, key)
    }

    fn key_from_url(&self, url: &str) -> Option<String> {
        strip_public_url(MEMORY_BASE_URL, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn put_then_delete() {
        let storage = MemoryObjectStorage::new();
        storage
            .put_object("courses/1/topics/2/a.pdf", vec![1, 2, 3], "application/pdf")
            .await
            .unwrap();
        let stored = storage.get("courses/1/topics/2/a.pdf").unwrap();
        assert_eq!(stored.content_type, "application/pdf");

        storage.delete_object("courses/1/topics/2/a.pdf").await.unwrap();
        assert!(storage.is_empty());
        // Missing keys delete cleanly.
        storage.delete_object("courses/1/topics/2/a.pdf").await.unwrap();
    }

    #[tokio::test]
    async fn injected_failures() {
        let storage = MemoryObjectStorage::new();
        storage.fail_puts(true);
        let err = storage.put_object("k", vec![], "image/png").await.unwrap_err();
        assert_matches!(err, StorageError::Put { ref key, .. } if key == "k");

        storage.fail_deletes(true);
        let err = storage.delete_object("k").await.unwrap_err();
        assert_matches!(err, StorageError::Delete { .. });
    }

    #[test]
    fn url_round_trip() {
        let storage = MemoryObjectStorage::new();
        let url = storage.public_url("courses/1/topics/2/a.pdf");
        assert_eq!(storage.key_from_url(&url).as_deref(), Some("courses/1/topics/2/a.pdf"));
        assert_eq!(storage.key_from_url("https://elsewhere.test/a.pdf"), None);
    }
}
