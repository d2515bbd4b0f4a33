use std::{
    collections::BTreeMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use sculpt_domain::StorageError;

use crate::Backend;

/// Volatile backend, shared between its clones.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    items: Arc<Mutex<BTreeMap<String, String>>>,
    available: Arc<AtomicBool>,
    quota: Option<usize>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: Arc::default(),
            available: Arc::new(AtomicBool::new(true)),
            quota: None,
        }
    }

    /// Rejects writes once keys and values would exceed the given number of bytes.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            quota: Some(bytes),
            ..Self::new()
        }
    }

    /// Simulates a storage that cannot be accessed, e.g. in private browsing mode.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::Relaxed);
    }

    fn check_available(&self) -> Result<(), StorageError> {
        if self.available.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(StorageError::Unavailable)
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Backend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.check_available()?;
        let items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.check_available()?;
        let mut items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        if let Some(quota) = self.quota {
            let size = items
                .iter()
                .filter(|(k, _)| *k != key)
                .map(|(k, v)| k.len() + v.len())
                .sum::<usize>()
                + key.len()
                + value.len();
            if size > quota {
                return Err(StorageError::QuotaExceeded);
            }
        }
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_clones_share_items() {
        let storage = MemoryStorage::new();
        let clone = storage.clone();

        storage.set_item("a", "[1,2]").unwrap();

        assert_eq!(clone.get_item("a").unwrap(), Some("[1,2]".to_string()));
        assert_eq!(clone.get_item("b").unwrap(), None);
    }

    #[test]
    fn test_set_available() {
        let storage = MemoryStorage::new();
        storage.set_item("a", "1").unwrap();

        storage.set_available(false);

        assert!(matches!(storage.get_item("a"), Err(StorageError::Unavailable)));
        assert!(matches!(
            storage.set_item("a", "2"),
            Err(StorageError::Unavailable)
        ));

        storage.set_available(true);

        assert_eq!(storage.get_item("a").unwrap(), Some("1".to_string()));
    }

    #[test]
    fn test_quota() {
        let storage = MemoryStorage::with_quota(8);

        storage.set_item("a", "abc").unwrap();
        storage.set_item("a", "abcd").unwrap();

        assert!(matches!(
            storage.set_item("b", "abcd"),
            Err(StorageError::QuotaExceeded)
        ));
        assert_eq!(storage.get_item("a").unwrap(), Some("abcd".to_string()));
        assert_eq!(storage.get_item("b").unwrap(), None);
    }
}
