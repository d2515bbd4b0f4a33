use std::{
    fs, io,
    path::{Path, PathBuf},
};

use sculpt_domain::StorageError;

use crate::Backend;

/// Backend storing each slot as a JSON file in a directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Uses the given directory, creating it if necessary.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(storage_error)?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Backend for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(storage_error(err)),
        }
    }

    /// The previous content stays in place if writing fails.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value).map_err(storage_error)?;
        fs::rename(&tmp_path, &path).map_err(storage_error)
    }
}

fn storage_error(err: io::Error) -> StorageError {
    match err.kind() {
        io::ErrorKind::StorageFull => StorageError::QuotaExceeded,
        io::ErrorKind::PermissionDenied | io::ErrorKind::ReadOnlyFilesystem => {
            StorageError::Unavailable
        }
        _ => StorageError::Other(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_open_creates_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("sculpt").join("data");

        let storage = FileStorage::open(&dir).unwrap();

        assert!(dir.is_dir());
        assert_eq!(storage.dir(), dir);
    }

    #[test]
    fn test_get_missing_item() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(tmp.path()).unwrap();

        assert_eq!(storage.get_item("sculpt_history").unwrap(), None);
    }

    #[test]
    fn test_set_item() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(tmp.path()).unwrap();

        storage.set_item("sculpt_history", "[1]").unwrap();
        storage.set_item("sculpt_history", "[2,3]").unwrap();

        assert_eq!(
            storage.get_item("sculpt_history").unwrap(),
            Some("[2,3]".to_string())
        );
        assert_eq!(
            fs::read_to_string(tmp.path().join("sculpt_history.json")).unwrap(),
            "[2,3]"
        );
        assert!(!tmp.path().join("sculpt_history.json.tmp").exists());
    }

    #[test]
    fn test_set_item_failure_keeps_previous_content() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::open(tmp.path()).unwrap();
        storage.set_item("sculpt_history", "[1]").unwrap();
        fs::create_dir(tmp.path().join("sculpt_history.json.tmp")).unwrap();

        assert!(storage.set_item("sculpt_history", "[1,2]").is_err());
        assert_eq!(
            storage.get_item("sculpt_history").unwrap(),
            Some("[1]".to_string())
        );
    }

    #[test]
    fn test_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        FileStorage::open(tmp.path())
            .unwrap()
            .set_item("sculpt_custom_presets", r#"[{"name":"A"}]"#)
            .unwrap();

        let storage = FileStorage::open(tmp.path()).unwrap();

        assert_eq!(
            storage.get_item("sculpt_custom_presets").unwrap(),
            Some(r#"[{"name":"A"}]"#.to_string())
        );
    }
}
