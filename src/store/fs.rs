use super::KvBackend;
use crate::error::{Result, StockpadError};
use std::fs;
use std::path::{Path, PathBuf};

/// File-backed key-value storage: each key is one `<key>.json` file under the
/// data dir. The dir is created lazily on first write.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(StockpadError::Io)?;
        }
        Ok(())
    }
}

impl KvBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let payload = fs::read_to_string(path).map_err(StockpadError::Io)?;
        Ok(Some(payload))
    }

    fn write(&mut self, key: &str, payload: &str) -> Result<()> {
        self.ensure_dir()?;
        fs::write(self.key_path(key), payload).map_err(StockpadError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductFields;
    use crate::store::{ProductStore, STORE_KEY};

    #[test]
    fn read_of_absent_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path().to_path_buf());
        assert!(backend.read(STORE_KEY).unwrap().is_none());
    }

    #[test]
    fn write_then_read_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().to_path_buf());
        backend.write(STORE_KEY, "[1,2,3]").unwrap();
        assert_eq!(backend.read(STORE_KEY).unwrap().as_deref(), Some("[1,2,3]"));
    }

    #[test]
    fn write_creates_missing_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("deep").join("stockpad");
        let mut backend = FileBackend::new(nested.clone());
        backend.write(STORE_KEY, "[]").unwrap();
        assert!(nested.join("products.json").exists());
    }

    #[test]
    fn store_survives_reopen_with_order_and_fields_intact() {
        let dir = tempfile::tempdir().unwrap();
        let fields = |name: &str, quantity: u32| ProductFields {
            name: name.to_string(),
            category: "Tools".to_string(),
            price: 2.5,
            quantity,
            description: "d".to_string(),
        };

        let before = {
            let mut store = ProductStore::open(FileBackend::new(dir.path().to_path_buf()));
            store.create(fields("Widget", 3));
            store.create(fields("Bolt", 9));
            store.list().to_vec()
        };

        let reopened = ProductStore::open(FileBackend::new(dir.path().to_path_buf()));
        assert_eq!(reopened.list(), before.as_slice());
    }
}
